//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `firm_input`: Email, firm name with suggestions, entered firms
//! - `contact_form`: Contact details for a directory firm

mod contact_form;
mod field_renderer;
mod firm_input;

pub use contact_form::draw_contact_form;
pub use firm_input::draw_firm_input;
