//! Reusable UI components

mod dialog;

pub use dialog::render_submitting_dialog;
