//! Firm Advisor - network-assist form for mapping law-firm contacts
//!
//! The library holds everything shared between the terminal front-end and
//! the relay service: the firm directory, the advisor form controller, the
//! relay client/server and configuration.

pub mod config;
pub mod directory;
pub mod relay;
pub mod state;
