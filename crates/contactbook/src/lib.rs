//! `contactbook` - A personal contact book backed by a JSON file
//!
//! This library provides the record store, the catch-and-report error policy,
//! and the interactive menu used by the `contactbook` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod report;
pub mod store;

pub use config::Config;
pub use contact::{normalize_name, Contact, ContactUpdate};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use store::ContactStore;
