//! `ambucheck` - Ambulance equipment checklist to PDF
//!
//! This library holds the equipment checklist model, the page layout engine
//! and the PDF writer used to export a filled and signed checklist.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod checklist;
pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod logging;
pub mod render;
pub mod signature;
pub mod text;

pub use checklist::{Answer, AnswerSheet, Checklist, ChecklistItem};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use signature::{Signature, SignatureSlot, Signatures};
