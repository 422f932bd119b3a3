//! Core logic for the Rally page: section navigation, the table-tennis
//! score tracker, the contact form validator and the tournament countdown.
//!
//! Everything in this crate is plain Rust and testable natively; the Yew
//! application in `main.rs` owns the state objects and wires them to the UI.

use std::fmt;

pub mod config;
pub mod contact;
pub mod countdown;
pub mod navigation;
pub mod page;
pub mod score;

pub use contact::{validate_contact, ContactError, ContactForm, SUCCESS_MESSAGE};
pub use countdown::{countdown, decompose_gap, CountdownDisplay};
pub use navigation::{NavControl, SectionNavigator};
pub use page::{PageConfig, SectionConfig, SectionKind};
pub use score::{Player, ScoreBoard};

// Errors raised by the page logic. Form validation failures are not errors
// of the program and live in `ContactError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A requested element or section identifier does not resolve.
    ElementNotFound(String),
    /// A raw player number other than 1 or 2.
    UnknownPlayer(u8),
    /// The embedded page configuration is unusable.
    Config(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::ElementNotFound(id) => write!(f, "Element not found: '{}'", id),
            PageError::UnknownPlayer(n) => write!(f, "Unknown player {} (expected 1 or 2)", n),
            PageError::Config(msg) => write!(f, "Invalid page configuration: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}
