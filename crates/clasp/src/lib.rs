//! Page-level selector queries and class mutation.
//!
//! This crate ties the arena DOM together with the selector engine:
//! - [`Page`] owns a parsed [`Document`] plus the match cache attached to it
//! - [`Page::query_selector_all`] resolves a selector list in document order
//! - [`Page::add_classes`] appends class tokens to every match of a selector
//!
//! Selector parsing is strict: malformed input surfaces as a
//! [`SelectorError`] before any document mutation happens.

mod adapter;
mod config;
mod page;
mod query;

pub use config::ClaspConfig;
pub use page::Page;
pub use selectors::SelectorError;

// Re-export the document types callers hold handles into.
pub use dom::{ClassList, Document, NodeId, parse_html};
