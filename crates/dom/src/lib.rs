//! Arena-backed HTML document model.
//!
//! Parsing builds an [`indextree`] arena of [`NodeData`] nodes from
//! html5ever's output. Elements cache their id and class tokens so selector
//! matching and class mutation stay cheap; every attribute write goes
//! through [`Document::set_attribute`] to keep those caches honest.

mod classlist;
mod parser;
mod printing;
mod tree;

pub use classlist::ClassList;
pub use indextree::NodeId;
pub use parser::parse_html;
pub use tree::{Document, ElementData, NodeData};
