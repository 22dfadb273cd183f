//! A parsed page with query and mutation entry points.

use dom::{Document, NodeId, parse_html};
use log::debug;
use selectors::{MatchCache, SelectorError, parse_selector_list};

use crate::config::ClaspConfig;
use crate::query::run_selector_list;

/// An in-memory page: a document plus the query state attached to it.
///
/// All operations are synchronous and single-threaded. A query sees the
/// document exactly as it is at the moment of the call.
pub struct Page {
    document: Document,
    cache: MatchCache,
    config: ClaspConfig,
}

impl Page {
    /// Wrap an already-built document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self::with_config(document, ClaspConfig::default())
    }

    /// Parse HTML and wrap the resulting document.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self::new(parse_html(html))
    }

    /// Wrap a document with explicit configuration.
    #[must_use]
    pub fn with_config(document: Document, config: ClaspConfig) -> Self {
        Self {
            document,
            cache: MatchCache::default(),
            config,
        }
    }

    /// Wrap a document with configuration read from the `CLASP_*`
    /// environment variables.
    #[must_use]
    pub fn with_env_config(document: Document) -> Self {
        Self::with_config(document, ClaspConfig::from_env())
    }

    /// Read access to the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the document back out of the page.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// All elements matching a selector list, in document order.
    ///
    /// # Errors
    /// Returns a [`SelectorError`] when the selector text is malformed.
    pub fn query_selector_all(&mut self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = parse_selector_list(selector)?;
        Ok(run_selector_list(
            &self.document,
            &mut self.cache,
            self.config,
            selector,
            &list,
        ))
    }

    /// First element matching a selector list, in document order.
    ///
    /// # Errors
    /// Returns a [`SelectorError`] when the selector text is malformed.
    pub fn query_selector(&mut self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Add class tokens to every element matching the selector.
    ///
    /// The selector is parsed and resolved before any element is touched, so
    /// a malformed selector leaves the document as it was. Matching zero
    /// elements is not an error, and tokens already present on an element
    /// stay where they are, so repeated calls settle to a fixed class set.
    ///
    /// # Errors
    /// Returns a [`SelectorError`] when the selector text is malformed.
    pub fn add_classes(
        &mut self,
        selector: &str,
        class_names: &[&str],
    ) -> Result<(), SelectorError> {
        let matched = self.query_selector_all(selector)?;
        if matched.is_empty() || class_names.is_empty() {
            debug!("add_classes '{selector}' touched no elements");
            return Ok(());
        }
        let mut changed = 0usize;
        for &node in &matched {
            if self.document.add_classes(node, class_names) > 0 {
                changed = changed.saturating_add(1);
            }
        }
        if changed > 0 {
            // A class change can flip matches for descendants and later
            // siblings too, so the whole memo goes.
            self.cache.clear();
        }
        debug!(
            "add_classes '{selector}' changed {changed} of {} matched elements",
            matched.len()
        );
        Ok(())
    }
}
