//! Ordered class token sets.

/// Duplicate-free set of class tokens for one element.
///
/// Tokens keep first-insertion order so the serialized attribute value is
/// deterministic across repeated mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Tokenize a whitespace-separated class attribute value, dropping
    /// duplicate tokens.
    #[must_use]
    pub fn from_attr(class_attr: &str) -> Self {
        let mut list = Self::default();
        for token in class_attr.split_whitespace() {
            list.insert(token);
        }
        list
    }

    /// Add one token, returning true when it was absent. Empty tokens and
    /// tokens containing whitespace are rejected.
    pub fn insert(&mut self, token: &str) -> bool {
        if token.is_empty() || token.contains(char::is_whitespace) || self.contains(token) {
            return false;
        }
        self.tokens.push(String::from(token));
        true
    }

    /// True when the token is present. Tokens compare case-sensitively.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing.as_str() == token)
    }

    /// Tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Serialize back to an attribute value, tokens joined by single spaces.
    #[must_use]
    pub fn to_attr_value(&self) -> String {
        self.tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test tokenization order and duplicate handling.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_from_attr() {
        let list = ClassList::from_attr("  beta alpha beta\tgamma ");
        let tokens: Vec<&str> = list.iter().collect();
        assert_eq!(tokens, ["beta", "alpha", "gamma"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_attr_value(), "beta alpha gamma");
    }

    /// Test insertion results and rejected tokens.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_insert() {
        let mut list = ClassList::default();
        assert!(list.insert("alert"));
        assert!(!list.insert("alert"));
        assert!(!list.insert(""));
        assert!(!list.insert("two words"));
        assert!(list.insert("alert-danger"));
        assert_eq!(list.to_attr_value(), "alert alert-danger");
    }

    /// Test that token comparison is case-sensitive.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_case_sensitive() {
        let mut list = ClassList::from_attr("Alert");
        assert!(list.contains("Alert"));
        assert!(!list.contains("alert"));
        assert!(list.insert("alert"));
        assert_eq!(list.to_attr_value(), "Alert alert");
    }

    /// Test the empty list shape.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_empty() {
        let list = ClassList::from_attr("   ");
        assert!(list.is_empty());
        assert_eq!(list.to_attr_value(), "");
    }
}
