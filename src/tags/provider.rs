//! Tag provider trait definition

/// A known tag and its documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo<'a> {
    pub name: &'a str,
    pub documentation: &'a str,
}

/// Trait for sources of tag documentation
pub trait TagProvider: Send + Sync {
    /// Identifier used in logs and configuration (e.g. "html5")
    fn id(&self) -> &str;

    /// Check if this provider contributes to documents of the given language
    fn is_applicable(&self, language_id: &str) -> bool;

    /// Enumerate the known tags in provider order.
    ///
    /// The sequence is finite and every call starts a fresh enumeration.
    fn tags(&self) -> Box<dyn Iterator<Item = TagInfo<'_>> + '_>;
}
