//! DOM capabilities the mount bootstrap relies on.

/// Failure while preparing the mount point.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no <body> yet")]
    MissingBody,
    #[error("document has no <head>")]
    MissingHead,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// The document operations needed to build an isolated mount point.
///
/// `Scope` is the style-encapsulation boundary (a shadow root in the
/// browser). Lookups return `None` for "absent"; creation methods append the
/// new node and return it.
pub trait MountHost {
    type Element: Clone;
    type Scope: Clone;

    /// Find an element by id anywhere in the document (outside any scope).
    fn find_element(&self, id: &str) -> Option<Self::Element>;

    /// Create a `<div id=id>` and append it to `<body>`.
    fn append_to_body(&self, id: &str) -> Result<Self::Element, MountError>;

    /// The scope already attached to `container`, if any.
    fn scope_of(&self, container: &Self::Element) -> Option<Self::Scope>;

    /// Attach a new scope to `container`.
    fn attach_scope(&self, container: &Self::Element) -> Result<Self::Scope, MountError>;

    /// Find an element by id inside `scope`.
    fn find_in_scope(&self, scope: &Self::Scope, id: &str) -> Option<Self::Element>;

    /// Create a `<div id=id>` inside `scope`.
    fn append_element(&self, scope: &Self::Scope, id: &str) -> Result<Self::Element, MountError>;

    /// Create a `<style id=id>` carrying `css` inside `scope`.
    fn append_style(&self, scope: &Self::Scope, id: &str, css: &str) -> Result<(), MountError>;

    /// Create a `<style id=id>` carrying `css` in the document `<head>`.
    fn append_head_style(&self, id: &str, css: &str) -> Result<(), MountError>;
}
