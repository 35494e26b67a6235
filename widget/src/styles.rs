//! Stylesheets compiled into the bundle.

/// Widget styles, injected into the shadow root.
pub const SCOPED_CSS: &str = include_str!("../style/widget.css");

/// Page chrome for the fixed container, injected into `<head>`.
pub const DOCUMENT_CSS: &str = include_str!("../style/host.css");
