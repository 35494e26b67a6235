//! Mount Manager: isolated attachment point for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget lives inside the host page but must neither inherit nor leak
//! styles. Without an explicit target the manager locates-or-creates a
//! fixed container on `<body>`, gives it a shadow root (the encapsulation
//! scope), and inside the scope a mount element plus the scoped stylesheet.
//!
//! DESIGN
//! ======
//! Bootstrap is written against [`MountHost`] so every step is idempotent by
//! construction and testable without a browser. `dom` is the `web-sys`
//! implementation; `render` mounts the Leptos tree into the result.


pub mod host;
pub mod registry;

#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod render;

pub use host::{MountError, MountHost};

use crate::styles::{DOCUMENT_CSS, SCOPED_CSS};

/// Id of the container appended to `<body>` when no target is supplied.
pub const CONTAINER_ID: &str = "webchat-widget-container";
/// Id of the mount element inside the shadow root.
pub const ROOT_ID: &str = "webchat-root";
/// Id of the stylesheet inside the shadow root.
pub const SCOPED_STYLE_ID: &str = "webchat-style";
/// Id of the stylesheet injected into `<head>` at load time.
pub const DOCUMENT_STYLE_ID: &str = "webchat-widget-document-style";

/// Locate or create the isolated mount element and return it.
///
/// Calling this repeatedly never creates a second container, shadow root,
/// mount element or scoped stylesheet.
///
/// # Errors
///
/// Returns [`MountError`] when the host cannot create or attach a node.
pub fn ensure_mount_point<H: MountHost>(host: &H) -> Result<H::Element, MountError> {
    let container = match host.find_element(CONTAINER_ID) {
        Some(existing) => existing,
        None => host.append_to_body(CONTAINER_ID)?,
    };

    let scope = match host.scope_of(&container) {
        Some(existing) => existing,
        None => host.attach_scope(&container)?,
    };

    let root = match host.find_in_scope(&scope, ROOT_ID) {
        Some(existing) => existing,
        None => host.append_element(&scope, ROOT_ID)?,
    };

    if host.find_in_scope(&scope, SCOPED_STYLE_ID).is_none() {
        host.append_style(&scope, SCOPED_STYLE_ID, SCOPED_CSS)?;
    }

    Ok(root)
}

/// Inject the host-side chrome stylesheet into the document head.
///
/// Returns `true` when the stylesheet was added, `false` if it was already
/// present.
///
/// # Errors
///
/// Returns [`MountError`] when the document has no head or the node cannot
/// be appended.
pub fn ensure_document_style<H: MountHost>(host: &H) -> Result<bool, MountError> {
    if host.find_element(DOCUMENT_STYLE_ID).is_some() {
        return Ok(false);
    }
    host.append_head_style(DOCUMENT_STYLE_ID, DOCUMENT_CSS)?;
    Ok(true)
}

/// Console notice for a logger that failed to initialize, or `None` when it
/// came up. Start-up continues either way.
pub fn logger_init_notice<E: std::fmt::Display>(result: Result<(), E>) -> Option<String> {
    result.err().map(|err| format!("webchat: console logging unavailable: {err}"))
}
