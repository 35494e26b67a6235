//! Mount the Leptos tree and expose the global entry point.
//!
//! LIFECYCLE
//! =========
//! 1. Module start → console logging + panic hook, `<head>` chrome style.
//! 2. `window.renderWebchatWidget` installed.
//! 3. No default container on the page → render once with no target.
//! 4. Every later call resolves its target, unmounts whatever tree already
//!    lives there, and mounts a fresh one.

use std::any::Any;
use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::HtmlElement;

use super::dom::DomHost;
use super::registry::MountRegistry;
use super::{CONTAINER_ID, MountError, MountHost, ensure_document_style, ensure_mount_point, logger_init_notice};
use crate::app::WebchatApp;
use crate::config::WidgetConfig;

/// Name of the function installed on `window`.
pub const GLOBAL_ENTRY_NAME: &str = "renderWebchatWidget";

thread_local! {
    static MOUNTED: RefCell<MountRegistry<HtmlElement, Box<dyn Any>>> =
        RefCell::new(MountRegistry::default());
}

/// Render the widget into `target`, or into the isolated default mount point
/// when `target` is `None`. Idempotent per target.
///
/// # Errors
///
/// Returns [`MountError`] when the default mount point cannot be prepared.
pub fn render_widget(target: Option<HtmlElement>, config: WidgetConfig) -> Result<HtmlElement, MountError> {
    let target = match target {
        Some(el) => el,
        None => ensure_mount_point(&DomHost::current()?)?,
    };

    // Drop the previous tree outside the borrow; its cleanup runs here.
    let previous = MOUNTED.with_borrow_mut(|mounted| mounted.take(&target));
    if previous.is_some() {
        log::debug!("webchat: replacing existing widget tree");
    }
    drop(previous);

    let api_url = config.api_url.clone();
    let handle = leptos::mount::mount_to(target.clone(), move || view! { <WebchatApp config=config/> });
    MOUNTED.with_borrow_mut(|mounted| mounted.insert(target.clone(), Box::new(handle)));

    log::info!("webchat: widget mounted (backend {api_url})");
    Ok(target)
}

/// Wasm start hook: runs once when the bundle is evaluated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Some(notice) = logger_init_notice(console_log::init_with_level(log::Level::Info)) {
        web_sys::console::warn_1(&notice.into());
    }

    let host = match DomHost::current() {
        Ok(host) => host,
        Err(err) => {
            log::error!("webchat: cannot start: {err}");
            return;
        }
    };

    if let Err(err) = ensure_document_style(&host) {
        log::warn!("webchat: document style not injected: {err}");
    }

    if let Err(err) = install_global_entry() {
        log::error!("webchat: cannot install {GLOBAL_ENTRY_NAME}: {err}");
    }

    if host.find_element(CONTAINER_ID).is_none() {
        render_from_js(JsValue::UNDEFINED, JsValue::UNDEFINED);
    }
}

fn install_global_entry() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::MissingWindow)?;
    let entry = Closure::<dyn Fn(JsValue, JsValue)>::new(render_from_js);
    js_sys::Reflect::set(&window, &GLOBAL_ENTRY_NAME.into(), entry.as_ref())
        .map_err(|e| MountError::Dom(format!("{e:?}")))?;
    entry.forget();
    Ok(())
}

/// JS-facing entry: `renderWebchatWidget(target?, options?)`. Never throws.
fn render_from_js(target: JsValue, options: JsValue) {
    let target = if target.is_undefined() || target.is_null() {
        None
    } else {
        match target.dyn_into::<HtmlElement>() {
            Ok(el) => Some(el),
            Err(_) => {
                log::warn!("webchat: target is not an HTMLElement; using the default container");
                None
            }
        }
    };

    let config = WidgetConfig::resolve(&options);
    if let Err(err) = render_widget(target, config) {
        log::error!("webchat: render failed: {err}");
    }
}
