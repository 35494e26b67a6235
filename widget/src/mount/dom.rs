//! `web-sys` implementation of [`MountHost`]: the encapsulation scope is an
//! open shadow root on the container element.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ShadowRoot, ShadowRootInit, ShadowRootMode};

use super::host::{MountError, MountHost};

/// The live browser document.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    /// Bind to `window.document`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] outside a browser window.
    pub fn current() -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::MissingWindow)?;
        let document = window.document().ok_or(MountError::MissingDocument)?;
        Ok(Self { document })
    }

    fn create(&self, tag: &str, id: &str) -> Result<HtmlElement, MountError> {
        let el = self.document.create_element(tag).map_err(dom_error)?;
        el.set_id(id);
        el.dyn_into::<HtmlElement>()
            .map_err(|_| MountError::Dom(format!("<{tag}> is not an HTMLElement")))
    }
}

fn dom_error(err: JsValue) -> MountError {
    MountError::Dom(format!("{err:?}"))
}

impl MountHost for DomHost {
    type Element = HtmlElement;
    type Scope = ShadowRoot;

    fn find_element(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn append_to_body(&self, id: &str) -> Result<HtmlElement, MountError> {
        let body = self.document.body().ok_or(MountError::MissingBody)?;
        let container = self.create("div", id)?;
        body.append_child(&container).map_err(dom_error)?;
        Ok(container)
    }

    fn scope_of(&self, container: &HtmlElement) -> Option<ShadowRoot> {
        container.shadow_root()
    }

    fn attach_scope(&self, container: &HtmlElement) -> Result<ShadowRoot, MountError> {
        let init = ShadowRootInit::new(ShadowRootMode::Open);
        container.attach_shadow(&init).map_err(dom_error)
    }

    fn find_in_scope(&self, scope: &ShadowRoot, id: &str) -> Option<HtmlElement> {
        scope.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn append_element(&self, scope: &ShadowRoot, id: &str) -> Result<HtmlElement, MountError> {
        let el = self.create("div", id)?;
        scope.append_child(&el).map_err(dom_error)?;
        Ok(el)
    }

    fn append_style(&self, scope: &ShadowRoot, id: &str, css: &str) -> Result<(), MountError> {
        let style = self.create("style", id)?;
        style.set_text_content(Some(css));
        scope.append_child(&style).map_err(dom_error)?;
        Ok(())
    }

    fn append_head_style(&self, id: &str, css: &str) -> Result<(), MountError> {
        let head = self.document.head().ok_or(MountError::MissingHead)?;
        let style = self.create("style", id)?;
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(dom_error)?;
        Ok(())
    }
}
