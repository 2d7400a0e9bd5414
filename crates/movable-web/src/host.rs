#![forbid(unsafe_code)]

//! Style-isolated mount point for a floating panel.
//!
//! [`HostSurface`] builds a host `<div>` and, when requested, opens a shadow
//! root on it so panel styles and page styles cannot bleed into each other.
//! The host stays detached until [`show`](HostSurface::show) appends it to
//! `document.body`; [`hide`](HostSurface::hide) detaches it again without
//! losing injected styles or content. Without a shadow root the surface runs
//! in light DOM and injected stylesheets get their `:host` selectors
//! rewritten to the host's unique id, which keeps them scoped well enough in
//! practice.

use crate::style::{rewrite_host_selector, unique_host_id};
use crate::{DomMoverError, dom_error};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node, ShadowRoot, ShadowRootInit, ShadowRootMode};

enum MountPoint {
    Shadow(ShadowRoot),
    Light,
}

pub struct HostSurface {
    host: HtmlElement,
    mount: MountPoint,
    document: Document,
    id: String,
}

impl HostSurface {
    /// Build the host element, detached. With `use_shadow` the surface tries
    /// to attach an open shadow root, falling back to light DOM when the
    /// browser refuses.
    pub fn create(use_shadow: bool) -> Result<Self, DomMoverError> {
        let document = web_sys::window()
            .ok_or(DomMoverError::NoWindow)?
            .document()
            .ok_or(DomMoverError::NoDocument)?;

        let host: HtmlElement = document
            .create_element("div")
            .map_err(|err| dom_error("createElement", &err))?
            .dyn_into()
            .map_err(|_| DomMoverError::Dom {
                op: "createElement",
                message: "div is not an HtmlElement".into(),
            })?;
        let id = unique_host_id();
        host.set_id(&id);

        let mount = if use_shadow {
            match host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open)) {
                Ok(root) => MountPoint::Shadow(root),
                Err(err) => {
                    debug!(host = %id, ?err, "shadow root unavailable, using light dom");
                    MountPoint::Light
                }
            }
        } else {
            MountPoint::Light
        };

        Ok(Self {
            host,
            mount,
            document,
            id,
        })
    }

    /// Shadow-rooted surface; the common case.
    pub fn new() -> Result<Self, DomMoverError> {
        Self::create(true)
    }

    /// Inject a stylesheet into the surface.
    ///
    /// Under light DOM, `:host` selectors are rewritten to target the host
    /// element by id.
    pub fn add_style(&self, css: &str) -> Result<(), DomMoverError> {
        let style = self
            .document
            .create_element("style")
            .map_err(|err| dom_error("createElement", &err))?;
        match self.mount {
            MountPoint::Shadow(_) => style.set_text_content(Some(css)),
            MountPoint::Light => {
                style.set_text_content(Some(&rewrite_host_selector(css, &self.id)));
            }
        }
        self.container()
            .append_child(&style)
            .map_err(|err| dom_error("appendChild", &err))?;
        Ok(())
    }

    /// Mount a piece of panel content inside the surface.
    pub fn append(&self, node: &Node) -> Result<(), DomMoverError> {
        self.container()
            .append_child(node)
            .map_err(|err| dom_error("appendChild", &err))?;
        Ok(())
    }

    /// Node that panel content and styles attach under: the shadow root when
    /// present, otherwise the host element itself.
    #[must_use]
    pub fn container(&self) -> Node {
        match &self.mount {
            MountPoint::Shadow(root) => root.clone().into(),
            MountPoint::Light => self.host.clone().into(),
        }
    }

    /// Append the host to `document.body`. Idempotent while attached. The
    /// body lookup happens here, not at construction, so surfaces built
    /// before the body exists still work.
    pub fn show(&self) -> Result<(), DomMoverError> {
        if self.host.is_connected() {
            return Ok(());
        }
        let body = self.document.body().ok_or(DomMoverError::NoBody)?;
        body.append_child(&self.host)
            .map_err(|err| dom_error("appendChild", &err))?;
        Ok(())
    }

    /// Detach the host from the document. Injected styles and content stay
    /// in place for the next [`show`](Self::show).
    pub fn hide(&self) {
        self.host.remove();
    }

    /// The host element; hand this to a [`DomMover`](crate::DomMover) to
    /// make the whole surface draggable.
    #[must_use]
    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn has_shadow_root(&self) -> bool {
        matches!(self.mount, MountPoint::Shadow(_))
    }

    /// Remove the host and everything mounted inside it.
    pub fn dispose(self) {
        self.host.remove();
    }
}
