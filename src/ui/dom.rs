use crate::ui::{OverlayHost, Panel, TextLine, to_html};

/// Writes the overlay into the page the canvas lives in.
///
/// Without a document (e.g. inside a worker) every operation is a no-op.
#[derive(Debug)]
pub struct DomHost {
    document: Option<web_sys::Document>,
}

impl DomHost {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|window| window.document());
        if document.is_none() {
            log::warn!("No document available, the overlay stays hidden");
        }
        Self { document }
    }
}

impl Default for DomHost {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayHost for DomHost {
    fn ensure_stylesheet(&mut self, id: &str) {
        let Some(document) = &self.document else {
            return;
        };
        if document.get_element_by_id(id).is_some() {
            return;
        }
        let (Ok(link), Some(head)) = (document.create_element("link"), document.head()) else {
            log::warn!("Cannot add stylesheet link {id}");
            return;
        };
        link.set_id(id);
        if let Err(e) = link
            .set_attribute("rel", "stylesheet")
            .and_then(|_| head.append_child(&link).map(|_| ()))
        {
            log::warn!("Cannot add stylesheet link {id}: {e:?}");
        }
    }

    fn append_panel(&mut self, panel: Panel) {
        let Some(document) = &self.document else {
            return;
        };
        let (Ok(element), Some(body)) = (document.create_element("div"), document.body()) else {
            log::warn!("Cannot create panel {}", panel.id);
            return;
        };
        element.set_id(panel.id);
        element.set_inner_html(&to_html(&panel.content));
        if let Err(e) = element
            .set_attribute("style", &panel.style.to_css())
            .and_then(|_| body.append_child(&element).map(|_| ()))
        {
            log::warn!("Cannot add panel {}: {e:?}", panel.id);
        }
    }

    fn replace_content(&mut self, id: &str, content: Vec<TextLine>) -> bool {
        let Some(element) = self
            .document
            .as_ref()
            .and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };
        element.set_inner_html(&to_html(&content));
        true
    }

    fn has_panel(&self, id: &str) -> bool {
        self.document
            .as_ref()
            .and_then(|document| document.get_element_by_id(id))
            .is_some()
    }
}
