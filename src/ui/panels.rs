use crate::ui::{OverlayHost, Panel, TextLine};

/// Keeps the overlay in memory.
///
/// Lookups behave like a document's: the first panel with a matching id wins.
#[derive(Clone, Debug, Default)]
pub struct PanelHost {
    stylesheets: Vec<String>,
    panels: Vec<Panel>,
}

impl PanelHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn remove_panel(&mut self, id: &str) -> Option<Panel> {
        let index = self.panels.iter().position(|panel| panel.id == id)?;
        Some(self.panels.remove(index))
    }
}

impl OverlayHost for PanelHost {
    fn ensure_stylesheet(&mut self, id: &str) {
        if !self.stylesheets.iter().any(|existing| existing == id) {
            self.stylesheets.push(id.to_string());
        }
    }

    fn append_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    fn replace_content(&mut self, id: &str, content: Vec<TextLine>) -> bool {
        match self.panels.iter_mut().find(|panel| panel.id == id) {
            Some(panel) => {
                panel.content = content;
                true
            }
            None => false,
        }
    }

    fn has_panel(&self, id: &str) -> bool {
        self.panel(id).is_some()
    }
}
