//! Score and instructions overlay.
//!
//! The overlay is described as plain data ([`Panel`]s of [`TextLine`]s) and
//! handed to an [`OverlayHost`], which owns the actual presentation:
//!
//! - `PanelHost` keeps panels in memory (native builds and tests)
//! - `DomHost` writes absolutely positioned `<div>`s into the page (web)
//! - `TextOverlay` (feature `ui`) draws the `PanelHost` panels with glyphon

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod panels;
#[cfg(all(feature = "ui", not(target_arch = "wasm32")))]
pub mod text;

pub const STYLESHEET_ID: &str = "ui-css";
pub const SCORE_CONTAINER_ID: &str = "score-container";
pub const SCORE_DISPLAY_ID: &str = "score-display";
pub const CONTROLS_CONTAINER_ID: &str = "controls-container";

pub const TITLE: &str = "Basketball Court - HW05";
pub const CONTROLS_HEADING: &str = "Current Controls:";
pub const ORBIT_CONTROL: &str = "O - Toggle orbit camera";
pub const COMING_SOON: &str = "Interactive controls coming in HW06...";

/// The document the overlay lives in.
pub trait OverlayHost {
    /// Adds the stylesheet link `id` unless the document already has one.
    fn ensure_stylesheet(&mut self, id: &str);

    fn append_panel(&mut self, panel: Panel);

    /// Replaces the whole content of panel `id`.
    ///
    /// Returns `false` and leaves the document untouched when there is no such panel.
    fn replace_content(&mut self, id: &str, content: Vec<TextLine>) -> bool;

    fn has_panel(&self, id: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Unstyled block, e.g. the score.
    Plain,
    Heading,
    Strong,
    Normal,
    /// Greyed out and italic.
    Hint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub id: Option<&'static str>,
    pub text: String,
    pub kind: LineKind,
}

impl TextLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            kind,
        }
    }

    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopCenter,
    BottomLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelStyle {
    pub anchor: Anchor,
    /// Distance from the anchored window edges.
    pub margin_px: u32,
    pub font_size_px: u32,
    pub bold: bool,
    /// Vertical and horizontal padding.
    pub padding_px: [u32; 2],
    pub border_radius_px: u32,
    pub background_alpha: f32,
}

impl PanelStyle {
    /// Inline CSS for the panel's container element.
    pub fn to_css(&self) -> String {
        let position = match self.anchor {
            Anchor::TopCenter => format!(
                "top: {}px; left: 50%; transform: translateX(-50%); text-align: center; ",
                self.margin_px
            ),
            Anchor::BottomLeft => format!(
                "bottom: {m}px; left: {m}px; text-align: left; ",
                m = self.margin_px
            ),
        };
        let weight = if self.bold { "font-weight: bold; " } else { "" };
        let [vertical, horizontal] = self.padding_px;
        let padding = if vertical == horizontal {
            format!("{vertical}px")
        } else {
            format!("{vertical}px {horizontal}px")
        };
        format!(
            "position: absolute; {position}color: white; font-size: {}px; \
             font-family: Arial, sans-serif; {weight}background-color: rgba(0, 0, 0, {}); \
             padding: {padding}; border-radius: {}px;",
            self.font_size_px, self.background_alpha, self.border_radius_px
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub id: &'static str,
    pub style: PanelStyle,
    pub content: Vec<TextLine>,
}

impl Panel {
    /// All text of the panel, one line per [`TextLine`].
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn score_panel() -> Panel {
    Panel {
        id: SCORE_CONTAINER_ID,
        style: PanelStyle {
            anchor: Anchor::TopCenter,
            margin_px: 20,
            font_size_px: 24,
            bold: true,
            padding_px: [10, 20],
            border_radius_px: 10,
            background_alpha: 0.7,
        },
        content: vec![TextLine::new(LineKind::Plain, "Score: 0").with_id(SCORE_DISPLAY_ID)],
    }
}

/// Instructions panel content. `orbit` adds the camera status once it is known.
pub fn instructions(orbit: Option<bool>) -> Vec<TextLine> {
    let control = match orbit {
        None => ORBIT_CONTROL.to_string(),
        Some(true) => format!("{ORBIT_CONTROL} (ON)"),
        Some(false) => format!("{ORBIT_CONTROL} (OFF)"),
    };
    vec![
        TextLine::new(LineKind::Heading, TITLE),
        TextLine::new(LineKind::Strong, CONTROLS_HEADING),
        TextLine::new(LineKind::Normal, control),
        TextLine::new(LineKind::Hint, COMING_SOON),
    ]
}

pub fn instructions_panel() -> Panel {
    Panel {
        id: CONTROLS_CONTAINER_ID,
        style: PanelStyle {
            anchor: Anchor::BottomLeft,
            margin_px: 20,
            font_size_px: 16,
            bold: false,
            padding_px: [15, 15],
            border_radius_px: 10,
            background_alpha: 0.7,
        },
        content: instructions(None),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Markup for a panel's content.
pub fn to_html(content: &[TextLine]) -> String {
    content
        .iter()
        .map(|line| {
            let id = line
                .id
                .map(|id| format!(" id=\"{id}\""))
                .unwrap_or_default();
            let text = escape(&line.text);
            match line.kind {
                LineKind::Plain => format!("<div{id}>{text}</div>"),
                LineKind::Heading => {
                    format!("<h3{id} style=\"margin: 0 0 10px 0; color: #ffaa00;\">{text}</h3>")
                }
                LineKind::Strong => {
                    format!("<p{id} style=\"margin: 5px 0;\"><strong>{text}</strong></p>")
                }
                LineKind::Normal => format!("<p{id} style=\"margin: 5px 0;\">{text}</p>"),
                LineKind::Hint => format!(
                    "<p{id} style=\"margin: 5px 0; color: #888; font-style: italic;\">{text}</p>"
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The overlay: a score display and the control instructions.
#[derive(Debug)]
pub struct Ui<H> {
    host: H,
}

impl<H: OverlayHost> Ui<H> {
    pub fn new(mut host: H) -> Self {
        host.ensure_stylesheet(STYLESHEET_ID);
        host.append_panel(score_panel());
        host.append_panel(instructions_panel());
        Self { host }
    }

    /// Rewrites the instructions with the orbit camera's state.
    ///
    /// Does nothing when the instructions panel is gone.
    pub fn update_orbit_status(&mut self, enabled: bool) {
        if !self
            .host
            .replace_content(CONTROLS_CONTAINER_ID, instructions(Some(enabled)))
        {
            log::debug!("{CONTROLS_CONTAINER_ID} is missing, orbit status not shown");
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_matches_the_panel_layout() {
        let html = to_html(&instructions(Some(false)));
        assert!(html.starts_with("<h3 style=\"margin: 0 0 10px 0; color: #ffaa00;\">"));
        assert!(html.contains("<strong>Current Controls:</strong>"));
        assert!(html.contains(">O - Toggle orbit camera (OFF)</p>"));
        assert_eq!(
            to_html(&score_panel().content),
            "<div id=\"score-display\">Score: 0</div>"
        );
    }

    #[test]
    fn css_positions_the_panels() {
        let score = score_panel().style.to_css();
        assert!(score.contains("top: 20px; left: 50%; transform: translateX(-50%);"));
        assert!(score.contains("font-weight: bold;"));
        assert!(score.contains("padding: 10px 20px;"));

        let controls = instructions_panel().style.to_css();
        assert!(controls.contains("bottom: 20px; left: 20px;"));
        assert!(controls.contains("padding: 15px;"));
        assert!(!controls.contains("bold"));
    }

    #[test]
    fn css_is_one_complete_declaration_list() {
        assert_eq!(
            score_panel().style.to_css(),
            "position: absolute; top: 20px; left: 50%; transform: translateX(-50%); \
             text-align: center; color: white; font-size: 24px; font-family: Arial, sans-serif; \
             font-weight: bold; background-color: rgba(0, 0, 0, 0.7); padding: 10px 20px; \
             border-radius: 10px;"
        );
        assert_eq!(
            instructions_panel().style.to_css(),
            "position: absolute; bottom: 20px; left: 20px; text-align: left; color: white; \
             font-size: 16px; font-family: Arial, sans-serif; \
             background-color: rgba(0, 0, 0, 0.7); padding: 15px; border-radius: 10px;"
        );
    }
}
