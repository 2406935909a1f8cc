//! Render functions that attach active/inactive faces to text.

use crate::error::Result;
use crate::icons::{Icon, IconRegistry};
use crate::themes::{Color, FaceAttributes, FaceId, FacePair, FaceRegistry};
use tracing::debug;

/// Face carried by a piece of styled text.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceRef {
    Named(FaceId),
    /// Attributes given inline rather than through the face table.
    Anonymous(FaceAttributes),
}

/// Size and vertical placement of a glyph relative to the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayHint {
    pub height: f64,
    pub raise: f64,
}

impl Default for DisplayHint {
    fn default() -> Self {
        Self {
            height: 1.0,
            raise: 0.0,
        }
    }
}

/// Text plus the style metadata the host needs to draw it.
///
/// `face` and `render_hint` always hold the same face; hosts read one or
/// the other depending on whether they redo highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub face: FaceRef,
    pub render_hint: FaceRef,
    pub display: Option<DisplayHint>,
}

impl StyledText {
    pub fn new(text: impl Into<String>, face: FaceRef) -> Self {
        Self {
            text: text.into(),
            render_hint: face.clone(),
            face,
            display: None,
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayHint) -> Self {
        self.display = Some(display);
        self
    }
}

/// Color parameters shared by style and icon definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSpec {
    pub color: String,
    pub darkness: Option<f64>,
    pub desaturation: Option<f64>,
    pub extra: Option<FaceAttributes>,
}

impl StyleSpec {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn darkness(mut self, darkness: f64) -> Self {
        self.darkness = Some(darkness);
        self
    }

    #[must_use]
    pub fn desaturation(mut self, desaturation: f64) -> Self {
        self.desaturation = Some(desaturation);
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: FaceAttributes) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Renders arbitrary text in one element's active or inactive face.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFn {
    pub name: String,
    pub faces: FacePair,
}

impl StyleFn {
    pub fn render(&self, text: &str, active: bool) -> StyledText {
        StyledText::new(text, FaceRef::Named(self.faces.select(active).clone()))
    }
}

/// Renders one glyph, resolved once when the function was defined.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFn {
    pub name: String,
    pub icon: Icon,
    pub faces: FacePair,
    pub display: DisplayHint,
}

impl IconFn {
    pub fn render(&self, active: bool) -> StyledText {
        StyledText::new(
            self.icon.glyph.clone(),
            FaceRef::Named(self.faces.select(active).clone()),
        )
        .with_display(self.display)
    }
}

/// Register `<name>-active`/`<name>-inactive` and return their renderer.
pub fn define_style(faces: &mut FaceRegistry, name: &str, spec: &StyleSpec) -> Result<StyleFn> {
    let color = Color::parse(&spec.color)?;
    let pair = faces.make_pair(name, color, spec.darkness, spec.desaturation, spec.extra.as_ref());
    debug!(style = name, color = %color, "defined style");

    Ok(StyleFn {
        name: name.to_string(),
        faces: pair,
    })
}

/// Resolve `icon_name` now and register `<name>-icon-active`/`-inactive`.
///
/// `Ok(None)` when no icon set has the glyph. An invalid color is an error
/// either way.
pub fn define_icon(
    faces: &mut FaceRegistry,
    icons: &IconRegistry,
    name: &str,
    icon_name: &str,
    spec: &StyleSpec,
    display: Option<DisplayHint>,
) -> Result<Option<IconFn>> {
    let color = Color::parse(&spec.color)?;

    let Some(icon) = icons.find_icon(icon_name) else {
        debug!(icon = name, glyph = icon_name, "icon not defined, glyph unavailable");
        return Ok(None);
    };

    let mut extra = spec.extra.clone().unwrap_or_default();
    if extra.family.is_none() {
        extra.family = Some(icon.family.clone());
    }

    let face_name = format!("{}-icon", name);
    let pair = faces.make_pair(&face_name, color, spec.darkness, spec.desaturation, Some(&extra));
    debug!(icon = name, set = %icon.set, "defined icon");

    Ok(Some(IconFn {
        name: name.to_string(),
        icon,
        faces: pair,
        display: display.unwrap_or_default(),
    }))
}
