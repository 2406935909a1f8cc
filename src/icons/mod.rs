//! Icon glyph resolution across the icon-font sets.
//!
//! Sets are searched in a fixed priority order; the first set that
//! produces a non-empty glyph for a name wins.

pub mod tables;
pub mod modes;

pub use modes::*;

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSet {
    Octicon,
    Faicon,
    Wicon,
    Fileicon,
    Material,
    Alltheicon,
}

impl IconSet {
    /// Search order used by [`IconRegistry::find_icon`].
    pub const PRIORITY: [IconSet; 6] = [
        IconSet::Octicon,
        IconSet::Faicon,
        IconSet::Wicon,
        IconSet::Fileicon,
        IconSet::Material,
        IconSet::Alltheicon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IconSet::Octicon => "octicon",
            IconSet::Faicon => "faicon",
            IconSet::Wicon => "wicon",
            IconSet::Fileicon => "fileicon",
            IconSet::Material => "material",
            IconSet::Alltheicon => "alltheicon",
        }
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("no glyph named `{0}` in this icon set")]
    Unknown(String),
}

/// A glyph source backed by one icon font.
pub trait IconFont {
    fn glyph(&self, name: &str) -> Result<String, GlyphError>;

    fn family(&self) -> &str;
}

/// An in-memory name → glyph table.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    family: String,
    glyphs: HashMap<String, String>,
}

impl GlyphTable {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            glyphs: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, name: &str, glyph: &str) -> Self {
        self.insert(name, glyph);
        self
    }

    pub fn insert(&mut self, name: &str, glyph: &str) {
        self.glyphs.insert(name.to_string(), glyph.to_string());
    }
}

impl IconFont for GlyphTable {
    fn glyph(&self, name: &str) -> Result<String, GlyphError> {
        self.glyphs
            .get(name)
            .cloned()
            .ok_or_else(|| GlyphError::Unknown(name.to_string()))
    }

    fn family(&self) -> &str {
        &self.family
    }
}

/// A resolved glyph and the font family needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub glyph: String,
    pub family: String,
    pub set: IconSet,
}

/// The registered icon fonts, at most one per [`IconSet`].
#[derive(Default)]
pub struct IconRegistry {
    fonts: HashMap<IconSet, Box<dyn IconFont>>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with the bundled glyph tables.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (set, table) in tables::all() {
            registry.register(set, table);
        }
        registry
    }

    pub fn register(&mut self, set: IconSet, font: impl IconFont + 'static) {
        self.fonts.insert(set, Box::new(font));
    }

    pub fn unregister(&mut self, set: IconSet) {
        self.fonts.remove(&set);
    }

    /// Resolve `name` in one specific set.
    pub fn glyph_in(&self, set: IconSet, name: &str) -> Option<Icon> {
        let font = self.fonts.get(&set)?;
        match font.glyph(name) {
            Ok(glyph) if !glyph.is_empty() => Some(Icon {
                glyph,
                family: font.family().to_string(),
                set,
            }),
            Ok(_) => None,
            Err(err) => {
                debug!(set = %set, "{}", err);
                None
            }
        }
    }

    /// Resolve `name` against every set in priority order.
    pub fn find_icon(&self, name: &str) -> Option<Icon> {
        let found = IconSet::PRIORITY
            .iter()
            .find_map(|&set| self.glyph_in(set, name));
        if found.is_none() {
            debug!(icon = name, "no icon set provides this glyph");
        }
        found
    }

    /// Run `body` with the resolved icon; `None` when nothing resolves.
    pub fn with_icon<T>(&self, name: &str, body: impl FnOnce(&Icon) -> T) -> Option<T> {
        self.find_icon(name).map(|icon| body(&icon))
    }
}

impl fmt::Debug for IconRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets: Vec<_> = IconSet::PRIORITY
            .iter()
            .filter(|set| self.fonts.contains_key(set))
            .map(|set| set.name())
            .collect();
        f.debug_struct("IconRegistry").field("sets", &sets).finish()
    }
}
