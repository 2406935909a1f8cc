pub mod loader;
pub mod defaults;

pub use loader::*;
pub use defaults::*;

use crate::layout::{default_left, default_right, LayoutEntry};
use crate::themes::{get_palette, ColorTransform, Palette};
use serde::{Deserialize, Serialize};

/// Everything that can be set before installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Palette supplying any color not set explicitly.
    pub theme: String,
    pub warm_color: Option<String>,
    pub cool_color: Option<String>,
    pub plain_color: Option<String>,
    /// Percentage points of lightness removed for inactive faces.
    pub darkness: Option<f64>,
    /// Percentage points of saturation removed for inactive faces.
    pub desaturation: Option<f64>,
    pub left: Option<Vec<LayoutEntry>>,
    pub right: Option<Vec<LayoutEntry>>,
}

impl Config {
    /// Theme palette with explicit colors applied on top.
    pub fn palette(&self) -> Palette {
        let base = get_palette(&self.theme);
        Palette {
            warm: self.warm_color.clone().unwrap_or(base.warm),
            cool: self.cool_color.clone().unwrap_or(base.cool),
            plain: self.plain_color.clone().unwrap_or(base.plain),
        }
    }

    pub fn transform(&self) -> ColorTransform {
        let defaults = ColorTransform::default();
        ColorTransform::new(
            self.darkness.unwrap_or(defaults.darkness),
            self.desaturation.unwrap_or(defaults.desaturation),
        )
    }

    pub fn left_layout(&self) -> Vec<LayoutEntry> {
        self.left.clone().unwrap_or_else(default_left)
    }

    pub fn right_layout(&self) -> Vec<LayoutEntry> {
        self.right.clone().unwrap_or_else(default_right)
    }
}
