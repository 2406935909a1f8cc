pub mod color;
pub mod face;

pub use color::*;
pub use face::*;

/// The three base colors every built-in segment draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Modified buffers, dirty working trees.
    pub warm: String,
    /// Clean working trees.
    pub cool: String,
    /// Everything else.
    pub plain: String,
}

impl Palette {
    fn new(warm: &str, cool: &str, plain: &str) -> Self {
        Self {
            warm: warm.to_string(),
            cool: cool.to_string(),
            plain: plain.to_string(),
        }
    }
}

pub fn get_palette(name: &str) -> Palette {
    match name {
        "dark" => dark_palette(),
        "light" => light_palette(),
        "nord" => Palette::new("#d08770", "#a3be8c", "#d8dee9"),
        "tokyo-night" => Palette::new("#ff9e64", "#9ece6a", "#c0caf5"),
        "rose-pine" => Palette::new("#eb6f92", "#9ccfd8", "#e0def4"),
        _ => dark_palette(), // fallback
    }
}

fn dark_palette() -> Palette {
    Palette::new("#da8548", "#98be65", "#bbc2cf")
}

fn light_palette() -> Palette {
    Palette::new("#c05621", "#2f855a", "#2d3748")
}
