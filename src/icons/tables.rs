//! Bundled glyph tables. Codepoints are the private-use positions of the
//! corresponding icon fonts.

use super::{GlyphTable, IconSet};

pub fn all() -> Vec<(IconSet, GlyphTable)> {
    vec![
        (IconSet::Octicon, octicons()),
        (IconSet::Faicon, font_awesome()),
        (IconSet::Wicon, weather_icons()),
        (IconSet::Fileicon, file_icons()),
        (IconSet::Material, material_icons()),
        (IconSet::Alltheicon, all_the_icons()),
    ]
}

fn octicons() -> GlyphTable {
    GlyphTable::new("github-octicons")
        .with("alert", "\u{f02d}")
        .with("book", "\u{f007}")
        .with("check", "\u{f03a}")
        .with("diff", "\u{f04d}")
        .with("file-code", "\u{f010}")
        .with("file-directory", "\u{f016}")
        .with("git-branch", "\u{f020}")
        .with("git-compare", "\u{f0ac}")
        .with("link", "\u{f05c}")
        .with("lock", "\u{f06a}")
        .with("markdown", "\u{f0c9}")
        .with("pencil", "\u{f058}")
        .with("repo", "\u{f001}")
        .with("terminal", "\u{f0c8}")
}

fn font_awesome() -> GlyphTable {
    GlyphTable::new("FontAwesome")
        .with("book", "\u{f02d}")
        .with("chain-broken", "\u{f127}")
        .with("code-fork", "\u{f126}")
        .with("file-text-o", "\u{f0f6}")
        .with("folder", "\u{f07b}")
        .with("link", "\u{f0c1}")
        .with("lock", "\u{f023}")
        .with("pencil", "\u{f040}")
        .with("terminal", "\u{f120}")
        .with("unlock", "\u{f09c}")
}

fn weather_icons() -> GlyphTable {
    GlyphTable::new("Weather Icons")
        .with("cloud", "\u{f041}")
        .with("day-sunny", "\u{f00d}")
        .with("night-clear", "\u{f02e}")
}

fn file_icons() -> GlyphTable {
    GlyphTable::new("file-icons")
        .with("elisp", "\u{e925}")
        .with("emacs", "\u{e926}")
        .with("go", "\u{e924}")
        .with("toml", "\u{e97b}")
}

fn material_icons() -> GlyphTable {
    GlyphTable::new("Material Icons")
        .with("code", "\u{e86f}")
        .with("description", "\u{e873}")
        .with("edit", "\u{e3c9}")
        .with("folder", "\u{e2c7}")
        .with("lock", "\u{e897}")
        .with("settings", "\u{e8b8}")
}

fn all_the_icons() -> GlyphTable {
    GlyphTable::new("all-the-icons")
        .with("css3", "\u{e913}")
        .with("git", "\u{e907}")
        .with("haskell", "\u{e921}")
        .with("html5", "\u{e914}")
        .with("javascript", "\u{e918}")
        .with("python", "\u{e90e}")
        .with("rust", "\u{e91d}")
}
