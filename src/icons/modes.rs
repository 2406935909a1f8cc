use super::{Icon, IconRegistry, IconSet};
use std::collections::HashMap;

/// Icon name used when a major mode has no icon of its own.
pub const GENERIC_EDITOR_ICON: &str = "emacs";

/// Major mode → (icon set, icon name).
#[derive(Debug, Clone)]
pub struct ModeIcons {
    modes: HashMap<String, (IconSet, String)>,
}

impl Default for ModeIcons {
    fn default() -> Self {
        let mut icons = Self::empty();
        for (mode, set, name) in [
            ("rust-mode", IconSet::Alltheicon, "rust"),
            ("rustic-mode", IconSet::Alltheicon, "rust"),
            ("python-mode", IconSet::Alltheicon, "python"),
            ("js-mode", IconSet::Alltheicon, "javascript"),
            ("html-mode", IconSet::Alltheicon, "html5"),
            ("css-mode", IconSet::Alltheicon, "css3"),
            ("haskell-mode", IconSet::Alltheicon, "haskell"),
            ("emacs-lisp-mode", IconSet::Fileicon, "elisp"),
            ("lisp-interaction-mode", IconSet::Fileicon, "elisp"),
            ("go-mode", IconSet::Fileicon, "go"),
            ("toml-mode", IconSet::Fileicon, "toml"),
            ("markdown-mode", IconSet::Octicon, "markdown"),
            ("sh-mode", IconSet::Octicon, "terminal"),
            ("text-mode", IconSet::Faicon, "file-text-o"),
            ("org-mode", IconSet::Faicon, "file-text-o"),
            ("dired-mode", IconSet::Faicon, "folder"),
            ("conf-mode", IconSet::Material, "settings"),
        ] {
            icons.insert(mode, set, name);
        }
        icons
    }
}

impl ModeIcons {
    pub fn empty() -> Self {
        Self {
            modes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, mode: &str, set: IconSet, name: &str) {
        self.modes.insert(mode.to_string(), (set, name.to_string()));
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    /// The mode's own icon, if it has one that resolves.
    pub fn icon_for_mode(&self, registry: &IconRegistry, mode: &str) -> Option<Icon> {
        let (set, name) = self.modes.get(mode)?;
        registry.glyph_in(*set, name)
    }

    /// The mode's icon, or the generic editor icon.
    pub fn icon_or_generic(&self, registry: &IconRegistry, mode: &str) -> Option<Icon> {
        self.icon_for_mode(registry, mode)
            .or_else(|| registry.find_icon(GENERIC_EDITOR_ICON))
    }
}
