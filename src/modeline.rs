//! Owner of all status-line state: faces, style and icon functions, the
//! deferred segment list and the active layout.
//!
//! Definitions accumulate while configuring; [`Modeline::install`] realizes
//! the segments against a host and hands it the layout.

use crate::config::Config;
use crate::engine::HostEngine;
use crate::error::IconlineError;
use crate::icons::{IconRegistry, ModeIcons};
use crate::layout::{LayoutEntry, LayoutProps};
use crate::segments::{builtin, SegmentBody, SegmentRegistry, SegmentScope};
use crate::style::{define_icon, define_style, DisplayHint, IconFn, StyleFn, StyleSpec};
use crate::themes::{Color, FaceRegistry};
use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info};

/// Name of the status line handed to the host.
pub const ENTRY_POINT: &str = "main";

#[derive(Debug)]
pub struct Modeline {
    config: Config,
    faces: FaceRegistry,
    icons: IconRegistry,
    mode_icons: ModeIcons,
    styles: HashMap<String, StyleFn>,
    icon_fns: HashMap<String, IconFn>,
    segments: SegmentRegistry,
    left: Vec<LayoutEntry>,
    right: Vec<LayoutEntry>,
    installed: bool,
}

impl Modeline {
    /// Empty state: bundled icon tables, no styles or segments.
    pub fn new(config: Config) -> Self {
        Self {
            faces: FaceRegistry::new(config.transform()),
            icons: IconRegistry::builtin(),
            mode_icons: ModeIcons::default(),
            styles: HashMap::new(),
            icon_fns: HashMap::new(),
            segments: SegmentRegistry::new(),
            left: config.left_layout(),
            right: config.right_layout(),
            installed: false,
            config,
        }
    }

    /// State with the stock styles, icons and segments defined.
    pub fn with_builtins(config: Config) -> Result<Self, IconlineError> {
        let mut modeline = Self::new(config);
        modeline.define_builtins()?;
        Ok(modeline)
    }

    pub fn define_builtins(&mut self) -> Result<(), IconlineError> {
        let palette = self.config.palette();

        self.define_style(builtin::STYLE_PLAIN, StyleSpec::new(&palette.plain))?;
        self.define_style(builtin::STYLE_WARM, StyleSpec::new(&palette.warm))?;
        self.define_style(builtin::STYLE_COOL, StyleSpec::new(&palette.cool))?;

        for (name, glyph, color) in [
            (builtin::ICON_UNMODIFIED, "link", &palette.plain),
            (builtin::ICON_MODIFIED, "chain-broken", &palette.warm),
            (builtin::ICON_LOCKED, "lock", &palette.warm),
            (builtin::ICON_BRANCH, "git-branch", &palette.cool),
            (builtin::ICON_DIFF, "diff", &palette.warm),
        ] {
            self.define_icon(name, glyph, StyleSpec::new(color), None)?;
        }

        builtin::register(&mut self.segments);
        Ok(())
    }

    pub fn define_style(&mut self, name: &str, spec: StyleSpec) -> Result<StyleFn, IconlineError> {
        let style = define_style(&mut self.faces, name, &spec)?;
        self.styles.insert(name.to_string(), style.clone());
        Ok(style)
    }

    /// `Ok(None)` when the glyph is in no icon set; nothing is registered then.
    pub fn define_icon(
        &mut self,
        name: &str,
        icon_name: &str,
        spec: StyleSpec,
        display: Option<DisplayHint>,
    ) -> Result<Option<IconFn>, IconlineError> {
        let icon = define_icon(&mut self.faces, &self.icons, name, icon_name, &spec, display)?;
        if let Some(icon) = &icon {
            self.icon_fns.insert(name.to_string(), icon.clone());
        }
        Ok(icon)
    }

    /// Queue a segment. `build` runs at installation.
    pub fn define_segment<F>(&mut self, name: &str, props: LayoutProps, build: F)
    where
        F: Fn(&SegmentScope<'_>) -> SegmentBody + 'static,
    {
        self.segments.define(name, props, build);
    }

    /// Realize every queued segment on `engine` in declaration order, then
    /// compile the layout. Missing lists fall back to the configured ones.
    pub fn install(
        &mut self,
        engine: &mut dyn HostEngine,
        left: Option<Vec<LayoutEntry>>,
        right: Option<Vec<LayoutEntry>>,
    ) -> Result<()> {
        let left = left.unwrap_or_else(|| self.config.left_layout());
        let right = right.unwrap_or_else(|| self.config.right_layout());

        if let Some(missing) = left
            .iter()
            .chain(&right)
            .find(|entry| !self.segments.contains(&entry.segment))
        {
            return Err(IconlineError::UnknownSegment(missing.segment.clone()).into());
        }

        let plain_color = Color::parse(&self.config.palette().plain)?;
        self.left = left;
        self.right = right;

        engine.set_entry_point(ENTRY_POINT);

        let scope = SegmentScope {
            styles: &self.styles,
            icons: &self.icon_fns,
            icon_registry: &self.icons,
            mode_icons: &self.mode_icons,
            plain_color,
        };
        for definition in self.segments.iter() {
            debug!(segment = %definition.name, "registering segment");
            engine.define_segment(&definition.name, definition.realize(&scope), definition.props);
        }

        engine.compile(ENTRY_POINT, &self.left, &self.right)?;
        self.installed = true;
        info!(
            segments = self.segments.len(),
            left = self.left.len(),
            right = self.right.len(),
            "status line installed"
        );
        Ok(())
    }

    /// Drop every definition and return to the freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn faces(&self) -> &FaceRegistry {
        &self.faces
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    /// Register custom icon fonts here before defining icons.
    pub fn icons_mut(&mut self) -> &mut IconRegistry {
        &mut self.icons
    }

    pub fn mode_icons_mut(&mut self) -> &mut ModeIcons {
        &mut self.mode_icons
    }

    pub fn style(&self, name: &str) -> Option<&StyleFn> {
        self.styles.get(name)
    }

    pub fn icon(&self, name: &str) -> Option<&IconFn> {
        self.icon_fns.get(name)
    }

    pub fn segments(&self) -> &SegmentRegistry {
        &self.segments
    }

    pub fn layout(&self) -> (&[LayoutEntry], &[LayoutEntry]) {
        (&self.left, &self.right)
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }
}
