//! Deferred segment definitions.
//!
//! A segment is declared with a builder that is only run when the status
//! line is installed, once every style and icon it looks up exists.

pub mod builtin;

use crate::context::RenderContext;
use crate::icons::{Icon, IconRegistry, ModeIcons, GENERIC_EDITOR_ICON};
use crate::layout::LayoutProps;
use crate::style::{IconFn, StyleFn, StyledText};
use crate::themes::Color;
use anyhow::Result;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A live segment: renders against the current context, `Ok(None)` when
/// there is nothing to show.
pub type SegmentBody = Rc<dyn Fn(&RenderContext) -> Result<Option<StyledText>>>;

/// Wrap a closure as a [`SegmentBody`].
pub fn segment_fn<F>(render: F) -> SegmentBody
where
    F: Fn(&RenderContext) -> Result<Option<StyledText>> + 'static,
{
    Rc::new(render)
}

type SegmentBuilder = Box<dyn Fn(&SegmentScope<'_>) -> SegmentBody>;

/// What a segment builder can see at installation time.
pub struct SegmentScope<'a> {
    pub styles: &'a HashMap<String, StyleFn>,
    pub icons: &'a HashMap<String, IconFn>,
    pub icon_registry: &'a IconRegistry,
    pub mode_icons: &'a ModeIcons,
    pub plain_color: Color,
}

impl SegmentScope<'_> {
    pub fn style(&self, name: &str) -> Option<StyleFn> {
        self.styles.get(name).cloned()
    }

    pub fn icon(&self, name: &str) -> Option<IconFn> {
        self.icons.get(name).cloned()
    }

    /// Resolve every known mode icon up front.
    pub fn resolved_mode_icons(&self) -> ResolvedModeIcons {
        ResolvedModeIcons {
            by_mode: self
                .mode_icons
                .modes()
                .filter_map(|mode| {
                    self.mode_icons
                        .icon_for_mode(self.icon_registry, mode)
                        .map(|icon| (mode.to_string(), icon))
                })
                .collect(),
            generic: self.icon_registry.find_icon(GENERIC_EDITOR_ICON),
        }
    }
}

/// Mode icons resolved once, with the generic fallback.
#[derive(Debug, Clone, Default)]
pub struct ResolvedModeIcons {
    by_mode: HashMap<String, Icon>,
    generic: Option<Icon>,
}

impl ResolvedModeIcons {
    pub fn get(&self, mode: &str) -> Option<&Icon> {
        self.by_mode.get(mode).or(self.generic.as_ref())
    }
}

pub struct SegmentDefinition {
    pub name: String,
    pub props: LayoutProps,
    build: SegmentBuilder,
}

impl SegmentDefinition {
    pub fn realize(&self, scope: &SegmentScope<'_>) -> SegmentBody {
        (self.build)(scope)
    }
}

impl fmt::Debug for SegmentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentDefinition")
            .field("name", &self.name)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// Append-only list of segment definitions in declaration order.
#[derive(Debug, Default)]
pub struct SegmentRegistry {
    definitions: Vec<SegmentDefinition>,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define<F>(&mut self, name: &str, props: LayoutProps, build: F)
    where
        F: Fn(&SegmentScope<'_>) -> SegmentBody + 'static,
    {
        tracing::debug!(segment = name, "deferred segment definition");
        self.definitions.push(SegmentDefinition {
            name: name.to_string(),
            props,
            build: Box::new(build),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentDefinition> {
        self.definitions.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.definitions.iter().map(|def| def.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.iter().any(|def| def.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.definitions.clear();
    }
}
