//! The stock segments and the styles and icons they look up.

use super::{segment_fn, SegmentBody, SegmentRegistry, SegmentScope};
use crate::layout::LayoutProps;
use crate::style::{FaceRef, StyledText};
use crate::themes::FaceAttributes;

pub const BUFFER_MODIFIED: &str = "buffer-modified";
pub const BUFFER_NAME: &str = "buffer-name";
pub const BRANCH_ICON: &str = "branch-icon";
pub const BRANCH_NAME: &str = "branch-name";
pub const PROJECT_NAME: &str = "project-name";
pub const MODE_ICON: &str = "mode-icon";

pub const STYLE_PLAIN: &str = "plain";
pub const STYLE_WARM: &str = "warm";
pub const STYLE_COOL: &str = "cool";

pub const ICON_UNMODIFIED: &str = "buffer-unmodified";
pub const ICON_MODIFIED: &str = "buffer-modified";
pub const ICON_LOCKED: &str = "buffer-locked";
pub const ICON_BRANCH: &str = "branch";
pub const ICON_DIFF: &str = "branch-diff";

/// Relative height of the major-mode glyph.
pub const MODE_ICON_HEIGHT: f64 = 0.9;

pub fn register(registry: &mut SegmentRegistry) {
    registry.define(BUFFER_MODIFIED, LayoutProps::default(), buffer_modified);
    registry.define(BUFFER_NAME, LayoutProps::default(), buffer_name);
    registry.define(BRANCH_ICON, LayoutProps::default(), branch_icon);
    registry.define(BRANCH_NAME, LayoutProps::default(), branch_name);
    registry.define(PROJECT_NAME, LayoutProps::default(), project_name);
    registry.define(MODE_ICON, LayoutProps::default(), mode_icon);
}

fn buffer_modified(scope: &SegmentScope<'_>) -> SegmentBody {
    let unmodified = scope.icon(ICON_UNMODIFIED);
    let modified = scope.icon(ICON_MODIFIED);
    let locked = scope.icon(ICON_LOCKED);

    segment_fn(move |ctx| {
        let icon = match ctx.buffer.modified.as_str() {
            "-" => unmodified.as_ref(),
            "*" => modified.as_ref(),
            "%" => locked.as_ref(),
            _ => None,
        };
        Ok(icon.map(|icon| icon.render(ctx.active)))
    })
}

fn buffer_name(scope: &SegmentScope<'_>) -> SegmentBody {
    let plain = scope.style(STYLE_PLAIN);
    let warm = scope.style(STYLE_WARM);

    segment_fn(move |ctx| {
        let style = match ctx.buffer.modified.as_str() {
            "-" => plain.as_ref(),
            "*" | "%" => warm.as_ref(),
            _ => None,
        };
        Ok(style.map(|style| style.render(&ctx.buffer.name, ctx.active)))
    })
}

fn branch_icon(scope: &SegmentScope<'_>) -> SegmentBody {
    let branch = scope.icon(ICON_BRANCH);
    let diff = scope.icon(ICON_DIFF);

    segment_fn(move |ctx| {
        let Some(vcs) = &ctx.vcs else {
            return Ok(None);
        };
        let icon = if vcs.dirty { diff.as_ref() } else { branch.as_ref() };
        Ok(icon.map(|icon| icon.render(ctx.active)))
    })
}

fn branch_name(scope: &SegmentScope<'_>) -> SegmentBody {
    let clean = scope.style(STYLE_COOL);
    let dirty = scope.style(STYLE_WARM);

    segment_fn(move |ctx| {
        let Some(vcs) = &ctx.vcs else {
            return Ok(None);
        };
        let label = vcs.branch_label();
        if label.is_empty() {
            return Ok(None);
        }
        let style = if vcs.dirty { dirty.as_ref() } else { clean.as_ref() };
        Ok(style.map(|style| style.render(&label, ctx.active)))
    })
}

fn project_name(scope: &SegmentScope<'_>) -> SegmentBody {
    let plain = scope.style(STYLE_PLAIN);

    segment_fn(move |ctx| {
        Ok(ctx
            .project
            .as_deref()
            .zip(plain.as_ref())
            .map(|(project, style)| style.render(project, ctx.active)))
    })
}

fn mode_icon(scope: &SegmentScope<'_>) -> SegmentBody {
    let icons = scope.resolved_mode_icons();
    let color = scope.plain_color;

    segment_fn(move |ctx| {
        Ok(icons.get(&ctx.buffer.major_mode).map(|icon| {
            let face = FaceAttributes::foreground(color)
                .with_height(MODE_ICON_HEIGHT)
                .with_family(icon.family.clone());
            StyledText::new(icon.glyph.clone(), FaceRef::Anonymous(face))
        }))
    })
}
