//! The host rendering engine boundary, plus a terminal implementation.

use crate::context::RenderContext;
use crate::layout::{LayoutEntry, LayoutProps};
use crate::segments::SegmentBody;
use crate::style::{FaceRef, StyledText};
use crate::themes::{FaceAttributes, FaceRegistry, Weight};
use anyhow::{bail, Result};
use colored::{ColoredString, Colorize};
use std::collections::HashMap;
use std::env;
use tracing::warn;

/// What the installer drives. A host owns segment composition and decides
/// when to redraw.
pub trait HostEngine {
    /// Name the status line the host should draw.
    fn set_entry_point(&mut self, line: &str);

    /// Register (or replace) a live segment.
    fn define_segment(&mut self, name: &str, body: SegmentBody, props: LayoutProps);

    /// Build `line` from the left and right layout lists.
    fn compile(&mut self, line: &str, left: &[LayoutEntry], right: &[LayoutEntry]) -> Result<()>;
}

/// One rendered segment ready for composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub segment: String,
    pub text: StyledText,
    pub props: LayoutProps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CompiledLine {
    left: Vec<LayoutEntry>,
    right: Vec<LayoutEntry>,
}

/// A host that draws to a terminal with ANSI colors.
#[derive(Default)]
pub struct ConsoleEngine {
    segments: HashMap<String, (SegmentBody, LayoutProps)>,
    registrations: Vec<String>,
    entry_point: Option<String>,
    lines: HashMap<String, CompiledLine>,
    width: Option<usize>,
}

impl ConsoleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Right-align the right-hand side within `width` columns.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn entry_point(&self) -> Option<&str> {
        self.entry_point.as_deref()
    }

    /// Every `define_segment` call since the last `set_entry_point`, in order.
    pub fn registrations(&self) -> &[String] {
        &self.registrations
    }

    /// Names of the live segments, sorted.
    pub fn segment_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.segments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn layout(&self, line: &str) -> Option<(&[LayoutEntry], &[LayoutEntry])> {
        self.lines
            .get(line)
            .map(|compiled| (compiled.left.as_slice(), compiled.right.as_slice()))
    }

    /// Run one live segment directly.
    pub fn render_segment(&self, name: &str, ctx: &RenderContext) -> Option<StyledText> {
        let (body, _) = self.segments.get(name)?;
        match body(ctx) {
            Ok(text) => text,
            Err(err) => {
                warn!(segment = name, "segment failed to render: {:#}", err);
                None
            }
        }
    }

    /// Render both sides of the entry-point line. Segments that fail or
    /// render nothing are left out.
    pub fn render_pieces(&self, ctx: &RenderContext) -> (Vec<Piece>, Vec<Piece>) {
        let Some(line) = self.entry_point.as_ref().and_then(|name| self.lines.get(name)) else {
            return (Vec::new(), Vec::new());
        };
        (self.render_side(&line.left, ctx), self.render_side(&line.right, ctx))
    }

    fn render_side(&self, entries: &[LayoutEntry], ctx: &RenderContext) -> Vec<Piece> {
        let mut pieces: Vec<Piece> = Vec::new();
        for entry in entries {
            let Some((_, defined)) = self.segments.get(&entry.segment) else {
                continue;
            };
            let Some(text) = self.render_segment(&entry.segment, ctx) else {
                continue;
            };
            let props = defined.union(entry.props);
            if props.skip_alternate && pieces.last().is_some_and(|prev| prev.text.text == text.text) {
                continue;
            }
            pieces.push(Piece {
                segment: entry.segment.clone(),
                text,
                props,
            });
        }
        pieces
    }

    /// The line without any color codes.
    pub fn render_plain(&self, ctx: &RenderContext) -> String {
        let (left, right) = self.render_pieces(ctx);
        let plain = |piece: &Piece| piece.text.text.clone();
        self.compose(join(&left, plain), join(&right, plain))
    }

    /// The line with faces drawn as ANSI colors.
    pub fn render(&self, ctx: &RenderContext, faces: &FaceRegistry) -> String {
        if !should_use_colors() {
            return self.render_plain(ctx);
        }

        let (left, right) = self.render_pieces(ctx);
        let painted = |piece: &Piece| paint(&piece.text, faces).to_string();
        let plain_width = |pieces: &[Piece]| join(pieces, |piece| piece.text.text.clone()).chars().count();
        let gap = self.gap(plain_width(&left), plain_width(&right));

        format!("{}{}{}", join(&left, painted), " ".repeat(gap), join(&right, painted))
    }

    fn compose(&self, left: String, right: String) -> String {
        let gap = self.gap(left.chars().count(), right.chars().count());
        format!("{}{}{}", left, " ".repeat(gap), right)
    }

    fn gap(&self, left: usize, right: usize) -> usize {
        if left == 0 || right == 0 {
            return 0;
        }
        match self.width {
            Some(width) => width.saturating_sub(left + right).max(1),
            None => 1,
        }
    }
}

impl HostEngine for ConsoleEngine {
    fn set_entry_point(&mut self, line: &str) {
        self.registrations.clear();
        self.entry_point = Some(line.to_string());
    }

    fn define_segment(&mut self, name: &str, body: SegmentBody, props: LayoutProps) {
        self.registrations.push(name.to_string());
        self.segments.insert(name.to_string(), (body, props));
    }

    fn compile(&mut self, line: &str, left: &[LayoutEntry], right: &[LayoutEntry]) -> Result<()> {
        if let Some(missing) = left
            .iter()
            .chain(right)
            .find(|entry| !self.segments.contains_key(&entry.segment))
        {
            bail!("cannot compile `{}`: segment `{}` is not defined", line, missing.segment);
        }

        self.lines.insert(
            line.to_string(),
            CompiledLine {
                left: left.to_vec(),
                right: right.to_vec(),
            },
        );
        Ok(())
    }
}

/// Join pieces with single spaces, honouring tight flags on either side.
fn join(pieces: &[Piece], text: impl Fn(&Piece) -> String) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 && !pieces[i - 1].props.tight_right && !piece.props.tight_left {
            out.push(' ');
        }
        out.push_str(&text(piece));
    }
    out
}

fn paint(text: &StyledText, faces: &FaceRegistry) -> ColoredString {
    let attributes = match &text.face {
        FaceRef::Named(id) => faces.get(id).cloned(),
        FaceRef::Anonymous(attributes) => Some(attributes.clone()),
    };
    apply_attributes(&text.text, attributes.as_ref())
}

fn apply_attributes(text: &str, attributes: Option<&FaceAttributes>) -> ColoredString {
    let mut styled = ColoredString::from(text);
    let Some(attributes) = attributes else {
        return styled;
    };

    if let Some(color) = attributes.foreground {
        let (r, g, b) = color.to_rgb8();
        styled = styled.truecolor(r, g, b);
    }
    match attributes.weight {
        Some(Weight::Bold) => styled.bold(),
        Some(Weight::Light) => styled.dimmed(),
        _ => styled,
    }
}

fn should_use_colors() -> bool {
    env::var("NO_COLOR").is_err() && env::var("TERM").map_or(false, |term| !term.is_empty() && term != "dumb")
}
