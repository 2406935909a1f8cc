use serde::{Deserialize, Serialize};

/// Per-segment placement flags understood by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutProps {
    /// Drop the segment when it renders the same text as its left neighbour.
    pub skip_alternate: bool,
    /// No space before the segment.
    pub tight_left: bool,
    /// No space after the segment.
    pub tight_right: bool,
}

impl LayoutProps {
    /// Flags set on either side win.
    #[must_use]
    pub fn union(self, other: LayoutProps) -> Self {
        Self {
            skip_alternate: self.skip_alternate || other.skip_alternate,
            tight_left: self.tight_left || other.tight_left,
            tight_right: self.tight_right || other.tight_right,
        }
    }
}

/// A segment reference in a left or right layout list.
///
/// In JSON an entry is either a bare segment name or
/// `{"segment": "...", "tightRight": true, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRepr")]
pub struct LayoutEntry {
    pub segment: String,
    #[serde(flatten)]
    pub props: LayoutProps,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryRepr {
    Name(String),
    Full {
        segment: String,
        #[serde(flatten)]
        props: LayoutProps,
    },
}

impl From<EntryRepr> for LayoutEntry {
    fn from(repr: EntryRepr) -> Self {
        match repr {
            EntryRepr::Name(segment) => LayoutEntry::new(segment),
            EntryRepr::Full { segment, props } => LayoutEntry { segment, props },
        }
    }
}

impl LayoutEntry {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            props: LayoutProps::default(),
        }
    }

    #[must_use]
    pub fn skip_alternate(mut self) -> Self {
        self.props.skip_alternate = true;
        self
    }

    #[must_use]
    pub fn tight_left(mut self) -> Self {
        self.props.tight_left = true;
        self
    }

    #[must_use]
    pub fn tight_right(mut self) -> Self {
        self.props.tight_right = true;
        self
    }
}

pub fn default_left() -> Vec<LayoutEntry> {
    vec![
        LayoutEntry::new("buffer-modified").tight_right(),
        LayoutEntry::new("buffer-name"),
        LayoutEntry::new("project-name").skip_alternate(),
        LayoutEntry::new("branch-icon").tight_right(),
        LayoutEntry::new("branch-name"),
    ]
}

pub fn default_right() -> Vec<LayoutEntry> {
    vec![LayoutEntry::new("mode-icon")]
}
