use crate::themes::color::{Color, ColorTransform};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Symbolic name of a registered face, e.g. `warm-active`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(String);

impl FaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn active(name: &str) -> Self {
        Self(format!("{}-active", name))
    }

    pub fn inactive(name: &str) -> Self {
        Self(format!("{}-inactive", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Light,
    Normal,
    Bold,
}

/// Display attributes carried by a face. Unset fields inherit from
/// whatever the host draws underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceAttributes {
    pub foreground: Option<Color>,
    pub height: Option<f64>,
    pub family: Option<String>,
    pub weight: Option<Weight>,
}

impl FaceAttributes {
    pub fn foreground(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Fill every unset field of `self` from `extra`.
    #[must_use]
    pub fn merged_with(mut self, extra: Option<&FaceAttributes>) -> Self {
        if let Some(extra) = extra {
            self.foreground = self.foreground.or(extra.foreground);
            self.height = self.height.or(extra.height);
            self.family = self.family.or_else(|| extra.family.clone());
            self.weight = self.weight.or(extra.weight);
        }
        self
    }
}

/// The active/inactive faces of one styled element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacePair {
    pub active: FaceId,
    pub inactive: FaceId,
}

impl FacePair {
    pub fn select(&self, active: bool) -> &FaceId {
        if active {
            &self.active
        } else {
            &self.inactive
        }
    }
}

/// Table of named faces. Registering an id again overwrites it.
#[derive(Debug, Clone, Default)]
pub struct FaceRegistry {
    faces: HashMap<FaceId, FaceAttributes>,
    transform: ColorTransform,
}

impl FaceRegistry {
    pub fn new(transform: ColorTransform) -> Self {
        Self {
            faces: HashMap::new(),
            transform,
        }
    }

    pub fn transform(&self) -> &ColorTransform {
        &self.transform
    }

    pub fn make_face(&mut self, id: impl Into<FaceId>, attributes: FaceAttributes) -> FaceId {
        let id = id.into();
        tracing::debug!(face = %id, "registering face");
        self.faces.insert(id.clone(), attributes);
        id
    }

    pub fn make_active_face(&mut self, name: &str, color: Color, extra: Option<&FaceAttributes>) -> FaceId {
        let attributes = FaceAttributes::foreground(color).merged_with(extra);
        self.make_face(FaceId::active(name), attributes)
    }

    pub fn make_inactive_face(
        &mut self,
        name: &str,
        color: Color,
        darkness: Option<f64>,
        desaturation: Option<f64>,
        extra: Option<&FaceAttributes>,
    ) -> FaceId {
        let dimmed = self.transform.adjust(color, darkness, desaturation);
        let attributes = FaceAttributes::foreground(dimmed).merged_with(extra);
        self.make_face(FaceId::inactive(name), attributes)
    }

    pub fn make_pair(
        &mut self,
        name: &str,
        color: Color,
        darkness: Option<f64>,
        desaturation: Option<f64>,
        extra: Option<&FaceAttributes>,
    ) -> FacePair {
        FacePair {
            active: self.make_active_face(name, color, extra),
            inactive: self.make_inactive_face(name, color, darkness, desaturation, extra),
        }
    }

    pub fn get(&self, id: &FaceId) -> Option<&FaceAttributes> {
        self.faces.get(id)
    }

    pub fn contains(&self, id: &FaceId) -> bool {
        self.faces.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn clear(&mut self) {
        self.faces.clear();
    }
}
