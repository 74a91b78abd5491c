//! Lighting-material presets.
//!
//! Materials live in an ordered list scanned front to back, so the first
//! entry defined for a tag always wins. Duplicate tags are legal; the later
//! entry is kept but never found, and a warning is logged at definition time.

use cgmath::Vector3;

/// A named bundle of lighting values applied to the shader per draw.
///
/// Presets are built with the `with_*` methods on top of zeroed fields, so
/// a material may legitimately specify only some of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    /// Create a preset with all lighting fields zeroed.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ambient_color: Vector3::new(0.0, 0.0, 0.0),
            ambient_strength: 0.0,
            diffuse_color: Vector3::new(0.0, 0.0, 0.0),
            specular_color: Vector3::new(0.0, 0.0, 0.0),
            shininess: 0.0,
        }
    }

    pub fn with_ambient(mut self, color: Vector3<f32>, strength: f32) -> Self {
        self.ambient_color = color;
        self.ambient_strength = strength;
        self
    }

    pub fn with_diffuse(mut self, color: Vector3<f32>) -> Self {
        self.diffuse_color = color;
        self
    }

    pub fn with_specular(mut self, color: Vector3<f32>) -> Self {
        self.specular_color = color;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

/// Ordered list of material presets keyed by tag.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    entries: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preset. Tags are not unique: a duplicate is kept but stays
    /// shadowed by the earlier entry under first-match lookup.
    pub fn define(&mut self, material: Material) {
        if self.find(&material.tag).is_some() {
            log::warn!(
                "material tag '{}' is already defined; the new entry will never be found",
                material.tag
            );
        }
        self.entries.push(material);
    }

    /// First preset defined under `tag`, in definition order.
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.entries.iter().find(|m| m.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
