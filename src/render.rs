//! Per-draw render state and uniform binding.
//!
//! The state a draw call consumes is an explicit [`RenderState`] value:
//! built fresh for every draw, fully written to the [`UniformSink`] by
//! [`UniformBinder::bind`], and only then read by the draw collaborator.
//! Nothing here is ambient or global; single-writer-then-single-reader per
//! draw is preserved by construction.

use cgmath::{Matrix4, SquareMatrix, Vector2, Vector4};

use crate::{
    resources::{
        material::{Material, MaterialRegistry},
        texture::TextureRegistry,
    },
    shader::{self, UniformSink},
};

/// How the next draw is painted: a flat color or a bound texture slot.
///
/// `Texture(None)` is the resolved form of an unregistered tag; it still
/// enables texture mode and binds the invalid unit `-1`, which the shader
/// layer tolerates. The object comes out visually wrong, the scene keeps
/// rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Color(Vector4<f32>),
    Texture(Option<u32>),
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Color(Vector4::new(1.0, 1.0, 1.0, 1.0))
    }
}

/// Everything one draw call reads: reset per draw, written before read.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState<'a> {
    pub model: Matrix4<f32>,
    pub paint: Paint,
    /// `None` leaves the previously pushed material fields untouched.
    pub material: Option<&'a Material>,
    pub uv_scale: Vector2<f32>,
}

impl Default for RenderState<'_> {
    fn default() -> Self {
        Self {
            model: Matrix4::identity(),
            paint: Paint::default(),
            material: None,
            uv_scale: Vector2::new(1.0, 1.0),
        }
    }
}

/// Writes render state to the shader's uniform sink.
pub struct UniformBinder<S: UniformSink> {
    sink: S,
}

impl<S: UniformSink> UniformBinder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Write the model matrix for the next draw.
    pub fn push_transform(&mut self, model: Matrix4<f32>) {
        self.sink.set_mat4(shader::MODEL, model);
    }

    /// Paint the next draw with a flat color, disabling texture sampling.
    pub fn push_color(&mut self, color: Vector4<f32>) {
        self.sink.set_bool(shader::USE_TEXTURE, false);
        self.sink.set_vec4(shader::OBJECT_COLOR, color);
    }

    /// Paint the next draw with the texture registered under `tag`.
    ///
    /// An unregistered tag binds the invalid unit `-1` rather than failing.
    pub fn push_texture(&mut self, textures: &TextureRegistry, tag: &str) {
        let slot = textures.find_slot(tag);
        if slot.is_none() {
            log::warn!("no texture registered under tag '{tag}'");
        }
        self.push_texture_slot(slot);
    }

    /// Like [`push_texture`](Self::push_texture) with the slot already
    /// resolved.
    pub fn push_texture_slot(&mut self, slot: Option<u32>) {
        self.sink.set_bool(shader::USE_TEXTURE, true);
        self.sink
            .set_sampler2d(shader::OBJECT_TEXTURE, slot.map_or(-1, |s| s as i32));
    }

    /// Write the texture coordinate scale for the next draw.
    pub fn push_uv_scale(&mut self, u: f32, v: f32) {
        self.sink.set_vec2(shader::UV_SCALE, Vector2::new(u, v));
    }

    /// Write all lighting fields of the material registered under `tag`.
    ///
    /// A miss is a no-op: the previously pushed material stays bound.
    pub fn push_material(&mut self, materials: &MaterialRegistry, tag: &str) {
        match materials.find(tag) {
            Some(material) => self.push_material_fields(material),
            None => log::debug!("no material defined under tag '{tag}', keeping the previous one"),
        }
    }

    /// Write the five material fields directly.
    pub fn push_material_fields(&mut self, material: &Material) {
        self.sink
            .set_vec3(shader::material::AMBIENT_COLOR, material.ambient_color);
        self.sink
            .set_float(shader::material::AMBIENT_STRENGTH, material.ambient_strength);
        self.sink
            .set_vec3(shader::material::DIFFUSE_COLOR, material.diffuse_color);
        self.sink
            .set_vec3(shader::material::SPECULAR_COLOR, material.specular_color);
        self.sink
            .set_float(shader::material::SHININESS, material.shininess);
    }

    /// Flush a full per-draw state in a fixed order: transform, paint,
    /// UV scale, then material (if any).
    pub fn bind(&mut self, state: &RenderState<'_>) {
        self.push_transform(state.model);
        match state.paint {
            Paint::Color(color) => self.push_color(color),
            Paint::Texture(slot) => self.push_texture_slot(slot),
        }
        self.push_uv_scale(state.uv_scale.x, state.uv_scale.y);
        if let Some(material) = state.material {
            self.push_material_fields(material);
        }
    }
}
