//! Named-uniform transport towards the shader program.
//!
//! The scene layer never talks to a graphics API directly; it writes values
//! into a [`UniformSink`] by uniform name. The names below are a fixed
//! contract shared with the shader sources and must be reproduced verbatim.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Uniform name for the model matrix.
pub const MODEL: &str = "model";
/// Uniform name for the flat object color (RGBA).
pub const OBJECT_COLOR: &str = "objectColor";
/// Uniform name for the sampler bound to the object's texture unit.
pub const OBJECT_TEXTURE: &str = "objectTexture";
/// Uniform name toggling texture sampling for the next draw.
pub const USE_TEXTURE: &str = "bUseTexture";
/// Uniform name toggling the lighting model.
pub const USE_LIGHTING: &str = "bUseLighting";
/// Uniform name for the texture coordinate scale.
pub const UV_SCALE: &str = "UVscale";
/// Uniform name for the scene-wide ambient color.
pub const GLOBAL_AMBIENT_COLOR: &str = "globalAmbientColor";

pub mod material {
    //! Field names of the `material` uniform block.

    pub const AMBIENT_COLOR: &str = "material.ambientColor";
    pub const AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const SPECULAR_COLOR: &str = "material.specularColor";
    pub const SHININESS: &str = "material.shininess";
}

/// Build the indexed uniform name for a light source field, e.g.
/// `lightSources[2].diffuseColor`.
pub fn light_uniform(index: usize, field: &str) -> String {
    format!("lightSources[{index}].{field}")
}

/// A `setValue(name, value)`-style sink for shader uniforms.
///
/// Implemented by the shader transport. Writes take effect for the next draw
/// call; the sink side is the single reader of the bound state and is
/// consumed synchronously before the next mutation.
pub trait UniformSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    /// Bind a sampler uniform to a texture slot. `-1` means "no unit".
    fn set_sampler2d(&mut self, name: &str, slot: i32);
}
