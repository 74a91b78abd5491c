//! Scene orchestration.
//!
//! [`Scene`] sequences the one-time resource setup (textures, materials,
//! lights), mesh preloading and the per-draw state binding every draw call
//! depends on. Setup runs through a three-phase lifecycle; draw sequencing
//! is only allowed once everything a draw reads has been loaded and bound.
//!
//! Per draw unit the orchestrator issues exactly one transform push, one
//! color-or-texture push, optionally one material push and one UV-scale
//! write, then hands off to the geometry collaborator. A failing step
//! (an unresolved tag, an undecodable asset) degrades the object's
//! appearance instead of aborting the scene.

use std::path::PathBuf;

use anyhow::{Result, bail, ensure};
use cgmath::{Vector2, Vector3, Vector4};

use crate::{
    geometry::{GeometryRenderer, ShapeKind},
    render::{Paint, RenderState, UniformBinder},
    resources::{
        material::{Material, MaterialRegistry},
        texture::{MAX_TEXTURE_SLOTS, TextureDevice, TextureRegistry},
    },
    shader::{self, UniformSink, light_uniform},
    transform::Transform,
};

/// Highest number of light sources the shader contract supports.
pub const MAX_LIGHT_SOURCES: usize = 4;

/// One point/directional light slot, written once during setup and not
/// re-derived per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

/// Scene-wide lighting configuration.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub global_ambient: Vector3<f32>,
    pub sources: Vec<LightSource>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            global_ambient: Vector3::new(0.0, 0.0, 0.0),
            sources: Vec::new(),
        }
    }
}

/// An on-disk image asset and the tag it registers under.
#[derive(Clone, Debug)]
pub struct TextureAsset {
    pub path: PathBuf,
    pub tag: String,
}

impl TextureAsset {
    pub fn new(path: impl Into<PathBuf>, tag: &str) -> Self {
        Self {
            path: path.into(),
            tag: tag.to_string(),
        }
    }
}

/// How one draw unit is painted. Color and texture are mutually exclusive
/// per draw.
#[derive(Clone, Debug)]
pub enum PaintRequest {
    /// Flat RGBA color, texture sampling off.
    Color(Vector4<f32>),
    /// The texture registered under this tag.
    Texture(String),
}

/// One drawable unit: a primitive shape plus the state bound before drawing
/// it.
#[derive(Clone, Debug)]
pub struct DrawUnit {
    pub shape: ShapeKind,
    pub transform: Transform,
    pub paint: PaintRequest,
    pub material_tag: Option<String>,
    /// `None` draws with the default (1,1) texture coordinate scale.
    pub uv_scale: Option<Vector2<f32>>,
}

/// Scene lifecycle phases. Draw sequencing only runs in `Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    ResourcesLoaded,
    Ready,
}

/// Sequences resource setup and per-draw state binding.
///
/// Generic over the three external collaborators: the uniform transport `S`,
/// the geometry backend `G` and the texture device `D`. Single-threaded and
/// synchronous; the scene is the sole writer of shader state between draws.
pub struct Scene<S: UniformSink, G: GeometryRenderer, D: TextureDevice> {
    textures: TextureRegistry,
    materials: MaterialRegistry,
    binder: UniformBinder<S>,
    geometry: G,
    device: D,
    phase: Phase,
}

impl<S: UniformSink, G: GeometryRenderer, D: TextureDevice> Scene<S, G, D> {
    pub fn new(sink: S, geometry: G, device: D) -> Self {
        if let Err(e) = env_logger::try_init() {
            log::debug!("logger already initialized: {e}");
        }
        Self {
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            binder: UniformBinder::new(sink),
            geometry,
            device,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn sink(&self) -> &S {
        self.binder.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.binder.sink_mut()
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// One-time resource setup: load and bind textures, define materials
    /// and write the light uniforms. Moves the scene to `ResourcesLoaded`.
    ///
    /// An asset that fails to decode is logged and skipped; the scene keeps
    /// rendering without it. Requesting more textures than there are
    /// hardware slots is a configuration error and fails before anything is
    /// uploaded.
    pub fn prepare(
        &mut self,
        assets: &[TextureAsset],
        materials: Vec<Material>,
        lighting: &Lighting,
    ) -> Result<()> {
        if self.phase != Phase::Uninitialized {
            bail!("scene resources are already loaded");
        }
        ensure!(
            assets.len() <= MAX_TEXTURE_SLOTS,
            "{} texture assets requested but only {MAX_TEXTURE_SLOTS} slots exist",
            assets.len()
        );

        for asset in assets {
            if let Err(e) = self.textures.load(&mut self.device, &asset.path, &asset.tag) {
                log::error!("skipping texture '{}': {e:#}", asset.tag);
            }
        }
        self.textures.bind_all(&mut self.device);

        for material in materials {
            self.materials.define(material);
        }

        self.setup_lights(lighting);

        self.phase = Phase::ResourcesLoaded;
        Ok(())
    }

    fn setup_lights(&mut self, lighting: &Lighting) {
        let sink = self.binder.sink_mut();
        sink.set_bool(shader::USE_LIGHTING, true);
        sink.set_vec3(shader::GLOBAL_AMBIENT_COLOR, lighting.global_ambient);
        if lighting.sources.len() > MAX_LIGHT_SOURCES {
            log::warn!(
                "{} light sources configured, dropping all after the first {MAX_LIGHT_SOURCES}",
                lighting.sources.len()
            );
        }
        for (i, light) in lighting.sources.iter().take(MAX_LIGHT_SOURCES).enumerate() {
            sink.set_vec3(&light_uniform(i, "position"), light.position);
            sink.set_vec3(&light_uniform(i, "ambientColor"), light.ambient_color);
            sink.set_vec3(&light_uniform(i, "diffuseColor"), light.diffuse_color);
            sink.set_vec3(&light_uniform(i, "specularColor"), light.specular_color);
            sink.set_float(&light_uniform(i, "focalStrength"), light.focal_strength);
            sink.set_float(
                &light_uniform(i, "specularIntensity"),
                light.specular_intensity,
            );
        }
    }

    /// Load the vertex data for every shape the scene draws. Moves the
    /// scene to `Ready`.
    pub fn preload_meshes(&mut self, shapes: &[ShapeKind]) -> Result<()> {
        if self.phase != Phase::ResourcesLoaded {
            bail!("meshes can only be preloaded once resources are loaded");
        }
        self.geometry.preload(shapes)?;
        self.phase = Phase::Ready;
        Ok(())
    }

    /// Bind the full state for one draw unit and issue its draw call.
    ///
    /// Unresolved texture or material tags degrade to an untextured or
    /// previously-lit appearance; only calling outside `Ready` is an error.
    pub fn draw(&mut self, unit: &DrawUnit) -> Result<()> {
        if self.phase != Phase::Ready {
            bail!("scene is not ready to draw (phase {:?})", self.phase);
        }

        let paint = match &unit.paint {
            PaintRequest::Color(color) => Paint::Color(*color),
            PaintRequest::Texture(tag) => {
                let slot = self.textures.find_slot(tag);
                if slot.is_none() {
                    log::warn!("no texture registered under tag '{tag}'");
                }
                Paint::Texture(slot)
            }
        };

        let material = match unit.material_tag.as_deref() {
            Some(tag) => {
                let material = self.materials.find(tag);
                if material.is_none() {
                    log::debug!("no material defined under tag '{tag}', keeping the previous one");
                }
                material
            }
            None => None,
        };

        let state = RenderState {
            model: unit.transform.to_matrix(),
            paint,
            material,
            uv_scale: unit.uv_scale.unwrap_or_else(|| Vector2::new(1.0, 1.0)),
        };
        self.binder.bind(&state);
        self.geometry.draw(unit.shape);
        Ok(())
    }

    /// Release every GPU texture. Safe even if nothing was loaded.
    pub fn destroy_textures(&mut self) {
        self.textures.destroy(&mut self.device);
    }

    /// Hand the collaborators back, consuming the scene.
    pub fn into_parts(self) -> (S, G, D) {
        (self.binder.into_sink(), self.geometry, self.device)
    }
}
