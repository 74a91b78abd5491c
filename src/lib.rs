//! stage-ngin
//!
//! A small immediate-mode 3D scene staging library. It owns the lookup
//! tables and per-draw state that a static primitive-mesh scene depends on:
//! tagged texture slots, tagged lighting-material presets, deterministic
//! model matrix composition and the uniform pushes every draw call consumes.
//! The graphics API itself stays behind three collaborator traits (the
//! uniform transport, the texture device and the geometry backend), so the
//! scene layer can be driven by an OpenGL program wrapper, a different
//! backend or a test recorder alike.
//!
//! High-level modules
//! - `shader`: the named-uniform transport trait and the uniform name contract
//! - `transform`: model matrix composition from scale/rotation/position
//! - `render`: explicit per-draw render state and the uniform binder
//! - `resources`: tagged texture and material registries
//! - `geometry`: primitive mesh kinds and the draw-call collaborator
//! - `scene`: the orchestrator sequencing setup and per-draw binding
//!

pub mod geometry;
pub mod render;
pub mod resources;
pub mod scene;
pub mod shader;
pub mod transform;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
