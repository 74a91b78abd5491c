//! Primitive mesh kinds and the draw-call collaborator.

use anyhow::Result;

/// The primitive mesh shapes a scene is composed of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plane,
    Sphere,
    Cylinder,
    Cone,
    TaperedCylinder,
    Box,
    Prism,
}

impl ShapeKind {
    /// Every primitive kind, in a stable order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Plane,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::TaperedCylinder,
        ShapeKind::Box,
        ShapeKind::Prism,
    ];
}

/// Mesh preloading and draw-call issuance, implemented by the geometry
/// backend.
///
/// `draw` takes nothing beyond the shape kind: a draw call consumes only the
/// shader state bound before it.
pub trait GeometryRenderer {
    /// Load vertex data for the given shapes once, ahead of any draw. One
    /// loaded mesh serves every draw of that shape.
    fn preload(&mut self, shapes: &[ShapeKind]) -> Result<()>;

    /// Rasterize one preloaded primitive with the currently bound state.
    fn draw(&mut self, shape: ShapeKind);
}
