#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use stage_ngin::{
    geometry::{GeometryRenderer, ShapeKind},
    resources::texture::{SamplerSpec, TextureDevice, TextureHandle, TextureImage},
    shader::UniformSink,
};

/// A uniform write captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum Uniform {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat4(Matrix4<f32>),
    Sampler2d(i32),
}

/// Records every named uniform write in order.
#[derive(Default)]
pub struct RecordingSink {
    pub writes: Vec<(String, Uniform)>,
}

impl RecordingSink {
    /// Most recent value written under `name`.
    pub fn last(&self, name: &str) -> Option<&Uniform> {
        self.writes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// How many times `name` was written.
    pub fn count(&self, name: &str) -> usize {
        self.writes.iter().filter(|(n, _)| n == name).count()
    }
}

impl UniformSink for RecordingSink {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.writes.push((name.to_string(), Uniform::Bool(value)));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.writes.push((name.to_string(), Uniform::Int(value)));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.writes.push((name.to_string(), Uniform::Float(value)));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.writes.push((name.to_string(), Uniform::Vec2(value)));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.writes.push((name.to_string(), Uniform::Vec3(value)));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.writes.push((name.to_string(), Uniform::Vec4(value)));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.writes.push((name.to_string(), Uniform::Mat4(value)));
    }

    fn set_sampler2d(&mut self, name: &str, slot: i32) {
        self.writes.push((name.to_string(), Uniform::Sampler2d(slot)));
    }
}

/// One upload seen by [`RecordingDevice`].
pub struct UploadRecord {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub bytes: usize,
    pub leading_pixel: Vec<u8>,
    pub sampler: SamplerSpec,
    pub handle: TextureHandle,
}

/// Hands out handles and records every upload, bind and release.
#[derive(Default)]
pub struct RecordingDevice {
    next_handle: u64,
    pub uploads: Vec<UploadRecord>,
    pub binds: Vec<(u32, TextureHandle)>,
    pub released: Vec<TextureHandle>,
    pub fail_next_upload: bool,
}

impl TextureDevice for RecordingDevice {
    fn upload(
        &mut self,
        image: &TextureImage<'_>,
        sampler: &SamplerSpec,
    ) -> anyhow::Result<TextureHandle> {
        if self.fail_next_upload {
            self.fail_next_upload = false;
            anyhow::bail!("simulated upload failure");
        }
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        let channels = image.format.channels();
        self.uploads.push(UploadRecord {
            label: image.label.to_string(),
            width: image.width,
            height: image.height,
            channels,
            bytes: image.pixels.len(),
            leading_pixel: image.pixels[..channels as usize].to_vec(),
            sampler: *sampler,
            handle,
        });
        Ok(handle)
    }

    fn bind(&mut self, slot: u32, handle: TextureHandle) {
        self.binds.push((slot, handle));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}

/// Records preload and draw calls.
#[derive(Default)]
pub struct RecordingGeometry {
    pub preloaded: Vec<ShapeKind>,
    pub drawn: Vec<ShapeKind>,
}

impl GeometryRenderer for RecordingGeometry {
    fn preload(&mut self, shapes: &[ShapeKind]) -> anyhow::Result<()> {
        self.preloaded.extend_from_slice(shapes);
        Ok(())
    }

    fn draw(&mut self, shape: ShapeKind) {
        self.drawn.push(shape);
    }
}

static FIXTURE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A unique temp path for one image fixture, so parallel tests never write
/// the same file.
fn fixture_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("stage-ngin-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("failed to create fixture dir");
    let id = FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed);
    dir.join(format!("{id}-{name}"))
}

/// Write a solid 4x4 RGB (3-channel) PNG and return its path.
pub fn write_rgb_png(name: &str) -> PathBuf {
    let path = fixture_path(name);
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 60, 20]));
    img.save(&path).expect("failed to write RGB fixture");
    path
}

/// Write a solid 4x4 RGBA (4-channel) PNG and return its path.
pub fn write_rgba_png(name: &str) -> PathBuf {
    let path = fixture_path(name);
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([20, 60, 200, 128]));
    img.save(&path).expect("failed to write RGBA fixture");
    path
}

/// Write a 4x4 grayscale+alpha (2-channel) PNG and return its path.
pub fn write_gray_alpha_png(name: &str) -> PathBuf {
    let path = fixture_path(name);
    let img = image::GrayAlphaImage::from_pixel(4, 4, image::LumaA([128, 255]));
    img.save(&path).expect("failed to write grayscale-alpha fixture");
    path
}

/// Write a 1x2 RGB PNG with a red top row and a blue bottom row.
pub fn write_two_row_rgb_png(name: &str) -> PathBuf {
    let path = fixture_path(name);
    let mut img = image::RgbImage::new(1, 2);
    img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
    img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
    img.save(&path).expect("failed to write two-row fixture");
    path
}

/// Write a file that is not an image at all.
pub fn write_garbage(name: &str) -> PathBuf {
    let path = fixture_path(name);
    std::fs::write(&path, b"not an image at all").expect("failed to write garbage fixture");
    path
}
