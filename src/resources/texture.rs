//! Tagged texture registry.
//!
//! Decodes image assets with the `image` crate, hands the pixel data to the
//! [`TextureDevice`] collaborator for upload, and maps human-readable tags
//! to texture slots. Slots are handed out in load order starting at 0 and
//! only become meaningful to the shader after [`TextureRegistry::bind_all`].

use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use image::GenericImageView;

/// Number of simultaneously bound texture units the registry may fill.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Opaque GPU texture handle issued by a [`TextureDevice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Pixel layout of decoded image data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Three 8-bit channels, opaque.
    Rgb8,
    /// Four 8-bit channels, supports transparency.
    Rgba8,
}

impl PixelFormat {
    pub fn channels(self) -> u32 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Decoded raster data ready for upload, already flipped vertically to the
/// bottom-left-origin asset convention.
#[derive(Debug)]
pub struct TextureImage<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Debug label, usually the source path.
    pub label: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Linear,
    Nearest,
}

/// How the device should sample an uploaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerSpec {
    pub wrap: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub generate_mipmaps: bool,
}

impl Default for SamplerSpec {
    /// Repeat wrapping, linear min/mag filtering and mipmap generation: the
    /// settings every scene texture is uploaded with.
    fn default() -> Self {
        Self {
            wrap: WrapMode::Repeat,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            generate_mipmaps: true,
        }
    }
}

/// GPU-side texture operations, implemented by the graphics backend.
pub trait TextureDevice {
    /// Upload pixel data and return an opaque handle for it.
    fn upload(
        &mut self,
        image: &TextureImage<'_>,
        sampler: &SamplerSpec,
    ) -> Result<TextureHandle>;
    /// Bind an uploaded texture to a texture unit.
    fn bind(&mut self, slot: u32, handle: TextureHandle);
    /// Free an uploaded texture.
    fn release(&mut self, handle: TextureHandle);
}

#[derive(Clone, Debug)]
struct TextureEntry {
    tag: String,
    slot: u32,
    handle: TextureHandle,
}

/// Tag → slot lookup table for every texture the scene uses.
///
/// Populated once during setup, immutable afterwards except for teardown.
/// Lookups are first-match in load order, so a duplicate tag resolves to
/// the earliest-registered entry.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the image at `path`, upload it through `device` and register
    /// it under `tag`. Returns the assigned slot.
    ///
    /// Accepts 3-channel (opaque) and 4-channel (alpha) images only; other
    /// channel counts and undecodable files fail without registering
    /// anything. Images are flipped vertically on load (assets keep their
    /// origin at the bottom left). Loading past [`MAX_TEXTURE_SLOTS`] is a
    /// configuration error, not a recoverable asset failure.
    pub fn load(
        &mut self,
        device: &mut dyn TextureDevice,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<u32> {
        let path = path.as_ref();
        ensure!(
            self.entries.len() < MAX_TEXTURE_SLOTS,
            "cannot load {}: all {MAX_TEXTURE_SLOTS} texture slots are in use",
            path.display()
        );

        let img = image::open(path)
            .with_context(|| format!("could not load image {}", path.display()))?;
        let channels = img.color().channel_count();
        let img = img.flipv();
        let (width, height) = img.dimensions();
        let label = path.to_string_lossy();

        let (format, pixels) = match channels {
            3 => (PixelFormat::Rgb8, img.into_rgb8().into_raw()),
            4 => (PixelFormat::Rgba8, img.into_rgba8().into_raw()),
            n => bail!(
                "image {} has {n} channels, only 3 or 4 are supported",
                path.display()
            ),
        };

        let handle = device.upload(
            &TextureImage {
                pixels: &pixels,
                width,
                height,
                format,
                label: &label,
            },
            &SamplerSpec::default(),
        )?;

        let slot = self.entries.len() as u32;
        log::info!(
            "loaded image {} ({}x{}, {} channels) into texture slot {}",
            path.display(),
            width,
            height,
            channels,
            slot
        );
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            slot,
            handle,
        });
        Ok(slot)
    }

    /// Bind every registered texture to its assigned slot in one pass.
    ///
    /// Must run once after all loads complete and before any draw that
    /// references a slot; slot indices mean nothing to the shader until then.
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for entry in &self.entries {
            device.bind(entry.slot, entry.handle);
        }
    }

    /// Slot registered for `tag`, first match in load order.
    pub fn find_slot(&self, tag: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.slot)
    }

    /// GPU handle registered for `tag`, first match in load order.
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every uploaded texture. Safe to call on an empty registry.
    pub fn destroy(&mut self, device: &mut dyn TextureDevice) {
        for entry in self.entries.drain(..) {
            device.release(entry.handle);
        }
    }
}
