/**
 * This module contains the tagged lookup tables populated once during scene
 * setup and read for the rest of the rendering lifetime: texture slots and
 * lighting-material presets.
 */
pub mod material;
pub mod texture;
