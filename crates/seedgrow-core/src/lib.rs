//! seedgrow-core - Basic data structures for region growing
//!
//! This crate provides the buffers consumed and produced by the
//! segmentation engines in `seedgrow-region`:
//!
//! - [`FPix`] - Planar floating-point image
//! - [`FVolume`] - Volumetric floating-point image
//! - [`MultiBandImage`] - Planar image with several bands per pixel
//! - [`LabelImage`] - Region labels (seeds in, segmentation out)
//! - [`Mask`] - Boolean inclusion mask
//! - [`Extent`] - Dimensions shared by all of the above

pub mod error;
pub mod extent;
pub mod fpix;
pub mod label;
pub mod mask;
pub mod multiband;
pub mod volume;

pub use error::{Error, Result};
pub use extent::Extent;
pub use fpix::FPix;
pub use label::{LabelImage, UNASSIGNED};
pub use mask::Mask;
pub use multiband::MultiBandImage;
pub use volume::FVolume;

/// Packing of 32-bit `0xRRGGBBAA` pixels, the input of
/// [`MultiBandImage::from_rgb`]
pub mod color {
    /// Pack an opaque RGB pixel
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        u32::from_be_bytes([r, g, b, 0xff])
    }

    /// Split a pixel into (red, green, blue); alpha is dropped
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        let [r, g, b, _] = pixel.to_be_bytes();
        (r, g, b)
    }

}
