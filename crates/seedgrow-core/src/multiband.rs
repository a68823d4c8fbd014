//! MultiBandImage - vector-valued 2D image
//!
//! Each pixel carries a fixed number of `f32` bands (e.g. R, G, B). Bands are
//! interleaved: the values of pixel (x, y) occupy
//! `data[(y * width + x) * bands ..][.. bands]`.

use crate::color;
use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::fpix::FPix;

/// Interleaved multi-band floating-point image
#[derive(Debug, Clone, PartialEq)]
pub struct MultiBandImage {
    extent: Extent,
    bands: usize,
    data: Vec<f32>,
}

impl MultiBandImage {
    /// Create an image with every band of every pixel set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a zero dimension and
    /// `Error::InvalidParameter` if `bands == 0`.
    pub fn new(width: u32, height: u32, bands: usize) -> Result<Self> {
        let extent = Extent::planar(width, height)?;
        if bands == 0 {
            return Err(Error::InvalidParameter(
                "multi-band image needs at least one band".to_string(),
            ));
        }
        Ok(Self {
            extent,
            bands,
            data: vec![0.0; extent.len() * bands],
        })
    }

    /// Create an image from interleaved data
    pub fn from_data(width: u32, height: u32, bands: usize, data: Vec<f32>) -> Result<Self> {
        let mut image = Self::new(width, height, bands)?;
        if data.len() != image.data.len() {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} bands = {}",
                data.len(),
                width,
                height,
                bands,
                image.data.len()
            )));
        }
        image.data = data;
        Ok(image)
    }

    /// Interleave equally sized scalar planes, one per band
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `planes` is empty and
    /// `Error::DimensionMismatch` if the planes differ in size.
    pub fn from_bands(planes: &[FPix]) -> Result<Self> {
        let first = planes
            .first()
            .ok_or_else(|| Error::InvalidParameter("no bands given".to_string()))?;
        let extent = first.extent();
        for plane in planes {
            extent.ensure_matches(plane.extent())?;
        }

        let mut image = Self::new(extent.width, extent.height, planes.len())?;
        for (b, plane) in planes.iter().enumerate() {
            for (i, &v) in plane.data().iter().enumerate() {
                image.data[i * image.bands + b] = v;
            }
        }
        Ok(image)
    }

    /// Build a 3-band (R, G, B) image from 32-bit `0xRRGGBBAA` pixels
    ///
    /// Alpha is ignored.
    pub fn from_rgb(width: u32, height: u32, pixels: &[u32]) -> Result<Self> {
        let mut image = Self::new(width, height, 3)?;
        if pixels.len() != image.extent.len() {
            return Err(Error::InvalidParameter(format!(
                "pixel count {} doesn't match {}x{}",
                pixels.len(),
                width,
                height
            )));
        }
        for (dst, &pixel) in image.data.chunks_exact_mut(3).zip(pixels) {
            let (r, g, b) = color::extract_rgb(pixel);
            dst[0] = r as f32;
            dst[1] = g as f32;
            dst[2] = b as f32;
        }
        Ok(image)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// Number of bands per pixel
    #[inline]
    pub fn bands(&self) -> usize {
        self.bands
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Band values of the pixel at linear index `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the image.
    #[inline]
    pub fn sample(&self, index: usize) -> &[f32] {
        let start = index * self.bands;
        &self.data[start..start + self.bands]
    }

    /// Band values of the pixel at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Result<&[f32]> {
        let idx = self.extent.checked_index(x, y, 0)?;
        Ok(self.sample(idx))
    }

    /// Overwrite the band values of the pixel at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` for a bad coordinate and
    /// `Error::InvalidParameter` if `values.len() != bands`.
    pub fn set_pixel(&mut self, x: u32, y: u32, values: &[f32]) -> Result<()> {
        let idx = self.extent.checked_index(x, y, 0)?;
        if values.len() != self.bands {
            return Err(Error::InvalidParameter(format!(
                "expected {} band values, got {}",
                self.bands,
                values.len()
            )));
        }
        let start = idx * self.bands;
        self.data[start..start + self.bands].copy_from_slice(values);
        Ok(())
    }

    /// Get raw access to the interleaved data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
