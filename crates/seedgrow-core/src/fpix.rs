//! FPix - Floating-point image
//!
//! `FPix` is the scalar input of the planar region growing engine: one `f32`
//! intensity per pixel.
//!
//! # Examples
//!
//! ```
//! use seedgrow_core::FPix;
//!
//! let mut fpix = FPix::new(100, 100).unwrap();
//! fpix.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(fpix.get_pixel(10, 20).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::extent::Extent;

/// Floating-point image
///
/// Samples are stored row by row without padding; (x, y) lives at
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    extent: Extent,
    data: Vec<f32>,
}

impl FPix {
    /// Create an image of zeros
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedgrow_core::FPix;
    ///
    /// let fpix = FPix::new(640, 480).unwrap();
    /// assert_eq!(fpix.dimensions(), (640, 480));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create an image with every pixel set to `value`
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        let extent = Extent::planar(width, height)?;
        Ok(FPix {
            extent,
            data: vec![value; extent.len()],
        })
    }

    /// Wrap a row-major buffer of `width * height` values
    ///
    /// # Errors
    ///
    /// Fails on a zero dimension or when `data` has the wrong length.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let extent = Extent::planar(width, height)?;
        if data.len() != extent.len() {
            return Err(Error::InvalidParameter(format!(
                "{} values given for a {} image",
                data.len(),
                extent
            )));
        }
        Ok(FPix { extent, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.extent.width, self.extent.height)
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        let idx = self.extent.checked_index(x, y, 0)?;
        Ok(self.data[idx])
    }

    /// Overwrite the value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        let idx = self.extent.checked_index(x, y, 0)?;
        self.data[idx] = value;
        Ok(())
    }

    /// All samples in row-major order
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
