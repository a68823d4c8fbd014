//! FVolume - Floating-point volume
//!
//! A stack of equally sized `f32` planes addressed by (x, y, z). This is the
//! scalar input of the volumetric region growing engine.

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::fpix::FPix;

/// Floating-point 3D volume
///
/// Voxels are stored plane by plane, each plane row-major with no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct FVolume {
    extent: Extent,
    data: Vec<f32>,
}

impl FVolume {
    /// Create a new volume with all voxels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any dimension is 0.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self> {
        Self::new_with_value(width, height, depth, 0.0)
    }

    /// Create a new volume with all voxels set to `value`
    pub fn new_with_value(width: u32, height: u32, depth: u32, value: f32) -> Result<Self> {
        let extent = Extent::volume(width, height, depth)?;
        Ok(FVolume {
            extent,
            data: vec![value; extent.len()],
        })
    }

    /// Create a volume from raw voxel data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, depth: u32, data: Vec<f32>) -> Result<Self> {
        let extent = Extent::volume(width, height, depth)?;
        if data.len() != extent.len() {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {} = {}",
                data.len(),
                extent,
                extent.len()
            )));
        }
        Ok(FVolume { extent, data })
    }

    /// Stack equally sized planes into a volume
    ///
    /// Plane `i` of the input becomes slice `z = i`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for an empty slice list and
    /// `Error::DimensionMismatch` if the planes differ in size.
    pub fn from_slices(slices: &[FPix]) -> Result<Self> {
        let first = slices
            .first()
            .ok_or_else(|| Error::InvalidParameter("no slices given".to_string()))?;
        let plane = first.extent();
        let extent = Extent::volume(plane.width, plane.height, slices.len() as u32)?;

        let mut data = Vec::with_capacity(extent.len());
        for slice in slices {
            plane.ensure_matches(slice.extent())?;
            data.extend_from_slice(slice.data());
        }
        Ok(FVolume { extent, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.extent.depth
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Get the voxel value at (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn get_voxel(&self, x: u32, y: u32, z: u32) -> Result<f32> {
        let idx = self.extent.checked_index(x, y, z)?;
        Ok(self.data[idx])
    }

    /// Set the voxel value at (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn set_voxel(&mut self, x: u32, y: u32, z: u32, value: f32) -> Result<()> {
        let idx = self.extent.checked_index(x, y, z)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get raw access to the voxel data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Copy plane `z` out as an [`FPix`]
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `z >= depth`.
    pub fn slice(&self, z: u32) -> Result<FPix> {
        if z >= self.extent.depth {
            return Err(Error::IndexOutOfBounds {
                index: z as usize,
                len: self.extent.depth as usize,
            });
        }
        let plane = self.extent.width as usize * self.extent.height as usize;
        let start = z as usize * plane;
        FPix::from_data(
            self.extent.width,
            self.extent.height,
            self.data[start..start + plane].to_vec(),
        )
    }
}
