//! Mask - boolean inclusion buffer
//!
//! `true` marks a sample that may take part in a segmentation; `false`
//! excludes it permanently.

use crate::error::{Error, Result};
use crate::extent::Extent;

/// Planar or volumetric boolean mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    extent: Extent,
    data: Vec<bool>,
}

impl Mask {
    /// Create a planar mask with every pixel set to `fill`
    pub fn new(width: u32, height: u32, fill: bool) -> Result<Self> {
        Self::new_volume(width, height, 1, fill)
    }

    /// Create a volumetric mask with every voxel set to `fill`
    pub fn new_volume(width: u32, height: u32, depth: u32, fill: bool) -> Result<Self> {
        let extent = Extent::volume(width, height, depth)?;
        Ok(Self {
            extent,
            data: vec![fill; extent.len()],
        })
    }

    /// Create a mask from raw data (plane by plane, row-major)
    pub fn from_data(width: u32, height: u32, depth: u32, data: Vec<bool>) -> Result<Self> {
        let extent = Extent::volume(width, height, depth)?;
        if data.len() != extent.len() {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {} = {}",
                data.len(),
                extent,
                extent.len()
            )));
        }
        Ok(Self { extent, data })
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<bool> {
        self.get_voxel(x, y, 0)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, included: bool) -> Result<()> {
        self.set_voxel(x, y, 0, included)
    }

    pub fn get_voxel(&self, x: u32, y: u32, z: u32) -> Result<bool> {
        let idx = self.extent.checked_index(x, y, z)?;
        Ok(self.data[idx])
    }

    pub fn set_voxel(&mut self, x: u32, y: u32, z: u32, included: bool) -> Result<()> {
        let idx = self.extent.checked_index(x, y, z)?;
        self.data[idx] = included;
        Ok(())
    }

    /// Whether the sample at linear index `index` is included
    #[inline]
    pub fn is_included(&self, index: usize) -> bool {
        self.data[index]
    }

    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Number of included samples
    pub fn count_included(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}
