//! LabelImage - region label buffer
//!
//! A planar or volumetric buffer of `u32` labels. Label 0 means
//! "unassigned"; labels 1..=N identify regions. The same type carries seed
//! markers into a segmentation and the final assignment out of it.

use crate::error::{Error, Result};
use crate::extent::Extent;
use std::collections::BTreeSet;

/// Label value for pixels that belong to no region
pub const UNASSIGNED: u32 = 0;

/// Planar or volumetric label buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    extent: Extent,
    data: Vec<u32>,
}

impl LabelImage {
    /// Create a planar label image with every pixel unassigned
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_extent(Extent::planar(width, height)?)
    }

    /// Create a volumetric label image with every voxel unassigned
    pub fn new_volume(width: u32, height: u32, depth: u32) -> Result<Self> {
        Self::with_extent(Extent::volume(width, height, depth)?)
    }

    /// Create an all-unassigned label buffer covering `extent`
    pub fn with_extent(extent: Extent) -> Result<Self> {
        let extent = Extent::volume(extent.width, extent.height, extent.depth)?;
        Ok(Self {
            extent,
            data: vec![UNASSIGNED; extent.len()],
        })
    }

    /// Create a label buffer from raw data (plane by plane, row-major)
    pub fn from_data(width: u32, height: u32, depth: u32, data: Vec<u32>) -> Result<Self> {
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

    /// Build a planar seed image from per-region point lists
    ///
    /// Points in `regions[i]` are marked with label `i + 1`. A point listed
    /// by several regions keeps the label of the last one.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if a point lies outside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedgrow_core::LabelImage;
    ///
    /// let seeds = LabelImage::from_point_sets(4, 4, &[vec![(0, 0)], vec![(3, 3)]]).unwrap();
    /// assert_eq!(seeds.get_pixel(0, 0).unwrap(), 1);
    /// assert_eq!(seeds.get_pixel(3, 3).unwrap(), 2);
    /// ```
    pub fn from_point_sets(width: u32, height: u32, regions: &[Vec<(u32, u32)>]) -> Result<Self> {
        let mut labels = Self::new(width, height)?;
        for (i, points) in regions.iter().enumerate() {
            let label = region_label(i)?;
            for &(x, y) in points {
                labels.set_pixel(x, y, label)?;
            }
        }
        Ok(labels)
    }

    /// Build a volumetric seed image from per-region voxel lists
    ///
    /// Voxels in `regions[i]` are marked with label `i + 1`.
    pub fn from_voxel_sets(
        width: u32,
        height: u32,
        depth: u32,
        regions: &[Vec<(u32, u32, u32)>],
    ) -> Result<Self> {
        let mut labels = Self::new_volume(width, height, depth)?;
        for (i, voxels) in regions.iter().enumerate() {
            let label = region_label(i)?;
            for &(x, y, z) in voxels {
                labels.set_voxel(x, y, z, label)?;
            }
        }
        Ok(labels)
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

    /// Label at (x, y) of the first plane
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u32> {
        self.get_voxel(x, y, 0)
    }

    /// Set the label at (x, y) of the first plane
    pub fn set_pixel(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        self.set_voxel(x, y, 0, label)
    }

    /// Label at (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn get_voxel(&self, x: u32, y: u32, z: u32) -> Result<u32> {
        let idx = self.extent.checked_index(x, y, z)?;
        Ok(self.data[idx])
    }

    /// Set the label at (x, y, z)
    pub fn set_voxel(&mut self, x: u32, y: u32, z: u32, label: u32) -> Result<()> {
        let idx = self.extent.checked_index(x, y, z)?;
        self.data[idx] = label;
        Ok(())
    }

    /// Get raw access to the labels
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable access to the labels
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Sorted distinct nonzero labels present in the buffer
    pub fn labels(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self
            .data
            .iter()
            .copied()
            .filter(|&l| l != UNASSIGNED)
            .collect();
        set.into_iter().collect()
    }

    /// Number of samples carrying `label`
    pub fn count_label(&self, label: u32) -> usize {
        self.data.iter().filter(|&&l| l == label).count()
    }

    /// Number of samples still unassigned
    pub fn count_unassigned(&self) -> usize {
        self.count_label(UNASSIGNED)
    }
}

fn region_label(index: usize) -> Result<u32> {
    u32::try_from(index + 1)
        .map_err(|_| Error::InvalidParameter(format!("too many regions: {}", index + 1)))
}
