//! Volumetric region growing
//!
//! Segments an [`FVolume`] with scalar region means. Regions expand through
//! the full 26-voxel neighborhood unless 6-way connectivity is configured.

use super::engine::{RegionGrowing, SampleSource, SrgOptions, SrgOutput, execute};
use super::progress::ProgressListeners;
use super::region::ScalarRegion;
use crate::connectivity::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use seedgrow_core::{Extent, FVolume, LabelImage, Mask};

impl SampleSource for FVolume {
    type Region = ScalarRegion;

    const DEFAULT_CONNECTIVITY: ConnectivityType = ConnectivityType::TwentySixWay;

    fn extent(&self) -> Extent {
        FVolume::extent(self)
    }

    fn new_region(&self) -> ScalarRegion {
        ScalarRegion::new()
    }

    #[inline]
    fn admit(&self, region: &mut ScalarRegion, index: usize) {
        region.admit(self.data()[index]);
    }

    #[inline]
    fn difference(&self, region: &ScalarRegion, index: usize) -> f64 {
        region.difference(self.data()[index])
    }
}

/// Region growing engine for scalar volumes
pub type VolumeRegionGrowing = RegionGrowing<FVolume>;

impl RegionGrowing<FVolume> {
    /// Set seeds from per-region voxel lists
    ///
    /// `regions[i]` lists the seed voxels of region `i + 1`.
    pub fn set_seed_points(&mut self, regions: &[Vec<(u32, u32, u32)>]) -> RegionResult<()> {
        let image = self.image().ok_or(RegionError::MissingInput("image"))?;
        let seeds =
            LabelImage::from_voxel_sets(image.width(), image.height(), image.depth(), regions)?;
        self.set_seeds(seeds);
        Ok(())
    }
}

/// Segment a scalar volume in one call
pub fn volume_region_growing(
    volume: &FVolume,
    seeds: &LabelImage,
    mask: Option<&Mask>,
    options: &SrgOptions,
) -> RegionResult<SrgOutput> {
    let mut state = Default::default();
    execute(
        volume,
        seeds,
        mask,
        options,
        &mut ProgressListeners::new(),
        &mut state,
    )
}
