//! Multi-band region growing
//!
//! Segments a [`MultiBandImage`] (e.g. RGB). Each region keeps a per-band
//! mean and candidates are scored by Euclidean distance across all bands.
//! 8-way connectivity is used unless configured otherwise.

use super::engine::{RegionGrowing, SampleSource, SrgOptions, SrgOutput, execute};
use super::progress::ProgressListeners;
use super::region::VectorRegion;
use crate::connectivity::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use seedgrow_core::{Extent, LabelImage, Mask, MultiBandImage};

impl SampleSource for MultiBandImage {
    type Region = VectorRegion;

    const DEFAULT_CONNECTIVITY: ConnectivityType = ConnectivityType::EightWay;

    fn extent(&self) -> Extent {
        MultiBandImage::extent(self)
    }

    fn new_region(&self) -> VectorRegion {
        VectorRegion::new(self.bands())
    }

    #[inline]
    fn admit(&self, region: &mut VectorRegion, index: usize) {
        region.admit(self.sample(index));
    }

    #[inline]
    fn difference(&self, region: &VectorRegion, index: usize) -> f64 {
        region.difference(self.sample(index))
    }
}

/// Region growing engine for multi-band images
pub type VectorRegionGrowing = RegionGrowing<MultiBandImage>;

impl RegionGrowing<MultiBandImage> {
    /// Set seeds from per-region point lists; see
    /// [`SeededRegionGrowing::set_seed_points`](super::SeededRegionGrowing)
    pub fn set_seed_points(&mut self, regions: &[Vec<(u32, u32)>]) -> RegionResult<()> {
        let image = self.image().ok_or(RegionError::MissingInput("image"))?;
        let seeds = LabelImage::from_point_sets(image.width(), image.height(), regions)?;
        self.set_seeds(seeds);
        Ok(())
    }
}

/// Segment a multi-band image in one call
pub fn vector_region_growing(
    image: &MultiBandImage,
    seeds: &LabelImage,
    mask: Option<&Mask>,
    options: &SrgOptions,
) -> RegionResult<SrgOutput> {
    let mut state = Default::default();
    execute(
        image,
        seeds,
        mask,
        options,
        &mut ProgressListeners::new(),
        &mut state,
    )
}
