//! Planar scalar region growing
//!
//! Segments an [`FPix`] with scalar region means and absolute-difference
//! scoring. 4-way connectivity is used unless configured otherwise.

use super::engine::{RegionGrowing, SampleSource, SrgOptions, SrgOutput, execute};
use super::progress::ProgressListeners;
use super::region::ScalarRegion;
use crate::connectivity::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use seedgrow_core::{Extent, FPix, LabelImage, Mask};

impl SampleSource for FPix {
    type Region = ScalarRegion;

    const DEFAULT_CONNECTIVITY: ConnectivityType = ConnectivityType::FourWay;

    fn extent(&self) -> Extent {
        FPix::extent(self)
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

/// Region growing engine for planar scalar images
pub type SeededRegionGrowing = RegionGrowing<FPix>;

impl RegionGrowing<FPix> {
    /// Set seeds from per-region point lists
    ///
    /// `regions[i]` lists the seed pixels of region `i + 1`. The seed image
    /// takes the size of the current image.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::MissingInput` if no image was set, or a core
    /// error if a point lies outside the image.
    pub fn set_seed_points(&mut self, regions: &[Vec<(u32, u32)>]) -> RegionResult<()> {
        let (width, height) = self
            .image()
            .ok_or(RegionError::MissingInput("image"))?
            .dimensions();
        let seeds = LabelImage::from_point_sets(width, height, regions)?;
        self.set_seeds(seeds);
        Ok(())
    }
}

/// Segment a planar scalar image in one call
///
/// # Examples
///
/// ```
/// use seedgrow_core::{FPix, LabelImage};
/// use seedgrow_region::{SrgOptions, seeded_region_growing};
///
/// let mut image = FPix::new(4, 1).unwrap();
/// image.set_pixel(2, 0, 100.0).unwrap();
/// image.set_pixel(3, 0, 100.0).unwrap();
/// let seeds = LabelImage::from_point_sets(4, 1, &[vec![(0, 0)], vec![(3, 0)]]).unwrap();
///
/// let out = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();
/// assert_eq!(out.labels.data(), &[1, 1, 2, 2]);
/// ```
pub fn seeded_region_growing(
    image: &FPix,
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
