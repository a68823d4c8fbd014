//! seedgrow-region - Seeded region growing segmentation
//!
//! This crate provides:
//!
//! - **Connectivity** - 4/8-way planar and 6/26-way volumetric neighborhoods
//! - **Seeded region growing** - priority-driven multi-region segmentation
//!   of scalar images, multi-band images and volumes, with optional masking
//!   and animation snapshots
//!
//! # Examples
//!
//! ```
//! use seedgrow_core::{FPix, LabelImage};
//! use seedgrow_region::SeededRegionGrowing;
//!
//! let mut image = FPix::new(8, 8).unwrap();
//! for y in 0..8 {
//!     for x in 4..8 {
//!         image.set_pixel(x, y, 200.0).unwrap();
//!     }
//! }
//!
//! let mut srg = SeededRegionGrowing::new();
//! srg.set_image(image);
//! let left: Vec<(u32, u32)> = (0..8).map(|y| (0, y)).collect();
//! let right: Vec<(u32, u32)> = (0..8).map(|y| (7, y)).collect();
//! srg.set_seed_points(&[left, right]).unwrap();
//! srg.run().unwrap();
//!
//! let labels = srg.region_markers().unwrap();
//! assert_eq!(labels.get_pixel(3, 7).unwrap(), 1);
//! assert_eq!(labels.get_pixel(4, 0).unwrap(), 2);
//! ```

pub mod connectivity;
pub mod error;
pub mod srg;

// Re-export core types
pub use seedgrow_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use connectivity::{ConnectivityType, Neighborhood};

pub use srg::{
    Candidate, CandidateQueue, EngineState, ListenerId, ProgressCallback, ProgressListeners,
    RegionGrowing, RegionStats, RunningMean, SampleSource, ScalarRegion, SeededRegionGrowing,
    SrgOptions, SrgOutput, VectorRegion, VectorRegionGrowing, VolumeRegionGrowing,
    scalar_difference, seeded_region_growing, vector_difference, vector_region_growing,
    volume_region_growing,
};
