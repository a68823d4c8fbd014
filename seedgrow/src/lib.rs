//! Seedgrow - Seeded region growing image segmentation for Rust
//!
//! # Overview
//!
//! Regions grow outward from labeled seed pixels. At every step the engine
//! admits the frontier pixel closest to the mean of the region that first
//! reached it, until no candidate remains. Supported inputs:
//!
//! - Planar scalar images ([`FPix`])
//! - Planar multi-band images such as RGB ([`MultiBandImage`])
//! - Scalar volumes ([`FVolume`])
//!
//! An optional [`Mask`] restricts which pixels may be labeled, and the
//! engines can record animation snapshots and report progress.
//!
//! # Example
//!
//! ```
//! use seedgrow::{FPix, LabelImage};
//! use seedgrow::region::{SrgOptions, seeded_region_growing};
//!
//! let image = FPix::from_data(5, 1, vec![0.0, 1.0, 2.0, 90.0, 91.0]).unwrap();
//! let seeds = LabelImage::from_point_sets(5, 1, &[vec![(0, 0)], vec![(4, 0)]]).unwrap();
//!
//! let out = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();
//! assert_eq!(out.labels.data(), &[1, 1, 1, 2, 2]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use seedgrow_core::*;

// Re-export the segmentation crate as a module to avoid name conflicts
pub use seedgrow_region as region;
