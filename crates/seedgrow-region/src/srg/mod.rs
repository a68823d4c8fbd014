//! Seeded region growing
//!
//! Regions start from labeled seed pixels and absorb, one pixel at a time,
//! the frontier pixel that is globally closest to the mean of the region
//! that discovered it. Candidates are scored once, when first discovered,
//! and a pixel is only ever queued by the first region that reaches it.
//! Equal scores are resolved in discovery order, so results are fully
//! deterministic for fixed inputs.
//!
//! Three variants share one growth loop:
//!
//! - [`SeededRegionGrowing`] - planar scalar images ([`FPix`](seedgrow_core::FPix))
//! - [`VectorRegionGrowing`] - planar multi-band images
//! - [`VolumeRegionGrowing`] - scalar volumes

pub mod distance;
pub mod engine;
pub mod planar;
pub mod progress;
pub mod queue;
pub mod region;
pub mod vector;
pub mod volume;

pub use distance::{scalar_difference, vector_difference};
pub use engine::{EngineState, RegionGrowing, SampleSource, SrgOptions, SrgOutput};
pub use planar::{SeededRegionGrowing, seeded_region_growing};
pub use progress::{ListenerId, ProgressCallback, ProgressListeners};
pub use queue::{Candidate, CandidateQueue};
pub use region::{RegionStats, RunningMean, ScalarRegion, VectorRegion};
pub use vector::{VectorRegionGrowing, vector_region_growing};
pub use volume::{VolumeRegionGrowing, volume_region_growing};
