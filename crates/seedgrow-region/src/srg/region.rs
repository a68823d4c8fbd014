//! Per-region running statistics
//!
//! A region keeps its pixel count and an online arithmetic mean. Admitting a
//! value updates `mean = (mean * count + value) / (count + 1)`; the mean is
//! never recomputed from scratch.

use super::distance::{scalar_difference, vector_difference};

/// Read access shared by scalar and vector region statistics
pub trait RunningMean {
    /// Number of admitted pixels
    fn pixel_count(&self) -> u64;

    /// Current mean, one entry per band
    fn mean_values(&self) -> Vec<f64>;
}

/// Running statistics of a scalar-valued region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarRegion {
    count: u64,
    mean: f64,
}

impl ScalarRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `value` into the running mean
    pub fn admit(&mut self, value: f32) {
        let n = self.count as f64;
        self.mean = (self.mean * n + value as f64) / (n + 1.0);
        self.count += 1;
    }

    /// Dissimilarity of `value` to the current mean
    #[inline]
    pub fn difference(&self, value: f32) -> f64 {
        scalar_difference(self.mean, value)
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl RunningMean for ScalarRegion {
    fn pixel_count(&self) -> u64 {
        self.count
    }

    fn mean_values(&self) -> Vec<f64> {
        vec![self.mean]
    }
}

/// Running statistics of a vector-valued region
#[derive(Debug, Clone, PartialEq)]
pub struct VectorRegion {
    count: u64,
    mean: Vec<f64>,
}

impl VectorRegion {
    /// Create an empty region for pixels with `bands` values
    pub fn new(bands: usize) -> Self {
        Self {
            count: 0,
            mean: vec![0.0; bands],
        }
    }

    /// Fold `value` into the per-band running mean
    pub fn admit(&mut self, value: &[f32]) {
        debug_assert_eq!(value.len(), self.mean.len());
        let n = self.count as f64;
        for (m, &v) in self.mean.iter_mut().zip(value) {
            *m = (*m * n + v as f64) / (n + 1.0);
        }
        self.count += 1;
    }

    /// Euclidean distance of `value` to the current mean
    #[inline]
    pub fn difference(&self, value: &[f32]) -> f64 {
        vector_difference(&self.mean, value)
    }

    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }
}

impl RunningMean for VectorRegion {
    fn pixel_count(&self) -> u64 {
        self.count
    }

    fn mean_values(&self) -> Vec<f64> {
        self.mean.clone()
    }
}

/// Summary of one region after a run
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    /// Region label (1..=N)
    pub label: u32,
    /// Number of pixels assigned to the region, seeds included
    pub pixel_count: u64,
    /// Final running mean, one entry per band
    pub mean: Vec<f64>,
}

impl RegionStats {
    pub(crate) fn summarize<R: RunningMean>(label: u32, region: &R) -> Self {
        Self {
            label,
            pixel_count: region.pixel_count(),
            mean: region.mean_values(),
        }
    }
}
