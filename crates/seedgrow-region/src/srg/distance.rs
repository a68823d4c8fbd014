//! Pixel-to-region dissimilarity
//!
//! Both measures are non-negative and zero when the pixel equals the mean.

/// Absolute difference between a scalar region mean and a pixel value
#[inline]
pub fn scalar_difference(mean: f64, value: f32) -> f64 {
    (mean - value as f64).abs()
}

/// Euclidean distance between a per-band region mean and a pixel vector
///
/// # Panics
///
/// Debug builds panic if the band counts differ.
#[inline]
pub fn vector_difference(mean: &[f64], value: &[f32]) -> f64 {
    debug_assert_eq!(mean.len(), value.len());
    mean.iter()
        .zip(value)
        .map(|(&m, &v)| {
            let d = m - v as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
