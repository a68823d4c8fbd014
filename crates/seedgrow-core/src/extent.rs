//! Extent - buffer dimensions shared by every container
//!
//! Planar buffers have `depth == 1`. Samples are stored row-major with no
//! padding; the sample at (x, y, z) lives at `(z * height + y) * width + x`.

use crate::error::{Error, Result};
use std::fmt;

/// Width, height and depth of an image, volume, label or mask buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent {
    /// Create a planar extent (`depth == 1`)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn planar(width: u32, height: u32) -> Result<Self> {
        Self::volume(width, height, 1)
    }

    /// Create a volumetric extent
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any dimension is 0.
    pub fn volume(width: u32, height: u32, depth: u32) -> Result<Self> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(Error::InvalidDimension {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Number of samples covered by this extent
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Always false for a validated extent
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the extent has a single plane
    #[inline]
    pub fn is_planar(&self) -> bool {
        self.depth == 1
    }

    /// Check whether (x, y, z) lies inside the extent
    #[inline]
    pub fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    /// Linear index of (x, y, z), without bounds checking
    #[inline]
    pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
        (z as usize * self.height as usize + y as usize) * self.width as usize + x as usize
    }

    /// Linear index of (x, y, z)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the coordinate is outside.
    #[inline]
    pub fn checked_index(&self, x: u32, y: u32, z: u32) -> Result<usize> {
        if !self.contains(x, y, z) {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y, z),
                len: self.len(),
            });
        }
        Ok(self.index(x, y, z))
    }

    /// Inverse of [`Extent::index`]
    #[inline]
    pub fn coordinates(&self, index: usize) -> (u32, u32, u32) {
        let w = self.width as usize;
        let plane = w * self.height as usize;
        let z = index / plane;
        let rem = index % plane;
        ((rem % w) as u32, (rem / w) as u32, z as u32)
    }

    /// Fail with `DimensionMismatch` unless `other` equals `self`
    pub fn ensure_matches(&self, other: Extent) -> Result<()> {
        if *self != other {
            return Err(Error::DimensionMismatch {
                expected: *self,
                actual: other,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth == 1 {
            write!(f, "{}x{}", self.width, self.height)
        } else {
            write!(f, "{}x{}x{}", self.width, self.height, self.depth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        let e = Extent::volume(4, 3, 2).unwrap();
        assert_eq!(e.len(), 24);
        assert_eq!(e.index(1, 2, 1), 21);
        assert_eq!(e.coordinates(21), (1, 2, 1));
        assert_eq!(e.coordinates(0), (0, 0, 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Extent::planar(0, 5).is_err());
        assert!(Extent::volume(5, 5, 0).is_err());
    }

    #[test]
    fn test_ensure_matches() {
        let a = Extent::planar(4, 4).unwrap();
        let b = Extent::planar(4, 5).unwrap();
        assert!(a.ensure_matches(a).is_ok());
        assert!(matches!(
            a.ensure_matches(b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Extent::planar(3, 2).unwrap().to_string(), "3x2");
        assert_eq!(Extent::volume(3, 2, 5).unwrap().to_string(), "3x2x5");
    }
}
