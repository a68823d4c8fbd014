//! Pixel neighborhoods
//!
//! [`ConnectivityType`] names the neighborhood used when a region expands
//! its frontier. [`Neighborhood`] turns it into clipped neighbor indices for
//! a concrete buffer extent.

use seedgrow_core::Extent;

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
    /// 6-way volumetric connectivity (face neighbors)
    SixWay,
    /// 26-way volumetric connectivity (full 3x3x3 cube)
    TwentySixWay,
}

impl ConnectivityType {
    /// True for the in-plane neighborhoods
    pub fn is_planar(self) -> bool {
        matches!(self, Self::FourWay | Self::EightWay)
    }

    /// Number of neighbors of an interior sample
    pub fn neighbor_count(self) -> usize {
        match self {
            Self::FourWay => 4,
            Self::EightWay => 8,
            Self::SixWay => 6,
            Self::TwentySixWay => 26,
        }
    }

    fn includes(self, dx: i32, dy: i32, dz: i32) -> bool {
        if dx == 0 && dy == 0 && dz == 0 {
            return false;
        }
        let manhattan = dx.abs() + dy.abs() + dz.abs();
        match self {
            Self::FourWay => dz == 0 && manhattan == 1,
            Self::EightWay => dz == 0,
            Self::SixWay => manhattan == 1,
            Self::TwentySixWay => true,
        }
    }

    /// Neighbor offsets `(dx, dy, dz)` in row-major order
    pub fn offsets(self) -> Vec<(i32, i32, i32)> {
        let mut offsets = Vec::with_capacity(self.neighbor_count());
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if self.includes(dx, dy, dz) {
                        offsets.push((dx, dy, dz));
                    }
                }
            }
        }
        offsets
    }
}

/// Neighbor enumeration for one buffer extent
#[derive(Debug, Clone)]
pub struct Neighborhood {
    extent: Extent,
    offsets: Vec<(i32, i32, i32)>,
}

impl Neighborhood {
    pub fn new(extent: Extent, connectivity: ConnectivityType) -> Self {
        Self {
            extent,
            offsets: connectivity.offsets(),
        }
    }

    /// Replace the contents of `out` with the in-bounds neighbors of `index`
    pub fn neighbors_into(&self, index: usize, out: &mut Vec<usize>) {
        out.clear();
        let (x, y, z) = self.extent.coordinates(index);
        for &(dx, dy, dz) in &self.offsets {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            let nz = z as i64 + dz as i64;
            if nx < 0
                || ny < 0
                || nz < 0
                || nx >= self.extent.width as i64
                || ny >= self.extent.height as i64
                || nz >= self.extent.depth as i64
            {
                continue;
            }
            out.push(self.extent.index(nx as u32, ny as u32, nz as u32));
        }
    }
}
