//! Rectangular regions and biome grid results.

use cobalt_registry::biome::BiomeId;
use thiserror::Error;

/// Errors from region construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// Width or height was not positive. A zero-area query is a caller
    /// bug, not a runtime condition.
    #[error("region dimensions must be positive, got {width}x{height}")]
    EmptyRegion {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
}

/// A rectangle of world cells: origin plus positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    x: i32,
    z: i32,
    width: i32,
    height: i32,
}

impl Region {
    /// Create a region, rejecting non-positive dimensions.
    pub const fn new(x: i32, z: i32, width: i32, height: i32) -> Result<Self, RegionError> {
        if width <= 0 || height <= 0 {
            return Err(RegionError::EmptyRegion { width, height });
        }
        Ok(Self {
            x,
            z,
            width,
            height,
        })
    }

    /// Origin x of the region.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Origin z of the region.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Width in cells; always positive.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells; always positive.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Exclusive end of the x range.
    pub(crate) const fn end_x(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive end of the z range.
    pub(crate) const fn end_z(&self) -> i32 {
        self.z + self.height
    }

    /// Grow the region by `border` cells on every side.
    pub(crate) const fn expand(&self, border: i32) -> Self {
        Self {
            x: self.x - border,
            z: self.z - border,
            width: self.width + border * 2,
            height: self.height + border * 2,
        }
    }

    /// Whether `other` lies fully inside this region.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.x <= other.x
            && self.z <= other.z
            && other.end_x() <= self.end_x()
            && other.end_z() <= self.end_z()
    }
}

/// A computed rectangle of biome ids, row-major over `(z, x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeGrid {
    region: Region,
    cells: Vec<BiomeId>,
}

impl BiomeGrid {
    /// Build a grid by evaluating `cell` at every world coordinate of the
    /// region, row by row.
    pub(crate) fn from_fn(region: Region, mut cell: impl FnMut(i32, i32) -> BiomeId) -> Self {
        let mut cells = Vec::with_capacity(region.width() as usize * region.height() as usize);
        for z in region.z()..region.end_z() {
            for x in region.x()..region.end_x() {
                cells.push(cell(x, z));
            }
        }
        Self { region, cells }
    }

    /// Build a grid holding the same biome in every cell.
    pub(crate) fn filled(region: Region, biome: BiomeId) -> Self {
        Self {
            region,
            cells: vec![biome; region.width() as usize * region.height() as usize],
        }
    }

    /// The rectangle this grid covers.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Biome at a world coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `(x, z)` lies outside the grid's region.
    #[must_use]
    pub fn get(&self, x: i32, z: i32) -> BiomeId {
        assert!(
            self.region.contains(Region {
                x,
                z,
                width: 1,
                height: 1
            }),
            "({x}, {z}) outside grid region {:?}",
            self.region
        );
        let col = (x - self.region.x()) as usize;
        let row = (z - self.region.z()) as usize;
        self.cells[row * self.region.width() as usize + col]
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[BiomeId] {
        &self.cells
    }

    /// Copy out a sub-rectangle.
    ///
    /// # Panics
    ///
    /// Panics if `sub` is not fully contained in this grid's region.
    #[must_use]
    pub fn view(&self, sub: Region) -> Self {
        assert!(
            self.region.contains(sub),
            "{sub:?} not contained in {:?}",
            self.region
        );
        Self::from_fn(sub, |x, z| self.get(x, z))
    }
}
