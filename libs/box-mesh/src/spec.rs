//! # Box Parameters
//!
//! The two inputs of the generator: an axis-aligned size and a per-axis
//! subdivision count.

use config::constants::{DEFAULT_SIZE, DEFAULT_SUBDIVISION};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

const AXIS_NAMES: [char; 3] = ['x', 'y', 'z'];

/// Number of interior cuts along x, y and z.
///
/// An axis with `n` cuts is split into `n + 1` equal segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Subdivision(pub [u32; 3]);

impl Subdivision {
    /// Creates a subdivision triple.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self([x, y, z])
    }

    /// Validates raw host values, rejecting negative counts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_mesh::Subdivision;
    ///
    /// assert_eq!(Subdivision::from_raw([1, 0, 2]).unwrap(), Subdivision::new(1, 0, 2));
    /// assert!(Subdivision::from_raw([0, -1, 0]).is_err());
    /// ```
    pub fn from_raw(raw: [i64; 3]) -> MeshResult<Self> {
        let mut counts = [0u32; 3];
        for (axis, (&value, count)) in raw.iter().zip(counts.iter_mut()).enumerate() {
            *count = u32::try_from(value).map_err(|_| MeshError::InvalidSubdivision {
                axis: AXIS_NAMES[axis],
                value,
            })?;
        }
        Ok(Self(counts))
    }

    /// Cut count along `axis` (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn axis(&self, axis: usize) -> u32 {
        self.0[axis]
    }

    /// Largest cut count over the three axes.
    #[inline]
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Number of distinct vertices of the box built with these cuts.
    ///
    /// `8 + 4(nx + ny + nz) + 2(nx*ny + ny*nz + nz*nx)`: eight corners, four
    /// box edges run along each axis, and opposite faces have equal interior
    /// grids. Returns `None` on overflow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_mesh::Subdivision;
    ///
    /// assert_eq!(Subdivision::new(0, 0, 0).vertex_count(), Some(8));
    /// assert_eq!(Subdivision::new(1, 0, 0).vertex_count(), Some(12));
    /// ```
    pub fn vertex_count(&self) -> Option<usize> {
        let [x, y, z] = self.widened();
        let edges = x.checked_add(y)?.checked_add(z)?.checked_mul(4)?;
        let faces = x
            .checked_mul(y)?
            .checked_add(y.checked_mul(z)?)?
            .checked_add(z.checked_mul(x)?)?
            .checked_mul(2)?;
        8usize.checked_add(edges)?.checked_add(faces)
    }

    /// Number of quads of the box built with these cuts.
    ///
    /// `2[(nx+1)(ny+1) + (ny+1)(nz+1) + (nz+1)(nx+1)]`. Returns `None` on
    /// overflow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use box_mesh::Subdivision;
    ///
    /// assert_eq!(Subdivision::new(0, 0, 0).polygon_count(), Some(6));
    /// assert_eq!(Subdivision::new(1, 0, 0).polygon_count(), Some(10));
    /// ```
    pub fn polygon_count(&self) -> Option<usize> {
        let [x, y, z] = self.widened();
        let (x, y, z) = (x.checked_add(1)?, y.checked_add(1)?, z.checked_add(1)?);
        x.checked_mul(y)?
            .checked_add(y.checked_mul(z)?)?
            .checked_add(z.checked_mul(x)?)?
            .checked_mul(2)
    }

    fn widened(&self) -> [usize; 3] {
        self.0.map(|n| n as usize)
    }
}

impl From<[u32; 3]> for Subdivision {
    fn from(counts: [u32; 3]) -> Self {
        Self(counts)
    }
}

/// Full input of one build call.
///
/// # Example
///
/// ```rust
/// use box_mesh::BoxSpec;
///
/// let spec = BoxSpec::new([2.0, 1.0, 4.0], [1, 0, 3]).unwrap();
/// assert_eq!(spec.subdivision.axis(2), 3);
///
/// assert!(BoxSpec::new([0.0, 1.0, 1.0], [0, 0, 0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Extent along x, y and z. The box is centered on the origin.
    pub size: DVec3,
    /// Cuts along x, y and z.
    pub subdivision: Subdivision,
}

impl BoxSpec {
    /// Validates raw host values into a spec.
    pub fn new(size: [f64; 3], subdivision: [i64; 3]) -> MeshResult<Self> {
        let size = validate_size(DVec3::from_array(size))?;
        let subdivision = Subdivision::from_raw(subdivision)?;
        Ok(Self { size, subdivision })
    }

    /// Builds a spec from already typed parts, still checking the size.
    pub fn from_parts(size: DVec3, subdivision: Subdivision) -> MeshResult<Self> {
        Ok(Self {
            size: validate_size(size)?,
            subdivision,
        })
    }

    /// Re-checks a spec whose fields may have been set directly.
    pub fn validate(&self) -> MeshResult<()> {
        validate_size(self.size).map(|_| ())
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            size: DVec3::from_array(DEFAULT_SIZE),
            subdivision: Subdivision(DEFAULT_SUBDIVISION),
        }
    }
}

/// Rejects any component that is not a finite positive number.
pub(crate) fn validate_size(size: DVec3) -> MeshResult<DVec3> {
    for (axis, value) in size.to_array().into_iter().enumerate() {
        if !(value.is_finite() && value > 0.0) {
            return Err(MeshError::InvalidSize {
                axis: AXIS_NAMES[axis],
                value,
            });
        }
    }
    Ok(size)
}
