//! # Box Faces
//!
//! The six faces of the box and how each one maps its 2-D grid onto the
//! integer lattice of the subdivided box.
//!
//! ## Conventions
//!
//! Y is up. Every face is spanned by a row axis `u` and a column axis `v`;
//! grid cell `[r][c]` sits at lattice coordinate `r` along `u` and `c` along
//! `v`, with the fixed axis pinned at `0` (negative side) or `n + 1`
//! (positive side).
//!
//! ```text
//! face     fixed  side  u  v   u x v   winding
//! Bottom   y      -     z  x   +y      Forward
//! Top      y      +     z  x   +y      Mirrored
//! Front    z      +     x  y   +z      Mirrored
//! Back     z      -     x  y   +z      Forward
//! Left     x      -     z  y   -x      Mirrored
//! Right    x      +     z  y   -x      Forward
//! ```
//!
//! A `Forward` quad `(r,c) (r,c+1) (r+1,c+1) (r+1,c)` has normal `-(u x v)`,
//! a `Mirrored` quad `(r,c) (r+1,c) (r+1,c+1) (r,c+1)` has normal `u x v`,
//! so the table makes every quad face away from the box center.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::spec::Subdivision;

/// Axis indices into `[x, y, z]` triples.
pub(crate) const X: usize = 0;
pub(crate) const Y: usize = 1;
pub(crate) const Z: usize = 2;

/// One of the six faces of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// -Y face.
    Bottom,
    /// +Y face.
    Top,
    /// +Z face.
    Front,
    /// -Z face.
    Back,
    /// -X face.
    Left,
    /// +X face.
    Right,
}

/// Vertex order used to emit the quads of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// `(r,c) -> (r,c+1) -> (r+1,c+1) -> (r+1,c)`
    Forward,
    /// `(r,c) -> (r+1,c) -> (r+1,c+1) -> (r,c+1)`
    Mirrored,
}

impl Face {
    /// All faces, in fill and emission order.
    pub const ALL: [Face; 6] = [
        Face::Bottom,
        Face::Top,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Position of this face in [`Face::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axis held constant across the face.
    #[inline]
    pub fn fixed_axis(self) -> usize {
        match self {
            Face::Bottom | Face::Top => Y,
            Face::Front | Face::Back => Z,
            Face::Left | Face::Right => X,
        }
    }

    /// Axis indexed by grid rows.
    #[inline]
    pub fn row_axis(self) -> usize {
        match self {
            Face::Bottom | Face::Top => Z,
            Face::Front | Face::Back => X,
            Face::Left | Face::Right => Z,
        }
    }

    /// Axis indexed by grid columns.
    #[inline]
    pub fn col_axis(self) -> usize {
        match self {
            Face::Bottom | Face::Top => X,
            Face::Front | Face::Back => Y,
            Face::Left | Face::Right => Y,
        }
    }

    /// True when the face lies on the positive side of its fixed axis.
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Face::Top | Face::Front | Face::Right)
    }

    /// Quad vertex order producing outward normals on this face.
    #[inline]
    pub fn winding(self) -> Winding {
        match self {
            Face::Bottom | Face::Back | Face::Right => Winding::Forward,
            Face::Top | Face::Front | Face::Left => Winding::Mirrored,
        }
    }

    /// Unit normal pointing away from the box center.
    pub fn outward_normal(self) -> DVec3 {
        let mut normal = [0.0; 3];
        normal[self.fixed_axis()] = if self.is_positive() { 1.0 } else { -1.0 };
        DVec3::from_array(normal)
    }

    /// Grid dimensions `(rows, cols)` for the given cuts, border included.
    #[inline]
    pub fn grid_dims(self, subdivision: Subdivision) -> (usize, usize) {
        (
            subdivision.axis(self.row_axis()) as usize + 2,
            subdivision.axis(self.col_axis()) as usize + 2,
        )
    }

    /// Lattice coordinate of the face's fixed axis.
    #[inline]
    pub fn fixed_step(self, subdivision: Subdivision) -> u32 {
        if self.is_positive() {
            subdivision.axis(self.fixed_axis()) + 1
        } else {
            0
        }
    }

    /// Lattice point of grid cell `[row][col]`.
    pub fn lattice_point(self, subdivision: Subdivision, row: u32, col: u32) -> [u32; 3] {
        let mut point = [0; 3];
        point[self.fixed_axis()] = self.fixed_step(subdivision);
        point[self.row_axis()] = row;
        point[self.col_axis()] = col;
        point
    }

    /// Grid cell `(row, col)` of a lattice point, if the point lies on this face.
    pub fn cell_of(self, subdivision: Subdivision, point: [u32; 3]) -> Option<(usize, usize)> {
        (point[self.fixed_axis()] == self.fixed_step(subdivision))
            .then(|| (point[self.row_axis()] as usize, point[self.col_axis()] as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_distinct() {
        for face in Face::ALL {
            let mut axes = [face.fixed_axis(), face.row_axis(), face.col_axis()];
            axes.sort_unstable();
            assert_eq!(axes, [X, Y, Z], "{face:?}");
        }
    }

    #[test]
    fn test_index_matches_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    /// The winding table must agree with the geometry of each face.
    #[test]
    fn test_winding_matches_outward_normal() {
        for face in Face::ALL {
            let mut u = [0.0; 3];
            let mut v = [0.0; 3];
            u[face.row_axis()] = 1.0;
            v[face.col_axis()] = 1.0;
            let uv = DVec3::from_array(u).cross(DVec3::from_array(v));
            let normal = match face.winding() {
                Winding::Forward => -uv,
                Winding::Mirrored => uv,
            };
            assert_eq!(normal, face.outward_normal(), "{face:?}");
        }
    }

    #[test]
    fn test_opposite_faces_share_axes() {
        let pairs = [
            (Face::Bottom, Face::Top),
            (Face::Back, Face::Front),
            (Face::Left, Face::Right),
        ];
        for (a, b) in pairs {
            assert_eq!(a.row_axis(), b.row_axis());
            assert_eq!(a.col_axis(), b.col_axis());
            assert_ne!(a.is_positive(), b.is_positive());
            assert_ne!(a.winding(), b.winding());
        }
    }

    #[test]
    fn test_grid_dims() {
        let sub = Subdivision::new(1, 2, 3);
        assert_eq!(Face::Bottom.grid_dims(sub), (5, 3));
        assert_eq!(Face::Front.grid_dims(sub), (3, 4));
        assert_eq!(Face::Right.grid_dims(sub), (5, 4));
    }

    #[test]
    fn test_lattice_roundtrip_on_face() {
        let sub = Subdivision::new(2, 1, 3);
        let point = Face::Top.lattice_point(sub, 4, 1);
        assert_eq!(point, [1, 2, 4]);
        assert_eq!(Face::Top.cell_of(sub, point), Some((4, 1)));
        assert_eq!(Face::Bottom.cell_of(sub, point), None);
    }

    #[test]
    fn test_corner_lies_on_three_faces() {
        let sub = Subdivision::new(1, 1, 1);
        let corner = [0, 0, 2];
        let faces: Vec<Face> = Face::ALL
            .into_iter()
            .filter(|f| f.cell_of(sub, corner).is_some())
            .collect();
        assert_eq!(faces, vec![Face::Bottom, Face::Front, Face::Left]);
    }
}
