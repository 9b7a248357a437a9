//! Mathematical utilities for the truss solve

use nalgebra::{DMatrix, DVector, SMatrix};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 4x4 matrix for a member's stiffness in global axes
pub type Mat4 = SMatrix<f64, 4, 4>;

/// Shortest member length accepted by the model.
///
/// Exact numeric contract: chords at or below this length are rejected as
/// degenerate regardless of restraint state.
pub const MIN_LENGTH_TOLERANCE: f64 = 1e-9;

/// Smallest pivot magnitude accepted during elimination.
///
/// Exact numeric contract: a column whose best pivot candidate falls below
/// this threshold marks the system as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Direction cosines and axial stiffness of a member chord
#[derive(Debug, Clone, Copy)]
pub struct AxialGeometry {
    /// Cosine of the member angle with the global X axis
    pub c: f64,
    /// Sine of the member angle with the global X axis
    pub s: f64,
    /// Axial stiffness E·A/L
    pub stiffness: f64,
}

/// Compute direction cosines and axial stiffness for a chord `(dx, dy)`.
///
/// Returns `None` when the chord length is at or below
/// [`MIN_LENGTH_TOLERANCE`].
pub fn axial_geometry(dx: f64, dy: f64, area: f64, elastic_modulus: f64) -> Option<AxialGeometry> {
    let length = dx.hypot(dy);
    if length <= MIN_LENGTH_TOLERANCE {
        return None;
    }
    Some(AxialGeometry {
        c: dx / length,
        s: dy / length,
        stiffness: elastic_modulus * area / length,
    })
}

/// Compute the 4x4 stiffness of an axial member in global axes
///
/// DOF order is `[ix, iy, jx, jy]` for endpoints i and j.
pub fn member_global_stiffness(geom: &AxialGeometry) -> Mat4 {
    let AxialGeometry { c, s, stiffness } = *geom;
    let cc = c * c;
    let cs = c * s;
    let ss = s * s;

    #[rustfmt::skip]
    let data = [
         cc,  cs, -cc, -cs,
         cs,  ss, -cs, -ss,
        -cc, -cs,  cc,  cs,
        -cs, -ss,  cs,  ss,
    ];

    Mat4::from_row_slice(&data) * stiffness
}

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when the largest candidate pivot in some column falls below
/// [`PIVOT_TOLERANCE`]. Equal-magnitude candidates keep the lowest row index
/// (strict `>` comparison), so the reduction is deterministic.
pub fn solve_gaussian(a: &Mat, b: &Vec) -> Option<Vec> {
    let n = b.len();
    debug_assert_eq!(a.nrows(), n);
    debug_assert_eq!(a.ncols(), n);

    let mut a = a.clone();
    let mut b = b.clone();

    for k in 0..n {
        let mut pivot_row = k;
        let mut max_value = a[(k, k)].abs();
        for i in (k + 1)..n {
            let candidate = a[(i, k)].abs();
            if candidate > max_value {
                max_value = candidate;
                pivot_row = i;
            }
        }

        if max_value < PIVOT_TOLERANCE {
            return None;
        }

        if pivot_row != k {
            a.swap_rows(k, pivot_row);
            b.swap_rows(k, pivot_row);
        }

        for i in (k + 1)..n {
            let factor = a[(i, k)] / a[(k, k)];
            for j in k..n {
                a[(i, j)] -= factor * a[(k, j)];
            }
            b[i] -= factor * b[k];
        }
    }

    let mut x = Vec::zeros(n);
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
    }

    Some(x)
}
