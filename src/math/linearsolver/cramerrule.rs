use nalgebra::{
    Matrix3,
    RowVector3,
    Vector3
};

use crate::formula::formulaerror::FormulaError;

// ─────────────────────────────────────────────────────────────────────────────
// Cramer's Rule (3×3)
// ─────────────────────────────────────────────────────────────────────────────
//
//   row_k · (x, y, z) = rhs_k,  k = 0, 1, 2
//
//   x = Dx / D,  y = Dy / D,  z = Dz / D
//
// where D is the determinant of the coefficient matrix and Dx, Dy, Dz are the
// determinants obtained by substituting rhs into the respective column.

/// Solves a 3×3 linear system.
///
/// Returns `Ok(None)` when the main determinant is exactly zero. That covers both
/// the inconsistent and the underdetermined case, which are not told apart.
/// A NaN coefficient is a caller bug and is reported as
/// [`FormulaError::MissingParameter`].
pub fn solve(row0: [f64; 3],
             row1: [f64; 3],
             row2: [f64; 3],
             rhs: [f64; 3]) -> Result<Option<[f64; 3]>, FormulaError> {
    check_defined(&row0, "coefficients0")?;
    check_defined(&row1, "coefficients1")?;
    check_defined(&row2, "coefficients2")?;
    check_defined(&rhs, "right side")?;

    let mat = Matrix3::from_rows(&[
        RowVector3::new(row0[0], row0[1], row0[2]),
        RowVector3::new(row1[0], row1[1], row1[2]),
        RowVector3::new(row2[0], row2[1], row2[2]),
    ]);
    let rhs = Vector3::new(rhs[0], rhs[1], rhs[2]);

    let main_determinant = determinant(&mat);
    if main_determinant == 0.0 {
        return Ok(None);
    }

    let mut solution = [0.0; 3];
    for (col, x) in solution.iter_mut().enumerate() {
        let mut substituted = mat;
        substituted.set_column(col, &rhs);
        *x = determinant(&substituted) / main_determinant;
    }
    Ok(Some(solution))
}

fn check_defined(elems: &[f64; 3], name: &'static str) -> Result<(), FormulaError> {
    if elems.iter().any(|x| x.is_nan()) {
        Err(FormulaError::MissingParameter(name))
    } else {
        Ok(())
    }
}

/// `a·e·i + b·f·g + c·d·h − c·e·g − b·d·i − a·f·h`
fn determinant(mat: &Matrix3<f64>) -> f64 {
    let (a, b, c) = (mat[(0, 0)], mat[(0, 1)], mat[(0, 2)]);
    let (d, e, f) = (mat[(1, 0)], mat[(1, 1)], mat[(1, 2)]);
    let (g, h, i) = (mat[(2, 0)], mat[(2, 1)], mat[(2, 2)]);
    a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
}
