//! Planar homography estimation between pixel and projected coordinates.
//!
//! Projected coordinates are in the order of 10^6 metres while pixels are in the order
//! of 10^3, so both point sets are Hartley-normalized before the DLT solve.

use std::cmp::Ordering;

use nalgebra::{DMatrix, Matrix3, Point2, Vector3};

use crate::site_config::common::error::{ConfigError, Result};

const MIN_CORRESPONDENCES: usize = 4;

/// Centers points on their centroid and scales the mean distance to `√2`.
///
/// Returns `None` when the input is empty or all points coincide.
fn normalize_points(points: &[Point2<f64>]) -> Option<(Vec<Point2<f64>>, Matrix3<f64>)> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mean_dist = points
        .iter()
        .map(|p| ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt())
        .sum::<f64>()
        / n;

    if mean_dist <= f64::EPSILON {
        return None;
    }

    let scale = 2.0_f64.sqrt() / mean_dist;
    let t = Matrix3::new(
        scale, 0.0, -scale * cx,
        0.0, scale, -scale * cy,
        0.0, 0.0, 1.0,
    );

    let normalized = points
        .iter()
        .map(|p| Point2::new((p.x - cx) * scale, (p.y - cy) * scale))
        .collect();

    Some((normalized, t))
}

/// Estimates `H` such that `dst ~ H * src`.
pub(crate) fn estimate_homography(src: &[Point2<f64>], dst: &[Point2<f64>]) -> Result<Matrix3<f64>> {
    if src.len() != dst.len() {
        return Err(ConfigError::LengthMismatch {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    if src.len() < MIN_CORRESPONDENCES {
        return Err(ConfigError::Aoi(format!(
            "need at least {} point correspondences, got {}",
            MIN_CORRESPONDENCES,
            src.len()
        )));
    }

    let (src_n, t_src) = normalize_points(src)
        .ok_or_else(|| ConfigError::Aoi("source points coincide".to_string()))?;
    let (dst_n, t_dst) = normalize_points(dst)
        .ok_or_else(|| ConfigError::Aoi("destination points coincide".to_string()))?;

    // pad to 9 rows so the SVD always yields the full right singular basis
    let rows = (2 * src.len()).max(9);
    let mut a = DMatrix::<f64>::zeros(rows, 9);

    for (i, (ps, pd)) in src_n.iter().zip(dst_n.iter()).enumerate() {
        let (x, y) = (ps.x, ps.y);
        let (u, v) = (pd.x, pd.y);
        let r0 = 2 * i;
        let r1 = 2 * i + 1;

        a[(r0, 0)] = -x;
        a[(r0, 1)] = -y;
        a[(r0, 2)] = -1.0;
        a[(r0, 6)] = u * x;
        a[(r0, 7)] = u * y;
        a[(r0, 8)] = u;

        a[(r1, 3)] = -x;
        a[(r1, 4)] = -y;
        a[(r1, 5)] = -1.0;
        a[(r1, 6)] = v * x;
        a[(r1, 7)] = v * y;
        a[(r1, 8)] = v;
    }

    let svd = a.svd(false, true);
    let v_t = svd
        .v_t
        .ok_or_else(|| ConfigError::Aoi("SVD did not converge".to_string()))?;
    let smallest = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map(|(idx, _)| idx)
        .ok_or_else(|| ConfigError::Aoi("empty SVD".to_string()))?;
    let h = v_t.row(smallest);

    let h_norm = Matrix3::from_fn(|r, c| h[3 * r + c]);

    let t_dst_inv = t_dst
        .try_inverse()
        .ok_or_else(|| ConfigError::Aoi("singular normalization".to_string()))?;
    let mut h_mat = t_dst_inv * h_norm * t_src;

    let scale = h_mat[(2, 2)];
    if scale.abs() > f64::EPSILON {
        h_mat /= scale;
    }

    Ok(h_mat)
}

/// Maps `p` through `h`, failing for points sent to infinity.
pub(crate) fn apply(h: &Matrix3<f64>, p: &Point2<f64>) -> Result<Point2<f64>> {
    let v = h * Vector3::new(p.x, p.y, 1.0);
    if v.z.abs() <= f64::EPSILON {
        return Err(ConfigError::Aoi(format!("point ({}, {}) maps to infinity", p.x, p.y)));
    }
    let mapped = Point2::new(v.x / v.z, v.y / v.z);
    if !mapped.x.is_finite() || !mapped.y.is_finite() {
        return Err(ConfigError::Aoi(format!("point ({}, {}) maps to a non-finite point", p.x, p.y)));
    }
    Ok(mapped)
}
