use nalgebra::Point2;
use tracing::debug;

use crate::site_config::aoi::delegate::AoiDelegate;
use crate::site_config::aoi::homography::{apply, estimate_homography};
use crate::site_config::common::error::{ConfigError, Result};
use crate::site_config::records::{Corners, Polygon};

/// Area of interest from a perspective mapping of the pixel corners.
///
/// The corners are mapped into the site CRS with the GCP homography, then enclosed in
/// the smallest rectangle aligned with the flow direction. The flow direction runs
/// from the middle of the upstream edge (up_left, up_right) to the middle of the
/// downstream edge (down_left, down_right). The box stays fixed for any movie taken
/// with the same camera configuration.
pub struct PerspectiveAoi;

impl AoiDelegate for PerspectiveAoi {
    fn get_aoi(&self, src: &[[f64; 2]], dst: &[[f64; 2]], corners: &Corners) -> Result<Polygon> {
        if src.len() != dst.len() {
            return Err(ConfigError::LengthMismatch {
                expected: src.len(),
                actual: dst.len(),
            });
        }

        let to_points = |pts: &[[f64; 2]]| -> Vec<Point2<f64>> {
            pts.iter().map(|p| Point2::new(p[0], p[1])).collect()
        };
        let h = estimate_homography(&to_points(src), &to_points(dst))?;

        let mut mapped = Vec::with_capacity(4);
        for corner in corners.points() {
            let p = apply(&h, &Point2::new(corner[0], corner[1]))?;
            mapped.push([p.x, p.y]);
        }
        debug!("Corners in site CRS: {:?}", mapped);

        let upstream = midpoint(mapped[0], mapped[3]);
        let downstream = midpoint(mapped[1], mapped[2]);
        let angle = (downstream[1] - upstream[1]).atan2(downstream[0] - upstream[0]);
        let origin = mapped[0];

        let aligned = Polygon::new(mapped).rotate(-angle, origin);
        let (xmin, ymin, xmax, ymax) = aligned
            .bounds()
            .ok_or_else(|| ConfigError::Aoi("mapped corners are empty".to_string()))?;

        let bbox = Polygon::from_bounds(xmin, ymin, xmax, ymax).rotate(angle, origin);
        debug!(angle, area = bbox.area(), "Area of interest computed");

        Ok(bbox)
    }
}

fn midpoint(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: f64 = 700_000.0;

    fn square_corners() -> Corners {
        Corners {
            up_left: [0.0, 0.0],
            down_left: [100.0, 0.0],
            down_right: [100.0, 100.0],
            up_right: [0.0, 100.0],
        }
    }

    #[test]
    fn test_axis_aligned_mapping_gives_mapped_square() {
        let corners = square_corners();
        let src: Vec<[f64; 2]> = corners.points().to_vec();
        let dst: Vec<[f64; 2]> = src
            .iter()
            .map(|p| [OFFSET + 2.0 * p[0], OFFSET + 2.0 * p[1]])
            .collect();

        let bbox = PerspectiveAoi.get_aoi(&src, &dst, &corners).unwrap();

        let expected = Polygon::from_bounds(OFFSET, OFFSET, OFFSET + 200.0, OFFSET + 200.0);
        assert_eq!(bbox.exterior().len(), 5);
        for (p, e) in bbox.exterior().iter().zip(expected.exterior()) {
            assert!((p[0] - e[0]).abs() < 1e-6, "{:?} vs {:?}", p, e);
            assert!((p[1] - e[1]).abs() < 1e-6, "{:?} vs {:?}", p, e);
        }
    }

    #[test]
    fn test_box_follows_flow_direction() {
        let corners = square_corners();
        let src: Vec<[f64; 2]> = corners.points().to_vec();
        // rotate by 30 degrees around the origin of the site frame
        let (sin, cos) = 30.0_f64.to_radians().sin_cos();
        let dst: Vec<[f64; 2]> = src
            .iter()
            .map(|p| [OFFSET + cos * p[0] - sin * p[1], OFFSET + sin * p[0] + cos * p[1]])
            .collect();

        let bbox = PerspectiveAoi.get_aoi(&src, &dst, &corners).unwrap();

        assert!((bbox.area() - 100.0 * 100.0).abs() < 1e-4, "area = {}", bbox.area());
        for (p, e) in bbox.vertices().iter().zip(&dst) {
            assert!((p[0] - e[0]).abs() < 1e-6 && (p[1] - e[1]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mismatched_gcps() {
        let corners = square_corners();
        let src = corners.points().to_vec();
        let dst = vec![[0.0, 0.0]; 3];
        assert!(matches!(
            PerspectiveAoi.get_aoi(&src, &dst, &corners),
            Err(ConfigError::LengthMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_too_few_gcps() {
        let corners = square_corners();
        let src = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        assert!(matches!(
            PerspectiveAoi.get_aoi(&src, &src, &corners),
            Err(ConfigError::Aoi(_))
        ));
    }
}
