use std::fmt;

use serde::{Deserialize, Serialize};

/// Planar polygon described by its closed exterior ring.
///
/// The first vertex is repeated at the end, so a quadrilateral holds five points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    exterior: Vec<[f64; 2]>,
}

impl Polygon {
    /// Builds a polygon from its vertices, closing the ring if needed.
    pub fn new(mut vertices: Vec<[f64; 2]>) -> Self {
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last().copied()) {
            if vertices.len() > 1 && first != last {
                vertices.push(first);
            }
        }
        Self { exterior: vertices }
    }

    /// Axis-aligned rectangle, counter-clockwise from the lower-left corner.
    pub fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(vec![[xmin, ymin], [xmax, ymin], [xmax, ymax], [xmin, ymax]])
    }

    /// The closed ring.
    pub fn exterior(&self) -> &[[f64; 2]] {
        &self.exterior
    }

    /// The distinct vertices, without the closing point.
    pub fn vertices(&self) -> &[[f64; 2]] {
        match self.exterior.len() {
            0 | 1 => &self.exterior,
            n => &self.exterior[..n - 1],
        }
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        self.exterior
            .windows(2)
            .map(|w| w[0][0] * w[1][1] - w[1][0] * w[0][1])
            .sum::<f64>()
            / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// `(xmin, ymin, xmax, ymax)`, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.exterior.first()?;
        let init = (first[0], first[1], first[0], first[1]);
        Some(self.exterior.iter().fold(init, |(xmin, ymin, xmax, ymax), p| {
            (xmin.min(p[0]), ymin.min(p[1]), xmax.max(p[0]), ymax.max(p[1]))
        }))
    }

    /// Rotates counter-clockwise by `angle` radians around `origin`.
    pub fn rotate(&self, angle: f64, origin: [f64; 2]) -> Self {
        let (sin, cos) = angle.sin_cos();
        let exterior = self
            .exterior
            .iter()
            .map(|p| {
                let dx = p[0] - origin[0];
                let dy = p[1] - origin[1];
                [origin[0] + cos * dx - sin * dy, origin[1] + sin * dx + cos * dy]
            })
            .collect();
        Self { exterior }
    }

    /// True when no two edges cross or touch except neighbours at their shared vertex.
    pub fn is_simple(&self) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return false;
        }

        let edge = |i: usize| (vertices[i], vertices[(i + 1) % n]);

        if (0..n).any(|i| {
            let (a, b) = edge(i);
            a == b
        }) {
            return false;
        }

        for i in 0..n {
            for j in (i + 2)..n {
                // first and last edges share vertex 0
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (p1, p2) = edge(i);
                let (p3, p4) = edge(j);
                if segments_intersect(p1, p2, p3, p4) {
                    return false;
                }
            }
        }

        true
    }
}

fn cross(o: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

fn on_segment(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> bool {
    r[0] >= p[0].min(q[0]) && r[0] <= p[0].max(q[0]) && r[1] >= p[1].min(q[1]) && r[1] <= p[1].max(q[1])
}

fn segments_intersect(p1: [f64; 2], p2: [f64; 2], p3: [f64; 2], p4: [f64; 2]) -> bool {
    let d1 = cross(p3, p4, p1);
    let d2 = cross(p3, p4, p2);
    let d3 = cross(p1, p2, p3);
    let d4 = cross(p1, p2, p4);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(p3, p4, p1))
        || (d2 == 0.0 && on_segment(p3, p4, p2))
        || (d3 == 0.0 && on_segment(p1, p2, p3))
        || (d4 == 0.0 && on_segment(p1, p2, p4))
}

/// Well-known text, e.g. `POLYGON ((0 0, 1 0, 1 1, 0 0))`.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exterior.is_empty() {
            return write!(f, "POLYGON EMPTY");
        }
        write!(f, "POLYGON ((")?;
        for (i, p) in self.exterior.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", p[0], p[1])?;
        }
        write!(f, "))")
    }
}
