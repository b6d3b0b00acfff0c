use log::debug;

use crate::math::Vector3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector3,
    pub max: Vector3,
}

impl Bounds {
    /// `None` for an empty point set.
    pub fn from_points(points: &[Vector3]) -> Option<Bounds> {
        points.iter().fold(None, |acc, &point| match acc {
            Some(Bounds { min, max }) => Some(Bounds {
                min: min.min(point),
                max: max.max(point),
            }),
            None => Some(Bounds {
                min: point,
                max: point,
            }),
        })
    }

    /// Computed from halves so boxes near the `f32` limits do not overflow.
    pub fn center(&self) -> Vector3 {
        self.min * 0.5 + self.max * 0.5
    }

    pub fn half_extent(&self) -> Vector3 {
        self.max * 0.5 - self.min * 0.5
    }

    /// Full side lengths. May be infinite for boxes wider than `f32::MAX`.
    pub fn extent(&self) -> Vector3 {
        self.half_extent() * 2.0
    }

    pub fn largest_half_extent(&self) -> f32 {
        self.half_extent().max_component()
    }

    pub fn largest_extent(&self) -> f32 {
        self.largest_half_extent() * 2.0
    }
}

/// `p' = (p - center) / extent`, mapping the box onto a unit cube around the origin.
///
/// Stored as the half extent: `(p - center) / half_extent * 0.5` stays finite for
/// every finite box, while the full extent can overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitize {
    pub center: Vector3,
    pub half_extent: f32,
}

impl Unitize {
    pub fn for_bounds(bounds: &Bounds) -> Self {
        Self {
            center: bounds.center(),
            half_extent: bounds.largest_half_extent(),
        }
    }

    /// Largest side of the source box.
    pub fn extent(&self) -> f32 {
        self.half_extent * 2.0
    }

    /// A degenerate box (single point) is only recentered.
    pub fn apply(&self, point: Vector3) -> Vector3 {
        let centered = point - self.center;
        if self.half_extent > 0.0 && self.half_extent.is_finite() {
            centered / self.half_extent * 0.5
        } else {
            centered
        }
    }

    pub fn apply_all(&self, points: &mut [Vector3]) {
        for point in points.iter_mut() {
            *point = self.apply(*point);
        }
    }
}

pub fn unitize_points(points: &mut [Vector3]) -> Option<Unitize> {
    let bounds = Bounds::from_points(points)?;
    let unitize = Unitize::for_bounds(&bounds);
    unitize.apply_all(points);
    debug!(
        "unitized {} points around {:?} with extent {}",
        points.len(),
        unitize.center,
        unitize.extent()
    );
    Some(unitize)
}
