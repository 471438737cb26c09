//! Segment / no-fly zone intersection
//!
//! The cylinder is first treated as an infinite vertical tube (a quadratic in
//! the segment parameter `t`), then clipped to `[0, height]`, then the top and
//! bottom disks are tested explicitly. Segments that graze the lateral surface
//! or a cap count as intersecting.

use crate::environment::NoFlyZone;
use crate::types::Point3;

/// Below this the segment has no horizontal extent
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Tolerance on the z-range test at lateral intersection points
pub const HEIGHT_TOLERANCE: f64 = 1e-6;

/// Whether the segment `start -> end` touches the solid cylinder
pub fn segment_intersects_zone(start: &Point3, end: &Point3, zone: &NoFlyZone) -> bool {
    let d = end.sub(start);
    let f = start.sub(&zone.base_center());

    let a = d.x * d.x + d.y * d.y;
    let b = 2.0 * (f.x * d.x + f.y * d.y);
    let c = f.x * f.x + f.y * f.y - zone.radius * zone.radius;

    if libm::fabs(a) < DEGENERATE_EPSILON {
        // Constant XY: inside the tube or not at all
        return c <= 0.0 && z_range_overlaps(start.z, end.z, zone.height);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let sqrt_disc = libm::sqrt(discriminant);
    let t1 = (-b + sqrt_disc) / (2.0 * a);
    let t2 = (-b - sqrt_disc) / (2.0 * a);
    let on_segment = |t: f64| (0.0..=1.0).contains(&t);

    if !on_segment(t1) && !on_segment(t2) {
        // Whole segment inside the tube when the roots bracket [0, 1]
        let (t_low, t_high) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        return t_low < 0.0 && t_high > 1.0 && z_range_overlaps(start.z, end.z, zone.height);
    }

    for t in [t1, t2] {
        if on_segment(t) {
            let z = start.z + t * d.z;
            if z >= -HEIGHT_TOLERANCE && z <= zone.height + HEIGHT_TOLERANCE {
                return true;
            }
        }
    }

    if d.z != 0.0 {
        let center = zone.base_center();
        for plane in [0.0, zone.height] {
            let t = (plane - start.z) / d.z;
            if on_segment(t) {
                let crossing = Point3::new(start.x + t * d.x, start.y + t * d.y, plane);
                if crossing.horizontal_distance_to(&center) <= zone.radius {
                    return true;
                }
            }
        }
    }

    false
}

/// Whether the segment touches any of the zones
pub fn segment_intersects_any(start: &Point3, end: &Point3, zones: &[NoFlyZone]) -> bool {
    zones
        .iter()
        .any(|zone| segment_intersects_zone(start, end, zone))
}

/// Number of consecutive path segments touching at least one zone.
///
/// A segment counts once no matter how many zones it crosses.
pub fn count_colliding_segments(path: &[Point3], zones: &[NoFlyZone]) -> usize {
    path.windows(2)
        .filter(|segment| segment_intersects_any(&segment[0], &segment[1], zones))
        .count()
}

fn z_range_overlaps(z_a: f64, z_b: f64, height: f64) -> bool {
    let z_min = z_a.min(z_b);
    let z_max = z_a.max(z_b);
    z_min <= height && z_max >= 0.0
}
