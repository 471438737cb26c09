//! Static problem instance: start, goal, search box and no-fly zones
//!
//! An [`Environment`] is validated once at construction and is read-only
//! afterwards. Every other component borrows it.

use crate::types::*;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Lower limit
    pub min: f64,
    /// Upper limit
    pub max: f64,
}

impl AxisBounds {
    /// Create a new interval
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value to the nearest edge of the interval
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Whether the value lies inside the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Axis-aligned search box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub z: AxisBounds,
}

impl Bounds {
    /// Create a box from per-axis intervals
    pub const fn new(x: AxisBounds, y: AxisBounds, z: AxisBounds) -> Self {
        Self { x, y, z }
    }

    /// Same interval on every axis
    pub const fn cube(min: f64, max: f64) -> Self {
        let axis = AxisBounds::new(min, max);
        Self::new(axis, axis, axis)
    }

    /// Smallest box containing both points
    pub fn spanning(a: &Point3, b: &Point3) -> Self {
        Self::new(
            AxisBounds::new(a.x.min(b.x), a.x.max(b.x)),
            AxisBounds::new(a.y.min(b.y), a.y.max(b.y)),
            AxisBounds::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Interval for an axis
    pub fn axis(&self, axis: Axis) -> &AxisBounds {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Interval governing a flat candidate coordinate (x, y, z repeating)
    pub fn for_coordinate(&self, index: usize) -> &AxisBounds {
        match index % 3 {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }

    /// Whether the point lies inside the box
    pub fn contains(&self, point: &Point3) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y) && self.z.contains(point.z)
    }

    fn validate(&self) -> Result<()> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if !self.axis(axis).is_valid() {
                return Err(ConfigErrorKind::InvalidBounds { axis }.into());
            }
        }
        Ok(())
    }
}

/// Vertical cylinder standing on the z = 0 plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoFlyZone {
    /// Axis X coordinate
    pub center_x: f64,
    /// Axis Y coordinate
    pub center_y: f64,
    /// Top of the cylinder
    pub height: f64,
    /// Cylinder radius
    pub radius: f64,
}

impl NoFlyZone {
    /// Create a zone from `(x, y, height, radius)`
    pub const fn new(center_x: f64, center_y: f64, height: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            height,
            radius,
        }
    }

    /// Center of the base disk
    pub const fn base_center(&self) -> Point3 {
        Point3::new(self.center_x, self.center_y, 0.0)
    }

    /// Whether a point is inside the solid cylinder, boundary included
    pub fn contains(&self, point: &Point3) -> bool {
        let distance_2d = point.horizontal_distance_to(&self.base_center());
        distance_2d <= self.radius && point.z >= 0.0 && point.z <= self.height
    }

    fn is_valid(&self) -> bool {
        self.center_x.is_finite()
            && self.center_y.is_finite()
            && self.height.is_finite()
            && self.radius.is_finite()
            && self.height >= 0.0
            && self.radius >= 0.0
    }
}

impl From<[f64; 4]> for NoFlyZone {
    fn from(zone: [f64; 4]) -> Self {
        Self::new(zone[0], zone[1], zone[2], zone[3])
    }
}

/// Problem instance shared read-only by the objective and the optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    start: Point3,
    goal: Point3,
    bounds: Bounds,
    no_fly_zones: Vec<NoFlyZone>,
    waypoint_count: usize,
}

impl Environment {
    /// Validate and build a problem instance.
    ///
    /// Fails if any bound or zone is malformed, if there are no waypoints, or
    /// if the start or goal lies inside a no-fly zone.
    pub fn new(
        start: Point3,
        goal: Point3,
        bounds: Bounds,
        no_fly_zones: Vec<NoFlyZone>,
        waypoint_count: usize,
    ) -> Result<Self> {
        bounds.validate()?;
        if waypoint_count == 0 {
            return Err(ConfigErrorKind::NoWaypoints.into());
        }

        if let Some(zone) = no_fly_zones.iter().position(|z| !z.is_valid()) {
            return Err(ConfigErrorKind::InvalidZone { zone }.into());
        }
        if let Some(zone) = first_containing_zone(&no_fly_zones, &start) {
            return Err(ConfigErrorKind::StartInsideNoFlyZone { zone }.into());
        }
        if let Some(zone) = first_containing_zone(&no_fly_zones, &goal) {
            return Err(ConfigErrorKind::GoalInsideNoFlyZone { zone }.into());
        }

        Ok(Self {
            start,
            goal,
            bounds,
            no_fly_zones,
            waypoint_count,
        })
    }

    /// 20 x 20 x 20 course with nine zones and four waypoints
    pub fn compact_course() -> Result<Self> {
        let zones = [
            [5.0, 5.0, 12.0, 2.0],
            [15.0, 7.0, 10.0, 2.0],
            [10.0, 12.0, 14.0, 2.5],
            [8.0, 15.0, 16.0, 2.5],
            [12.0, 3.0, 11.0, 2.0],
            [3.0, 10.0, 15.0, 2.0],
            [7.0, 7.0, 18.0, 2.0],
            [13.0, 9.0, 12.0, 2.0],
            [16.0, 13.0, 10.0, 2.0],
        ];
        Self::new(
            Point3::new(2.0, 2.0, 15.0),
            Point3::new(18.0, 18.0, 8.0),
            Bounds::cube(0.0, 20.0),
            zones.iter().map(|&z| NoFlyZone::from(z)).collect(),
            4,
        )
    }

    /// 1000 x 1000 x 500 course with 24 zones and ten waypoints
    pub fn wide_course() -> Result<Self> {
        let zones = [
            [20.0, 50.0, 30.0, 10.0],
            [40.0, 30.0, 30.0, 10.0],
            [65.0, 20.0, 20.0, 10.0],
            [80.0, 80.0, 60.0, 10.0],
            [70.0, 75.0, 99.0, 10.0],
            [95.0, 88.0, 50.0, 10.0],
            [100.0, 110.0, 120.0, 10.0],
            [120.0, 150.0, 100.0, 10.0],
            [125.0, 140.0, 50.0, 10.0],
            [140.0, 130.0, 120.0, 10.0],
            [180.0, 180.0, 150.0, 10.0],
            [200.0, 190.0, 50.0, 10.0],
            [250.0, 230.0, 120.0, 10.0],
            [270.0, 233.0, 450.0, 10.0],
            [299.0, 320.0, 500.0, 10.0],
            [323.0, 320.0, 466.0, 10.0],
            [340.0, 340.0, 470.0, 10.0],
            [380.0, 360.0, 500.0, 10.0],
            [340.0, 340.0, 480.0, 10.0],
            [380.0, 360.0, 400.0, 10.0],
            [380.0, 360.0, 410.0, 10.0],
            [440.0, 440.0, 480.0, 10.0],
            [480.0, 460.0, 500.0, 10.0],
            [480.0, 460.0, 500.0, 10.0],
        ];
        Self::new(
            Point3::new(10.0, 10.0, 25.0),
            Point3::new(500.0, 500.0, 300.0),
            Bounds::new(
                AxisBounds::new(0.0, 1000.0),
                AxisBounds::new(0.0, 1000.0),
                AxisBounds::new(0.0, 500.0),
            ),
            zones.iter().map(|&z| NoFlyZone::from(z)).collect(),
            10,
        )
    }

    pub fn start(&self) -> Point3 {
        self.start
    }

    pub fn goal(&self) -> Point3 {
        self.goal
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn no_fly_zones(&self) -> &[NoFlyZone] {
        &self.no_fly_zones
    }

    /// Number of free waypoints between start and goal
    pub fn waypoint_count(&self) -> usize {
        self.waypoint_count
    }

    /// Length of a flat candidate vector (waypoints x 3)
    pub fn dimension(&self) -> usize {
        self.waypoint_count * 3
    }

    /// Whether a point is outside every no-fly zone
    pub fn is_position_valid(&self, point: &Point3) -> bool {
        first_containing_zone(&self.no_fly_zones, point).is_none()
    }

    /// Full flight path `[start, waypoints.., goal]` for a flat candidate.
    ///
    /// A trailing partial waypoint is ignored.
    pub fn full_path(&self, candidate: &[f64]) -> Vec<Point3> {
        let mut path = Vec::with_capacity(candidate.len() / 3 + 2);
        path.push(self.start);
        path.extend(candidate.chunks_exact(3).filter_map(Point3::from_slice));
        path.push(self.goal);
        path
    }
}

fn first_containing_zone(zones: &[NoFlyZone], point: &Point3) -> Option<usize> {
    zones.iter().position(|zone| zone.contains(point))
}
