//! Core type definitions for the path planner

use core::fmt;
use serde::{Deserialize, Serialize};

/// Result type for planner operations
pub type Result<T> = core::result::Result<T, PlannerError>;

/// Point in 3-D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate (altitude)
    pub z: f64,
}

impl Point3 {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a point from the first three values of a slice.
    ///
    /// Returns `None` when fewer than three values are available.
    pub fn from_slice(coords: &[f64]) -> Option<Self> {
        match coords {
            [x, y, z, ..] => Some(Self::new(*x, *y, *z)),
            _ => None,
        }
    }

    /// Coordinates as an array in x, y, z order
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise difference `self - other`
    pub fn sub(&self, other: &Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Calculate Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        libm::sqrt(dx * dx + dy * dy + dz * dz)
    }

    /// Distance to another point measured in the XY plane only
    pub fn horizontal_distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrt(dx * dx + dy * dy)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(coords: [f64; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Planner error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerError {
    /// The problem instance is infeasible or malformed
    ConfigError(ConfigErrorKind),
    /// Run parameters rejected before the first iteration
    InvalidParameter,
    /// OS entropy could not be read for a fresh seed
    EntropyUnavailable,
}

/// Details of an environment configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Start point lies inside the no-fly zone at this index
    StartInsideNoFlyZone { zone: usize },
    /// Goal point lies inside the no-fly zone at this index
    GoalInsideNoFlyZone { zone: usize },
    /// Bounds on this axis are empty or not finite
    InvalidBounds { axis: Axis },
    /// No-fly zone at this index has a negative or non-finite dimension
    InvalidZone { zone: usize },
    /// The path has no free waypoints to optimize
    NoWaypoints,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::StartInsideNoFlyZone { zone } => {
                write!(f, "start position is inside no-fly zone {}", zone)
            }
            ConfigErrorKind::GoalInsideNoFlyZone { zone } => {
                write!(f, "goal position is inside no-fly zone {}", zone)
            }
            ConfigErrorKind::InvalidBounds { axis } => {
                write!(f, "bounds on the {} axis are empty or not finite", axis)
            }
            ConfigErrorKind::InvalidZone { zone } => {
                write!(f, "no-fly zone {} has an invalid height or radius", zone)
            }
            ConfigErrorKind::NoWaypoints => write!(f, "at least one waypoint is required"),
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::ConfigError(kind) => write!(f, "Configuration error: {}", kind),
            PlannerError::InvalidParameter => write!(f, "Invalid parameter"),
            PlannerError::EntropyUnavailable => write!(f, "OS entropy unavailable"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlannerError {}

impl From<ConfigErrorKind> for PlannerError {
    fn from(kind: ConfigErrorKind) -> Self {
        PlannerError::ConfigError(kind)
    }
}
