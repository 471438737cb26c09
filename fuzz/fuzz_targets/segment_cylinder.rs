#![no_main]

use gwo_path_planner::collision::segment_intersects_zone;
use gwo_path_planner::{NoFlyZone, Point3};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the segment / cylinder test with arbitrary geometry
    if let Ok((start, end, zone)) = postcard::from_bytes::<(Point3, Point3, NoFlyZone)>(data) {
        let hit = segment_intersects_zone(&start, &end, &zone);

        // An endpoint well inside the solid cylinder is always a hit
        let finite = [start.x, start.y, start.z, end.x, end.y, end.z]
            .iter()
            .chain([zone.center_x, zone.center_y, zone.height, zone.radius].iter())
            .all(|v| v.is_finite() && v.abs() < 1e6);
        let core = NoFlyZone::new(
            zone.center_x,
            zone.center_y,
            zone.height * 0.99,
            zone.radius * 0.99,
        );
        if finite && zone.radius > 1e-3 && (core.contains(&start) || core.contains(&end)) {
            assert!(hit, "{:?} -> {:?} misses {:?}", start, end, zone);
        }
    }
});
