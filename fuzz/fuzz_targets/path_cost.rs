#![no_main]

use gwo_path_planner::{evaluate_path, Environment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz path evaluation with arbitrary candidates on the compact course
    let Ok(env) = Environment::compact_course() else {
        return;
    };
    if let Ok(candidate) = postcard::from_bytes::<Vec<f64>>(data) {
        let cost = evaluate_path(&env, &candidate);
        assert!(cost.collision_count <= candidate.len() / 3 + 1);
    }
});
