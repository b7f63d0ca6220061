//! Browser tests for the JavaScript-facing session.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use door_swing::DoorSwing;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn begin_then_query() {
    let swing = DoorSwing::new();
    assert!(swing.begin(0, 64, 0, true, "left", "lower", "north").unwrap());
    assert!(swing.is_animating(0, 65, 0));
    assert!(swing.compute_angle(0, 64, 0).is_some());
}

#[wasm_bindgen_test]
fn rejects_unknown_facing() {
    let swing = DoorSwing::new();
    assert!(swing.begin(0, 64, 0, true, "left", "lower", "up").is_err());
}

#[wasm_bindgen_test]
fn config_from_yaml() {
    assert!(DoorSwing::with_config("duration_ms: 400\n").is_ok());
    assert!(DoorSwing::with_config("duration_ms: 0\n").is_err());
}

#[wasm_bindgen_test]
fn visits_active_doors() {
    let swing = DoorSwing::new();
    swing.begin(2, 70, 2, false, "right", "lower", "east").unwrap();
    let visit = js_sys::Function::new_with_args("x, y, z", "if (y !== 70) throw new Error('bad y');");
    assert!(swing.for_each_active(&visit).is_ok());
}
