//! End-to-end checks against the DE440s planetary kernel.
//!
//! These tests download (once, into the user cache) the real kernel from
//! NAIF, so they only run with the `jpl-download` feature enabled.
#![cfg(feature = "jpl-download")]

use approx::assert_relative_eq;

use orrery::download::get_spk_file;
use orrery::time::mjd_to_et_seconds;
use orrery::{Body, OrbitTrace, Orrery, OrreryError, ReferenceFrame};

fn de440s_orrery() -> Orrery {
    let spk = get_spk_file("de440s").expect("DE440s download failed");
    Orrery::new(&[spk]).expect("Failed to load DE440s")
}

#[test]
fn test_earth_reference_state_mjd_59600() {
    let orrery = de440s_orrery();

    let et = mjd_to_et_seconds(59600.0);
    assert_eq!(et, 695_995_200.0);

    let state = orrery
        .state_vector(Body::Earth, et, ReferenceFrame::EquatorialJ2000)
        .unwrap();
    let pos_au = state.position_au();

    // Reference values captured from the same query against DE440.
    assert_relative_eq!(pos_au.x, -0.50963722, max_relative = 1e-5);
    assert_relative_eq!(pos_au.y, 0.77991865, max_relative = 1e-5);
    assert_relative_eq!(pos_au.z, 0.33828220, max_relative = 1e-5);

    // Light time to the barycenter is ~8 minutes at ~1 AU.
    assert!(state.light_time > 400.0 && state.light_time < 600.0);
}

#[test]
fn test_one_year_earth_trace() {
    let orrery = de440s_orrery();

    let trace = OrbitTrace::sample(
        &orrery,
        Body::Earth,
        59600..=59999,
        ReferenceFrame::EquatorialJ2000,
    )
    .unwrap();

    // 400 whole-day samples, in input order.
    assert_eq!(trace.len(), 400);
    assert_eq!(trace.mjd.first(), Some(&59600.0));
    assert_eq!(trace.mjd.last(), Some(&59999.0));
    for pair in trace.mjd.windows(2) {
        assert_eq!(pair[1] - pair[0], 1.0);
    }

    // Every sample sits near 1 AU from the barycenter.
    for position in &trace.positions {
        let r = position.norm();
        assert!(r > 0.95 && r < 1.05, "unexpected radius: {r} AU");
    }

    // ~400 days cover a full revolution: the curve closes on itself.
    let gap = (trace.positions[365] - trace.positions[0]).norm();
    assert!(gap < 0.05, "orbit did not close: gap {gap} AU");
}

#[test]
fn test_pool_survives_failed_load() {
    let mut orrery = de440s_orrery();
    assert_eq!(orrery.loaded_kernels().len(), 1);

    let err = orrery
        .load_kernel("/nonexistent/de000.bsp".into())
        .unwrap_err();
    assert_eq!(
        err,
        OrreryError::KernelNotFound("/nonexistent/de000.bsp".to_string())
    );

    // The kernel loaded before the failure is still queryable.
    let state = orrery
        .state_vector(
            Body::Moon,
            mjd_to_et_seconds(59600.0),
            ReferenceFrame::EquatorialJ2000,
        )
        .unwrap();
    assert!(state.position.norm() > 0.0);
}
