use std::path::Path;

use sr_project::{RunOptions, load_scenario, report_csv, run_scenario};

fn scenarios_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenarios")
}

#[test]
fn bundled_scenarios_load_and_run() {
    let names = [
        "pyrolite_lower_mantle.yaml",
        "periclase_sweep.yaml",
        "custom_two_phase.yaml",
    ];

    for name in names {
        let path = scenarios_dir().join(name);
        let scenario =
            load_scenario(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        let report = run_scenario(&scenario, RunOptions::default())
            .unwrap_or_else(|e| panic!("Failed to run {}: {}", name, e));

        assert!(!report.is_empty(), "{name}");
        for i in 0..report.len() {
            let p = &report.profile;
            assert!(p.vp[i] > p.vphi[i] && p.vphi[i] > 0.0, "{name} row {i}");
            assert!(p.vs[i] > 0.0, "{name} row {i}");
        }
    }
}

#[test]
fn reference_scenario_is_scored() {
    let scenario = load_scenario(&scenarios_dir().join("pyrolite_lower_mantle.yaml")).unwrap();
    let report = run_scenario(&scenario, RunOptions { parallel: true }).unwrap();

    let depths = report.depths.as_ref().unwrap();
    assert_eq!(depths.len(), 6);
    assert!(report.corrected.is_some());

    let l2 = report.l2.unwrap();
    let chi = report.chi.unwrap();
    assert!(l2.total().is_finite() && l2.total() >= 0.0);
    assert!(chi.total().is_finite() && chi.total() >= 0.0);

    let csv = report_csv(&report);
    assert!(csv.starts_with("pressure_pa,temperature_k,depth_m,"));
    assert_eq!(csv.lines().count(), 7);
}

#[test]
fn parallel_run_matches_sequential() {
    let scenario = load_scenario(&scenarios_dir().join("periclase_sweep.yaml")).unwrap();
    let sequential = run_scenario(&scenario, RunOptions::default()).unwrap();
    let parallel = run_scenario(&scenario, RunOptions { parallel: true }).unwrap();
    assert_eq!(sequential, parallel);
}
