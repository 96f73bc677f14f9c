//! Catalog mineral integration tests.
//!
//! Broad physical-plausibility checks across lower-mantle conditions; the Murnaghan
//! parameters are approximate, so tolerances are wide.

use sr_core::units::{gpa, k};
use sr_minerals::{
    Mineral, MineralSpecies, Rock, SweepDefinition, SweepType, ThermoPath, ThermoState,
};

#[test]
fn density_increases_with_pressure_for_every_species() {
    let path = ThermoPath::isothermal(&[25e9, 50e9, 100e9, 135e9], 2000.0).unwrap();

    for species in MineralSpecies::ALL {
        let mineral = species.mineral();
        let densities: Vec<f64> = path
            .iter()
            .map(|s| mineral.property_pack(s).unwrap().density().unwrap())
            .collect();

        for pair in densities.windows(2) {
            assert!(pair[1] > pair[0], "{species}: {densities:?}");
        }
    }
}

#[test]
fn perovskite_at_midmantle_is_plausible() {
    let mineral = MineralSpecies::MgPerovskite.mineral();
    let state = ThermoState::from_pt(gpa(70.0), k(2200.0)).unwrap();
    let pack = mineral.property_pack(&state).unwrap();

    let rho = pack.density().unwrap();
    assert!(rho > 4000.0 && rho < 6000.0, "rho = {rho}");
    assert!(pack.bulk_modulus > 300e9 && pack.bulk_modulus < 700e9);
    assert!(pack.shear_modulus > 150e9 && pack.shear_modulus < 350e9);
}

#[test]
fn rock_phases_share_one_state_per_point() {
    let rock = Rock::from_fractions(
        "two-phase",
        vec![
            (MineralSpecies::MgPerovskite.shared(), 0.7),
            (MineralSpecies::Periclase.shared(), 0.3),
        ],
    )
    .unwrap();

    let sweep = SweepDefinition::new(30e9, 120e9, 4, SweepType::Linear).unwrap();
    let path = ThermoPath::from_sweep(&sweep, 1900.0, 2500.0).unwrap();

    for state in path.iter() {
        let packs: Vec<_> = rock
            .phases()
            .iter()
            .map(|ph| ph.mineral().property_pack(state).unwrap())
            .collect();
        assert!(packs.iter().all(|p| p.p == state.pressure()));
        assert!(packs.iter().all(|p| p.t == state.temperature()));
    }
}
