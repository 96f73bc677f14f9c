use clap::{Parser, Subcommand};
use sr_averaging::AveragingSchemeKind;
use sr_core::units::constants::PA_PER_GPA;
use sr_core::units::{kg_per_m3, m, mps, pa};
use sr_minerals::{MineralCatalogEntry, filter_catalog};
use sr_project::{
    ProjectResult, RunOptions, ScenarioReport, load_scenario, report_csv, run_scenario,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use uom::si::length::kilometer;
use uom::si::mass_density::gram_per_cubic_centimeter;
use uom::si::pressure::gigapascal;
use uom::si::velocity::kilometer_per_second;

#[derive(Parser)]
#[command(name = "sr-cli")]
#[command(about = "seisrock CLI - seismic velocities of mineral assemblages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML (or JSON) file
        scenario_path: PathBuf,
    },
    /// List catalog minerals, optionally filtered
    Minerals {
        /// Match against id, name, formula or alias
        query: Option<String>,
    },
    /// Compute the velocity profile of a scenario
    Run {
        /// Path to the scenario YAML (or JSON) file
        scenario_path: PathBuf,
        /// Override the averaging scheme (voigt, reuss, vrh, hs_upper, hs_lower)
        #[arg(long)]
        scheme: Option<AveragingSchemeKind>,
        /// Evaluate phases in parallel
        #[arg(long)]
        parallel: bool,
        /// Output CSV file path (optional, prints a summary table otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Minerals { query } => {
            cmd_minerals(query.as_deref().unwrap_or(""));
            Ok(())
        }
        Commands::Run {
            scenario_path,
            scheme,
            parallel,
            output,
        } => cmd_run(&scenario_path, scheme, parallel, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> ProjectResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    println!("  Phases: {}", scenario.rock.len());
    println!("  Averaging: {}", scenario.averaging);
    Ok(())
}

fn cmd_minerals(query: &str) {
    let entries = filter_catalog(query);
    if entries.is_empty() {
        println!("No minerals match '{}'", query);
        return;
    }

    println!(
        "{:<16} {:<16} {:<8} {:>9} {:>9} {:>10}",
        "id", "name", "formula", "K0 [GPa]", "G0 [GPa]", "rho0 [g/cc]"
    );
    for entry in entries {
        print_mineral(&entry);
    }
}

fn print_mineral(entry: &MineralCatalogEntry) {
    let params = entry.species.params();
    let rho0 = kg_per_m3(params.molar_mass / params.v0).get::<gram_per_cubic_centimeter>();
    println!(
        "{:<16} {:<16} {:<8} {:>9.1} {:>9.1} {:>10.3}",
        entry.canonical_id(),
        entry.display_name,
        entry.species.formula(),
        params.k0 / PA_PER_GPA,
        params.g0 / PA_PER_GPA,
        rho0
    );
}

fn cmd_run(
    scenario_path: &Path,
    scheme: Option<AveragingSchemeKind>,
    parallel: bool,
    output: Option<&Path>,
) -> ProjectResult<()> {
    let mut scenario = load_scenario(scenario_path)?;
    if let Some(scheme) = scheme {
        scenario.averaging = scheme;
    }
    println!("Running scenario: {}", scenario.name);

    let started = Instant::now();
    let report = run_scenario(&scenario, RunOptions { parallel })?;
    println!(
        "✓ Computed {} points with {} in {:.1} ms",
        report.len(),
        report.scheme,
        started.elapsed().as_secs_f64() * 1e3
    );

    match output {
        Some(path) => {
            std::fs::write(path, report_csv(&report))?;
            println!("  Wrote {}", path.display());
        }
        None => print_summary(&report),
    }

    if let (Some(l2), Some(chi)) = (&report.l2, &report.chi) {
        println!("Misfit against reference:");
        println!(
            "  L2:  density={:.4e}  vphi={:.4e}  vs={:.4e}  total={:.4e}",
            l2.density,
            l2.vphi,
            l2.vs,
            l2.total()
        );
        println!(
            "  Chi: density={:.4}  vphi={:.4}  vs={:.4}  total={:.4}",
            chi.density,
            chi.vphi,
            chi.vs,
            chi.total()
        );
    }
    Ok(())
}

fn print_summary(report: &ScenarioReport) {
    let with_depth = report.depths.is_some();
    if with_depth {
        print!("{:>10} ", "depth [km]");
    }
    println!(
        "{:>9} {:>8} {:>9} {:>9} {:>9} {:>9}",
        "P [GPa]", "T [K]", "rho [g/cc]", "Vp [km/s]", "Vs [km/s]", "Vphi [km/s]"
    );

    let profile = &report.profile;
    for i in 0..report.len() {
        if let Some(depths) = &report.depths {
            print!("{:>10.1} ", m(depths[i]).get::<kilometer>());
        }
        println!(
            "{:>9.2} {:>8.0} {:>10.4} {:>9.4} {:>9.4} {:>11.4}",
            pa(report.pressures[i]).get::<gigapascal>(),
            report.temperatures[i],
            kg_per_m3(profile.density[i]).get::<gram_per_cubic_centimeter>(),
            mps(profile.vp[i]).get::<kilometer_per_second>(),
            mps(profile.vs[i]).get::<kilometer_per_second>(),
            mps(profile.vphi[i]).get::<kilometer_per_second>(),
        );
    }
}
