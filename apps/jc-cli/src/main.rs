use clap::{Parser, Subcommand};
use jc_app::{
    AppError, AppResult, RunOptions, RunRequest, SweepRequest, project_service, run_service,
    runtime_compile, sweep_service,
};
use jc_engine::SweepParameter;
use jc_results::CycleReport;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jc-cli")]
#[command(about = "JetCycle CLI - steady-state turbojet cycle analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and engine definitions
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List engines in a project
    Engines {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Show the stage chain of an engine
    Stations {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Engine ID
        engine_id: String,
    },
    /// Solve the cycle of one engine
    Solve {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Engine ID
        engine_id: String,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// Sweep one engine input over a linear range
    Sweep {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Engine ID
        engine_id: String,
        /// Parameter to vary (pressure-ratio, turbine-inlet-temperature, ...)
        #[arg(long)]
        parameter: SweepParameter,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        /// Number of points, at least 2
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// List cached runs for an engine
    Runs {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Engine ID to list runs for
        engine_id: String,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Engines { project_path } => cmd_engines(&project_path),
        Commands::Stations {
            project_path,
            engine_id,
        } => cmd_stations(&project_path, &engine_id),
        Commands::Solve {
            project_path,
            engine_id,
            json,
            no_cache,
        } => cmd_solve(&project_path, &engine_id, json, !no_cache),
        Commands::Sweep {
            project_path,
            engine_id,
            parameter,
            start,
            end,
            points,
            json,
        } => cmd_sweep(
            &project_path,
            &engine_id,
            SweepRequest {
                parameter,
                start,
                end,
                points,
            },
            json,
        ),
        Commands::Runs {
            project_path,
            engine_id,
        } => cmd_runs(&project_path, &engine_id),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Results(e.to_string()))
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid ({} engines)", project.engines.len());
    Ok(())
}

fn cmd_engines(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let engines = project_service::list_engines(&project);

    if engines.is_empty() {
        println!("No engines found in project");
    } else {
        println!("Engines in project:");
        for engine in engines {
            let pi = engine
                .pressure_ratio
                .map_or_else(|| "?".to_string(), |v| format!("{v}"));
            let tit = engine
                .turbine_inlet_temperature_k
                .map_or_else(|| "?".to_string(), |v| format!("{v} K"));
            println!(
                "  {} - {} (π = {}, TIT = {}{})",
                engine.id,
                engine.name,
                pi,
                tit,
                if engine.has_afterburner {
                    ", afterburner"
                } else {
                    ""
                }
            );
        }
    }
    Ok(())
}

fn cmd_stations(project_path: &Path, engine_id: &str) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    let engine = project_service::get_engine(&project, engine_id)?;

    println!("Stage chain for {}:", engine_id);
    for stage in runtime_compile::stage_chain(engine)? {
        println!(
            "  {:<12} → station {:<3} η = {:.3}",
            stage.name, stage.outlet_station, stage.efficiency
        );
    }
    Ok(())
}

fn print_report(report: &CycleReport) {
    println!(
        "  {:<4} {:<22} {:>12} {:>10} {:>12}",
        "st", "description", "P [Pa]", "T [K]", "s [J/kg/K]"
    );
    for row in &report.stations {
        println!(
            "  {:<4} {:<22} {:>12.1} {:>10.2} {:>12.2}",
            row.station, row.description, row.p0_pa, row.t0_k, row.s_rel_j_per_kg_k
        );
    }

    let perf = &report.performance;
    println!("  Exhaust velocity: {:.2} m/s", perf.exhaust_velocity_m_s);
    println!("  Fuel-air ratio:   {:.5}", perf.fuel_air_ratio);
    if let Some(f_ab) = perf.afterburner_fuel_air_ratio {
        println!("  Afterburner f:    {:.5}", f_ab);
        println!("  Total f:          {:.5}", perf.total_fuel_air_ratio);
    }
    println!("  Fuel flow:        {:.4} kg/s", perf.fuel_mass_flow_kg_s);
    println!("  Thrust:           {:.1} N", perf.thrust_n);
    println!("  Specific thrust:  {:.1} N·s/kg", perf.specific_thrust_n_s_per_kg);
    println!("  TSFC:             {:.4e} kg/(N·s)", perf.tsfc_kg_per_n_s);
    println!("  Isp:              {:.1} s", perf.specific_impulse_s);
}

fn cmd_solve(project_path: &Path, engine_id: &str, json: bool, use_cache: bool) -> AppResult<()> {
    let request = RunRequest {
        project_path,
        engine_id,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if json {
        println!("{}", to_json(&response.report)?);
        return Ok(());
    }

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Cycle solved: {}", response.run_id);
    }
    print_report(&response.report);
    Ok(())
}

fn cmd_sweep(
    project_path: &Path,
    engine_id: &str,
    request: SweepRequest,
    json: bool,
) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    let engine = project_service::get_engine(&project, engine_id)?;

    let rows = sweep_service::run_engine_sweep(engine, &request)?;

    if json {
        println!("{}", to_json(&rows)?);
        return Ok(());
    }

    println!(
        "Sweep of {} [{}] for {}:",
        request.parameter,
        request.parameter.unit(),
        engine_id
    );
    println!(
        "  {:>12} {:>12} {:>12} {:>10}",
        "value", "thrust [N]", "TSFC", "Isp [s]"
    );
    for row in &rows {
        match (&row.error, row.thrust_n, row.tsfc_kg_per_n_s, row.specific_impulse_s) {
            (None, Some(thrust), Some(tsfc), Some(isp)) => println!(
                "  {:>12.4} {:>12.1} {:>12.4e} {:>10.1}",
                row.value, thrust, tsfc, isp
            ),
            (Some(err), ..) => println!("  {:>12.4} {}", row.value, err),
            _ => println!("  {:>12.4} (no result)", row.value),
        }
    }

    let feasible = rows.iter().filter(|r| r.is_feasible()).count();
    println!("✓ {}/{} points feasible", feasible, rows.len());
    Ok(())
}

fn cmd_runs(project_path: &Path, engine_id: &str) -> AppResult<()> {
    let runs = run_service::list_runs(project_path, engine_id)?;

    if runs.is_empty() {
        println!("No cached runs for engine: {}", engine_id);
    } else {
        println!("Cached runs for engine {}:", engine_id);
        for manifest in runs {
            println!(
                "  {} - {} (solver {})",
                manifest.run_id, manifest.timestamp, manifest.solver_version
            );
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    let (manifest, report) = run_service::load_run(project_path, run_id)?;

    println!("Run: {}", manifest.run_id);
    println!("  Engine: {}", manifest.engine_id);
    println!("  Timestamp: {}", manifest.timestamp);
    println!("  Solver version: {}", manifest.solver_version);
    print_report(&report);
    Ok(())
}
