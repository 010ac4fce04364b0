use jc_app::{RunOptions, RunRequest, ensure_run, list_runs, load_run};
use std::path::PathBuf;

fn project_in(dir_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let demo = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/turbojet.yaml");
    let path = dir.join("turbojet.yaml");
    std::fs::copy(demo, &path).unwrap();
    path
}

#[test]
fn second_run_comes_from_cache() {
    let path = project_in("jc_app_run_cache");
    let request = RunRequest {
        project_path: &path,
        engine_id: "j79-dry",
        options: RunOptions::default(),
    };

    let first = ensure_run(&request).unwrap();
    assert!(!first.loaded_from_cache);
    assert!((first.report.performance.thrust_n - 10_050.0).abs() < 150.0);

    let second = ensure_run(&request).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(first.run_id, second.run_id);
    assert_eq!(first.report, second.report);

    let runs = list_runs(&path, "j79-dry").unwrap();
    assert_eq!(runs.len(), 1);

    let (manifest, report) = load_run(&path, &first.run_id).unwrap();
    assert_eq!(manifest.engine_id, "j79-dry");
    assert_eq!(report, first.report);
}

#[test]
fn no_cache_recomputes() {
    let path = project_in("jc_app_run_nocache");
    let mut request = RunRequest {
        project_path: &path,
        engine_id: "j79-reheat",
        options: RunOptions::default(),
    };
    ensure_run(&request).unwrap();

    request.options.use_cache = false;
    let again = ensure_run(&request).unwrap();
    assert!(!again.loaded_from_cache);
    assert!(again.report.performance.afterburner_fuel_air_ratio.is_some());
}

#[test]
fn disabled_afterburner_runs_like_dry_engine() {
    let path = project_in("jc_app_run_ab_off");
    let run = |engine_id| {
        ensure_run(&RunRequest {
            project_path: &path,
            engine_id,
            options: RunOptions::default(),
        })
        .unwrap()
    };

    let dry = run("j79-dry");
    let off = run("j79-reheat-off");
    assert_ne!(dry.run_id, off.run_id);
    assert_eq!(dry.report.stations, off.report.stations);
    assert_eq!(dry.report.performance, off.report.performance);
}

#[test]
fn unknown_run_is_an_error() {
    let path = project_in("jc_app_run_missing");
    assert!(load_run(&path, "deadbeef").is_err());
}

#[test]
fn cached_reports_match_fresh_solves_exactly() {
    let path = project_in("jc_app_run_cache_exact");
    let project = jc_app::load_project(&path).unwrap();

    for engine in &project.engines {
        let request = RunRequest {
            project_path: &path,
            engine_id: &engine.id,
            options: RunOptions::default(),
        };
        let fresh = ensure_run(&request).unwrap();
        let cached = ensure_run(&request).unwrap();
        assert!(!fresh.loaded_from_cache);
        assert!(cached.loaded_from_cache, "engine {}", engine.id);

        for (a, b) in fresh.report.stations.iter().zip(&cached.report.stations) {
            assert_eq!(
                (a.p0_pa.to_bits(), a.t0_k.to_bits(), a.s_rel_j_per_kg_k.to_bits()),
                (b.p0_pa.to_bits(), b.t0_k.to_bits(), b.s_rel_j_per_kg_k.to_bits()),
                "engine {} station {}",
                engine.id,
                a.station
            );
        }
        assert_eq!(fresh.report, cached.report, "engine {}", engine.id);
    }
}
