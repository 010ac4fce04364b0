use jc_app::{AppError, SweepRequest, run_engine_sweep};
use jc_engine::SweepParameter;
use jc_project::schema::{AfterburnerDef, EngineDef, GasDef};

fn engine() -> EngineDef {
    EngineDef {
        id: "j1".to_string(),
        name: "Reference".to_string(),
        gas: GasDef::default(),
        ambient_pressure_pa: Some(101_325.0),
        ambient_temperature_k: Some(288.0),
        flight_velocity_m_s: Some(250.0),
        pressure_ratio: Some(8.3),
        turbine_inlet_temperature_k: Some(1250.0),
        fuel_heating_value_j_per_kg: Some(43e6),
        diffuser_efficiency: Some(0.95),
        compressor_efficiency: Some(0.82),
        combustor_efficiency: Some(0.98),
        turbine_efficiency: Some(0.88),
        nozzle_efficiency: Some(0.97),
        air_mass_flow_kg_s: Some(20.0),
        afterburner: None,
    }
}

#[test]
fn pressure_ratio_sweep_is_feasible_and_ordered() {
    let rows = run_engine_sweep(
        &engine(),
        &SweepRequest {
            parameter: SweepParameter::PressureRatio,
            start: 4.0,
            end: 16.0,
            points: 7,
        },
    )
    .unwrap();

    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
    assert!(rows.iter().all(|r| r.is_feasible()));
}

#[test]
fn infeasible_points_are_kept() {
    let rows = run_engine_sweep(
        &engine(),
        &SweepRequest {
            parameter: SweepParameter::TurbineInletTemperature,
            start: 500.0,
            end: 1500.0,
            points: 3,
        },
    )
    .unwrap();

    assert_eq!(rows.len(), 3);
    assert!(!rows[0].is_feasible());
    assert!(rows[0].error.as_deref().unwrap().starts_with("infeasible"));
    assert!(rows[2].is_feasible());
    assert!(rows[2].thrust_n.unwrap() > 0.0);
}

#[test]
fn afterburner_sweep_needs_enabled_afterburner() {
    let request = SweepRequest {
        parameter: SweepParameter::AfterburnerTemperature,
        start: 1500.0,
        end: 2000.0,
        points: 2,
    };
    assert!(matches!(
        run_engine_sweep(&engine(), &request),
        Err(AppError::InvalidInput(_))
    ));

    let mut reheat = engine();
    reheat.afterburner = Some(AfterburnerDef {
        enabled: true,
        target_temperature_k: Some(2000.0),
        fuel_heating_value_j_per_kg: Some(43e6),
        efficiency: Some(0.95),
    });
    let rows = run_engine_sweep(&reheat, &request).unwrap();
    assert!(rows[1].thrust_n.unwrap() > rows[0].thrust_n.unwrap());
}

#[test]
fn single_point_sweep_rejected() {
    let request = SweepRequest {
        parameter: SweepParameter::AirMassFlow,
        start: 10.0,
        end: 20.0,
        points: 1,
    };
    assert!(matches!(
        run_engine_sweep(&engine(), &request),
        Err(AppError::Configuration(_))
    ));
}
