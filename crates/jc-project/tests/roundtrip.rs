use jc_project::schema::*;
use jc_project::{load_json, load_yaml, save_json, save_yaml, validate_project};

fn reference_engine(id: &str) -> EngineDef {
    EngineDef {
        id: id.to_string(),
        name: "Reference turbojet".to_string(),
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
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: LATEST_VERSION,
        name: "Empty Project".to_string(),
        engines: vec![],
    };

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("jc_project_roundtrip_empty.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_with_afterburner() {
    let mut reheat = reference_engine("j2");
    reheat.afterburner = Some(AfterburnerDef {
        enabled: true,
        target_temperature_k: Some(2000.0),
        fuel_heating_value_j_per_kg: Some(43e6),
        efficiency: Some(0.95),
    });
    let project = Project {
        version: LATEST_VERSION,
        name: "Two engines".to_string(),
        engines: vec![reference_engine("j1"), reheat],
    };

    let path = std::env::temp_dir().join("jc_project_roundtrip_ab.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
    assert!(loaded.engines[1].afterburner_enabled());
}

#[test]
fn roundtrip_json() {
    let project = Project {
        version: LATEST_VERSION,
        name: "JSON".to_string(),
        engines: vec![reference_engine("j1")],
    };

    let path = std::env::temp_dir().join("jc_project_roundtrip.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(project, loaded);

    // Extension picks the format
    assert_eq!(jc_project::load(&path).unwrap(), project);
}

#[test]
fn save_rejects_invalid_project() {
    let mut engine = reference_engine("j1");
    engine.pressure_ratio = None;
    let project = Project {
        version: LATEST_VERSION,
        name: "Broken".to_string(),
        engines: vec![engine],
    };

    let path = std::env::temp_dir().join("jc_project_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &project).is_err());
}
