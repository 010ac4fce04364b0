//! Project schema definitions.
//!
//! Required engine inputs are `Option` here so that a file with a missing
//! field still parses and validation can name the field.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub engines: Vec<EngineDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gas: GasDef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_pressure_pa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_temperature_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_velocity_m_s: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbine_inlet_temperature_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_heating_value_j_per_kg: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuser_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressor_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combustor_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbine_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nozzle_efficiency: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_mass_flow_kg_s: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afterburner: Option<AfterburnerDef>,
}

impl EngineDef {
    /// Required scalar inputs, by field name, in file order.
    pub fn required_fields(&self) -> [(&'static str, Option<f64>); 12] {
        [
            ("ambient_pressure_pa", self.ambient_pressure_pa),
            ("ambient_temperature_k", self.ambient_temperature_k),
            ("flight_velocity_m_s", self.flight_velocity_m_s),
            ("pressure_ratio", self.pressure_ratio),
            ("turbine_inlet_temperature_k", self.turbine_inlet_temperature_k),
            ("fuel_heating_value_j_per_kg", self.fuel_heating_value_j_per_kg),
            ("diffuser_efficiency", self.diffuser_efficiency),
            ("compressor_efficiency", self.compressor_efficiency),
            ("combustor_efficiency", self.combustor_efficiency),
            ("turbine_efficiency", self.turbine_efficiency),
            ("nozzle_efficiency", self.nozzle_efficiency),
            ("air_mass_flow_kg_s", self.air_mass_flow_kg_s),
        ]
    }

    /// Names of required inputs that are absent, including the afterburner's
    /// dependent fields when it is enabled.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = self
            .required_fields()
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if let Some(ab) = &self.afterburner
            && ab.enabled
        {
            missing.extend(ab.missing_fields());
        }
        missing
    }

    pub fn afterburner_enabled(&self) -> bool {
        self.afterburner.as_ref().is_some_and(|ab| ab.enabled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasDef {
    pub gamma: f64,
    pub r_j_per_kg_k: f64,
}

impl Default for GasDef {
    fn default() -> Self {
        Self {
            gamma: 1.4,
            r_j_per_kg_k: 287.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AfterburnerDef {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_temperature_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_heating_value_j_per_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
}

impl AfterburnerDef {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.target_temperature_k.is_none() {
            missing.push("afterburner.target_temperature_k");
        }
        if self.fuel_heating_value_j_per_kg.is_none() {
            missing.push("afterburner.fuel_heating_value_j_per_kg");
        }
        if self.efficiency.is_none() {
            missing.push("afterburner.efficiency");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
version: 1
name: Minimal
engines:
  - id: j1
    name: Partial engine
    pressure_ratio: 8.3
"#;

    #[test]
    fn partial_engine_parses_and_reports_missing_fields() {
        let project: Project = serde_yaml::from_str(MINIMAL).unwrap();
        let engine = &project.engines[0];
        assert_eq!(engine.gas, GasDef::default());

        let missing = engine.missing_fields();
        assert_eq!(missing.len(), 11);
        assert!(!missing.contains(&"pressure_ratio"));
        assert!(missing.contains(&"air_mass_flow_kg_s"));
    }

    #[test]
    fn enabled_afterburner_requires_its_fields() {
        let ab = AfterburnerDef {
            enabled: true,
            target_temperature_k: Some(2000.0),
            ..Default::default()
        };
        assert_eq!(
            ab.missing_fields(),
            vec![
                "afterburner.fuel_heating_value_j_per_kg",
                "afterburner.efficiency"
            ]
        );
    }

    #[test]
    fn disabled_afterburner_fields_are_optional() {
        let mut project: Project = serde_yaml::from_str(MINIMAL).unwrap();
        let engine = &mut project.engines[0];
        engine.afterburner = Some(AfterburnerDef::default());
        assert!(!engine.afterburner_enabled());
        assert!(
            !engine
                .missing_fields()
                .iter()
                .any(|f| f.starts_with("afterburner"))
        );
    }
}
