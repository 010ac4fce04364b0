//! Project validation logic.

use crate::schema::{EngineDef, LATEST_VERSION, Project};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing field: {field} in engine {engine_id}")]
    MissingField { engine_id: String, field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

#[derive(Clone, Copy)]
enum Range {
    Positive,
    NonNegative,
    UnitFraction,
    AboveOne,
}

impl Range {
    fn admits(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Range::Positive => value > 0.0,
            Range::NonNegative => value >= 0.0,
            Range::UnitFraction => value > 0.0 && value <= 1.0,
            Range::AboveOne => value > 1.0,
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Range::Positive => "must be positive and finite",
            Range::NonNegative => "must be non-negative and finite",
            Range::UnitFraction => "must lie in (0, 1]",
            Range::AboveOne => "must be greater than 1",
        }
    }
}

fn field_range(name: &str) -> Range {
    match name {
        "flight_velocity_m_s" => Range::NonNegative,
        n if n.ends_with("efficiency") => Range::UnitFraction,
        _ => Range::Positive,
    }
}

fn check(engine_id: &str, field: &str, value: f64, range: Range) -> Result<(), ValidationError> {
    if range.admits(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: format!("engines[{engine_id}].{field}"),
            value: value.to_string(),
            reason: range.reason().to_string(),
        })
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut engine_ids = HashSet::new();
    for engine in &project.engines {
        if !engine_ids.insert(&engine.id) {
            return Err(ValidationError::DuplicateId {
                id: engine.id.clone(),
                context: "engines".to_string(),
            });
        }
        validate_engine(engine)?;
    }

    Ok(())
}

pub fn validate_engine(engine: &EngineDef) -> Result<(), ValidationError> {
    if engine.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "engines[].id".to_string(),
            value: format!("{:?}", engine.id),
            reason: "must not be empty".to_string(),
        });
    }

    if let Some(field) = engine.missing_fields().first() {
        return Err(ValidationError::MissingField {
            engine_id: engine.id.clone(),
            field: field.to_string(),
        });
    }

    check(&engine.id, "gas.gamma", engine.gas.gamma, Range::AboveOne)?;
    check(
        &engine.id,
        "gas.r_j_per_kg_k",
        engine.gas.r_j_per_kg_k,
        Range::Positive,
    )?;

    for (name, value) in engine.required_fields() {
        if let Some(value) = value {
            check(&engine.id, name, value, field_range(name))?;
        }
    }

    if let Some(ab) = &engine.afterburner
        && ab.enabled
    {
        let fields = [
            ("afterburner.target_temperature_k", ab.target_temperature_k),
            (
                "afterburner.fuel_heating_value_j_per_kg",
                ab.fuel_heating_value_j_per_kg,
            ),
            ("afterburner.efficiency", ab.efficiency),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                check(&engine.id, name, value, field_range(name))?;
            }
        }
    }

    Ok(())
}
