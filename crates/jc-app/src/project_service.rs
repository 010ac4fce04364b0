//! Project loading, saving, validation, and introspection.

use jc_project::schema::{EngineDef, Project};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Summary of an engine for listing.
#[derive(Debug, Clone)]
pub struct EngineSummary {
    pub id: String,
    pub name: String,
    pub pressure_ratio: Option<f64>,
    pub turbine_inlet_temperature_k: Option<f64>,
    pub has_afterburner: bool,
}

/// Load a project from a YAML (or `.json`) file without validating it.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ProjectFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let project: Project = if jc_project::is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Project(format!("Failed to parse project JSON: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Project(format!("Failed to parse project YAML: {}", e)))?
    };

    Ok(project)
}

/// Save project to a YAML file.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)
        .map_err(|e| AppError::Project(format!("Failed to serialize project: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::ProjectFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validate project structure and every engine definition.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.engines.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one engine".to_string(),
        ));
    }
    jc_project::validate_project(project)?;
    Ok(())
}

pub fn list_engines(project: &Project) -> Vec<EngineSummary> {
    project
        .engines
        .iter()
        .map(|engine| EngineSummary {
            id: engine.id.clone(),
            name: engine.name.clone(),
            pressure_ratio: engine.pressure_ratio,
            turbine_inlet_temperature_k: engine.turbine_inlet_temperature_k,
            has_afterburner: engine.afterburner_enabled(),
        })
        .collect()
}

/// Get a specific engine by ID.
pub fn get_engine<'a>(project: &'a Project, engine_id: &str) -> AppResult<&'a EngineDef> {
    project
        .engines
        .iter()
        .find(|e| e.id == engine_id)
        .ok_or_else(|| AppError::EngineNotFound(engine_id.to_string()))
}
