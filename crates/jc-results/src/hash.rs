//! Content-based hashing for run IDs.

use jc_project::schema::EngineDef;
use sha2::{Digest, Sha256};

pub fn compute_run_id(engine: &EngineDef, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let engine_json = serde_json::to_string(engine).unwrap_or_default();
    hasher.update(engine_json.as_bytes());
    hasher.update(solver_version.as_bytes());

    format!("{:x}", hasher.finalize())
}
