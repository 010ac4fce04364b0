//! jc-components: station-chain stage library for a single-spool turbojet.
//!
//! Provides the closed-form thermodynamic stages, leaf to root:
//! - Diffuser (free stream → compressor face)
//! - Compressor (isentropic-with-efficiency pressure rise)
//! - Combustor (isobaric heat addition, solves fuel-air ratio)
//! - Turbine (power balance with the compressor)
//! - Afterburner (optional reheat, incremental fuel-air ratio)
//! - Nozzle (expansion to ambient, chain terminus)
//!
//! Stages hold only immutable configuration. Every `outlet` call is a pure
//! function of its explicit inputs, so stages can be shared across threads.
//!
//! # Example
//!
//! ```
//! use jc_components::{Compressor, Diffuser};
//! use jc_core::units::{k, mps, pa};
//! use jc_gas::{AmbientState, GasProperties};
//!
//! let gas = GasProperties::air();
//! let ambient = AmbientState::new(pa(101_325.0), k(288.0), mps(250.0)).unwrap();
//!
//! let diffuser = Diffuser::new(0.95, gas).unwrap();
//! let compressor = Compressor::new(8.3, 0.82, gas).unwrap();
//!
//! let s02 = diffuser.outlet(&ambient).unwrap();
//! let s03 = compressor.outlet(&s02).unwrap();
//! assert!(s03.pressure() > s02.pressure());
//! ```

pub mod afterburner;
pub mod combustor;
pub mod common;
pub mod compressor;
pub mod diffuser;
pub mod error;
pub mod nozzle;
pub mod station;
pub mod traits;
pub mod turbine;

// Re-exports
pub use afterburner::{Afterburner, AfterburnerOutlet};
pub use combustor::{Combustor, CombustorOutlet};
pub use compressor::Compressor;
pub use diffuser::Diffuser;
pub use error::{ComponentError, ComponentResult};
pub use nozzle::{Nozzle, NozzleExit};
pub use station::Station;
pub use traits::Stage;
pub use turbine::{Turbine, TurbineDuty};
