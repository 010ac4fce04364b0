//! jc-gas: working-fluid model and station states for jetcycle.
//!
//! Provides:
//! - `GasProperties`: calorically perfect gas (γ, R) with derived cp
//! - `AmbientState`: free-stream static conditions plus flight velocity
//! - `StagnationState`: total pressure/temperature at a station boundary
//!
//! One `GasProperties` value is shared read-only by every stage of an engine;
//! there is no separate combustion-products model.
//!
//! # Example
//!
//! ```
//! use jc_core::units::{k, mps, pa};
//! use jc_gas::{AmbientState, GasProperties};
//!
//! let gas = GasProperties::air();
//! let ambient = AmbientState::new(pa(101_325.0), k(288.0), mps(250.0)).unwrap();
//! let mach = ambient.mach(&gas);
//! assert!(mach > 0.7 && mach < 0.8);
//! ```

pub mod error;
pub mod gas;
pub mod state;

// Re-exports for ergonomics
pub use error::{GasError, GasResult};
pub use gas::GasProperties;
pub use state::{AmbientState, StagnationState};
