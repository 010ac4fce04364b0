//! Afterburner (reheat) model.

use crate::common::{check_efficiency, check_positive, fuel_air_denominator, outlet_state};
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use crate::traits::Stage;
use jc_core::units::{SpecEnergy, Temperature};
use jc_gas::{GasProperties, StagnationState};

/// Second isobaric burner downstream of the turbine.
///
/// The turbine exhaust already carries `1 + f` kg of gas per kg of air, so the
/// incremental fuel-air ratio (per kg of air) is
///
/// ```text
/// f_ab    = (1 + f)(T06 − T05) / (η_ab Qr_ab / cp − T06)
/// f_total = f + f_ab
/// P06     = P05
/// ```
#[derive(Clone, Debug)]
pub struct Afterburner {
    target: Temperature,
    eta: f64,
    denom: f64,
}

/// Afterburner outlet with incremental and total fuel-air ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AfterburnerOutlet {
    pub state: StagnationState,
    pub fuel_air_ratio: f64,
    pub total_fuel_air_ratio: f64,
}

impl Afterburner {
    pub const NAME: &'static str = "afterburner";

    /// # Errors
    /// Same rules as the primary combustor: configuration errors for bad
    /// parameters, infeasible if `η_ab Qr_ab / cp ≤ T06`.
    pub fn new(
        target: Temperature,
        heating_value: SpecEnergy,
        eta: f64,
        gas: GasProperties,
    ) -> ComponentResult<Self> {
        check_positive(Self::NAME, target.value, "target temperature")?;
        check_positive(Self::NAME, heating_value, "fuel heating value")?;
        let eta = check_efficiency(Self::NAME, eta)?;
        let denom = fuel_air_denominator(Self::NAME, eta, heating_value, target, &gas)?;
        Ok(Self {
            target,
            eta,
            denom,
        })
    }

    /// Target outlet stagnation temperature (T06).
    pub fn target_temperature(&self) -> Temperature {
        self.target
    }

    /// `primary_fuel_air_ratio` is the combustor's `f`, already present in
    /// the turbine exhaust.
    pub fn outlet(
        &self,
        inlet: &StagnationState,
        primary_fuel_air_ratio: f64,
    ) -> ComponentResult<AfterburnerOutlet> {
        let t05 = inlet.temperature().value;
        let t06 = self.target.value;

        if !primary_fuel_air_ratio.is_finite() || primary_fuel_air_ratio < 0.0 {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "upstream fuel-air ratio is non-physical",
                detail: format!("f={primary_fuel_air_ratio}"),
            });
        }
        if t06 < t05 {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "target temperature is below inlet temperature",
                detail: format!("T05={:.2} K, T06={:.2} K", t05, t06),
            });
        }

        let fuel_air_ratio = (1.0 + primary_fuel_air_ratio) * (t06 - t05) / self.denom;
        let state = outlet_state(Self::NAME, inlet.pressure(), self.target)?;

        Ok(AfterburnerOutlet {
            state,
            fuel_air_ratio,
            total_fuel_air_ratio: primary_fuel_air_ratio + fuel_air_ratio,
        })
    }
}

impl Stage for Afterburner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn outlet_station(&self) -> Station {
        Station::AfterburnerExit
    }

    fn efficiency(&self) -> f64 {
        self.eta
    }
}
