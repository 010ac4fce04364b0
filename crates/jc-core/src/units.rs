//! SI quantities used along the station chain.
//!
//! Stage math works on `.value` (SI base units); these types mark what crosses
//! crate boundaries.

pub type Force = uom::si::f64::Force;
pub type MassRate = uom::si::f64::MassRate;
pub type Pressure = uom::si::f64::Pressure;
pub type Temperature = uom::si::f64::ThermodynamicTemperature;
pub type Time = uom::si::f64::Time;
pub type Velocity = uom::si::f64::Velocity;

/// Specific heat or gas constant [J/(kg·K)].
pub type SpecHeat = f64;

/// Specific energy, e.g. fuel lower heating value [J/kg].
pub type SpecEnergy = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

pub mod constants {
    /// Standard gravity [m/s²] used to convert thrust per fuel flow into
    /// specific impulse.
    pub const G0_MPS2: f64 = 9.81;
}
