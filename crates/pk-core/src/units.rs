// pk-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature};
use uom::si::pressure::{bar as bar_unit, pascal};
use uom::si::thermodynamic_temperature::kelvin;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<pascal>(v)
}

/// Pressure in bar, the unit critical pressures are tabulated in.
#[inline]
pub fn bar(v: f64) -> Pressure {
    Pressure::new::<bar_unit>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

/// Value in bar, the pressure unit of the engine interface.
#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    p.get::<bar_unit>()
}

/// Value in kelvin, the temperature unit of the engine interface.
#[inline]
pub fn to_k(t: Temperature) -> f64 {
    t.get::<kelvin>()
}
