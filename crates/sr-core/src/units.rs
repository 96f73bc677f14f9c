// sr-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn gpa(v: f64) -> Pressure {
    use uom::si::pressure::gigapascal;
    Pressure::new::<gigapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

pub mod constants {
    /// Reference temperature for mineral parameters [K].
    pub const T_REF_K: f64 = 300.0;

    /// Conversion between Pa and GPa.
    pub const PA_PER_GPA: f64 = 1.0e9;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si() {
        assert_eq!(gpa(1.5).value, 1.5e9);
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(k(300.0).value, 300.0);
        assert_eq!(km(2.0).value, 2000.0);
        assert_eq!(m(3.0).value, 3.0);
        assert_eq!(kg_per_m3(3300.0).value, 3300.0);
        assert_eq!(mps(5000.0).value, 5000.0);
    }
}
