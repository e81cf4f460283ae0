//! SI quantity aliases (uom, f64) and raw-value constructors.

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, HeatTransfer as UomHeatTransfer,
    Length as UomLength, MassDensity as UomMassDensity, Power as UomPower,
    Pressure as UomPressure,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type HeatTransferCoeff = UomHeatTransfer;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type SpecHeat = UomSpecificHeatCapacity;
pub type ThermalCond = UomThermalConductivity;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

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
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn jpkgk(v: f64) -> SpecHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn wpmk(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn wpm2k(v: f64) -> HeatTransferCoeff {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    HeatTransferCoeff::new::<watt_per_square_meter_kelvin>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}
