//! Fixed interpolation anchors.

use rb_core::SpecVolume;

/// State where liquid and vapor become indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    /// Pressure [MPa]
    pub pressure: f64,
    /// Specific volume shared by both phases [m³/kg]
    pub specific_volume: SpecVolume,
}

/// Low-pressure saturated state used as the other anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// Pressure [MPa]
    pub pressure: f64,
    /// Saturated liquid specific volume [m³/kg]
    pub specific_volume_liquid: SpecVolume,
    /// Saturated vapor specific volume [m³/kg]
    pub specific_volume_vapor: SpecVolume,
}

pub const CRITICAL_POINT: CriticalPoint = CriticalPoint {
    pressure: 10.0,
    specific_volume: 0.0035,
};

pub const REFERENCE_POINT: ReferencePoint = ReferencePoint {
    pressure: 0.05,
    specific_volume_liquid: 0.00105,
    specific_volume_vapor: 30.0,
};
