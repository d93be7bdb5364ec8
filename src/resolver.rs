use crate::math::round;
use crate::traits::UnitResolver;
use crate::unit::Unit;

const FEET_PER_METER: f64 = 3.280_84;
const KNOTS_PER_KMH: f64 = 0.539_957;

/// Announces every value in the unit it arrived in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl UnitResolver for Identity {
    fn resolve(&self, magnitude: u32, unit: Unit) -> (u32, Unit) {
        (magnitude, unit)
    }
}

/// The radio's own unit handling: metric telemetry, optionally spoken in imperial units.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryUnits {
    pub imperial: bool,
}

impl UnitResolver for TelemetryUnits {
    fn resolve(&self, magnitude: u32, unit: Unit) -> (u32, Unit) {
        if !self.imperial {
            return (magnitude, unit);
        }
        let (factor, target) = match unit {
            Unit::Meters => (FEET_PER_METER, Unit::Feet),
            Unit::Kmh => (KNOTS_PER_KMH, Unit::Knots),
            _ => return (magnitude, unit),
        };
        let rescaled = round(f64::from(magnitude) * factor) as u32;
        tracing::debug!(magnitude, ?unit, rescaled, ?target, "rescaled to imperial");
        (rescaled, target)
    }
}
