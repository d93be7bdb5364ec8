#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::prompt::{Form, PromptId, UNIT_STRIDE, UNITS_BASE};

/// Grammatical gender of the noun a numeral agrees with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Telemetry units that have recordings in the bank, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Unit {
    Volts = 0,
    Amps,
    MetersPerSecond,
    /// Unused slot, kept so later blocks stay at their offsets.
    Raw,
    Kmh,
    Meters,
    Celsius,
    Percent,
    Milliamps,
    Mah,
    Watts,
    Db,
    Feet,
    Knots,
    Hours,
    Minutes,
    Seconds,
    Rpm,
    G,
    Milliliters,
    FluidOunces,
}

const ALL: [Unit; Unit::COUNT as usize] = [
    Unit::Volts,
    Unit::Amps,
    Unit::MetersPerSecond,
    Unit::Raw,
    Unit::Kmh,
    Unit::Meters,
    Unit::Celsius,
    Unit::Percent,
    Unit::Milliamps,
    Unit::Mah,
    Unit::Watts,
    Unit::Db,
    Unit::Feet,
    Unit::Knots,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
    Unit::Rpm,
    Unit::G,
    Unit::Milliliters,
    Unit::FluidOunces,
];

impl Unit {
    pub const COUNT: u16 = 21;

    /// Decodes the telemetry wire code, where `0` means "no unit" and `n` is the unit at
    /// table position `n - 1`.
    ///
    /// # Errors
    /// [`Error::UnknownUnit`] if the code is past the last unit.
    pub fn from_code(code: u8) -> Result<Option<Unit>, Error> {
        match code {
            0 => Ok(None),
            n => ALL
                .get(usize::from(n - 1))
                .copied()
                .map(Some)
                .ok_or(Error::UnknownUnit(code)),
        }
    }

    /// Wire code of this unit; the inverse of [`Unit::from_code`].
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Every unit, in table order.
    #[must_use]
    pub fn all() -> &'static [Unit] {
        &ALL
    }

    /// Gender of the Slovak noun for this unit.
    #[must_use]
    pub fn gender(self) -> Gender {
        match self {
            // miliampérhodina, stopa, hodina, minúta, sekunda, otáčka
            Unit::Raw
            | Unit::Mah
            | Unit::Feet
            | Unit::Hours
            | Unit::Minutes
            | Unit::Seconds
            | Unit::Rpm => Gender::Feminine,
            // percento, preťaženie
            Unit::Percent | Unit::G => Gender::Neuter,
            _ => Gender::Masculine,
        }
    }

    /// Prompt holding this unit's noun in the given form.
    #[must_use]
    pub fn prompt(self, form: Form) -> PromptId {
        PromptId(UNITS_BASE + UNIT_STRIDE * u16::from(self as u8) + form as u16)
    }
}
