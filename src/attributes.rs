#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::unit::Gender;

/// How many implied decimal digits the raw value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// `125` is "sto dvadsaťpäť".
    #[default]
    Integer,
    /// `125` is "dvanásť celých päť".
    Tenths,
    /// `125` is "jedna celá dva"; the last digit is dropped before speaking.
    Hundredths,
}

impl TryFrom<u8> for Precision {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Precision::Integer),
            1 => Ok(Precision::Tenths),
            2 => Ok(Precision::Hundredths),
            other => Err(Error::Precision(other)),
        }
    }
}

/// Per-call announcement attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes {
    pub precision: Precision,
    /// Gender the numeral agrees with when no unit is given.
    /// A unit always supplies its own gender.
    pub gender: Option<Gender>,
    /// Say the hours of a duration even when there are none.
    pub announce_hours: bool,
}

impl Attributes {
    #[must_use]
    pub fn with_precision(precision: Precision) -> Self {
        Attributes {
            precision,
            ..Attributes::default()
        }
    }

    #[must_use]
    pub fn with_gender(gender: Gender) -> Self {
        Attributes {
            gender: Some(gender),
            ..Attributes::default()
        }
    }
}
