//! Layout of the Slovak prompt bank.
//!
//! The bank is a flat, externally owned table of recordings. Only the offsets below are a
//! contract; what is stored at each offset is up to whoever records the voice pack.
//!
//! ```text
//!    0 ..=  99   cardinal words "nula" .. "deväťdesiatdeväť"
//!  100 ..= 108   "sto" .. "deväťsto"
//!  109           "tisíc"
//!  110           "dvetisíc"
//!  111           "jeden"    (masculine one)
//!  112           "jedno"    (neuter one)
//!  113           "dve"      (feminine/neuter two)
//!  114 ..= 116   "celá", "celé", "celých"
//!  117           "mínus"
//!  118 ..        four prompts per unit, see [`Form`]
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use alloc::{format, string::String};
use core::fmt;

use crate::unit::Unit;

/// Index of one recording in the prompt bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PromptId(pub u16);

pub(crate) const NUMBERS_BASE: u16 = 0;
pub(crate) const HUNDREDS: u16 = 100;
pub(crate) const THOUSAND: PromptId = PromptId(109);
pub(crate) const TWO_THOUSAND: PromptId = PromptId(110);
pub(crate) const ONE_MASCULINE: PromptId = PromptId(111);
pub(crate) const ONE_NEUTER: PromptId = PromptId(112);
pub(crate) const TWO_FEMININE: PromptId = PromptId(113);
/// First of the three "whole" connectors; [`crate::push_plural`] picks among them.
pub(crate) const WHOLE: PromptId = PromptId(114);
pub(crate) const MINUS: PromptId = PromptId(117);
pub(crate) const UNITS_BASE: u16 = 118;

/// Prompts per unit block.
pub(crate) const UNIT_STRIDE: u16 = 4;

/// Total number of prompts a complete Slovak bank holds.
pub const PROMPT_COUNT: u16 = UNITS_BASE + UNIT_STRIDE * Unit::COUNT;

/// Grammatical form of a unit noun, i.e. the offset inside that unit's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Form {
    /// (jeden) volt
    Singular = 0,
    /// (dva) volty
    Few = 1,
    /// (päť) voltov
    Many = 2,
    /// (päť desatín) voltu
    Tenths = 3,
}

impl PromptId {
    /// Cardinal word for `n` in `0..=99`.
    pub(crate) fn number(n: u32) -> Self {
        debug_assert!(n < 100, "{n} is not a single cardinal prompt");
        PromptId(NUMBERS_BASE + n as u16)
    }

    /// Hundreds word for a leading digit in `1..=9`.
    pub(crate) fn hundreds(digit: u32) -> Self {
        debug_assert!((1..=9).contains(&digit), "{digit} is not a hundreds digit");
        PromptId(HUNDREDS + digit as u16 - 1)
    }

    /// Whether the id falls inside the bank layout.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 < PROMPT_COUNT
    }

    /// Id `offset` places after this one.
    #[must_use]
    pub(crate) fn offset(self, offset: u16) -> Self {
        PromptId(self.0 + offset)
    }

    /// Name of the recording on the voice pack's storage, e.g. `0042.wav`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{self}.wav")
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}
