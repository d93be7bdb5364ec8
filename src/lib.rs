//! Slovak number and duration announcements, built from pre-recorded prompts.
//!
//! *NOTE*: This is _not_ a speech synthesizer.
//! It only decides which fragments of a fixed prompt bank to play, and in what order,
//! so that numbers, units and durations come out as grammatical Slovak.
//! Playback is left to whatever implements [`PromptSink`].
//!
//! ```
//! use hlas::{Attributes, Precision, Slovak, Unit};
//!
//! let sk: Slovak = Slovak::default();
//! let mut prompts = Vec::new();
//! let tenths = Attributes::with_precision(Precision::Tenths);
//! sk.play_number(&mut prompts, 125, Some(Unit::Volts), tenths);
//! // dvanásť celých päť desatiny voltu
//! assert_eq!(prompts.len(), 4);
//! ```
//!
//! ## `no_std`
//!
//! This library is unconditionally `no_std` compatible.
//! `alloc` is required for the `Vec` prompt sink.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    unsafe_code,
    rustdoc::all
)]
// magnitudes never leave the prompt table range, so narrowing is fine.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

#[cfg(all(feature = "std", feature = "libm"))]
compile_error!("Features \"std\" and \"libm\" are mutually exclusive.");

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("Must specify a math feature: either \"std\" or \"libm\".");

extern crate alloc;

mod attributes;
mod config;
mod error;
mod math;
mod prompt;
mod resolver;
mod slovak;
mod traits;
mod unit;

pub use attributes::{Attributes, Precision};
pub use config::Config;
pub use error::Error;
pub use prompt::{Form, PROMPT_COUNT, PromptId};
pub use resolver::{Identity, TelemetryUnits};
pub use slovak::{Slovak, push_plural};
pub use traits::{LanguagePack, PromptSink, UnitResolver};
pub use unit::{Gender, Unit};
