//! Slovak numerals.
//!
//! Slovak numerals agree with the noun they count: "jeden volt", "dve hodiny", "jedno percento".
//! The noun itself takes one of three forms depending on the count:
//! ```text
//!    1      jeden volt       Form::Singular
//!    2..=4  dva volty        Form::Few
//!    else   päť voltov       Form::Many
//! ```
//! Decimal values are read as `whole celá/celé/celých tenth unit`, with the unit in its
//! `Form::Tenths` form.

use alloc::vec::Vec;

use crate::attributes::{Attributes, Precision};
use crate::config::Config;
use crate::prompt::{
    Form, MINUS, ONE_MASCULINE, ONE_NEUTER, PromptId, THOUSAND, TWO_FEMININE, TWO_THOUSAND, WHOLE,
};
use crate::resolver::TelemetryUnits;
use crate::traits::{LanguagePack, PromptSink, UnitResolver};
use crate::unit::{Gender, Unit};

const SECONDS_PER_HOUR: u32 = 3600;
const SECONDS_PER_MINUTE: u32 = 60;

fn push<S: PromptSink + ?Sized>(sink: &mut S, id: PromptId) {
    debug_assert!(id.is_valid(), "prompt {id} is outside the Slovak bank");
    tracing::trace!(prompt = id.0, "push");
    sink.push_prompt(id);
}

/// Pushes the form of the three-prompt block starting at `base` that agrees with `count`.
pub fn push_plural<S: PromptSink + ?Sized>(sink: &mut S, count: u32, base: PromptId) {
    let form = match count {
        1 => Form::Singular,
        2..=4 => Form::Few,
        _ => Form::Many,
    };
    push(sink, base.offset(form as u16));
}

/// The Slovak voice pack.
#[derive(Debug, Clone)]
pub struct Slovak<R = TelemetryUnits> {
    config: Config,
    resolver: R,
}

impl Default for Slovak<TelemetryUnits> {
    fn default() -> Self {
        Slovak::new(Config::default())
    }
}

impl Slovak<TelemetryUnits> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Slovak {
            resolver: config.resolver(),
            config,
        }
    }
}

impl<R: UnitResolver> Slovak<R> {
    /// Uses `resolver` instead of the radio's own unit handling.
    #[must_use]
    pub fn with_resolver(config: Config, resolver: R) -> Self {
        Slovak { config, resolver }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Announces `value` in `unit`.
    ///
    /// Negative values get a leading "mínus". With a unit, the value first goes through the
    /// resolver and the unit's gender decides the numeral forms; without one,
    /// `attributes.gender` does.
    pub fn play_number<S: PromptSink + ?Sized>(
        &self,
        sink: &mut S,
        value: i32,
        unit: Option<Unit>,
        attributes: Attributes,
    ) {
        tracing::trace!(value, ?unit, ?attributes, "announcing number");
        if value < 0 {
            push(sink, MINUS);
        }
        let (magnitude, unit) = match unit {
            Some(unit) => {
                let (magnitude, unit) = self.resolver.resolve(value.unsigned_abs(), unit);
                (magnitude, Some(unit))
            }
            None => (value.unsigned_abs(), None),
        };
        speak(sink, magnitude, unit, attributes.precision, attributes.gender);
    }

    /// Announces a signed number of seconds as "h hodín m minút s sekúnd".
    ///
    /// Components that are zero are skipped, except the hours when either the config or
    /// `attributes.announce_hours` asks for them.
    pub fn play_duration<S: PromptSink + ?Sized>(
        &self,
        sink: &mut S,
        seconds: i32,
        attributes: Attributes,
    ) {
        tracing::trace!(seconds, ?attributes, "announcing duration");
        if seconds < 0 {
            push(sink, MINUS);
        }
        let mut rest = seconds.unsigned_abs();
        let hours = rest / SECONDS_PER_HOUR;
        rest %= SECONDS_PER_HOUR;
        let minutes = rest / SECONDS_PER_MINUTE;
        rest %= SECONDS_PER_MINUTE;

        if hours > 0 || attributes.announce_hours || self.config.always_announce_hours {
            speak(sink, hours, Some(Unit::Hours), Precision::Integer, Some(Gender::Feminine));
        }
        if minutes > 0 {
            speak(sink, minutes, Some(Unit::Minutes), Precision::Integer, Some(Gender::Feminine));
        }
        if rest > 0 {
            speak(sink, rest, Some(Unit::Seconds), Precision::Integer, Some(Gender::Feminine));
        }
    }

    /// [`Slovak::play_number`] collected into a `Vec`.
    #[must_use]
    pub fn number_prompts(
        &self,
        value: i32,
        unit: Option<Unit>,
        attributes: Attributes,
    ) -> Vec<PromptId> {
        let mut prompts = Vec::new();
        self.play_number(&mut prompts, value, unit, attributes);
        prompts
    }

    /// [`Slovak::play_duration`] collected into a `Vec`.
    #[must_use]
    pub fn duration_prompts(&self, seconds: i32, attributes: Attributes) -> Vec<PromptId> {
        let mut prompts = Vec::new();
        self.play_duration(&mut prompts, seconds, attributes);
        prompts
    }
}

impl<R: UnitResolver> LanguagePack for Slovak<R> {
    const ID: &'static str = "sk";
    const NAME: &'static str = "Slovak";

    fn play_number<S: PromptSink>(
        &self,
        sink: &mut S,
        value: i32,
        unit: Option<Unit>,
        attributes: Attributes,
    ) {
        Slovak::play_number(self, sink, value, unit, attributes);
    }

    fn play_duration<S: PromptSink>(&self, sink: &mut S, seconds: i32, attributes: Attributes) {
        Slovak::play_duration(self, sink, seconds, attributes);
    }
}

/// Speaks an already resolved, non-negative magnitude.
fn speak<S: PromptSink + ?Sized>(
    sink: &mut S,
    mut n: u32,
    unit: Option<Unit>,
    precision: Precision,
    gender: Option<Gender>,
) {
    if precision != Precision::Integer {
        // only one decimal digit is ever spoken
        if precision == Precision::Hundredths {
            n /= 10;
        }
        let (whole, tenth) = (n / 10, n % 10);
        if tenth != 0 {
            speak(sink, whole, None, Precision::Integer, Some(Gender::Feminine));
            if whole == 0 {
                push(sink, WHOLE);
            } else {
                push_plural(sink, whole, WHOLE);
            }
            speak(sink, tenth, None, Precision::Integer, Some(Gender::Feminine));
            if let Some(unit) = unit {
                push(sink, unit.prompt(Form::Tenths));
            }
            return;
        }
        n = whole;
    }

    let gender = unit.map_or(gender, |unit| Some(unit.gender()));
    // the noun agrees with the whole count, not with what is left after thousands and hundreds
    let count = n;

    let special = match (n, gender) {
        (1, Some(Gender::Masculine)) => Some(ONE_MASCULINE),
        (1, Some(Gender::Neuter)) => Some(ONE_NEUTER),
        (2, Some(Gender::Feminine | Gender::Neuter)) => Some(TWO_FEMININE),
        _ => None,
    };
    let mut consumed = false;
    if let Some(id) = special {
        push(sink, id);
        consumed = true;
    }

    if n >= 1000 {
        if n >= 3000 {
            speak(sink, n / 1000, None, Precision::Integer, None);
        }
        push(sink, if (2000..3000).contains(&n) { TWO_THOUSAND } else { THOUSAND });
        n %= 1000;
        consumed = n == 0;
    }
    if n >= 100 {
        push(sink, PromptId::hundreds(n / 100));
        n %= 100;
        consumed = n == 0;
    }
    if !consumed {
        push(sink, PromptId::number(n));
    }

    if let Some(unit) = unit {
        push_plural(sink, count, unit.prompt(Form::Singular));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{HUNDREDS, NUMBERS_BASE};
    use alloc::vec;

    fn n(v: u16) -> PromptId {
        PromptId(NUMBERS_BASE + v)
    }

    fn sto(digit: u16) -> PromptId {
        PromptId(HUNDREDS + digit - 1)
    }

    fn sk() -> Slovak {
        Slovak::default()
    }

    fn plain(value: i32) -> Vec<PromptId> {
        sk().number_prompts(value, None, Attributes::default())
    }

    fn with_unit(value: i32, unit: Unit) -> Vec<PromptId> {
        sk().number_prompts(value, Some(unit), Attributes::default())
    }

    #[test]
    fn small_numbers_are_single_prompts() {
        for v in 0..100 {
            assert_eq!(plain(v), vec![n(v as u16)], "value {v}");
        }
    }

    #[test]
    fn hundreds_are_single_words() {
        assert_eq!(plain(100), vec![sto(1)]);
        assert_eq!(plain(250), vec![sto(2), n(50)]);
        assert_eq!(plain(909), vec![sto(9), n(9)]);
    }

    #[test]
    fn thousands() {
        assert_eq!(plain(1000), vec![THOUSAND]);
        assert_eq!(plain(1001), vec![THOUSAND, n(1)]);
        assert_eq!(plain(2000), vec![TWO_THOUSAND]);
        assert_eq!(plain(2500), vec![TWO_THOUSAND, sto(5)]);
        assert_eq!(plain(3500), vec![n(3), THOUSAND, sto(5)]);
        assert_eq!(plain(3050), vec![n(3), THOUSAND, n(50)]);
        assert_eq!(plain(21_000), vec![n(21), THOUSAND]);
        assert_eq!(plain(125_042), vec![sto(1), n(25), THOUSAND, n(42)]);
    }

    #[test]
    fn minus_comes_first() {
        assert_eq!(plain(-5), vec![MINUS, n(5)]);
        assert_eq!(plain(-1000), vec![MINUS, THOUSAND]);
    }

    #[test]
    fn extreme_magnitudes_do_not_overflow() {
        let prompts = plain(i32::MIN);
        assert_eq!(prompts[0], MINUS);
        assert!(prompts.iter().all(|id| id.is_valid()));
    }

    #[test]
    fn one_and_two_agree_with_gender() {
        // volt
        assert_eq!(with_unit(1, Unit::Volts), vec![ONE_MASCULINE, Unit::Volts.prompt(Form::Singular)]);
        assert_eq!(with_unit(2, Unit::Volts), vec![n(2), Unit::Volts.prompt(Form::Few)]);
        // percento
        assert_eq!(with_unit(1, Unit::Percent), vec![ONE_NEUTER, Unit::Percent.prompt(Form::Singular)]);
        assert_eq!(with_unit(2, Unit::Percent), vec![TWO_FEMININE, Unit::Percent.prompt(Form::Few)]);
        // stopa
        assert_eq!(with_unit(1, Unit::Feet), vec![n(1), Unit::Feet.prompt(Form::Singular)]);
        assert_eq!(with_unit(2, Unit::Feet), vec![TWO_FEMININE, Unit::Feet.prompt(Form::Few)]);
        assert_eq!(with_unit(3, Unit::Feet), vec![n(3), Unit::Feet.prompt(Form::Few)]);
    }

    #[test]
    fn explicit_gender_applies_without_unit() {
        let sk = sk();
        let feminine = Attributes::with_gender(Gender::Feminine);
        assert_eq!(sk.number_prompts(2, None, feminine), vec![TWO_FEMININE]);
        assert_eq!(
            sk.number_prompts(1, None, Attributes::with_gender(Gender::Masculine)),
            vec![ONE_MASCULINE]
        );
        // the unit overrides whatever the caller asked for
        assert_eq!(
            sk.number_prompts(1, Some(Unit::Volts), feminine),
            vec![ONE_MASCULINE, Unit::Volts.prompt(Form::Singular)]
        );
    }

    #[test]
    fn unit_form_follows_whole_count() {
        let many = Unit::Volts.prompt(Form::Many);
        assert_eq!(with_unit(15, Unit::Volts), vec![n(15), many]);
        assert_eq!(with_unit(0, Unit::Volts), vec![n(0), many]);
        assert_eq!(with_unit(102, Unit::Volts), vec![sto(1), n(2), many]);
        assert_eq!(with_unit(1001, Unit::Volts), vec![THOUSAND, n(1), many]);
    }

    #[test]
    fn tenths() {
        let sk = sk();
        let attrs = Attributes::with_precision(Precision::Tenths);
        // dvanásť celých päť desatiny voltu
        assert_eq!(
            sk.number_prompts(125, Some(Unit::Volts), attrs),
            vec![n(12), WHOLE.offset(2), n(5), Unit::Volts.prompt(Form::Tenths)]
        );
        // nula celá päť
        assert_eq!(
            sk.number_prompts(5, Some(Unit::Volts), attrs),
            vec![n(0), WHOLE, n(5), Unit::Volts.prompt(Form::Tenths)]
        );
        // dve celé dve
        assert_eq!(
            sk.number_prompts(22, Some(Unit::Volts), attrs),
            vec![TWO_FEMININE, WHOLE.offset(1), TWO_FEMININE, Unit::Volts.prompt(Form::Tenths)]
        );
        // jedna celá jedna
        assert_eq!(sk.number_prompts(11, None, attrs), vec![n(1), WHOLE, n(1)]);
    }

    #[test]
    fn whole_tenths_read_as_integers() {
        let sk = sk();
        let attrs = Attributes::with_precision(Precision::Tenths);
        assert_eq!(
            sk.number_prompts(20, Some(Unit::Volts), attrs),
            vec![n(2), Unit::Volts.prompt(Form::Few)]
        );
        assert_eq!(
            sk.number_prompts(10, Some(Unit::Volts), attrs),
            vec![ONE_MASCULINE, Unit::Volts.prompt(Form::Singular)]
        );
    }

    #[test]
    fn hundredths_drop_last_digit() {
        let sk = sk();
        let attrs = Attributes::with_precision(Precision::Hundredths);
        assert_eq!(sk.number_prompts(125, None, attrs), vec![n(1), WHOLE, TWO_FEMININE]);
        assert_eq!(sk.number_prompts(-1234, Some(Unit::Amps), attrs), vec![
            MINUS,
            n(12),
            WHOLE.offset(2),
            n(3),
            Unit::Amps.prompt(Form::Tenths),
        ]);
    }

    #[test]
    fn plural_buckets() {
        let base = Unit::Hours.prompt(Form::Singular);
        let mut prompts = Vec::new();
        for count in [0, 1, 2, 4, 5, 11, 22] {
            push_plural(&mut prompts, count, base);
        }
        assert_eq!(prompts, vec![
            base.offset(2),
            base,
            base.offset(1),
            base.offset(1),
            base.offset(2),
            base.offset(2),
            base.offset(2),
        ]);
    }

    #[test]
    fn imperial_distance() {
        let sk = Slovak::new(Config {
            imperial: true,
            ..Config::default()
        });
        assert_eq!(
            sk.number_prompts(100, Some(Unit::Meters), Attributes::default()),
            vec![sto(3), n(28), Unit::Feet.prompt(Form::Many)]
        );
    }

    #[test]
    fn durations() {
        let sk = sk();
        let attrs = Attributes::default();
        assert_eq!(sk.duration_prompts(3661, attrs), vec![
            n(1),
            Unit::Hours.prompt(Form::Singular),
            n(1),
            Unit::Minutes.prompt(Form::Singular),
            n(1),
            Unit::Seconds.prompt(Form::Singular),
        ]);
        assert_eq!(
            sk.duration_prompts(-42, attrs),
            vec![MINUS, n(42), Unit::Seconds.prompt(Form::Many)]
        );
        assert_eq!(
            sk.duration_prompts(7200, attrs),
            vec![TWO_FEMININE, Unit::Hours.prompt(Form::Few)]
        );
        assert!(sk.duration_prompts(0, attrs).is_empty());
    }

    #[test]
    fn hours_can_be_forced() {
        let forced = Attributes {
            announce_hours: true,
            ..Attributes::default()
        };
        assert_eq!(sk().duration_prompts(120, forced), vec![
            n(0),
            Unit::Hours.prompt(Form::Many),
            TWO_FEMININE,
            Unit::Minutes.prompt(Form::Few),
        ]);
        let sk = Slovak::new(Config {
            always_announce_hours: true,
            ..Config::default()
        });
        assert_eq!(
            sk.duration_prompts(0, Attributes::default()),
            vec![n(0), Unit::Hours.prompt(Form::Many)]
        );
    }

    #[test]
    fn long_durations_keep_all_hours() {
        // more hours than fit in a byte
        let prompts = sk().duration_prompts(300 * 3600, Attributes::default());
        assert_eq!(prompts, vec![sto(3), Unit::Hours.prompt(Form::Many)]);
    }
}
