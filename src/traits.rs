use alloc::vec::Vec;

use crate::attributes::Attributes;
use crate::prompt::PromptId;
use crate::unit::Unit;

/// Something that plays prompts back-to-back, in the order they are pushed.
pub trait PromptSink {
    /// Queues one prompt. Playback order must match push order.
    fn push_prompt(&mut self, id: PromptId);
}

impl PromptSink for Vec<PromptId> {
    fn push_prompt(&mut self, id: PromptId) {
        self.push(id);
    }
}

impl<S: PromptSink + ?Sized> PromptSink for &mut S {
    fn push_prompt(&mut self, id: PromptId) {
        (**self).push_prompt(id);
    }
}

/// Picks the unit a value is announced in, rescaling the magnitude to match.
pub trait UnitResolver {
    /// Returns the magnitude rescaled into the unit it should be announced in.
    fn resolve(&self, magnitude: u32, unit: Unit) -> (u32, Unit);
}

/// A language's way of announcing numbers and durations.
pub trait LanguagePack {
    /// Short language code, as used for the voice pack directory.
    const ID: &'static str;
    /// Human readable language name.
    const NAME: &'static str;

    /// Announces `value` in `unit`, honouring the precision and gender in `attributes`.
    fn play_number<S: PromptSink>(
        &self,
        sink: &mut S,
        value: i32,
        unit: Option<Unit>,
        attributes: Attributes,
    );

    /// Announces a signed number of seconds as hours, minutes and seconds.
    fn play_duration<S: PromptSink>(&self, sink: &mut S, seconds: i32, attributes: Attributes);
}
