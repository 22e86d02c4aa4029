#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// What a [`TraceEvent`] records about a candidate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceKind {
    /// The action was scored.
    Scored,
    /// The action won the decision and is about to be applied.
    Selected,
    /// The best candidate did not clear the configured minimum score; nothing was applied.
    BelowThreshold,
}

/// A small, allocation-friendly trace event.
///
/// This is intentionally "dumb data" so it can be recorded during a decision and later rendered
/// by tooling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub kind: TraceKind,
    /// Position of the action in its roster.
    pub index: usize,
    pub name: Cow<'static, str>,
    pub score: f32,
}

impl TraceEvent {
    pub fn new(
        kind: TraceKind,
        index: usize,
        name: impl Into<Cow<'static, str>>,
        score: f32,
    ) -> Self {
        Self {
            kind,
            index,
            name: name.into(),
            score,
        }
    }

    pub fn scored(index: usize, name: impl Into<Cow<'static, str>>, score: f32) -> Self {
        Self::new(TraceKind::Scored, index, name, score)
    }

    pub fn selected(index: usize, name: impl Into<Cow<'static, str>>, score: f32) -> Self {
        Self::new(TraceKind::Selected, index, name, score)
    }

    pub fn below_threshold(index: usize, name: impl Into<Cow<'static, str>>, score: f32) -> Self {
        Self::new(TraceKind::BelowThreshold, index, name, score)
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// The `Selected` event of the most recent decision, if any.
    pub fn selected(&self) -> Option<&TraceEvent> {
        self.events
            .iter()
            .rev()
            .find(|e| e.kind == TraceKind::Selected)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}
