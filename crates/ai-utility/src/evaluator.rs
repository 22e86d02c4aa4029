use ai_tools::{TraceEvent, TraceSink};

use crate::{score, Action, ConfigError, EvaluatorConfig, Roster};

/// The outcome of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Position of the chosen action in the roster.
    pub index: usize,
    pub name: &'static str,
    /// Sanitized score (NaN reported as `f32::NEG_INFINITY`).
    pub score: f32,
}

/// Scores a roster against a world-state and applies the single best action.
///
/// Each call:
/// - Scores every action in roster order (no short-circuiting, nothing cached between calls).
/// - Keeps the first action with the highest score (stable tie-break by roster order).
/// - Applies that action exactly once, unless the roster is empty or the best score is below
///   `min_score`.
pub struct Evaluator<S>
where
    S: 'static,
{
    roster: Roster<S>,
    config: EvaluatorConfig,
}

impl<S> Evaluator<S>
where
    S: 'static,
{
    pub fn new(roster: Roster<S>) -> Self {
        Self {
            roster,
            config: EvaluatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Raw score of every action, in roster order.
    pub fn scores(&self, state: &S) -> Vec<f32> {
        self.roster.iter().map(|a| a.score(state)).collect()
    }

    /// Run the scoring pass without applying anything.
    pub fn decide(&self, state: &S) -> Option<Decision> {
        let (best, _) = self.best(state, |_, _, _| {})?;
        self.admits(best).then_some(best)
    }

    /// Find the best action and apply it to `state`.
    pub fn run(&self, state: &mut S) -> Option<Decision> {
        let (decision, action) = self.best(state, |_, _, _| {})?;
        if !self.admits(decision) {
            return None;
        }
        Self::apply(decision, action, state);
        Some(decision)
    }

    /// [`run`](Self::run), recording every score and the selection into `sink`.
    pub fn run_traced(&self, state: &mut S, sink: &mut dyn TraceSink) -> Option<Decision> {
        let (decision, action) = self.best(state, |index, action, score| {
            sink.emit(TraceEvent::scored(index, action.name(), score));
        })?;

        if !self.admits(decision) {
            sink.emit(TraceEvent::below_threshold(
                decision.index,
                decision.name,
                decision.score,
            ));
            return None;
        }

        sink.emit(TraceEvent::selected(
            decision.index,
            decision.name,
            decision.score,
        ));
        Self::apply(decision, action, state);
        Some(decision)
    }

    fn best(
        &self,
        state: &S,
        mut on_score: impl FnMut(usize, &dyn Action<S>, f32),
    ) -> Option<(Decision, &dyn Action<S>)> {
        let mut best: Option<(Decision, &dyn Action<S>)> = None;

        for (index, action) in self.roster.iter().enumerate() {
            let raw = action.score(state);
            tracing::trace!(index, action = action.name(), score = raw, "scored action");
            on_score(index, action, raw);

            let better = match best {
                None => true,
                Some((current, _)) => score::is_better(raw, current.score),
            };
            if better {
                let decision = Decision {
                    index,
                    name: action.name(),
                    score: score::sanitize(raw),
                };
                best = Some((decision, action));
            }
        }

        best
    }

    fn admits(&self, best: Decision) -> bool {
        let admitted = self.config.admits(best.score);
        if !admitted {
            tracing::debug!(
                action = best.name,
                score = best.score,
                min_score = ?self.config.min_score,
                "best action below min_score"
            );
        }
        admitted
    }

    fn apply(decision: Decision, action: &dyn Action<S>, state: &mut S) {
        tracing::debug!(
            index = decision.index,
            action = decision.name,
            score = decision.score,
            "applying action"
        );
        action.apply(state);
    }
}

impl<S> Default for Evaluator<S>
where
    S: 'static,
{
    fn default() -> Self {
        Self::new(Roster::new())
    }
}

impl<S> std::fmt::Debug for Evaluator<S>
where
    S: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("roster", &self.roster)
            .field("config", &self.config)
            .finish()
    }
}
