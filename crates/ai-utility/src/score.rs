//! Total order used to compare action scores.
//!
//! NaN ranks lowest: it is mapped to `f32::NEG_INFINITY` before any comparison, so it ties with
//! negative infinity and loses to everything else. Ties never replace the current best, which
//! makes selection stable by roster order.

/// Map NaN to `f32::NEG_INFINITY`; every other value is returned unchanged.
pub fn sanitize(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

/// Whether `candidate` strictly beats `best` after sanitizing both.
pub fn is_better(candidate: f32, best: f32) -> bool {
    sanitize(candidate) > sanitize(best)
}
