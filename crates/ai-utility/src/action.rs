use std::marker::PhantomData;

/// A candidate behavior over the world-state `S`.
///
/// `score` must be a pure function of `state` (higher is better, any range). `apply` performs the
/// action's effect on `state` and nothing else. Implementations are stateless policy objects:
/// both methods take `&self`.
pub trait Action<S>: 'static {
    fn score(&self, state: &S) -> f32;

    fn apply(&self, state: &mut S);

    /// Diagnostic name used in logs, traces and [`Decision`](crate::Decision)s.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Heap allocated, type-erased action.
pub type ActionBox<S> = Box<dyn Action<S>>;

/// An [`Action`] assembled from a pair of closures.
pub struct FnAction<S, F, G> {
    name: &'static str,
    score_fn: F,
    apply_fn: G,
    _state: PhantomData<fn(&mut S)>,
}

impl<S, F, G> Action<S> for FnAction<S, F, G>
where
    S: 'static,
    F: Fn(&S) -> f32 + 'static,
    G: Fn(&mut S) + 'static,
{
    fn score(&self, state: &S) -> f32 {
        (self.score_fn)(state)
    }

    fn apply(&self, state: &mut S) {
        (self.apply_fn)(state)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Build an action from a score closure and an apply closure.
///
/// ```
/// use ai_utility::{action, Action};
///
/// let eat = action("eat", |hunger: &u32| *hunger as f32, |hunger: &mut u32| *hunger = 0);
/// let mut hunger = 7;
/// assert_eq!(eat.score(&hunger), 7.0);
/// eat.apply(&mut hunger);
/// assert_eq!(hunger, 0);
/// ```
pub fn action<S, F, G>(name: &'static str, score_fn: F, apply_fn: G) -> FnAction<S, F, G>
where
    S: 'static,
    F: Fn(&S) -> f32 + 'static,
    G: Fn(&mut S) + 'static,
{
    FnAction {
        name,
        score_fn,
        apply_fn,
        _state: PhantomData,
    }
}
