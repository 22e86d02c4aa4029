use std::fmt;

use crate::{Action, ActionBox};

/// Ordered, uniquely-owned set of candidate actions.
///
/// Order only matters as a tie-break: among equal best scores, the earliest action wins.
pub struct Roster<S>
where
    S: 'static,
{
    actions: Vec<ActionBox<S>>,
}

impl<S> Roster<S>
where
    S: 'static,
{
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actions: Vec::with_capacity(capacity),
        }
    }

    /// Move `action` into the next slot.
    pub fn push<A>(&mut self, action: A)
    where
        A: Action<S>,
    {
        self.actions.push(Box::new(action));
    }

    pub fn push_boxed(&mut self, action: ActionBox<S>) {
        self.actions.push(action);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with<A>(mut self, action: A) -> Self
    where
        A: Action<S>,
    {
        self.push(action);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Action<S>> + '_ {
        self.actions.iter().map(|a| &**a)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.name()).collect()
    }
}

impl<S> Default for Roster<S>
where
    S: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<Vec<ActionBox<S>>> for Roster<S>
where
    S: 'static,
{
    fn from(actions: Vec<ActionBox<S>>) -> Self {
        Self { actions }
    }
}

impl<S> FromIterator<ActionBox<S>> for Roster<S>
where
    S: 'static,
{
    fn from_iter<I: IntoIterator<Item = ActionBox<S>>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<S> Extend<ActionBox<S>> for Roster<S>
where
    S: 'static,
{
    fn extend<I: IntoIterator<Item = ActionBox<S>>>(&mut self, iter: I) {
        self.actions.extend(iter);
    }
}

impl<S> fmt::Debug for Roster<S>
where
    S: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Build a [`Roster`] from any number of heterogeneous action values.
///
/// Each value is moved into its own boxed slot, in the order given.
///
/// ```
/// use ai_utility::{action, action_list, Evaluator};
///
/// let roster = action_list![
///     action("small", |_: &i32| 1.0, |n: &mut i32| *n += 1),
///     action("large", |_: &i32| 2.0, |n: &mut i32| *n += 10),
/// ];
/// assert_eq!(roster.len(), 2);
///
/// let mut n = 0;
/// Evaluator::new(roster).run(&mut n);
/// assert_eq!(n, 10);
/// ```
#[macro_export]
macro_rules! action_list {
    (@unit $action:expr) => {
        ()
    };
    (@count $($action:expr),+) => {
        <[()]>::len(&[$($crate::action_list!(@unit $action)),+])
    };
    () => {
        $crate::Roster::new()
    };
    ($($action:expr),+ $(,)?) => {{
        let mut roster = $crate::Roster::with_capacity($crate::action_list!(@count $($action),+));
        $( roster.push($action); )+
        roster
    }};
}
