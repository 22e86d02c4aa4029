//! Utility AI action selection.
//!
//! The core idea is simple: on each decision, score every action in a roster against the
//! caller's world-state and apply the highest-scoring one. Tie-breaking is stable by roster order
//! for determinism, and NaN scores rank lowest (see [`score`]).
//!
//! ```
//! use ai_utility::{action_list, Action, Evaluator};
//!
//! #[derive(Default)]
//! struct Stockpile {
//!     food: u32,
//!     wood: u32,
//! }
//!
//! struct CollectFood;
//!
//! impl Action<Stockpile> for CollectFood {
//!     fn score(&self, _state: &Stockpile) -> f32 {
//!         50.0
//!     }
//!
//!     fn apply(&self, state: &mut Stockpile) {
//!         state.food += 1;
//!     }
//! }
//!
//! struct CollectWood;
//!
//! impl Action<Stockpile> for CollectWood {
//!     fn score(&self, _state: &Stockpile) -> f32 {
//!         150.0
//!     }
//!
//!     fn apply(&self, state: &mut Stockpile) {
//!         state.wood += 1;
//!     }
//! }
//!
//! let evaluator = Evaluator::new(action_list![CollectFood, CollectWood]);
//! let mut stockpile = Stockpile::default();
//! evaluator.run(&mut stockpile);
//! assert_eq!((stockpile.food, stockpile.wood), (0, 1));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod roster;
pub mod score;

pub use action::{action, Action, ActionBox, FnAction};
pub use config::EvaluatorConfig;
pub use error::ConfigError;
pub use evaluator::{Decision, Evaluator};
pub use roster::Roster;
