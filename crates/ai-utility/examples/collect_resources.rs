//! Resource-gathering agent driven by a utility evaluator.
//!
//! ```text
//! RUST_LOG=ai_utility=debug cargo run -p ai-utility --features serde --example collect_resources -- --ticks 12
//! ```

use std::path::PathBuf;

use ai_tools::TraceLog;
use ai_utility::{action_list, Action, Evaluator, EvaluatorConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Args {
    /// Number of decisions to run.
    #[arg(long, default_value_t = 10)]
    ticks: u32,

    /// Optional JSON file holding an `EvaluatorConfig`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the decision trace as JSON after the run.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default)]
struct Stockpile {
    food: u32,
    wood: u32,
    stone: u32,
    gold: u32,
}

/// Scores fall off as a resource piles up, so the agent rotates through them.
fn scarcity(base: f32, held: u32) -> f32 {
    base / (1.0 + held as f32)
}

struct CollectFood;
struct CollectWood;
struct CollectStone;
struct CollectGold;

impl Action<Stockpile> for CollectFood {
    fn score(&self, state: &Stockpile) -> f32 {
        scarcity(50.0, state.food)
    }

    fn apply(&self, state: &mut Stockpile) {
        state.food += 1;
    }

    fn name(&self) -> &'static str {
        "collect_food"
    }
}

impl Action<Stockpile> for CollectWood {
    fn score(&self, state: &Stockpile) -> f32 {
        scarcity(150.0, state.wood)
    }

    fn apply(&self, state: &mut Stockpile) {
        state.wood += 1;
    }

    fn name(&self) -> &'static str {
        "collect_wood"
    }
}

impl Action<Stockpile> for CollectStone {
    fn score(&self, _state: &Stockpile) -> f32 {
        -10.0
    }

    fn apply(&self, state: &mut Stockpile) {
        state.stone += 1;
    }

    fn name(&self) -> &'static str {
        "collect_stone"
    }
}

impl Action<Stockpile> for CollectGold {
    fn score(&self, state: &Stockpile) -> f32 {
        scarcity(75.0, state.gold)
    }

    fn apply(&self, state: &mut Stockpile) {
        state.gold += 1;
    }

    fn name(&self) -> &'static str {
        "collect_gold"
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<EvaluatorConfig> {
    let Some(path) = path else {
        return Ok(EvaluatorConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let evaluator = Evaluator::new(action_list![
        CollectFood,
        CollectWood,
        CollectStone,
        CollectGold,
    ])
    .with_config(config)?;

    let mut stockpile = Stockpile::default();
    let mut trace = TraceLog::default();

    for tick in 0..args.ticks {
        match evaluator.run_traced(&mut stockpile, &mut trace) {
            Some(decision) => {
                tracing::info!(tick, action = decision.name, score = decision.score, "decided")
            }
            None => tracing::info!(tick, "no action taken"),
        }
    }

    println!("{stockpile:?}");
    if args.trace {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    }

    Ok(())
}
