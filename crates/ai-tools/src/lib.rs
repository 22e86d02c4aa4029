//! Tooling primitives for deterministic utility AI.
//!
//! This crate is intentionally lightweight and engine-agnostic. It only defines the data recorded
//! while a decision is made; rendering and inspection belong in dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceKind, TraceLog, TraceSink, VecTraceSink};
