//! Surfrank Core Library
//!
//! PageRank for a fully materialized link graph, modeled as a random surfer
//! who follows links with probability `d` and otherwise jumps to any page.
//!
//! # Features
//! - Immutable corpus graph with deterministic page ordering
//! - Monte Carlo estimation from seeded or caller-supplied randomness
//! - Power iteration with dangling-page redistribution and a safety cap
//! - Optional parallel sweeps behind the `parallel` feature

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{Error, Result, SurfRankError};
pub use graph::{Graph, GraphBuilder, Page};
pub use rank::{
    iterate, sample, sample_seeded, transition, Distribution, IterationReport, IterativeRanker,
    SamplingRanker,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "surfrank";
