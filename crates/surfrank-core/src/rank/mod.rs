//! Random-surfer ranking engines
//!
//! Two independent estimators of the same stationary distribution:
//! - [`sampling`]: Monte Carlo walk driven by an injected random source
//! - [`iterative`]: deterministic power iteration to a fixed threshold
//!
//! Both are built on the one-step [`transition`] model.

mod distribution;
pub mod iterative;
pub mod sampling;
pub mod transition;

pub use distribution::Distribution;
pub use iterative::{iterate, IterationReport, IterativeRanker};
pub use sampling::{sample, sample_seeded, SamplingRanker};
pub use transition::transition;
