//! Link graph over a corpus of pages

mod builder;
mod corpus;

pub use builder::GraphBuilder;
pub use corpus::{Graph, Page};
