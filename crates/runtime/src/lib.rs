//! Runtime orchestration for battles and boss crawls.
//!
//! This crate wires content from `battle-content` into `battle-core` battles:
//! - [`config`] reads the run configuration from the environment
//! - [`runtime`] hosts the orchestrator and builder
//! - [`crawl`] runs the boss crawl and picks each encounter
//! - [`reporter`] mirrors battle narration into `tracing`
pub mod config;
pub mod crawl;
pub mod error;
pub mod reporter;
pub mod runtime;

pub use config::{Difficulty, RunMode, RuntimeConfig};
pub use crawl::{Crawl, CrawlOutcome, EncounterPlan};
pub use error::{Result, RuntimeError};
pub use reporter::TracingReporter;
pub use runtime::{RunOutcome, Runtime, RuntimeBuilder};
