//! Core abstractions for the marketplace edge workloads.
//!
//! This crate provides the fundamental types shared by every workload:
//! - `RequestContext` - Typed request parameters
//! - `Route` - Parsed marketplace routes (SEO slug, legacy id, transport grid)
//! - `Language` - UI language and its negotiation
//! - `MarketConfig` - Workload configuration
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking

mod config;
mod context;
mod language;
mod lifecycle;
mod route;
mod workload;

pub use config::*;
pub use context::*;
pub use language::*;
pub use lifecycle::*;
pub use route::*;
pub use workload::*;
