//! Observability for the marketplace workloads.
//!
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent field attachment
//! - `LogSink` - Where entries go (stderr for Spin, memory for tests)

mod logging;

pub use logging::*;

// Re-export RequestId from market-core for convenience
pub use market_core::RequestId;
