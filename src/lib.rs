// 特定の警告を無効化
#![allow(clippy::redundant_closure)]
#![allow(clippy::needless_return)]

pub mod coerce;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod io;
pub mod na;
pub mod pipeline;
pub mod scrub;

// Re-export commonly used types
pub use dataset::{Dataset, Entity};
pub use error::PrepRSError;
pub use extract::{extract, ExtractOptions, FeatureMatrix};
pub use na::{DataValue, NA};
pub use pipeline::{PrepConfig, PrepOutput};
pub use scrub::{scrub, Constraint, ScrubEntry, ScrubReport};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
