pub mod error;
pub mod types;

#[cfg(feature = "risk")]
pub mod risk;

#[cfg(feature = "portfolio")]
pub mod portfolio;

#[cfg(feature = "returns")]
pub mod returns;

#[cfg(feature = "lending")]
pub mod lending;

pub use error::EngineError;
pub use types::*;

/// Standard result type for all engine operations
pub type EngineResult<T> = Result<T, EngineError>;
