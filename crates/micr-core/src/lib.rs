pub mod error;
pub mod types;

pub mod micr;

pub mod institution;

pub mod enrichment;

pub use error::MicrError;
pub use types::*;

/// Standard result type for the fallible edges of the crate.
///
/// The parsing and validation operations themselves never fail; they return
/// fully-populated result structs with accumulated diagnostics instead.
pub type MicrResult<T> = Result<T, MicrError>;
