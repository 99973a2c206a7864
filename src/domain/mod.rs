//! Domain layer for Pet Roster
//!
//! Architecture: Domain Model - Pure pet behavior with no knowledge of output or configuration
//! - Contains the pet capability set and the built-in kinds
//! - Error types shared by the outer layers live alongside

pub mod errors;
pub mod pets;

// Re-export main domain types for convenience
pub use errors::*;
pub use pets::*;
