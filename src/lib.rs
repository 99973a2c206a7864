//! Pet Roster - A roster of pets sharing a feeding routine with per-kind voices
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure pet behavior lives in the domain layer
//! - Configuration and report formatting sit at the edges
//! - The roster drives each pet through speak, feed and a blank separator

pub mod config;
pub mod domain;
pub mod report;
pub mod roster;

// Re-export main types for convenient access
pub use domain::errors::{RosterError, RosterResult};
pub use domain::pets::{Cat, Dog, Pet, PetKind};

pub use config::{ConfigBuilder, PetEntry, RosterConfig};

pub use report::{OutputFormat, ReportFormatter};

pub use roster::{FeedingRecord, Roster};

use std::io::Write;

/// Drive the default roster, writing the routine to `writer`
pub fn run_default<W: Write>(writer: W) -> RosterResult<()> {
    Roster::with_defaults().run(writer)
}

/// Drive the roster described by `config` in the given format
pub fn run_with_config<W: Write>(
    config: &RosterConfig,
    format: OutputFormat,
    writer: W,
) -> RosterResult<()> {
    let roster = Roster::from_config(config);
    ReportFormatter::new().write_roster(&roster, format, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_default() {
        let mut out = Vec::new();
        run_default(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Fido says: Woof!\nFido has been fed.\n\nJasper says: Meow!\nJasper has been fed.\n\n"
        );
    }

    #[test]
    fn test_run_with_config() {
        let config = ConfigBuilder::new()
            .add_pet(PetKind::Cat, "Salem")
            .add_pet(PetKind::Dog, "Lassie")
            .build()
            .unwrap();

        let mut out = Vec::new();
        run_with_config(&config, OutputFormat::Human, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Salem says: Meow!\nSalem has been fed.\n\nLassie says: Woof!\nLassie has been fed.\n\n"
        );
    }
}
