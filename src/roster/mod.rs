//! Roster driver that walks pets through their routine
//!
//! Architecture: Application Service - The roster owns an ordered sequence of pets
//! - Each pet speaks, is fed, then a blank separator line follows
//! - Order is insertion order and is never rearranged

use crate::config::RosterConfig;
use crate::domain::errors::RosterResult;
use crate::domain::pets::Pet;
use serde::Serialize;
use std::io::Write;

/// The lines produced for one pet during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedingRecord {
    pub name: String,
    pub species: String,
    pub speech: String,
    pub fed: String,
}

/// Ordered, exclusively owned sequence of pets
#[derive(Debug, Default)]
pub struct Roster {
    pets: Vec<Box<dyn Pet>>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self { pets: Vec::new() }
    }

    /// Create the default roster of Fido the dog and Jasper the cat
    pub fn with_defaults() -> Self {
        Self::from_config(&RosterConfig::default())
    }

    /// Create a roster from a loaded configuration
    pub fn from_config(config: &RosterConfig) -> Self {
        let roster = Self { pets: config.build_pets() };
        tracing::debug!("Assembled roster with {} pet(s)", roster.len());
        roster
    }

    /// Append a pet to the end of the roster
    pub fn push(&mut self, pet: Box<dyn Pet>) {
        tracing::debug!("Adding {} '{}' to roster", pet.species(), pet.name());
        self.pets.push(pet);
    }

    /// Builder-style variant of [`Roster::push`]
    pub fn with_pet(mut self, pet: impl Pet + 'static) -> Self {
        self.push(Box::new(pet));
        self
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Iterate over pets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Pet> {
        self.pets.iter().map(|pet| pet.as_ref())
    }

    /// Collect what each pet says and how it is fed, in order
    pub fn feeding_log(&self) -> Vec<FeedingRecord> {
        self.iter()
            .map(|pet| FeedingRecord {
                name: pet.name().to_string(),
                species: pet.species().to_string(),
                speech: pet.speak(),
                fed: pet.feed(),
            })
            .collect()
    }

    /// Walk every pet through its routine, writing to `writer`
    pub fn run<W: Write>(&self, mut writer: W) -> RosterResult<()> {
        for pet in self.iter() {
            writeln!(writer, "{}", pet.speak())?;
            writeln!(writer, "{}", pet.feed())?;
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl FromIterator<Box<dyn Pet>> for Roster {
    fn from_iter<I: IntoIterator<Item = Box<dyn Pet>>>(iter: I) -> Self {
        Self { pets: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pets::{Cat, Dog};

    const DEFAULT_OUTPUT: &str =
        "Fido says: Woof!\nFido has been fed.\n\nJasper says: Meow!\nJasper has been fed.\n\n";

    struct Hamster(String);

    impl Pet for Hamster {
        fn name(&self) -> &str {
            &self.0
        }

        fn species(&self) -> &'static str {
            "hamster"
        }

        fn speak(&self) -> String {
            format!("{} says: Squeak!", self.0)
        }
    }

    fn render(roster: &Roster) -> String {
        let mut buffer = Vec::new();
        roster.run(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_default_run_output() {
        assert_eq!(render(&Roster::with_defaults()), DEFAULT_OUTPUT);
    }

    #[test]
    fn test_empty_roster_prints_nothing() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(render(&roster), "");
    }

    #[test]
    fn test_order_is_preserved() {
        let roster = Roster::new().with_pet(Cat::new("Jasper")).with_pet(Dog::new("Fido"));

        assert_eq!(
            render(&roster),
            "Jasper says: Meow!\nJasper has been fed.\n\nFido says: Woof!\nFido has been fed.\n\n"
        );
    }

    #[test]
    fn test_new_kind_adds_one_block() {
        let mut roster = Roster::with_defaults();
        roster.push(Box::new(Hamster("Nibbles".to_string())));

        let output = render(&roster);
        assert!(output.starts_with(DEFAULT_OUTPUT));
        assert_eq!(
            &output[DEFAULT_OUTPUT.len()..],
            "Nibbles says: Squeak!\nNibbles has been fed.\n\n"
        );
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_running_twice_is_identical() {
        let roster = Roster::with_defaults();
        assert_eq!(render(&roster), render(&roster));
    }

    #[test]
    fn test_feeding_log() {
        let log = Roster::with_defaults().feeding_log();

        assert_eq!(log.len(), 2);
        assert_eq!(
            log[0],
            FeedingRecord {
                name: "Fido".to_string(),
                species: "dog".to_string(),
                speech: "Fido says: Woof!".to_string(),
                fed: "Fido has been fed.".to_string(),
            }
        );
        assert_eq!(log[1].speech, "Jasper says: Meow!");
    }

    #[test]
    fn test_collect_from_boxed_pets() {
        let roster: Roster = vec![
            Box::new(Dog::new("Odie")) as Box<dyn Pet>,
            Box::new(Cat::new("Garfield")),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = roster.iter().map(|pet| pet.name()).collect();
        assert_eq!(names, vec!["Odie", "Garfield"]);
    }
}
