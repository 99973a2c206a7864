//! Core domain models for pets and their shared routines
//!
//! Architecture: Rich Domain Models - Pets are entities with behavior, not just data
//! - The `Pet` trait is the capability set every animal satisfies
//! - Feeding is shared through a provided method, vocalization is per kind
//! - `PetKind` names the closed set of built-in kinds for configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability set shared by every pet-like entity
///
/// Implementors supply `name` and `speak`. `feed` has a shared default that
/// implementors may override, and `species` falls back to `"pet"`.
pub trait Pet {
    /// Name assigned at construction
    fn name(&self) -> &str;

    /// Short lowercase label for the kind of animal
    fn species(&self) -> &'static str {
        "pet"
    }

    /// Vocalization line for this pet
    fn speak(&self) -> String;

    /// Feeding line for this pet
    fn feed(&self) -> String {
        format!("{} has been fed.", self.name())
    }
}

impl fmt::Debug for dyn Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pet")
            .field("name", &self.name())
            .field("species", &self.species())
            .finish()
    }
}

/// A dog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    name: String,
}

impl Dog {
    /// Create a new dog with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Pet for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> &'static str {
        PetKind::Dog.as_str()
    }

    fn speak(&self) -> String {
        format!("{} says: Woof!", self.name)
    }
}

/// A cat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
}

impl Cat {
    /// Create a new cat with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Pet for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> &'static str {
        PetKind::Cat.as_str()
    }

    fn speak(&self) -> String {
        format!("{} says: Meow!", self.name)
    }
}

/// Built-in pet kinds that can be named in a roster configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Dog,
    Cat,
}

impl PetKind {
    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }

    /// Construct a pet of this kind
    pub fn build(self, name: impl Into<String>) -> Box<dyn Pet> {
        match self {
            Self::Dog => Box::new(Dog::new(name)),
            Self::Cat => Box::new(Cat::new(name)),
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
