//! Domain library for the garage parts inventory.
//!
//! Holds the domain types, the in-memory `Garage` and the error definitions.
//! Keep CLI and IO concerns out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier assigned to a part by the garage that stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u64);

impl PartId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PartId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for PartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single inventory record.
///
/// Parts are only created by [`garage::Garage::add_part`] and never change
/// afterwards, so the fields are read through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Part {
    id: PartId,
    name: String,
    part_number: String,
    /// Stock on hand. Not validated; negative values are kept as given.
    quantity: i64,
}

impl Part {
    pub(crate) fn new(id: PartId, name: String, part_number: String, quantity: i64) -> Self {
        Self {
            id,
            name,
            part_number,
            quantity,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog code. Not unique across the garage.
    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Part(Id={}, Name={}, PartNumber={}, Quantity={})",
            self.id, self.name, self.part_number, self.quantity
        )
    }
}

/// Core domain errors. Only raised while turning user input into domain
/// values; the garage operations themselves never fail.
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    InvalidPartId(String),
    InvalidQuantity(String),
    UnknownSampleSet(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidPartId(raw) => write!(f, "invalid part id: {}", raw),
            CoreError::InvalidQuantity(raw) => write!(f, "invalid quantity: {}", raw),
            CoreError::UnknownSampleSet(raw) => write!(f, "unknown sample set: {}", raw),
        }
    }
}

impl Error for CoreError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{}", pkg, ver)
}

pub mod garage;
pub mod parse;
pub mod sample;
pub mod view;

pub use garage::Garage;
