use tracing::{debug, trace};

use crate::view::{InventorySummary, PartsListing};
use crate::{Part, PartId};

/// In-memory owner of all parts.
///
/// Parts are kept in insertion order next to a monotonically increasing
/// counter that hands out ids starting at 1. Nothing is ever removed, so an
/// id is never reused and every stored id is below `next_id`.
#[derive(Debug)]
pub struct Garage {
    parts: Vec<Part>,
    next_id: u64,
}

impl Garage {
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            next_id: 1,
        }
    }

    fn reserve_id(&mut self) -> PartId {
        let id = PartId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a new part and return a copy of what was stored.
    ///
    /// Always succeeds: no validation, no duplicate detection, no capacity
    /// limit.
    pub fn add_part<N, P>(&mut self, name: N, part_number: P, quantity: i64) -> Part
    where
        N: Into<String>,
        P: Into<String>,
    {
        let id = self.reserve_id();
        let part = Part::new(id, name.into(), part_number.into(), quantity);
        debug!(part_id = %id, part_number = %part.part_number(), quantity, "part added");
        self.parts.push(part.clone());
        part
    }

    /// All parts in the order they were added.
    pub fn list_parts(&self) -> &[Part] {
        &self.parts
    }

    /// Find a part by id with a linear scan. `None` is a normal outcome.
    pub fn find_part(&self, id: PartId) -> Option<&Part> {
        let found = self.parts.iter().find(|p| p.id() == id);
        match found {
            Some(_) => trace!(part_id = %id, "find hit"),
            None => trace!(part_id = %id, "find miss"),
        }
        found
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The id the next `add_part` call will assign.
    pub fn next_id(&self) -> PartId {
        PartId::new(self.next_id)
    }

    /// Owned snapshot of every part together with the total count.
    pub fn listing(&self) -> PartsListing {
        PartsListing {
            total: self.parts.len(),
            parts: self.parts.clone(),
        }
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::for_total(self.parts.len())
    }
}

impl Default for Garage {
    fn default() -> Self {
        Self::new()
    }
}
