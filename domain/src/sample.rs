//! Seed data for demos.

use crate::{CoreError, Garage};

/// Named set of parts used to seed a fresh garage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SampleSet {
    /// Nothing is added.
    Empty,
    /// Three everyday consumables.
    #[default]
    Basic,
    /// Ten parts with catalog numbers in `ABC-123` form.
    Extended,
}

const BASIC: &[(&str, &str, i64)] = &[
    ("Oil Filter", "OC 90", 5),
    ("Air Filter", "AF 123", 3),
    ("Spark Plug", "SP 456", 10),
];

const EXTENDED: &[(&str, &str, i64)] = &[
    ("Oil Filter", "OIL-001", 5),
    ("Air Filter", "AIR-002", 3),
    ("Spark Plug", "SPK-003", 10),
    ("Brake Pads", "BRK-004", 4),
    ("Battery", "BAT-005", 2),
    ("Tire", "TIR-006", 8),
    ("Timing Belt", "TIM-007", 6),
    ("Brake Fluid", "BRF-008", 3),
    ("Antifreeze", "ANT-009", 7),
    ("Windshield", "WIN-010", 1),
];

impl SampleSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleSet::Empty => "none",
            SampleSet::Basic => "basic",
            SampleSet::Extended => "extended",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SampleSet::Empty),
            "basic" => Ok(SampleSet::Basic),
            "extended" => Ok(SampleSet::Extended),
            _ => Err(CoreError::UnknownSampleSet(s.to_string())),
        }
    }

    fn entries(&self) -> &'static [(&'static str, &'static str, i64)] {
        match self {
            SampleSet::Empty => &[],
            SampleSet::Basic => BASIC,
            SampleSet::Extended => EXTENDED,
        }
    }
}

/// Add every part of `set` to `garage` in order; returns how many were added.
pub fn seed(garage: &mut Garage, set: SampleSet) -> usize {
    let entries = set.entries();
    for (name, number, quantity) in entries {
        garage.add_part(*name, *number, *quantity);
    }
    tracing::debug!(set = set.as_str(), added = entries.len(), "garage seeded");
    entries.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartId;

    #[test]
    fn basic_scenario() {
        let mut g = Garage::new();
        assert_eq!(seed(&mut g, SampleSet::Basic), 3);

        let ids: Vec<u64> = g.list_parts().iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let air = g.find_part(PartId::new(2)).expect("air filter");
        assert_eq!(
            air.to_string(),
            "Part(Id=2, Name=Air Filter, PartNumber=AF 123, Quantity=3)"
        );
        assert!(g.find_part(PartId::new(99)).is_none());
    }

    #[test]
    fn extended_set_has_ten_parts() {
        let mut g = Garage::new();
        assert_eq!(seed(&mut g, SampleSet::Extended), 10);
        let last = g.list_parts().last().expect("non-empty");
        assert_eq!(last.id(), PartId::new(10));
        assert_eq!(last.part_number(), "WIN-010");
    }

    #[test]
    fn none_set_leaves_garage_empty() {
        let mut g = Garage::new();
        assert_eq!(seed(&mut g, SampleSet::Empty), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn seeding_twice_keeps_counting() {
        let mut g = Garage::new();
        seed(&mut g, SampleSet::Basic);
        seed(&mut g, SampleSet::Basic);
        assert_eq!(g.len(), 6);
        assert_eq!(g.next_id(), PartId::new(7));
    }

    #[test]
    fn parse_names() {
        assert_eq!(SampleSet::parse("basic"), Ok(SampleSet::Basic));
        assert_eq!(SampleSet::parse("EXTENDED"), Ok(SampleSet::Extended));
        assert_eq!(SampleSet::parse(" none "), Ok(SampleSet::Empty));
        assert!(matches!(
            SampleSet::parse("everything"),
            Err(CoreError::UnknownSampleSet(_))
        ));
        assert_eq!(SampleSet::default(), SampleSet::Basic);
    }
}
