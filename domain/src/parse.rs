//! Lightweight helpers turning user input into domain values. Keep logic
//! minimal and deterministic; part fields themselves are never validated.

use crate::{CoreError, PartId};

/// Parse a decimal part id. Surrounding whitespace is ignored.
pub fn parse_part_id(s: &str) -> Result<PartId, CoreError> {
    s.trim()
        .parse::<u64>()
        .map(PartId::new)
        .map_err(|_| CoreError::InvalidPartId(s.to_string()))
}

/// Parse a decimal quantity. Negative values are accepted.
pub fn parse_quantity(s: &str) -> Result<i64, CoreError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::InvalidQuantity(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_id_parsing() {
        assert_eq!(parse_part_id("2"), Ok(PartId::new(2)));
        assert_eq!(parse_part_id(" 99 "), Ok(PartId::new(99)));
        assert!(matches!(parse_part_id(""), Err(CoreError::InvalidPartId(_))));
        assert!(matches!(parse_part_id("-1"), Err(CoreError::InvalidPartId(_))));
        assert!(matches!(parse_part_id("two"), Err(CoreError::InvalidPartId(_))));
    }

    #[test]
    fn quantity_parsing_is_permissive_about_sign() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity("-3"), Ok(-3));
        assert_eq!(parse_quantity("0"), Ok(0));
        assert!(matches!(parse_quantity("many"), Err(CoreError::InvalidQuantity(_))));
    }
}
