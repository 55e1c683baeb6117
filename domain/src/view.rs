//! Serializable read models handed to the outside world.

use serde::Serialize;

use crate::Part;

/// Every part with the total count, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartsListing {
    pub total: usize,
    pub parts: Vec<Part>,
}

/// Short status report about the inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub status: String,
    pub total_parts: usize,
    pub service: String,
    pub version: String,
}

impl InventorySummary {
    pub(crate) fn for_total(total_parts: usize) -> Self {
        Self {
            status: "OK".into(),
            total_parts,
            service: "garage".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Garage;

    #[test]
    fn listing_json_shape() {
        let mut g = Garage::new();
        g.add_part("Spark Plug", "SP 456", 10);
        let json = serde_json::to_value(g.listing()).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["parts"][0]["id"], 1);
        assert_eq!(json["parts"][0]["part_number"], "SP 456");
    }

    #[test]
    fn summary_json_shape() {
        let g = Garage::new();
        let json = serde_json::to_value(g.summary()).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["total_parts"], 0);
        assert_eq!(json["service"], "garage");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
