use serde::{Deserialize, Serialize};

/// One slice of the facts-per-entity chart: an entity and the number of
/// facts that mention it, with the colour the backend assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityData {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type", default)]
    pub entity_type: String,
}

impl EntityData {
    /// Sum of all drawable (positive) slice values.
    pub fn total(slices: &[EntityData]) -> f64 {
        slices.iter().filter(|s| s.is_drawable()).map(|s| s.value).sum()
    }

    /// Slices with a zero, negative or non-finite value are skipped when drawing.
    pub fn is_drawable(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }

    /// Share of `total` as a percentage, 0 when there is nothing to divide.
    pub fn percentage_of(&self, total: f64) -> f64 {
        if total <= 0.0 || !self.is_drawable() {
            return 0.0;
        }
        self.value / total * 100.0
    }
}

/// An entity extracted from a matter's documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatterEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub review_status: String,
    #[serde(default)]
    pub related_facts_count: u32,
}

/// Paginated entity listing for a matter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatterEntityList {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub entities: Vec<MatterEntity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(name: &str, value: f64) -> EntityData {
        EntityData {
            name: name.to_string(),
            value,
            color: "#8b5cf6".to_string(),
            entity_type: "person".to_string(),
        }
    }

    #[test]
    fn deserializes_backend_slice() {
        let json = r##"[{"name":"Acme Corp","value":12,"color":"#1e40af","type":"organization"}]"##;
        let slices: Vec<EntityData> = serde_json::from_str(json).unwrap();
        assert_eq!(slices[0].name, "Acme Corp");
        assert_eq!(slices[0].value, 12.0);
        assert_eq!(slices[0].entity_type, "organization");
    }

    #[test]
    fn total_ignores_non_drawable_slices() {
        let slices = vec![slice("a", 3.0), slice("b", 0.0), slice("c", -2.0), slice("d", 1.0)];
        assert_eq!(EntityData::total(&slices), 4.0);
    }

    #[test]
    fn percentage_of_handles_zero_total() {
        assert_eq!(slice("a", 3.0).percentage_of(0.0), 0.0);
        assert_eq!(slice("a", 1.0).percentage_of(4.0), 25.0);
        assert_eq!(slice("a", f64::NAN).percentage_of(4.0), 0.0);
    }

    #[test]
    fn matter_entity_reads_type_field() {
        let json = r#"{"id":"e1","name":"Jane Doe","type":"person","related_facts_count":4,"attributes":{}}"#;
        let entity: MatterEntity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.entity_type, "person");
        assert_eq!(entity.related_facts_count, 4);
        assert!(entity.role.is_empty());
    }
}
