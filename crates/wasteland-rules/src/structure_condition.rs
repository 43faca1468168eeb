//! The `wasteland:allow_external_structures` data condition.
//!
//! Data-driven generation rules reference this condition by name to gate
//! external structures out of the wasteland. It carries no payload; its value
//! is read from the live configuration every time it is evaluated, not baked
//! in at (de)serialization time.

use serde_json::{json, Value};
use wasteland_config::WastelandConfig;
use wasteland_core::{Identifier, MOD_ID};

/// Condition id as it appears in data files.
pub const CONDITION_ID: &str = "wasteland:allow_external_structures";

/// Stateless predicate over the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowExternalStructures;

impl AllowExternalStructures {
    pub fn id() -> Identifier {
        Identifier::new(MOD_ID, "allow_external_structures")
    }

    /// The live configuration value at evaluation time.
    pub fn evaluate(&self, config: &WastelandConfig) -> bool {
        config.worldgen.allow_external_structures
    }

    /// Serialize for data files: the condition id and nothing else.
    pub fn to_json(&self) -> Value {
        json!({ "condition": CONDITION_ID })
    }

    /// Parse from a data file entry, rejecting foreign condition ids.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        match value.get("condition").and_then(Value::as_str) {
            Some(CONDITION_ID) => Ok(Self),
            Some(other) => Err(format!("unexpected condition id: {other}")),
            None => Err("missing condition id".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_matches_data_files() {
        assert_eq!(AllowExternalStructures::id().to_string(), CONDITION_ID);
    }

    #[test]
    fn json_roundtrip_has_no_payload() {
        let condition = AllowExternalStructures;
        let value = condition.to_json();
        assert_eq!(value, json!({ "condition": CONDITION_ID }));
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(AllowExternalStructures::from_json(&value).unwrap(), condition);
    }

    #[test]
    fn foreign_condition_rejected() {
        let value = json!({ "condition": "othermod:other_condition" });
        assert!(AllowExternalStructures::from_json(&value).is_err());
        assert!(AllowExternalStructures::from_json(&json!({})).is_err());
    }

    #[test]
    fn evaluates_live_config_value() {
        let condition = AllowExternalStructures;
        let mut config = WastelandConfig::default();
        assert!(!condition.evaluate(&config));

        // Flipping the config after (de)serialization changes the answer.
        let revived = AllowExternalStructures::from_json(&condition.to_json()).unwrap();
        config.worldgen.allow_external_structures = true;
        assert!(revived.evaluate(&config));
    }
}
