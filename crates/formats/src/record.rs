//! Record data structure for dataset rows

use serde_json::Value;

/// A single record from a dataset
#[derive(Debug, Clone)]
pub struct Record {
    /// The JSON data for this record
    pub data: Value,
    /// Source line number (1-based)
    pub source_line: usize,
}

impl Record {
    /// Create a new record
    pub fn new(data: Value, source_line: usize) -> Self {
        Self { data, source_line }
    }

    /// Borrow the text under `field`, if present and a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    /// Attach a numeric field to the record, replacing any existing value.
    pub fn set_number(&mut self, field: &str, value: f64) {
        if let Value::Object(map) = &mut self.data {
            map.insert(field.to_string(), Value::from(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_creation() {
        let data = json!({"text": "hello", "label": "card_arrival"});
        let record = Record::new(data.clone(), 1);
        assert_eq!(record.data, data);
        assert_eq!(record.source_line, 1);
    }

    #[test]
    fn test_text_field_access() {
        let record = Record::new(json!({"text": "hello", "id": 3}), 1);
        assert_eq!(record.text("text"), Some("hello"));
        assert_eq!(record.text("id"), None); // not a string
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn test_set_number() {
        let mut record = Record::new(json!({"text": "hello"}), 1);
        record.set_number("quality_weight", 0.75);
        assert_eq!(record.data["quality_weight"], json!(0.75));
    }

    #[test]
    fn test_set_number_on_non_object_is_noop() {
        let mut record = Record::new(json!("bare string"), 1);
        record.set_number("quality_weight", 0.5);
        assert_eq!(record.data, json!("bare string"));
    }
}
