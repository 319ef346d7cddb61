use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// String keyed container of saved values
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle(BTreeMap<String, Value>);

impl Bundle {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    fn put(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn put_long_array(&mut self, key: &str, values: &[i64]) {
        self.put(key, Value::from(values.to_vec()));
    }

    /// Returns `None` if `key` is missing or does not hold an array of 64-bit
    /// integers
    pub fn get_long_array(&self, key: &str) -> Option<Vec<i64>> {
        let array = self.0.get(key)?.as_array()?;
        let mut values = Vec::with_capacity(array.len());
        for value in array {
            match value.as_i64() {
                Some(value) => values.push(value),
                None => {
                    warn!("Bundle value for '{}' is not a long array: {}", key, value);
                    return None;
                }
            }
        }
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn long_array() {
        let mut bundle = Bundle::new();
        bundle.put_long_array("selection", &[5, i64::MIN, i64::MAX]);
        assert_eq!(
            bundle.get_long_array("selection"),
            Some(vec![5, i64::MIN, i64::MAX])
        );
        assert_eq!(bundle.get_long_array("missing"), None);
    }

    #[test]
    fn long_array_wrong_type() {
        let mut bundle = Bundle::new();
        bundle.put("string", json!("5"));
        bundle.put("mixed", json!([1, "2"]));
        bundle.put("float", json!([1.5]));
        assert_eq!(bundle.get_long_array("string"), None);
        assert_eq!(bundle.get_long_array("mixed"), None);
        assert_eq!(bundle.get_long_array("float"), None);
    }

    #[test]
    fn json_format() {
        let mut bundle = Bundle::new();
        bundle.put_long_array("selection", &[5, 9]);
        assert_eq!(
            serde_json::to_string(&bundle).unwrap(),
            r#"{"selection":[5,9]}"#
        );
        assert_eq!(
            serde_json::from_str::<Bundle>(r#"{"selection":[5,9]}"#).unwrap(),
            bundle
        );
        assert!(serde_json::from_str::<Bundle>("[5, 9]").is_err());
    }
}
