//! Deep merge for YAML settings values.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (not merged)
//! - Null values in overlay keep the base value
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values, overlay taking precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    // `python:` with no value means "use the default"
                    continue;
                }
                let merged = match base_map.get(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                result.insert(key.clone(), merged);
            }

            Value::Mapping(result)
        }

        (base, Value::Null) => base.clone(),

        (_, overlay) => overlay.clone(),
    }
}

/// Merge several layers in order (later overrides earlier).
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let result = deep_merge(&yaml("python: python3"), &yaml("python: /usr/bin/python3.12"));
        assert_eq!(result["python"], "/usr/bin/python3.12");
    }

    #[test]
    fn base_keys_survive() {
        let result = deep_merge(
            &yaml("python: python3\nreadme: README.md"),
            &yaml("readme: docs/README.md"),
        );
        assert_eq!(result["python"], "python3");
        assert_eq!(result["readme"], "docs/README.md");
    }

    #[test]
    fn null_keeps_base_value() {
        let result = deep_merge(&yaml("python: python3"), &yaml("python:"));
        assert_eq!(result["python"], "python3");
    }

    #[test]
    fn null_document_keeps_base() {
        let result = deep_merge(&yaml("python: python3"), &Value::Null);
        assert_eq!(result["python"], "python3");
    }

    #[test]
    fn nested_mappings_merge() {
        let result = deep_merge(
            &yaml("a:\n  x: 1\n  y: 2"),
            &yaml("a:\n  y: 3"),
        );
        assert_eq!(result["a"]["x"], 1);
        assert_eq!(result["a"]["y"], 3);
    }

    #[test]
    fn sequences_are_replaced() {
        let result = deep_merge(&yaml("l: [a, b]"), &yaml("l: [c]"));
        assert_eq!(result["l"].as_sequence().unwrap().len(), 1);
    }

    #[test]
    fn merge_layers_applies_in_order() {
        let result = merge_layers(&[yaml("k: 1"), yaml("k: 2"), yaml("k: 3")]);
        assert_eq!(result["k"], 3);
    }
}
