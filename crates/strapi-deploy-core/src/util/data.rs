//! YAML and JSON data handling utilities.

use serde_json::Value;
use strapi_deploy_types::{DeployError, Result};

/// Load YAML from string.
pub fn load_yaml(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(DeployError::Yaml)
}

/// Deep merge two values.
///
/// Recursively merges objects, with overlay values taking precedence.
/// Arrays and scalars in the overlay replace the base value outright.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                if let Some(base_val) = base_map.get_mut(&key) {
                    let current = std::mem::take(base_val);
                    *base_val = deep_merge(current, overlay_val);
                } else {
                    base_map.insert(key, overlay_val);
                }
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

/// Get value at a path in dotted notation.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            Value::Array(arr) => {
                let index: usize = part.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_nested_objects() {
        let base = json!({"env": {"NODE_ENV": "production", "PORT": 1337}, "watch": false});
        let overlay = json!({"env": {"PORT": 8080}, "instances": 2});

        let merged = deep_merge(base, overlay);
        assert_eq!(
            merged,
            json!({"env": {"NODE_ENV": "production", "PORT": 8080}, "watch": false, "instances": 2})
        );
    }

    #[test]
    fn test_deep_merge_replaces_arrays() {
        let merged = deep_merge(json!({"a": [1, 2, 3]}), json!({"a": [4]}));
        assert_eq!(merged, json!({"a": [4]}));
    }

    #[test]
    fn test_get_path() {
        let value = json!({"apps": [{"name": "strapi-cms", "env": {"PORT": 1337}}]});
        assert_eq!(get_path(&value, "apps.0.name"), Some(&json!("strapi-cms")));
        assert_eq!(get_path(&value, "apps.0.env.PORT"), Some(&json!(1337)));
        assert_eq!(get_path(&value, "apps.1.name"), None);
        assert_eq!(get_path(&value, "apps.0.name.len"), None);
    }

    #[test]
    fn test_load_yaml_error() {
        assert!(matches!(load_yaml("key: [unclosed"), Err(DeployError::Yaml(_))));
    }
}
