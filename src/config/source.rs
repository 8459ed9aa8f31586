#![forbid(unsafe_code)]

//! Key/value configuration accessor consumed by the rule catalog

use std::collections::{BTreeMap, HashMap};

/// Read-only lookup from a dotted config key to its string value
///
/// Missing keys resolve to the empty string. Rules fail closed on an empty
/// value, so an absent threshold can never silently pass.
pub trait ConfigSource {
    fn get_string(&self, key: &str) -> String;
}

impl ConfigSource for HashMap<String, String> {
    fn get_string(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_default()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_default()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_source() {
        let mut map = HashMap::new();
        map.insert("rules.lowestEfficiency".to_string(), "0.9".to_string());
        assert_eq!(map.get_string("rules.lowestEfficiency"), "0.9");
        assert_eq!(map.get_string("rules.missing"), "");
    }

    #[test]
    fn test_btreemap_source() {
        let mut map = BTreeMap::new();
        map.insert("rules.highestWastedBytes".to_string(), "10MB".to_string());
        assert_eq!(map.get_string("rules.highestWastedBytes"), "10MB");
        assert_eq!(map.get_string(""), "");
    }

    #[test]
    fn test_reference_source() {
        let map: HashMap<String, String> = HashMap::new();
        let source: &dyn ConfigSource = &map;
        assert_eq!(source.get_string("rules.anything"), "");
        assert_eq!((&map).get_string("rules.anything"), "");
    }
}
