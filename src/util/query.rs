use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Query string parameters. Lookups also accept the key with its first
/// letter capitalised, so `genre` finds `Genre=`.
#[derive(Debug)]
pub struct QueryParams {
    map: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(QueryParams { map })
    }
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(val) = self.map.get(key) {
            return Some(val);
        }

        let mut chars = key.chars();
        let first = chars.next()?;
        if !first.is_ascii_lowercase() {
            return None;
        }
        let capitalised: String = first.to_ascii_uppercase().to_string() + chars.as_str();
        self.map.get(&capitalised).map(|x| x.as_str())
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|s| s.trim().parse::<usize>().ok())
    }
}

#[cfg(test)]
impl From<HashMap<String, String>> for QueryParams {
    fn from(map: HashMap<String, String>) -> Self {
        Self { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    #[test]
    fn test_capitalised_lookup() {
        let p = params(&[("Genre", "Drama"), ("limit", "3")]);
        assert_eq!(p.get("genre"), Some("Drama"));
        assert_eq!(p.get_usize("limit"), Some(3));
        assert_eq!(p.get("other"), None);
    }

    #[test]
    fn test_bad_number() {
        let p = params(&[("limit", "many")]);
        assert_eq!(p.get_usize("limit"), None);
    }
}
