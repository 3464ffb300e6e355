// 🏛️ Holding Entity - top of the ownership hierarchy
//
// A holding may legally own zero companies.

use super::company::Company;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,

    #[serde(default)]
    pub companies: Vec<Company>,
}

impl Holding {
    pub fn new(name: impl Into<String>, companies: Vec<Company>) -> Self {
        Holding {
            name: name.into(),
            companies,
        }
    }

    pub fn has_companies(&self) -> bool {
        !self.companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_without_companies() {
        let holding = Holding::new("Empty", vec![]);
        assert!(!holding.has_companies());

        let holding = Holding::new("Nestle", vec![Company::new("Nespresso", vec![])]);
        assert!(holding.has_companies());
    }

    #[test]
    fn test_holding_deserializes_nested() {
        let json = r#"{
            "name": "Coca-Cola",
            "companies": [
                { "name": "Fanta", "users": [] },
                { "name": "Sprite" }
            ]
        }"#;

        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.companies.len(), 2);
        assert!(holding.companies[1].users.is_empty());
    }
}
