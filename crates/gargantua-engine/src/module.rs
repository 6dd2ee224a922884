//! The module entity surfaced by the listing endpoint.

use serde::Deserialize;

/// A named backend-registered unit.
///
/// Only `name` is read; any other fields in the listing payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Module {
    /// Module name, unique within a listing.
    pub name: String,
}

impl Module {
    /// Create a module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Link target for this module's detail view.
    pub fn href(&self) -> String {
        format!("/{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href() {
        assert_eq!(Module::new("user_profile").href(), "/user_profile");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let module: Module =
            serde_json::from_str(r#"{"name":"orders","version":3,"owner":"billing"}"#).unwrap();
        assert_eq!(module, Module::new("orders"));
    }

    #[test]
    fn test_missing_name_rejected() {
        let result: Result<Module, _> = serde_json::from_str(r#"{"title":"orders"}"#);
        assert!(result.is_err());
    }
}
