//! Operator registry
//!
//! Maps lookup names (the suffix in `field__name`) to query operators.
//! Field modules register their operators explicitly; the process-wide
//! registry is built once on first use and never mutated afterwards.

use crate::fields;
use crate::query_builder::filter::QueryOperator;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Separator between a field name and an operator name in a lookup key
pub const LOOKUP_SEPARATOR: &str = "__";

/// Lookup names of the portable operators
pub const BASE_OPERATORS: &[(&str, QueryOperator)] = &[
    ("exact", QueryOperator::Eq),
    ("ne", QueryOperator::Ne),
    ("gt", QueryOperator::Gt),
    ("gte", QueryOperator::Gte),
    ("lt", QueryOperator::Lt),
    ("lte", QueryOperator::Lte),
    ("like", QueryOperator::Like),
    ("ilike", QueryOperator::ILike),
    ("in", QueryOperator::In),
    ("not_in", QueryOperator::NotIn),
    ("isnull", QueryOperator::IsNull),
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("operator '{0}' is already registered")]
    Duplicate(String),

    #[error("invalid operator name '{0}'")]
    InvalidName(String),
}

#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, QueryOperator>,
}

static GLOBAL_REGISTRY: OnceLock<OperatorRegistry> = OnceLock::new();

impl OperatorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Base operators plus the operators of every field module
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let base = registry.register_all(BASE_OPERATORS);
        debug_assert!(base.is_ok(), "base operators conflict: {:?}", base);
        let extensions = fields::register_all(&mut registry);
        debug_assert!(extensions.is_ok(), "field operators conflict: {:?}", extensions);

        tracing::trace!("operator registry built with {} names", registry.len());
        registry
    }

    /// Shared registry used by lookups that do not pass their own
    pub fn global() -> &'static OperatorRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::with_defaults)
    }

    /// Register one name. A name can only be registered once.
    pub fn register(&mut self, name: &str, operator: QueryOperator) -> Result<(), RegistryError> {
        if !Self::is_valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.operators.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        self.operators.insert(name.to_string(), operator);
        Ok(())
    }

    pub fn register_all(&mut self, entries: &[(&str, QueryOperator)]) -> Result<(), RegistryError> {
        for (name, operator) in entries {
            self.register(name, *operator)?;
        }
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<QueryOperator> {
        self.operators.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Split `field__operator` into its parts. Keys without a registered
    /// suffix name a field compared with `exact`.
    pub fn split_lookup<'a>(&self, key: &'a str) -> (&'a str, QueryOperator) {
        if let Some((field, suffix)) = key.rsplit_once(LOOKUP_SEPARATOR) {
            if !field.is_empty() {
                if let Some(operator) = self.resolve(suffix) {
                    return (field, operator);
                }
            }
        }
        (key, QueryOperator::Eq)
    }

    /// Lowercase alphanumerics and single underscores
    fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && !name.contains(LOOKUP_SEPARATOR)
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = OperatorRegistry::new();
        registry.register("array_contains", QueryOperator::ArrayContains).unwrap();

        let err = registry
            .register("array_contains", QueryOperator::JsonbContains)
            .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("array_contains".to_string()));
        // The first registration wins
        assert_eq!(registry.resolve("array_contains"), Some(QueryOperator::ArrayContains));
    }

    #[test]
    fn test_invalid_names() {
        let mut registry = OperatorRegistry::new();
        for name in ["", "Has_Key", "a__b", "has-key", "has key"] {
            assert_eq!(
                registry.register(name, QueryOperator::Eq),
                Err(RegistryError::InvalidName(name.to_string())),
                "{}",
                name
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_defaults_register_without_conflicts() {
        let mut registry = OperatorRegistry::new();
        registry.register_all(BASE_OPERATORS).unwrap();
        fields::register_all(&mut registry).unwrap();

        assert_eq!(registry.len(), OperatorRegistry::with_defaults().len());
        assert_eq!(registry.len(), BASE_OPERATORS.len() + 13);
    }

    #[test]
    fn test_module_registration_is_not_repeatable() {
        let mut registry = OperatorRegistry::with_defaults();
        assert!(matches!(
            fields::array::register_operators(&mut registry),
            Err(RegistryError::Duplicate(_))
        ));
    }

    #[test]
    fn test_global_registry_resolves_extension_names() {
        let registry = OperatorRegistry::global();
        let expected = [
            ("array_contains", QueryOperator::ArrayContains, "@>"),
            ("array_contained_by", QueryOperator::ArrayContainedBy, "<@"),
            ("array_overlap", QueryOperator::ArrayOverlap, "&&"),
            ("contained_by", QueryOperator::ContainedBy, "<<"),
            ("contained_by_eq", QueryOperator::ContainedByEq, "<<="),
            ("contains_subnet", QueryOperator::ContainsSubnet, ">>"),
            ("contains_subnet_eq", QueryOperator::ContainsSubnetEq, ">>="),
            ("contains_or_eq", QueryOperator::ContainsOrEq, "&&"),
            ("jsonb_contains", QueryOperator::JsonbContains, "@>"),
            ("jsonb_contained_by", QueryOperator::JsonbContainedBy, "<@"),
            ("jsonb_has_key", QueryOperator::JsonbHasKey, "?"),
            ("jsonb_has_any_keys", QueryOperator::JsonbHasAnyKeys, "?|"),
            ("jsonb_has_all_keys", QueryOperator::JsonbHasAllKeys, "?&"),
        ];

        for (name, operator, symbol) in expected {
            assert_eq!(registry.resolve(name), Some(operator), "{}", name);
            assert_eq!(operator.symbol(), symbol);
        }
        assert!(std::ptr::eq(registry, OperatorRegistry::global()));
    }

    #[test]
    fn test_split_lookup() {
        let registry = OperatorRegistry::global();

        assert_eq!(
            registry.split_lookup("cidr__contained_by"),
            ("cidr", QueryOperator::ContainedBy)
        );
        assert_eq!(registry.split_lookup("data"), ("data", QueryOperator::Eq));
        // Only the last separator names the operator
        assert_eq!(
            registry.split_lookup("net__contains_subnet_eq"),
            ("net", QueryOperator::ContainsSubnetEq)
        );
        // Unregistered suffixes stay part of the field name
        assert_eq!(
            registry.split_lookup("data__array_contans"),
            ("data__array_contans", QueryOperator::Eq)
        );
        assert_eq!(registry.split_lookup("__gt"), ("__gt", QueryOperator::Eq));
    }

    #[test]
    fn test_names_are_sorted() {
        let registry = OperatorRegistry::global();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"isnull"));
    }
}
