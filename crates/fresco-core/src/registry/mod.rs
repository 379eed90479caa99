//! Static catalog of known namelist parameters.

mod catalog;

use crate::namelist::value::{Numeric, parse_logical};
use crate::namelist::{NamelistValue, is_multi_value};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Number,
    Select,
    Text,
    Boolean,
}

impl ParameterKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Select => "select",
            Self::Text => "text",
            Self::Boolean => "boolean",
        }
    }
}

/// Compile-time literal used for defaults and select options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Number(f64),
    Logical(bool),
    Text(&'static str),
}

impl Literal {
    pub fn to_value(self) -> NamelistValue {
        match self {
            Self::Number(value) => NamelistValue::number(value),
            Self::Logical(flag) => NamelistValue::Logical(flag),
            Self::Text(text) => NamelistValue::Text(text.to_string()),
        }
    }

    pub fn matches(self, value: &NamelistValue) -> bool {
        match self {
            Self::Number(expected) => value
                .as_f64()
                .is_some_and(|actual| (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0)),
            Self::Logical(expected) => value.as_bool() == Some(expected),
            Self::Text(expected) => match value {
                NamelistValue::Text(text) => text.trim() == expected,
                _ => false,
            },
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&crate::namelist::value::format_number(*value)),
            Self::Logical(flag) => f.write_str(crate::namelist::fortran_logical(*flag)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Logical(flag) => serializer.serialize_bool(*flag),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: Literal,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: Literal, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub kind: ParameterKind,
    pub default: Option<Literal>,
    pub step: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: &'static [SelectOption],
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl ParameterDefinition {
    pub(crate) const BLANK: Self = Self {
        name: "",
        label: "",
        tooltip: "",
        kind: ParameterKind::Number,
        default: None,
        step: None,
        min: None,
        max: None,
        options: &[],
        required: false,
        placeholder: None,
    };

    pub fn is_default(&self, value: &NamelistValue) -> bool {
        self.default.is_some_and(|default| default.matches(value))
    }

    fn takes_logical(&self) -> bool {
        self.kind == ParameterKind::Boolean
            || matches!(self.default, Some(Literal::Logical(_)))
            || self
                .options
                .iter()
                .any(|option| matches!(option.value, Literal::Logical(_)))
    }

    fn takes_number(&self) -> bool {
        match self.kind {
            ParameterKind::Number => true,
            ParameterKind::Select => self
                .options
                .iter()
                .any(|option| matches!(option.value, Literal::Number(_))),
            ParameterKind::Text | ParameterKind::Boolean => false,
        }
    }

    /// Converts raw form text into a typed value. Blank text yields `None`;
    /// text that does not fit the declared kind is kept as text.
    pub fn coerce(&self, raw: &str) -> Option<NamelistValue> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if self.takes_logical()
            && let Some(flag) = parse_logical(trimmed)
        {
            return Some(NamelistValue::Logical(flag));
        }

        if is_multi_value(self.name) {
            return Some(coerce_number_list(trimmed));
        }

        if self.takes_number() {
            if let Some(number) = Numeric::parse(trimmed) {
                return Some(NamelistValue::Number(number));
            }
            debug!(parameter = self.name, value = trimmed, "kept non-numeric value as text");
        }

        Some(NamelistValue::Text(trimmed.to_string()))
    }

    /// Describes a numeric value that falls outside `min`/`max`.
    pub fn range_violation(&self, value: &NamelistValue) -> Option<String> {
        let actual = match value {
            NamelistValue::Number(number) => number.value(),
            _ => return None,
        };
        if let Some(min) = self.min
            && actual < min
        {
            return Some(format!("{} = {} is below the minimum {}", self.name, value, min));
        }
        if let Some(max) = self.max
            && actual > max
        {
            return Some(format!("{} = {} is above the maximum {}", self.name, value, max));
        }
        None
    }
}

fn coerce_number_list(trimmed: &str) -> NamelistValue {
    let numbers: Option<Vec<Numeric>> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(Numeric::parse)
        .collect();
    match numbers {
        Some(mut numbers) if numbers.len() == 1 => NamelistValue::Number(numbers.remove(0)),
        Some(numbers) if !numbers.is_empty() => NamelistValue::List(numbers),
        _ => NamelistValue::Text(trimmed.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParameterDefinition],
}

#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    categories: &'static [ParameterCategory],
    index: IndexMap<&'static str, (usize, usize)>,
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ParameterRegistry {
    /// Every `&FRESCO` category plus the CDCC continuum-bin controls.
    pub fn standard() -> Self {
        Self::from_categories(catalog::CATEGORIES)
    }

    pub fn from_categories(categories: &'static [ParameterCategory]) -> Self {
        let mut index = IndexMap::new();
        for (category_index, category) in categories.iter().enumerate() {
            for (parameter_index, parameter) in category.parameters.iter().enumerate() {
                if index.contains_key(parameter.name) {
                    warn!(
                        parameter = parameter.name,
                        category = category.id,
                        "duplicate parameter definition ignored"
                    );
                    continue;
                }
                index.insert(parameter.name, (category_index, parameter_index));
            }
        }
        Self { categories, index }
    }

    pub fn get(&self, name: &str) -> Option<&'static ParameterDefinition> {
        let categories = self.categories;
        self.index
            .get(name)
            .map(|&(category, parameter)| &categories[category].parameters[parameter])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Parameter names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.index.keys().copied()
    }

    pub fn categories(&self) -> &'static [ParameterCategory] {
        self.categories
    }

    pub fn category(&self, id: &str) -> Option<&'static ParameterCategory> {
        self.categories
            .iter()
            .find(|category| category.id.eq_ignore_ascii_case(id))
    }

    pub fn category_of(&self, name: &str) -> Option<&'static ParameterCategory> {
        let categories = self.categories;
        self.index
            .get(name)
            .map(|&(category, _)| &categories[category])
    }

    /// Flat name -> definition view across all categories.
    pub fn all_parameters(&self) -> IndexMap<&'static str, &'static ParameterDefinition> {
        self.names()
            .filter_map(|name| self.get(name).map(|definition| (name, definition)))
            .collect()
    }

    /// Buckets known names by category id, keeping catalog category order.
    pub fn group_by_category<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> IndexMap<&'static str, Vec<&'static ParameterDefinition>> {
        let mut groups: IndexMap<&'static str, Vec<&'static ParameterDefinition>> = self
            .categories
            .iter()
            .map(|category| (category.id, Vec::new()))
            .collect();
        for name in names {
            if let (Some(category), Some(definition)) = (self.category_of(name), self.get(name)) {
                groups.entry(category.id).or_default().push(definition);
            }
        }
        groups.retain(|_, definitions| !definitions.is_empty());
        groups
    }

    /// Registry-aware coercion; unknown names are classified token-wise.
    pub fn coerce_value(&self, name: &str, raw: &str) -> Option<NamelistValue> {
        match self.get(name) {
            Some(definition) => definition.coerce(raw),
            None if raw.trim().is_empty() => None,
            None => Some(NamelistValue::from_token(raw.trim(), false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Literal, ParameterKind, ParameterRegistry};
    use crate::namelist::NamelistValue;
    use std::collections::HashSet;

    #[test]
    fn standard_registry_has_unique_names_across_categories() {
        let registry = ParameterRegistry::standard();
        let total: usize = registry
            .categories()
            .iter()
            .map(|category| category.parameters.len())
            .sum();
        let unique: HashSet<&str> = registry.names().collect();
        assert_eq!(unique.len(), total);
        assert_eq!(registry.len(), total);
        assert_eq!(registry.categories().len(), 9);
    }

    #[test]
    fn lookup_returns_metadata_and_category() {
        let registry = ParameterRegistry::standard();
        let hcm = registry.get("hcm").expect("hcm should be registered");
        assert_eq!(hcm.kind, ParameterKind::Number);
        assert_eq!(hcm.default, Some(Literal::Number(0.1)));
        assert_eq!(hcm.min, Some(0.001));
        assert_eq!(
            registry.category_of("hcm").map(|category| category.title),
            Some("Radial Coordinates")
        );
        assert!(registry.get("elab").is_some_and(|elab| elab.required));
        assert!(registry.contains("nk"));
        assert!(!registry.contains("namep"));
    }

    #[test]
    fn all_parameters_flattens_in_catalog_order() {
        let registry = ParameterRegistry::standard();
        let all = registry.all_parameters();
        assert_eq!(all.keys().next(), Some(&"hcm"));
        assert_eq!(all.len(), registry.len());
    }

    #[test]
    fn coercion_follows_declared_kind_with_text_fallback() {
        let registry = ParameterRegistry::standard();
        assert!(matches!(
            registry.coerce_value("rmatch", "60"),
            Some(NamelistValue::Number(_))
        ));
        assert_eq!(
            registry.coerce_value("rmatch", "sixty"),
            Some(NamelistValue::Text("sixty".to_string()))
        );
        assert_eq!(
            registry.coerce_value("fatal", "F"),
            Some(NamelistValue::Logical(false))
        );
        assert_eq!(registry.coerce_value("iso", "A"), Some(NamelistValue::Text("A".to_string())));
        assert_eq!(registry.coerce_value("hcm", "  "), None);
        assert!(matches!(
            registry.coerce_value("elab", "6.9, 11.0 49.35"),
            Some(NamelistValue::List(values)) if values.len() == 3
        ));
    }

    #[test]
    fn defaults_compare_numerically() {
        let registry = ParameterRegistry::standard();
        let rmatch = registry.get("rmatch").expect("rmatch should be registered");
        assert!(rmatch.is_default(&NamelistValue::from_token("60.0", false)));
        assert!(!rmatch.is_default(&NamelistValue::from_token("45", false)));

        let fatal = registry.get("fatal").expect("fatal should be registered");
        assert!(fatal.is_default(&NamelistValue::Logical(true)));
    }

    #[test]
    fn range_violations_are_described() {
        let registry = ParameterRegistry::standard();
        let hcm = registry.get("hcm").expect("hcm should be registered");
        let message = hcm
            .range_violation(&NamelistValue::from_token("0.0001", false))
            .expect("value below minimum should be reported");
        assert!(message.contains("below the minimum"));
        assert!(hcm.range_violation(&NamelistValue::number(0.05)).is_none());
    }

    #[test]
    fn grouping_skips_unknown_names_and_empty_categories() {
        let registry = ParameterRegistry::standard();
        let groups = registry.group_by_category(["thmax", "hcm", "bogus", "nk"]);
        let ids: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(ids, vec!["radialCoordinates", "angularDistributions", "cdccBins"]);
    }
}
