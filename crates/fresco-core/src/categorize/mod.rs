//! General/advanced partition of the parameter registry.

use crate::domain::{FrescoError, FrescoResult, InputProfile};
use crate::namelist::NamelistValue;
use crate::registry::{Literal, ParameterDefinition, ParameterKind, ParameterRegistry};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub const FRESCO_DEFAULT_GENERAL: &[&str] = &[
    "hcm", "rmatch", "jtmax", "absend", "thmin", "thmax", "thinc", "elab", "iter", "chans",
    "smats", "xstabl",
];

pub const CDCC_DEFAULT_GENERAL: &[&str] = &[
    "hcm", "rmatch", "rasym", "hktarg", "accrcy", "absend", "thmin", "thmax", "thinc", "elab",
    "smats", "chans", "xstabl", "cutr", "nk", "cdcc", "iter",
];

pub const fn default_general(profile: InputProfile) -> &'static [&'static str] {
    match profile {
        InputProfile::Fresco => FRESCO_DEFAULT_GENERAL,
        InputProfile::Cdcc => CDCC_DEFAULT_GENERAL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    General,
    Advanced,
}

impl Bucket {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Advanced => "advanced",
        }
    }
}

impl Display for Bucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Bucket {
    type Err = FrescoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "general" | "g" => Ok(Self::General),
            "advanced" | "a" => Ok(Self::Advanced),
            other => Err(FrescoError::input_validation(
                "INPUT.BUCKET",
                format!("unknown section '{other}'; expected general or advanced"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOutcome {
    Moved,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UploadSummary {
    /// Registry names promoted to general because the file set them.
    pub surfaced: Vec<&'static str>,
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categorization {
    pub general: Vec<&'static str>,
    pub advanced: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterView {
    pub name: &'static str,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub kind: ParameterKind,
    pub default: Option<Literal>,
    pub current_value: Option<NamelistValue>,
    pub from_file: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizationView {
    pub general: Vec<ParameterView>,
    pub advanced: Vec<ParameterView>,
}

/// Owns the general/advanced split for one editing session.
///
/// Both buckets always hold registry names only, never overlap, and
/// together cover the whole registry.
#[derive(Debug, Clone)]
pub struct CategorizationStore {
    registry: ParameterRegistry,
    protected: Vec<&'static str>,
    general: Vec<&'static str>,
    advanced: Vec<&'static str>,
    from_file: IndexSet<String>,
}

impl CategorizationStore {
    pub fn new(registry: ParameterRegistry, profile: InputProfile) -> Self {
        let mut protected = Vec::new();
        for name in default_general(profile) {
            match registry.names().find(|known| known == name) {
                Some(known) => protected.push(known),
                None => warn!(parameter = name, "default general parameter missing from registry"),
            }
        }

        let mut store = Self {
            registry,
            protected,
            general: Vec::new(),
            advanced: Vec::new(),
            from_file: IndexSet::new(),
        };
        store.reset();
        store
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    pub fn reset(&mut self) {
        self.from_file.clear();
        self.general = self.protected.clone();
        self.advanced = self.remaining_names();
        debug!(
            general = self.general.len(),
            advanced = self.advanced.len(),
            "categorization reset to defaults"
        );
    }

    /// Re-derives the split after a file upload: the defaults plus every
    /// known name found in the file become general.
    pub fn apply_uploaded_names<I, S>(&mut self, names: I) -> UploadSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.from_file = names
            .into_iter()
            .map(|name| name.as_ref().to_ascii_lowercase())
            .collect();

        let mut summary = UploadSummary::default();
        self.general = self.protected.clone();
        for name in &self.from_file {
            let Some(known) = self.registry_name(name) else {
                summary.ignored.push(name.clone());
                continue;
            };
            if !self.general.contains(&known) {
                self.general.push(known);
                summary.surfaced.push(known);
            }
        }
        self.advanced = self.remaining_names();

        info!(
            general = self.general.len(),
            advanced = self.advanced.len(),
            ignored = summary.ignored.len(),
            "categorization updated from uploaded names"
        );
        summary
    }

    pub fn move_parameter(&mut self, name: &str, to: Bucket) -> FrescoResult<MoveOutcome> {
        let Some(known) = self.registry_name(name) else {
            return Err(FrescoError::input_validation(
                "CATEGORIZE.UNKNOWN_PARAMETER",
                format!("parameter '{name}' is not a registered parameter"),
            ));
        };

        match to {
            Bucket::General => Ok(transfer(known, &mut self.advanced, &mut self.general)),
            Bucket::Advanced if self.is_protected(known) => {
                warn!(parameter = known, "refused to move default parameter to advanced");
                Err(FrescoError::rejected(
                    "CATEGORIZE.PROTECTED_PARAMETER",
                    format!("cannot move default parameter '{known}' to the advanced section"),
                ))
            }
            Bucket::Advanced => Ok(transfer(known, &mut self.general, &mut self.advanced)),
        }
    }

    pub fn current(&self) -> Categorization {
        Categorization {
            general: self.general.clone(),
            advanced: self.advanced.clone(),
        }
    }

    /// Display rows with metadata and the value currently held for each name.
    pub fn views(&self, values: &IndexMap<String, NamelistValue>) -> CategorizationView {
        let view = |names: &[&'static str]| -> Vec<ParameterView> {
            names
                .iter()
                .filter_map(|name| self.registry.get(name))
                .map(|definition| self.view_of(definition, values))
                .collect()
        };
        CategorizationView {
            general: view(&self.general),
            advanced: view(&self.advanced),
        }
    }

    pub fn bucket_of(&self, name: &str) -> Option<Bucket> {
        if self.general.iter().any(|known| *known == name) {
            Some(Bucket::General)
        } else if self.advanced.iter().any(|known| *known == name) {
            Some(Bucket::Advanced)
        } else {
            None
        }
    }

    pub fn is_in_general(&self, name: &str) -> bool {
        self.bucket_of(name) == Some(Bucket::General)
    }

    pub fn is_in_advanced(&self, name: &str) -> bool {
        self.bucket_of(name) == Some(Bucket::Advanced)
    }

    pub fn is_protected(&self, name: &str) -> bool {
        self.protected.iter().any(|known| *known == name)
    }

    pub fn is_from_file(&self, name: &str) -> bool {
        self.from_file.contains(name)
    }

    pub fn general(&self) -> &[&'static str] {
        &self.general
    }

    pub fn advanced(&self) -> &[&'static str] {
        &self.advanced
    }

    pub fn group_by_category(
        &self,
        bucket: Bucket,
    ) -> IndexMap<&'static str, Vec<&'static ParameterDefinition>> {
        let names = match bucket {
            Bucket::General => &self.general,
            Bucket::Advanced => &self.advanced,
        };
        self.registry.group_by_category(names.iter().copied())
    }

    fn view_of(
        &self,
        definition: &'static ParameterDefinition,
        values: &IndexMap<String, NamelistValue>,
    ) -> ParameterView {
        ParameterView {
            name: definition.name,
            label: definition.label,
            tooltip: definition.tooltip,
            kind: definition.kind,
            default: definition.default,
            current_value: values.get(definition.name).cloned(),
            from_file: self.is_from_file(definition.name),
        }
    }

    fn registry_name(&self, name: &str) -> Option<&'static str> {
        let name = name.trim().to_ascii_lowercase();
        self.registry.get(&name).map(|definition| definition.name)
    }

    fn remaining_names(&self) -> Vec<&'static str> {
        self.registry
            .names()
            .filter(|name| !self.general.contains(name))
            .collect()
    }
}

fn transfer(
    name: &'static str,
    source: &mut Vec<&'static str>,
    destination: &mut Vec<&'static str>,
) -> MoveOutcome {
    let Some(position) = source.iter().position(|candidate| *candidate == name) else {
        return MoveOutcome::Unchanged;
    };
    source.remove(position);
    if !destination.contains(&name) {
        destination.push(name);
    }
    MoveOutcome::Moved
}

#[cfg(test)]
mod tests {
    use super::{
        Bucket, CDCC_DEFAULT_GENERAL, CategorizationStore, FRESCO_DEFAULT_GENERAL, MoveOutcome,
    };
    use crate::domain::{FrescoErrorCategory, InputProfile};
    use crate::namelist::NamelistValue;
    use crate::registry::ParameterRegistry;
    use indexmap::IndexMap;
    use std::collections::HashSet;

    fn store() -> CategorizationStore {
        CategorizationStore::new(ParameterRegistry::standard(), InputProfile::Fresco)
    }

    fn assert_partition(store: &CategorizationStore) {
        let general: HashSet<&str> = store.general().iter().copied().collect();
        let advanced: HashSet<&str> = store.advanced().iter().copied().collect();
        assert!(general.is_disjoint(&advanced));
        assert_eq!(general.len(), store.general().len(), "general has duplicates");
        assert_eq!(advanced.len(), store.advanced().len(), "advanced has duplicates");
        assert_eq!(general.len() + advanced.len(), store.registry().len());
        assert!(general.iter().chain(advanced.iter()).all(|name| store.registry().contains(name)));
    }

    #[test]
    fn reset_places_defaults_in_general_and_is_idempotent() {
        let mut store = store();
        store.reset();
        let first = store.current();
        store.reset();
        let second = store.current();

        assert_eq!(first, second);
        assert_eq!(first.general, FRESCO_DEFAULT_GENERAL.to_vec());
        assert_partition(&store);
    }

    #[test]
    fn uploaded_names_are_surfaced_into_general() {
        let mut store = store();
        let advanced_before = store.advanced().len();

        let summary = store.apply_uploaded_names(["cutr", "nk"]);

        assert!(store.is_in_general("cutr"));
        assert!(store.is_in_general("nk"));
        assert_eq!(store.advanced().len(), advanced_before - 2);
        assert_eq!(summary.surfaced, vec!["cutr", "nk"]);
        assert!(store.is_from_file("nk"));
        assert_partition(&store);
    }

    #[test]
    fn uploaded_defaults_and_unknown_names_do_not_duplicate() {
        let mut store = store();
        let summary = store.apply_uploaded_names(["hcm", "HCM", "namep", "rmatch"]);

        assert!(summary.surfaced.is_empty());
        assert_eq!(summary.ignored, vec!["namep".to_string()]);
        assert_eq!(store.general().len(), FRESCO_DEFAULT_GENERAL.len());
        assert_partition(&store);
    }

    #[test]
    fn protected_parameters_cannot_move_to_advanced() {
        let mut store = store();
        for name in FRESCO_DEFAULT_GENERAL {
            let before = store.current();
            let error = store
                .move_parameter(name, Bucket::Advanced)
                .expect_err("default parameters should stay general");
            assert_eq!(error.placeholder(), "CATEGORIZE.PROTECTED_PARAMETER");
            assert_eq!(error.category(), FrescoErrorCategory::RejectedOperation);
            assert_eq!(store.current(), before);
        }
    }

    #[test]
    fn non_default_parameters_move_both_ways() {
        let mut store = store();
        assert_eq!(
            store
                .move_parameter("cutl", Bucket::General)
                .expect("move to general should succeed"),
            MoveOutcome::Moved
        );
        assert!(store.is_in_general("cutl"));
        assert_eq!(
            store
                .move_parameter("cutl", Bucket::General)
                .expect("repeated move should be accepted"),
            MoveOutcome::Unchanged
        );
        assert_eq!(
            store
                .move_parameter("cutl", Bucket::Advanced)
                .expect("move back should succeed"),
            MoveOutcome::Moved
        );
        assert!(store.is_in_advanced("cutl"));
        assert_partition(&store);
    }

    #[test]
    fn unknown_parameter_move_is_rejected() {
        let mut store = store();
        let error = store
            .move_parameter("namep", Bucket::General)
            .expect_err("unknown names should be rejected");
        assert_eq!(error.placeholder(), "CATEGORIZE.UNKNOWN_PARAMETER");
    }

    #[test]
    fn reset_clears_file_markers_and_promotions() {
        let mut store = store();
        store.apply_uploaded_names(["cutr"]);
        store.reset();
        assert!(store.is_in_advanced("cutr"));
        assert!(!store.is_from_file("cutr"));
    }

    #[test]
    fn cdcc_profile_protects_its_own_defaults() {
        let store = CategorizationStore::new(ParameterRegistry::standard(), InputProfile::Cdcc);
        assert_eq!(store.general(), CDCC_DEFAULT_GENERAL);
        assert!(store.is_protected("nk"));
        assert!(!store.is_protected("jtmax"));
    }

    #[test]
    fn views_carry_metadata_and_current_values() {
        let mut store = store();
        store.apply_uploaded_names(["cutr"]);
        let mut values = IndexMap::new();
        values.insert("cutr".to_string(), NamelistValue::number(-20.0));

        let view = store.views(&values);
        let cutr = view
            .general
            .iter()
            .find(|row| row.name == "cutr")
            .expect("cutr should be listed in general");
        assert!(cutr.from_file);
        assert_eq!(cutr.current_value, Some(NamelistValue::number(-20.0)));
        assert_eq!(view.general.len() + view.advanced.len(), store.registry().len());
    }

    #[test]
    fn grouping_by_bucket_uses_registry_categories() {
        let store = store();
        let groups = store.group_by_category(Bucket::General);
        assert!(groups.contains_key("radialCoordinates"));
        assert!(!groups.contains_key("cdccBins"));
    }
}
