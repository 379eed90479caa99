//! One editing session: values, categorization, potentials and the other
//! blocks of a deck, assembled back into a complete input file.

pub mod config;

pub use config::{
    ConfigError, ConfigScalar, SessionConfig, SessionOptions, load_session_config,
};

use crate::categorize::{CategorizationStore, CategorizationView, UploadSummary};
use crate::domain::{FrescoError, FrescoResult, InputProfile};
use crate::generator::{NamelistGenerator, NamelistLayout, render_block};
use crate::namelist::{self, Namelist, NamelistValue};
use crate::partition::{self, PartitionSpec};
use crate::potential::{self, PotentialSet, SlotSyntax};
use crate::registry::ParameterRegistry;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const DEFAULT_HEADER: &str = "FRESCO input generated by fresco-input";
pub const NO_MATCHES_MESSAGE: &str = "No matching parameters found in uploaded file";

/// Outcome of loading an uploaded deck.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LoadSummary {
    pub populated: usize,
    /// Names with no registry entry; their values are still written back.
    pub unknown: Vec<String>,
    pub skipped: usize,
    pub potentials: usize,
    pub partitions: usize,
    pub detected_profile: Option<InputProfile>,
    pub warnings: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
enum PartitionSource {
    Parsed(Vec<Namelist>),
    Specs(Vec<PartitionSpec>),
}

#[derive(Debug, Clone)]
pub struct FrescoSession {
    options: SessionOptions,
    categorization: CategorizationStore,
    values: IndexMap<String, NamelistValue>,
    header: Option<String>,
    potentials: PotentialSet,
    partitions: PartitionSource,
    trailing: Vec<Namelist>,
}

impl FrescoSession {
    /// Fresh session holding the reaction's default potentials.
    pub fn new(options: SessionOptions) -> Self {
        let categorization = CategorizationStore::new(ParameterRegistry::standard(), options.profile);
        let mut potentials = PotentialSet::new(options.reaction);
        potentials.load_defaults();
        Self {
            header: options.header.clone(),
            options,
            categorization,
            values: IndexMap::new(),
            potentials,
            partitions: PartitionSource::Specs(Vec::new()),
            trailing: Vec::new(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> FrescoResult<Self> {
        let mut session = Self::new(SessionOptions::from(config));
        session.apply_config(config)?;
        Ok(session)
    }

    /// Layers config values, potentials and partitions over the current
    /// state. Unknown value names are rejected.
    pub fn apply_config(&mut self, config: &SessionConfig) -> FrescoResult<()> {
        if let Some(header) = &config.header {
            self.header = Some(header.clone());
        }
        if let Some(array) = config.array_syntax {
            self.options.slot_syntax = Some(SlotSyntax::from_array_flag(array));
        }
        for (name, scalar) in &config.values {
            self.set_value(name, &scalar.to_raw())?;
        }
        if let Some(records) = &config.potentials {
            self.potentials.clear();
            for record in records {
                self.potentials.add(Some(record.clone()));
            }
        }
        if !config.partitions.is_empty() {
            self.partitions = PartitionSource::Specs(config.partitions.clone());
        }
        Ok(())
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn registry(&self) -> &ParameterRegistry {
        self.categorization.registry()
    }

    pub fn categorization(&self) -> &CategorizationStore {
        &self.categorization
    }

    pub fn categorization_mut(&mut self) -> &mut CategorizationStore {
        &mut self.categorization
    }

    pub fn values(&self) -> &IndexMap<String, NamelistValue> {
        &self.values
    }

    pub fn potentials(&self) -> &PotentialSet {
        &self.potentials
    }

    pub fn views(&self) -> CategorizationView {
        self.categorization.views(&self.values)
    }

    /// Reads an uploaded deck into the session.
    ///
    /// Values of the profile's main namelist replace existing ones, known
    /// names move to the general section, and parsed potentials and
    /// partitions replace the current ones. Nothing here fails; problems
    /// show up as counts in the summary.
    pub fn load_input(&mut self, text: &str) -> LoadSummary {
        let parsed = namelist::parse(text);
        let document = parsed.document;
        let layout = self.layout();
        let main = self.options.profile.as_str();

        let mut summary = LoadSummary {
            skipped: parsed.report.skipped_count(),
            detected_profile: document.profile,
            ..LoadSummary::default()
        };
        if document.profile.is_some_and(|profile| profile != self.options.profile) {
            warn!(
                detected = ?document.profile,
                profile = %self.options.profile,
                "input keyword does not match session profile"
            );
        }
        if let Some(header) = &document.header {
            self.header = Some(header.clone());
        }

        let mut known = Vec::new();
        if let Some(block) = document.first(main) {
            for (name, value) in &block.entries {
                let internal = layout.aliases.internal_name(name).to_string();
                match self.registry().get(&internal) {
                    Some(definition) => {
                        if let Some(problem) = definition.range_violation(value) {
                            warn!(parameter = definition.name, "{problem}");
                            summary.warnings.push(problem);
                        }
                        known.push(internal.clone());
                    }
                    None => {
                        debug!(parameter = internal.as_str(), "retaining unknown parameter");
                        summary.unknown.push(internal.clone());
                    }
                }
                self.values.shift_remove(&internal);
                self.values.insert(internal, value.clone());
            }
        }
        summary.populated = known.len();
        let upload: UploadSummary = self.categorization.apply_uploaded_names(&known);
        debug!(surfaced = upload.surfaced.len(), "surfaced uploaded parameters");

        let parsed_potentials = potential::potentials_from_document(&document);
        summary.potentials = parsed_potentials.records.len();
        if !parsed_potentials.records.is_empty() {
            self.potentials.replace_with_parsed(parsed_potentials);
        }

        let partition_blocks = partition::partitions_from_document(&document);
        summary.partitions = partition::partition_count(&partition_blocks);
        if !partition_blocks.is_empty() {
            self.partitions = PartitionSource::Parsed(partition_blocks);
        }

        self.trailing = document
            .blocks
            .into_iter()
            .filter(|block| !is_structured_block(&block.name, main))
            .collect();

        summary.message = if summary.populated == 0 {
            NO_MATCHES_MESSAGE.to_string()
        } else {
            format!("Successfully populated {} parameters", summary.populated)
        };
        info!(
            populated = summary.populated,
            unknown = summary.unknown.len(),
            skipped = summary.skipped,
            potentials = summary.potentials,
            partitions = summary.partitions,
            "loaded input deck"
        );
        summary
    }

    /// Sets one registry parameter from form text. Blank text clears it.
    /// Returns a range warning when the value is outside `min`/`max`.
    pub fn set_value(&mut self, name: &str, raw: &str) -> FrescoResult<Option<String>> {
        let lowered = name.trim().to_ascii_lowercase();
        let Some(definition) = self.registry().get(&lowered) else {
            return Err(FrescoError::input_validation(
                "INPUT.UNKNOWN_PARAMETER",
                format!("parameter '{}' is not a registered parameter", name.trim()),
            ));
        };
        let Some(value) = definition.coerce(raw) else {
            self.values.shift_remove(definition.name);
            return Ok(None);
        };
        let warning = definition.range_violation(&value);
        if let Some(problem) = &warning {
            warn!(parameter = definition.name, "{problem}");
        }
        self.values.insert(definition.name.to_string(), value);
        Ok(warning)
    }

    /// Forces a slot style; `None` mirrors the loaded file.
    pub fn set_slot_syntax(&mut self, syntax: Option<SlotSyntax>) {
        self.options.slot_syntax = syntax;
    }

    pub fn slot_syntax(&self) -> SlotSyntax {
        self.options
            .slot_syntax
            .unwrap_or_else(|| self.potentials.syntax())
    }

    /// Main namelist section only.
    pub fn generate_main_section(&self) -> String {
        NamelistGenerator::new(self.registry(), self.layout())
            .with_general(self.categorization.general())
            .generate(&self.values)
    }

    /// Complete deck: header, keyword, main namelist, then for FRESCO the
    /// partitions and potentials, then every other parsed block in order.
    pub fn generate_input(&self) -> String {
        let mut output = String::new();
        let header = self.header.as_deref().unwrap_or(DEFAULT_HEADER);
        output.push_str(header);
        output.push('\n');
        output.push_str(self.options.profile.keyword());
        output.push('\n');
        output.push_str(&self.generate_main_section());
        output.push('\n');

        if self.options.profile == InputProfile::Fresco {
            output.push('\n');
            output.push_str(&match &self.partitions {
                PartitionSource::Parsed(blocks) => partition::render_parsed(blocks),
                PartitionSource::Specs(specs) => partition::generate_from_specs(specs),
            });
            output.push('\n');
            output.push_str(&self.potentials.generate(Some(self.slot_syntax())));
            if self.potentials.needs_terminator() {
                output.push_str(potential::TERMINATOR);
                output.push('\n');
            }
        }

        if !self.trailing.is_empty() {
            output.push('\n');
            for block in &self.trailing {
                output.push_str(&render_block(block));
                output.push('\n');
            }
        }
        debug!(bytes = output.len(), profile = %self.options.profile, "generated input deck");
        output
    }

    fn layout(&self) -> NamelistLayout {
        match self.options.profile {
            InputProfile::Fresco => NamelistLayout::fresco(),
            InputProfile::Cdcc => NamelistLayout::cdcc(),
        }
    }
}

fn is_structured_block(name: &str, main: &str) -> bool {
    name == main || matches!(name, "pot" | "partition" | "states")
}
