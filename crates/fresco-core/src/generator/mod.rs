//! Serialization of parameter values back into namelist text.

pub mod format;
pub mod layout;

pub use format::{format_assignments, format_value, render_block};
pub use layout::{AliasTable, BlockStyle, CDCC_ALIASES, NamelistLayout};

use crate::namelist::NamelistValue;
use crate::registry::ParameterRegistry;
use indexmap::IndexMap;
use tracing::debug;

/// Parameters of the General form section; written even at their default.
pub const BASIC_PARAMETERS: &[&str] = &[
    "hcm", "rmatch", "jtmax", "absend", "thmin", "thmax", "thinc", "elab", "iter", "chans",
    "smats", "switch", "ajswtch", "iblock", "nnu", "xstabl",
];

#[derive(Debug, Clone)]
pub struct NamelistGenerator<'a> {
    registry: &'a ParameterRegistry,
    layout: NamelistLayout,
    general: Vec<String>,
}

impl<'a> NamelistGenerator<'a> {
    pub fn new(registry: &'a ParameterRegistry, layout: NamelistLayout) -> Self {
        Self {
            registry,
            layout,
            general: Vec::new(),
        }
    }

    /// Names written even when equal to their registry default.
    pub fn with_general<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().to_ascii_lowercase();
            if !self.general.contains(&name) {
                self.general.push(name);
            }
        }
        self
    }

    pub fn layout(&self) -> &NamelistLayout {
        &self.layout
    }

    pub fn generate(&self, values: &IndexMap<String, NamelistValue>) -> String {
        let lines = self.cluster_lines(values);
        let name = self.layout.name;
        if lines.is_empty() {
            return format!(" &{name} /");
        }
        match self.layout.style {
            BlockStyle::Wrapped => format!(" &{name} {} /", lines.join("\n\t ")),
            BlockStyle::Indented => {
                let body: Vec<String> = lines.iter().map(|line| format!("   {line}")).collect();
                format!(" &{name}\n{}\n   /", body.join("\n"))
            }
        }
    }

    /// One line of `name=value` pieces per non-empty cluster.
    pub fn cluster_lines(&self, values: &IndexMap<String, NamelistValue>) -> Vec<String> {
        let overflow = self.layout.clusters.len();
        let mut placed: IndexMap<String, ((usize, usize), Vec<String>)> = IndexMap::new();

        for (position, (name, value)) in values.iter().enumerate() {
            let Some(output) = self.output_name(name, value) else {
                continue;
            };
            let slot = match self.layout.cluster_of(&output) {
                Some(slot) => slot,
                None if self.layout.passthrough_unlisted => (overflow, position),
                None => {
                    debug!(
                        parameter = name.as_str(),
                        namelist = self.layout.name,
                        "parameter not written by this namelist"
                    );
                    continue;
                }
            };
            let pieces = format_assignments(&output, value);
            placed.shift_remove(&output);
            placed.insert(output, (slot, pieces));
        }

        let mut ordered: Vec<((usize, usize), Vec<String>)> = placed.into_values().collect();
        ordered.sort_by_key(|(slot, _)| *slot);

        let mut lines: Vec<(usize, Vec<String>)> = Vec::new();
        for ((cluster, _), pieces) in ordered {
            match lines.last_mut() {
                Some((current, line)) if *current == cluster => line.extend(pieces),
                _ => lines.push((cluster, pieces)),
            }
        }
        lines
            .into_iter()
            .map(|(_, pieces)| pieces.join(" "))
            .collect()
    }

    /// Output name for a value that should be written, or `None` when the
    /// value is blank or an omittable default.
    fn output_name(&self, name: &str, value: &NamelistValue) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        let lowered = name.to_ascii_lowercase();
        let internal = self.layout.aliases.internal_name(&lowered);

        if let Some(definition) = self.registry.get(internal) {
            let is_general = self.general.iter().any(|general| general == internal);
            if !is_general && !definition.required && definition.is_default(value) {
                debug!(parameter = internal, "omitting default value");
                return None;
            }
        }
        Some(self.layout.aliases.output_name(internal).to_string())
    }
}

/// `&FRESCO` section with the General-form parameters always written.
///
/// Other parameters equal to their registry default are omitted, so a
/// parsed deck only round-trips through `FrescoSession`, which marks every
/// name read from the file as general.
pub fn generate_namelist_section(
    values: &IndexMap<String, NamelistValue>,
    registry: &ParameterRegistry,
) -> String {
    NamelistGenerator::new(registry, NamelistLayout::fresco())
        .with_general(BASIC_PARAMETERS)
        .generate(values)
}

#[cfg(test)]
mod tests {
    use super::{NamelistGenerator, NamelistLayout, generate_namelist_section};
    use crate::namelist::NamelistValue;
    use crate::registry::ParameterRegistry;
    use indexmap::IndexMap;

    fn values(pairs: &[(&str, &str)]) -> IndexMap<String, NamelistValue> {
        let registry = ParameterRegistry::standard();
        pairs
            .iter()
            .filter_map(|(name, raw)| {
                registry
                    .coerce_value(name, raw)
                    .map(|value| (name.to_string(), value))
            })
            .collect()
    }

    #[test]
    fn single_cluster_renders_on_one_line() {
        let registry = ParameterRegistry::standard();
        let text = generate_namelist_section(&values(&[("rmatch", "60"), ("hcm", "0.1")]), &registry);
        assert_eq!(text, " &FRESCO hcm=0.1 rmatch=60 /");
    }

    #[test]
    fn clusters_are_written_on_separate_lines_in_fixed_order() {
        let registry = ParameterRegistry::standard();
        let text = generate_namelist_section(
            &values(&[("thmax", "180"), ("iter", "1"), ("hcm", "0.05"), ("thmin", "0")]),
            &registry,
        );
        assert_eq!(text, " &FRESCO hcm=0.05\n\t thmin=0 thmax=180\n\t iter=1 /");
    }

    #[test]
    fn empty_values_emit_minimal_namelist() {
        let registry = ParameterRegistry::standard();
        assert_eq!(generate_namelist_section(&IndexMap::new(), &registry), " &FRESCO /");
        let blanks = values(&[("hcm", "  ")]);
        assert_eq!(generate_namelist_section(&blanks, &registry), " &FRESCO /");
    }

    #[test]
    fn advanced_defaults_are_omitted_but_basic_defaults_kept() {
        let registry = ParameterRegistry::standard();
        let text = generate_namelist_section(
            &values(&[("hcm", "0.1"), ("cutl", "-1.6"), ("accrcy", "0.01"), ("cutr", "-20")]),
            &registry,
        );
        assert_eq!(text, " &FRESCO hcm=0.1\n\t cutr=-20 /");
    }

    #[test]
    fn required_parameter_is_written_even_through_custom_general_set() {
        let registry = ParameterRegistry::standard();
        let text = NamelistGenerator::new(&registry, NamelistLayout::fresco())
            .generate(&values(&[("elab", "6.9,11.0, 49.35"), ("rmatch", "60")]));
        assert_eq!(text, " &FRESCO elab=6.9 11.0 49.35 /");
    }

    #[test]
    fn logicals_are_fortran_literals() {
        let registry = ParameterRegistry::standard();
        let text = generate_namelist_section(&values(&[("fatal", "false"), ("dry", "T")]), &registry);
        assert_eq!(text, " &FRESCO fatal=F dry=T /");
    }

    #[test]
    fn unknown_parameters_pass_through_on_a_final_line() {
        let registry = ParameterRegistry::standard();
        let mut input = values(&[("hcm", "0.1")]);
        input.insert("mystery".to_string(), NamelistValue::number(3.0));
        let text = generate_namelist_section(&input, &registry);
        assert_eq!(text, " &FRESCO hcm=0.1\n\t mystery=3 /");
    }

    #[test]
    fn cdcc_layout_applies_aliases_and_drops_foreign_names() {
        let registry = ParameterRegistry::standard();
        let generator = NamelistGenerator::new(&registry, NamelistLayout::cdcc())
            .with_general(["hcm", "nk", "cdcc"]);
        let text = generator.generate(&values(&[
            ("hcm", "0.05"),
            ("cdcc", "1"),
            ("ip1", "2"),
            ("nk", "10"),
            ("jtmax", "100"),
        ]));
        assert_eq!(text, " &CDCC\n   hcm=0.05\n   nk=10 cdccc=1 q=2\n   /");
    }

    #[test]
    fn output_names_are_accepted_as_input_keys() {
        let registry = ParameterRegistry::standard();
        let generator = NamelistGenerator::new(&registry, NamelistLayout::cdcc());
        let mut input = IndexMap::new();
        input.insert("ncoul".to_string(), NamelistValue::number(1.0));
        assert_eq!(generator.generate(&input), " &CDCC\n   ncoul=1\n   /");
    }
}
