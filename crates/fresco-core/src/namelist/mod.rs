//! Fortran namelist documents: `&NAME key=value ... /` blocks.

mod parser;
pub mod scanner;
pub mod value;

pub use parser::{ParseReport, ParsedInput, SkipReason, SkippedText, parse};
pub use value::{NamelistValue, Numeric, fortran_logical};

use crate::domain::InputProfile;
use indexmap::IndexMap;
use serde::Serialize;

/// Names whose right-hand side may continue over several numeric tokens.
pub const MULTI_VALUE_PARAMETERS: &[&str] =
    &["elab", "ek", "thetas", "energies", "nlab", "jbord", "jump"];

pub fn is_multi_value(name: &str) -> bool {
    MULTI_VALUE_PARAMETERS.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Namelist {
    pub name: String,
    pub key: String,
    pub source_line: usize,
    pub entries: IndexMap<String, NamelistValue>,
}

impl Namelist {
    pub fn new(name: impl Into<String>, key: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            source_line,
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NamelistValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// An empty block such as `&POT /` closes the preceding sequence.
    pub fn is_terminator(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records `name=value`. A later write to a slot that an earlier
    /// `name(i:j)=` covered replaces that slot.
    pub fn assign(&mut self, name: impl Into<String>, value: NamelistValue) {
        let name = name.into();
        if let Some((base, slot)) = split_slot_name(&name) {
            self.drop_indexed_slot(base, slot);
        }
        self.entries.shift_remove(&name);
        self.entries.insert(name, value);
    }

    /// Records `base(start:...)=values...`, one slot per value.
    pub fn assign_slots(&mut self, base: &str, start: i32, values: Vec<Numeric>) {
        let mut slots = match self.entries.shift_remove(base) {
            Some(NamelistValue::Indexed(existing)) => existing,
            _ => Default::default(),
        };
        for (slot, value) in (start..).zip(values) {
            self.entries.shift_remove(&format!("{base}{slot}"));
            slots.insert(slot, value);
        }
        self.entries
            .insert(base.to_string(), NamelistValue::Indexed(slots));
    }

    /// Flat view with every indexed slot spelled out as `p1`, `p2`, ...
    pub fn expanded(&self) -> IndexMap<String, NamelistValue> {
        let mut flat = IndexMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            match value {
                NamelistValue::Indexed(slots) => {
                    for (slot, number) in slots {
                        flat.insert(format!("{name}{slot}"), NamelistValue::Number(number.clone()));
                    }
                }
                other => {
                    flat.insert(name.clone(), other.clone());
                }
            }
        }
        flat
    }

    pub fn uses_indexed_syntax(&self) -> bool {
        self.entries
            .values()
            .any(|value| matches!(value, NamelistValue::Indexed(_)))
    }

    fn drop_indexed_slot(&mut self, base: &str, slot: i32) {
        let Some(NamelistValue::Indexed(slots)) = self.entries.get_mut(base) else {
            return;
        };
        slots.remove(&slot);
        if slots.is_empty() {
            self.entries.shift_remove(base);
        }
    }
}

fn split_slot_name(name: &str) -> Option<(&str, i32)> {
    let digits_at = name.find(|c: char| c.is_ascii_digit())?;
    let (base, digits) = name.split_at(digits_at);
    if base.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((base, digits.parse().ok()?))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NamelistDocument {
    pub header: Option<String>,
    pub profile: Option<InputProfile>,
    pub blocks: Vec<Namelist>,
}

impl NamelistDocument {
    pub fn block(&self, key: &str) -> Option<&Namelist> {
        self.blocks.iter().find(|block| block.key == key)
    }

    pub fn first(&self, name: &str) -> Option<&Namelist> {
        self.blocks.iter().find(|block| block.name == name)
    }

    pub fn blocks_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Namelist> + 'a {
        self.blocks.iter().filter(move |block| block.name == name)
    }

    /// `{block key -> {parameter -> value}}` in file order.
    pub fn to_map(&self) -> IndexMap<String, IndexMap<String, NamelistValue>> {
        self.blocks
            .iter()
            .map(|block| (block.key.clone(), block.entries.clone()))
            .collect()
    }
}
