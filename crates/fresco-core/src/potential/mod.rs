//! `&POT` optical-potential records: parsing, editing and rendering.

pub mod catalog;
mod defaults;
mod generator;
mod model;
mod parser;

pub use defaults::{default_nuclear, defaults_for};
pub use generator::{EMPTY_SECTION, TERMINATOR, generate_potentials, needs_terminator, render_record};
pub use model::{COULOMB_FIELDS, COULOMB_TYPE, PotentialRecord, SLOT_COUNT};
pub use parser::{ParsedPotentials, parse_potentials, potentials_from_document};

use crate::domain::ReactionType;
use crate::namelist::Numeric;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How `p` slots are spelled: `p1=.. p2=..` or `p(1:6)=..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSyntax {
    #[default]
    Individual,
    Array,
}

impl SlotSyntax {
    pub const fn from_array_flag(array: bool) -> Self {
        if array { Self::Array } else { Self::Individual }
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Self::Array)
    }
}

/// Partial Coulomb edit. Fields left `None` keep their current value, or
/// take the reaction-independent default when a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct CoulombUpdate {
    pub at: Option<f64>,
    pub ap: Option<f64>,
    pub rc: Option<f64>,
    pub ac: Option<f64>,
}

/// Ordered potential records for one input deck plus the slot style that
/// generation should mirror.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PotentialSet {
    reaction: ReactionType,
    records: Vec<PotentialRecord>,
    syntax: SlotSyntax,
}

impl PotentialSet {
    pub fn new(reaction: ReactionType) -> Self {
        Self {
            reaction,
            records: Vec::new(),
            syntax: SlotSyntax::Individual,
        }
    }

    /// Replaces the records with a parsed run and adopts the file's style.
    pub fn replace_with_parsed(&mut self, parsed: ParsedPotentials) {
        info!(
            records = parsed.records.len(),
            syntax = ?parsed.syntax,
            "loaded potentials from input"
        );
        self.records = parsed.records;
        self.syntax = parsed.syntax;
    }

    pub fn load_defaults(&mut self) -> &[PotentialRecord] {
        self.records = defaults_for(self.reaction);
        debug!(reaction = %self.reaction, records = self.records.len(), "loaded default potentials");
        &self.records
    }

    pub fn reaction(&self) -> ReactionType {
        self.reaction
    }

    pub fn syntax(&self) -> SlotSyntax {
        self.syntax
    }

    pub fn set_syntax(&mut self, syntax: SlotSyntax) {
        self.syntax = syntax;
    }

    /// Appends `record`, or the default Woods-Saxon record. Returns its index.
    pub fn add(&mut self, record: Option<PotentialRecord>) -> usize {
        self.records.push(record.unwrap_or_else(default_nuclear));
        self.records.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<PotentialRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    /// Applies `edit` to the record at `index`. Returns false when absent.
    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut PotentialRecord)) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                edit(record);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&PotentialRecord> {
        self.records.get(index)
    }

    pub fn all(&self) -> &[PotentialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn coulomb(&self) -> Option<&PotentialRecord> {
        self.records.iter().find(|record| record.is_coulomb())
    }

    /// Edits the first Coulomb record, inserting one at the front if none
    /// exists.
    pub fn update_coulomb(&mut self, update: CoulombUpdate) {
        if let Some(record) = self.records.iter_mut().find(|record| record.is_coulomb()) {
            for (index, value) in [update.at, update.ap, update.rc, update.ac]
                .into_iter()
                .enumerate()
            {
                if let Some(value) = value {
                    record.set_slot(index + 1, Numeric::from_f64(value));
                }
            }
            return;
        }
        let record = PotentialRecord::coulomb(
            1,
            update.at.unwrap_or(12.0),
            update.ap.unwrap_or(4.0),
            update.rc.unwrap_or(1.2),
        )
        .with_slot(4, update.ac.unwrap_or(0.0));
        self.records.insert(0, record);
    }

    /// Records rendered in `syntax`, or in the tracked style when `None`.
    pub fn generate(&self, syntax: Option<SlotSyntax>) -> String {
        generate_potentials(&self.records, syntax.unwrap_or(self.syntax))
    }

    pub fn needs_terminator(&self) -> bool {
        needs_terminator(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoulombUpdate, PotentialRecord, PotentialSet, SlotSyntax, parse_potentials};
    use crate::domain::ReactionType;

    #[test]
    fn crud_operations_edit_records_in_place() {
        let mut set = PotentialSet::new(ReactionType::Elastic);
        assert!(set.load_defaults().len() == 2);
        let added = set.add(None);
        assert_eq!(added, 2);
        assert_eq!(set.get(added).map(|record| record.kind), Some(1));

        assert!(set.update(added, |record| record.kp = -1));
        assert!(!set.update(9, |record| record.kp = 5));
        assert!(!set.needs_terminator());

        let removed = set.remove(added).expect("added record should be removable");
        assert!(removed.is_last());
        assert!(set.remove(9).is_none());
        assert!(set.needs_terminator());

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn coulomb_update_inserts_at_front_when_missing() {
        let mut set = PotentialSet::new(ReactionType::Transfer);
        set.add(Some(PotentialRecord::nuclear(1, 2, 0).with_slot(1, 6.0)));
        set.update_coulomb(CoulombUpdate {
            ap: Some(3.0),
            ..CoulombUpdate::default()
        });
        let coulomb = set.coulomb().expect("coulomb should be inserted");
        assert_eq!((coulomb.at(), coulomb.ap(), coulomb.rc()), (12.0, 3.0, 1.2));
        assert!(set.all()[0].is_coulomb());

        set.update_coulomb(CoulombUpdate {
            rc: Some(1.3),
            ..CoulombUpdate::default()
        });
        assert_eq!(set.len(), 2);
        assert_eq!(set.all()[0].rc(), 1.3);
        assert_eq!(set.all()[0].ap(), 3.0);
    }

    #[test]
    fn parsed_style_is_mirrored_unless_overridden() {
        let mut set = PotentialSet::new(ReactionType::Elastic);
        set.replace_with_parsed(parse_potentials(
            "&POT kp=1 type=0 p(1:3)=12 4 1.2 /\n&POT kp=-1 type=1 shape=0 p(1:3)=40 1.2 0.65 /\n",
        ));
        assert_eq!(set.syntax(), SlotSyntax::Array);
        assert!(set.generate(None).contains("p(1:3)=12 4 1.2"));
        assert!(
            set.generate(Some(SlotSyntax::Individual))
                .contains("at=12 ap=4 rc=1.2")
        );
    }
}
