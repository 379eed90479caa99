use super::SlotSyntax;
use super::model::{COULOMB_FIELDS, PotentialRecord, SLOT_COUNT};
use crate::namelist::{self, Namelist, NamelistDocument, NamelistValue};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedPotentials {
    pub records: Vec<PotentialRecord>,
    /// Style the file used for the `p` slots.
    pub syntax: SlotSyntax,
    /// Blocks read up to and including the sentinel or terminator.
    pub blocks_read: usize,
}

pub fn parse_potentials(text: &str) -> ParsedPotentials {
    potentials_from_document(&namelist::parse(text).document)
}

/// Collects the `&POT` run of a document. The run ends after a record with
/// negative `kp` or at an empty `&POT /`; blocks without `type` are dropped.
pub fn potentials_from_document(document: &NamelistDocument) -> ParsedPotentials {
    let mut parsed = ParsedPotentials::default();
    for block in document.blocks_named("pot") {
        parsed.blocks_read += 1;
        if block.uses_indexed_syntax() {
            parsed.syntax = SlotSyntax::Array;
        }
        if block.is_terminator() {
            break;
        }
        let Some(record) = record_from_block(block) else {
            debug!(line = block.source_line, "dropping &POT block without type");
            continue;
        };
        for warning in record.validate() {
            warn!(line = block.source_line, kp = record.kp, "{warning}");
        }
        let last = record.is_last();
        parsed.records.push(record);
        if last {
            break;
        }
    }
    debug!(
        records = parsed.records.len(),
        syntax = ?parsed.syntax,
        "collected potentials"
    );
    parsed
}

pub(crate) fn record_from_block(block: &Namelist) -> Option<PotentialRecord> {
    let entries = block.expanded();
    let kind = entries.get("type")?.as_i32()?;
    let mut record = PotentialRecord::nuclear(1, kind, 0);
    record.shape = None;
    let mut named_coulomb: [Option<namelist::Numeric>; 4] = Default::default();

    for (name, value) in entries {
        match name.as_str() {
            "type" => {}
            "kp" => record.kp = value.as_i32().unwrap_or(1),
            "shape" => record.shape = value.as_i32(),
            "it" => record.it = value.as_i32().unwrap_or(0),
            _ => {
                if let Some(index) = slot_index(&name) {
                    match numeric(&value) {
                        Some(number) => record.set_slot(index, number),
                        None => {
                            record.extras.insert(name, value);
                        }
                    }
                } else if let Some(position) = COULOMB_FIELDS.iter().position(|field| *field == name) {
                    match numeric(&value) {
                        Some(number) if record.is_coulomb() => named_coulomb[position] = Some(number),
                        _ => {
                            record.extras.insert(name, value);
                        }
                    }
                } else {
                    record.extras.insert(name, value);
                }
            }
        }
    }

    for (position, number) in named_coulomb.into_iter().enumerate() {
        if let Some(number) = number {
            record.set_slot(position + 1, number);
        }
    }
    Some(record)
}

fn slot_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix('p')?;
    if digits.len() != 1 {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    (index < SLOT_COUNT).then_some(index)
}

fn numeric(value: &NamelistValue) -> Option<namelist::Numeric> {
    match value {
        NamelistValue::Number(number) => Some(number.clone()),
        NamelistValue::Text(text) => namelist::Numeric::parse(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{SlotSyntax, parse_potentials};

    #[test]
    fn array_and_individual_slots_agree() {
        let array = parse_potentials("&POT kp=1 type=1 shape=0 p(1:3)=40 1.2 0.65 /\n");
        let individual = parse_potentials("&POT kp=1 type=1 shape=0 p1=40 p2=1.2 p3=0.65 /\n");
        assert_eq!(array.records, individual.records);
        assert_eq!(array.syntax, SlotSyntax::Array);
        assert_eq!(individual.syntax, SlotSyntax::Individual);
    }

    #[test]
    fn run_stops_after_negative_kp() {
        let parsed = parse_potentials(
            "&POT kp=1 type=0 at=12 ap=4 rc=1.2 /\n\
             &POT kp=-1 type=1 p1=40 /\n\
             &POT kp=2 type=1 p1=50 /\n",
        );
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.records[1].is_last());
        assert_eq!(parsed.blocks_read, 2);
    }

    #[test]
    fn run_stops_at_empty_terminator() {
        let parsed = parse_potentials(
            "&POT kp=1 type=0 p(1:3)=12 4 1.2 /\n&POT /\n&POT kp=2 type=1 /\n",
        );
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].ap(), 4.0);
        assert_eq!(parsed.syntax, SlotSyntax::Array);
    }

    #[test]
    fn blocks_without_type_are_dropped() {
        let parsed = parse_potentials("&POT kp=1 p1=3 /\n&POT kp=1 type=2 shape=0 p1=7 /\n");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].kind, 2);
    }

    #[test]
    fn multi_line_block_and_extras_are_collected() {
        let parsed = parse_potentials(
            "&POT kp=1 type=1 shape=30\n   p1=40 p2=1.2\n   jl=2 lshape=1 /\n",
        );
        let record = &parsed.records[0];
        assert_eq!(record.shape, Some(30));
        assert_eq!(record.slot_value(2), 1.2);
        assert_eq!(record.extras.keys().collect::<Vec<_>>(), vec!["jl", "lshape"]);
    }

    #[test]
    fn later_individual_slot_overrides_array_slot() {
        let parsed = parse_potentials("&POT kp=1 type=1 p(1:3)=40 1.2 0.65 p2=1.3 /\n");
        assert_eq!(parsed.records[0].slot_value(2), 1.3);
        assert_eq!(parsed.records[0].slot_value(3), 0.65);
    }
}
