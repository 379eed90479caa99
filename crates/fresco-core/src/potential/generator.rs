use super::SlotSyntax;
use super::model::{PotentialRecord, SLOT_COUNT};
use crate::generator::format::format_assignments;
use crate::namelist::Numeric;

pub const EMPTY_SECTION: &str = "! No potentials defined\n";
pub const TERMINATOR: &str = " &POT /";

/// Renders one line per record, each ending in `  /`. `kp` is written as
/// stored; no sentinel is invented.
pub fn generate_potentials(records: &[PotentialRecord], syntax: SlotSyntax) -> String {
    if records.is_empty() {
        return EMPTY_SECTION.to_string();
    }
    let mut output = String::new();
    for record in records {
        output.push_str(&render_record(record, syntax));
        output.push('\n');
    }
    output
}

/// True when no record carries the negative-kp sentinel, so the caller must
/// close the run with an empty `&POT /`.
pub fn needs_terminator(records: &[PotentialRecord]) -> bool {
    !records.iter().any(PotentialRecord::is_last)
}

pub fn render_record(record: &PotentialRecord, syntax: SlotSyntax) -> String {
    let mut line = format!(" &POT kp={} type={}", record.kp, record.kind);
    if record.is_coulomb() {
        push_coulomb(&mut line, record, syntax);
    } else {
        if let Some(shape) = record.shape {
            line.push_str(&format!(" shape={shape}"));
        }
        if record.it != 0 {
            line.push_str(&format!(" it={}", record.it));
        }
        match syntax {
            SlotSyntax::Array => push_slot_array(&mut line, record),
            SlotSyntax::Individual => push_slot_names(&mut line, record),
        }
    }
    for (name, value) in &record.extras {
        if value.is_empty() {
            continue;
        }
        for piece in format_assignments(name, value) {
            line.push(' ');
            line.push_str(&piece);
        }
    }
    line.push_str("  /");
    line
}

fn push_coulomb(line: &mut String, record: &PotentialRecord, syntax: SlotSyntax) {
    let radii = [1, 2, 3].map(|index| slot_text(record, index));
    match syntax {
        SlotSyntax::Array => line.push_str(&format!(" shape=0 p(1:3)={}", radii.join(" "))),
        SlotSyntax::Individual => line.push_str(&format!(
            " at={} ap={} rc={}",
            radii[0], radii[1], radii[2]
        )),
    }
    if record.ac() != 0.0 {
        line.push_str(&format!(" ac={}", slot_text(record, 4)));
    }
}

/// `p(a:b)=...` covering p1..p6 whenever any of them is set, extended to p7
/// when it is nonzero and starting at p0 only when p0 is nonzero.
fn push_slot_array(line: &mut String, record: &PotentialRecord) {
    let Some(mut end) = (0..SLOT_COUNT).rev().find(|&index| record.slot_value(index) != 0.0) else {
        return;
    };
    if end < 6 && (1..=6).any(|index| record.slot_value(index) != 0.0) {
        end = 6;
    }
    if end == 0 {
        return;
    }
    let start = usize::from(record.slot_value(0) == 0.0);
    let values: Vec<String> = (start..=end).map(|index| slot_text(record, index)).collect();
    line.push_str(&format!(" p({start}:{end})={}", values.join(" ")));
}

/// `p0` when nonzero, then the stored `p1..p7` up to the last nonzero one.
fn push_slot_names(line: &mut String, record: &PotentialRecord) {
    if record.slot_value(0) != 0.0 {
        line.push_str(&format!(" p0={}", slot_text(record, 0)));
    }
    let Some(last) = (1..SLOT_COUNT).rev().find(|&index| record.slot_value(index) != 0.0) else {
        return;
    };
    for index in 1..=last {
        if let Some(number) = record.slot(index) {
            line.push_str(&format!(" p{index}={number}"));
        }
    }
}

fn slot_text(record: &PotentialRecord, index: usize) -> String {
    record
        .slot(index)
        .map_or_else(|| "0".to_string(), Numeric::to_string)
}
