//! Rendering of single assignments and whole blocks.

use crate::namelist::{Namelist, NamelistValue, Numeric, is_multi_value};
use std::collections::BTreeMap;

/// Renders `name=value` pieces for one value. Indexed slots produce one
/// `name(i:j)=` piece per contiguous run.
pub fn format_assignments(name: &str, value: &NamelistValue) -> Vec<String> {
    match value {
        NamelistValue::Indexed(slots) => contiguous_runs(slots)
            .into_iter()
            .map(|(start, run)| {
                let end = start + run.len() as i32 - 1;
                format!("{name}({start}:{end})={}", join_raw(&run))
            })
            .collect(),
        other => vec![format!("{name}={}", format_value(name, other))],
    }
}

/// Right-hand side text: logicals as `T`/`F`, numbers echoed as written,
/// number lists space separated, other text single-quoted.
pub fn format_value(name: &str, value: &NamelistValue) -> String {
    match value {
        NamelistValue::Text(text) if is_multi_value(name) => normalize_list(text),
        NamelistValue::Text(text) => quote(text),
        other => other.display_text(),
    }
}

pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// `6.9, 11.0  49.35` -> `6.9 11.0 49.35`
pub fn normalize_list(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line ` &NAME k=v ... /` rendering of a parsed block.
pub fn render_block(block: &Namelist) -> String {
    let pieces: Vec<String> = block
        .entries
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .flat_map(|(name, value)| format_assignments(name, value))
        .collect();
    let name = block.name.to_ascii_uppercase();
    if pieces.is_empty() {
        format!(" &{name} /")
    } else {
        format!(" &{name} {} /", pieces.join(" "))
    }
}

fn contiguous_runs(slots: &BTreeMap<i32, Numeric>) -> Vec<(i32, Vec<&Numeric>)> {
    let mut runs: Vec<(i32, Vec<&Numeric>)> = Vec::new();
    let mut previous: Option<i32> = None;
    for (&slot, number) in slots {
        match (previous, runs.last_mut()) {
            (Some(last), Some((_, run))) if slot == last + 1 => run.push(number),
            _ => runs.push((slot, vec![number])),
        }
        previous = Some(slot);
    }
    runs
}

fn join_raw(values: &[&Numeric]) -> String {
    values
        .iter()
        .map(|number| number.raw())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{format_assignments, format_value, normalize_list, render_block};
    use crate::namelist::{Namelist, NamelistValue, Numeric};

    #[test]
    fn text_is_quoted_except_for_list_parameters() {
        assert_eq!(
            format_value("namep", &NamelistValue::Text("11Be".to_string())),
            "'11Be'"
        );
        assert_eq!(
            format_value("elab", &NamelistValue::Text("6.9, 11.0,49.35".to_string())),
            "6.9 11.0 49.35"
        );
        assert_eq!(
            format_value("tmp", &NamelistValue::Text("it's".to_string())),
            "'it''s'"
        );
        assert_eq!(format_value("fatal", &NamelistValue::Logical(false)), "F");
    }

    #[test]
    fn indexed_values_render_one_piece_per_run() {
        let mut block = Namelist::new("pot", "pot1", 1);
        let numbers = |raw: &[&str]| -> Vec<Numeric> {
            raw.iter()
                .map(|value| Numeric::parse(value).expect("number should parse"))
                .collect()
        };
        block.assign_slots("p", 1, numbers(&["40", "1.2"]));
        block.assign_slots("p", 4, numbers(&["10"]));

        let value = block.get("p").expect("indexed value should exist");
        assert_eq!(format_assignments("p", value), vec!["p(1:2)=40 1.2", "p(4:4)=10"]);
    }

    #[test]
    fn blocks_render_on_one_line() {
        let mut block = Namelist::new("partition", "partition", 3);
        block.assign("namep", NamelistValue::Text("11Be".to_string()));
        block.assign("massp", NamelistValue::from_token("11.0", false));
        assert_eq!(render_block(&block), " &PARTITION namep='11Be' massp=11.0 /");
        assert_eq!(render_block(&Namelist::new("pot", "pot3", 9)), " &POT /");
    }

    #[test]
    fn list_normalization_collapses_separators() {
        assert_eq!(normalize_list(" 10,20  40 "), "10 20 40");
    }
}
