//! `&PARTITION` / `&STATES` blocks: kept from a parsed deck or built from
//! a compact description.

use crate::generator::format::{quote, render_block};
use crate::namelist::{Namelist, NamelistDocument, value::format_number};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TERMINATOR: &str = " &PARTITION /";

/// Parsed `&PARTITION` and `&STATES` blocks in file order, up to the empty
/// `&PARTITION /` that ends the list.
pub fn partitions_from_document(document: &NamelistDocument) -> Vec<Namelist> {
    let mut blocks = Vec::new();
    for block in &document.blocks {
        match block.name.as_str() {
            "partition" if block.is_terminator() => break,
            "partition" | "states" => blocks.push(block.clone()),
            _ => {}
        }
    }
    debug!(blocks = blocks.len(), "collected partition blocks");
    blocks
}

pub fn partition_count(blocks: &[Namelist]) -> usize {
    blocks.iter().filter(|block| block.name == "partition").count()
}

/// Re-emits parsed blocks one per line and closes the list.
pub fn render_parsed(blocks: &[Namelist]) -> String {
    let mut output = String::new();
    for block in blocks {
        output.push_str(&render_block(block));
        output.push('\n');
    }
    output.push_str(TERMINATOR);
    output.push('\n');
    output
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionSpec {
    pub namep: String,
    pub massp: Option<f64>,
    pub zp: Option<f64>,
    pub jp: f64,
    pub namet: String,
    pub masst: Option<f64>,
    pub zt: Option<f64>,
    pub jt: f64,
    pub nex: u32,
    pub qval: f64,
    pub pwf: bool,
    /// Explicit states. When empty, `nex` ground-state copies are written.
    pub states: Vec<StateSpec>,
}

impl Default for PartitionSpec {
    fn default() -> Self {
        Self {
            namep: String::new(),
            massp: None,
            zp: None,
            jp: 0.0,
            namet: String::new(),
            masst: None,
            zt: None,
            jt: 0.0,
            nex: 1,
            qval: 0.0,
            pwf: true,
            states: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSpec {
    pub jp: Option<f64>,
    pub copyp: Option<i32>,
    pub bandp: Option<i32>,
    pub ep: Option<f64>,
    pub jt: Option<f64>,
    pub copyt: Option<i32>,
    pub bandt: Option<i32>,
    pub et: Option<f64>,
}

impl StateSpec {
    fn render(&self) -> String {
        let mut line = String::from(" &STATES");
        push_real(&mut line, "jp", self.jp);
        push_int(&mut line, "copyp", self.copyp);
        push_int(&mut line, "bandp", self.bandp);
        push_real(&mut line, "ep", self.ep);
        push_real(&mut line, "jt", self.jt);
        push_int(&mut line, "copyt", self.copyt);
        push_int(&mut line, "bandt", self.bandt);
        push_real(&mut line, "et", self.et);
        line.push_str(" /");
        line
    }
}

impl PartitionSpec {
    fn render(&self) -> Vec<String> {
        let nex = self.nex.max(1);
        let mut header = String::from(" &PARTITION");
        if !self.namep.is_empty() {
            header.push_str(&format!(" namep={}", quote(&self.namep)));
        }
        push_real(&mut header, "massp", self.massp.filter(|mass| *mass != 0.0));
        push_real(&mut header, "zp", self.zp);
        if !self.namet.is_empty() {
            header.push_str(&format!(" namet={}", quote(&self.namet)));
        }
        push_real(&mut header, "masst", self.masst.filter(|mass| *mass != 0.0));
        push_real(&mut header, "zt", self.zt);
        header.push_str(&format!(" nex={nex}"));
        push_real(&mut header, "qval", Some(self.qval).filter(|qval| *qval != 0.0));
        header.push_str(if self.pwf { " pwf=T /" } else { " pwf=F /" });

        let mut lines = vec![header];
        if self.states.is_empty() {
            lines.extend((0..nex).map(|index| self.ground_state(index)));
        } else {
            lines.extend(self.states.iter().map(StateSpec::render));
        }
        lines
    }

    fn ground_state(&self, index: u32) -> String {
        format!(
            " &STATES jp={} copyp={} bandp=1 ep=0.0000 jt={} copyt=0 bandt=1 et=0.0000 /",
            format_number(self.jp),
            u8::from(index > 0),
            format_number(self.jt)
        )
    }
}

/// Builds the partition list from compact descriptions and closes it.
pub fn generate_from_specs(specs: &[PartitionSpec]) -> String {
    let mut output = String::new();
    for spec in specs {
        for line in spec.render() {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output.push_str(TERMINATOR);
    output.push('\n');
    output
}

fn push_real(line: &mut String, name: &str, value: Option<f64>) {
    if let Some(value) = value {
        line.push_str(&format!(" {name}={}", format_number(value)));
    }
}

fn push_int(line: &mut String, name: &str, value: Option<i32>) {
    if let Some(value) = value {
        line.push_str(&format!(" {name}={value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::{
        PartitionSpec, StateSpec, generate_from_specs, partition_count, partitions_from_document,
        render_parsed,
    };
    use crate::namelist;

    fn alpha_on_carbon() -> PartitionSpec {
        PartitionSpec {
            namep: "alpha".to_string(),
            massp: Some(4.0),
            zp: Some(2.0),
            namet: "12C".to_string(),
            masst: Some(12.0),
            zt: Some(6.0),
            ..PartitionSpec::default()
        }
    }

    #[test]
    fn spec_without_states_writes_ground_state_copies() {
        let spec = PartitionSpec {
            nex: 2,
            qval: -1.5,
            ..alpha_on_carbon()
        };
        assert_eq!(
            generate_from_specs(&[spec]),
            " &PARTITION namep='alpha' massp=4 zp=2 namet='12C' masst=12 zt=6 nex=2 qval=-1.5 pwf=T /\n\
             \x20&STATES jp=0 copyp=0 bandp=1 ep=0.0000 jt=0 copyt=0 bandt=1 et=0.0000 /\n\
             \x20&STATES jp=0 copyp=1 bandp=1 ep=0.0000 jt=0 copyt=0 bandt=1 et=0.0000 /\n\
             \x20&PARTITION /\n"
        );
    }

    #[test]
    fn explicit_states_write_only_given_fields() {
        let spec = PartitionSpec {
            pwf: false,
            states: vec![StateSpec {
                jp: Some(0.5),
                bandp: Some(1),
                et: Some(4.44),
                ..StateSpec::default()
            }],
            ..alpha_on_carbon()
        };
        let output = generate_from_specs(&[spec]);
        assert!(output.contains("pwf=F /"));
        assert!(output.contains(" &STATES jp=0.5 bandp=1 et=4.44 /\n"));
    }

    #[test]
    fn empty_spec_list_is_only_the_terminator() {
        assert_eq!(generate_from_specs(&[]), " &PARTITION /\n");
    }

    #[test]
    fn parsed_blocks_stop_at_empty_partition() {
        let parsed = namelist::parse(
            "&PARTITION namep='p' massp=1 zp=1 namet='208Pb' masst=208 zt=82 nex=1 /\n\
             &STATES jp=0.5 bandp=1 ep=0 jt=0 bandt=1 et=0 /\n\
             &PARTITION /\n\
             &POT kp=1 type=0 at=208 rc=1.2 /\n",
        );
        let blocks = partitions_from_document(&parsed.document);
        assert_eq!(blocks.len(), 2);
        assert_eq!(partition_count(&blocks), 1);
        let rendered = render_parsed(&blocks);
        assert!(rendered.starts_with(" &PARTITION namep='p' massp=1"));
        assert!(rendered.contains(" &STATES jp=0.5"));
        assert!(rendered.ends_with(" &PARTITION /\n"));
    }
}
