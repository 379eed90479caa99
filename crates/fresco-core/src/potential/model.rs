use super::catalog::{self, ShapeFamily};
use crate::namelist::{NamelistValue, Numeric};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const SLOT_COUNT: usize = 8;
pub const COULOMB_TYPE: i32 = 0;

/// Names that map onto `p1..p4` for a Coulomb record.
pub const COULOMB_FIELDS: [&str; 4] = ["at", "ap", "rc", "ac"];

/// One `&POT` block.
///
/// For `type=0` the slots `p1..p4` hold `at`, `ap`, `rc` and `ac`; FRESCO
/// reads the Coulomb radii from the same storage either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordRepr", into = "RecordRepr")]
pub struct PotentialRecord {
    pub kp: i32,
    pub kind: i32,
    pub shape: Option<i32>,
    pub it: i32,
    slots: [Option<Numeric>; SLOT_COUNT],
    /// Remaining assignments such as `jl`, `lshape` or `datafile`, kept in
    /// input order.
    pub extras: IndexMap<String, NamelistValue>,
}

impl PotentialRecord {
    pub fn nuclear(kp: i32, kind: i32, shape: i32) -> Self {
        Self {
            kp,
            kind,
            shape: Some(shape),
            it: 0,
            slots: Default::default(),
            extras: IndexMap::new(),
        }
    }

    pub fn coulomb(kp: i32, at: f64, ap: f64, rc: f64) -> Self {
        Self {
            kp,
            kind: COULOMB_TYPE,
            shape: None,
            it: 0,
            slots: Default::default(),
            extras: IndexMap::new(),
        }
        .with_slot(1, at)
        .with_slot(2, ap)
        .with_slot(3, rc)
    }

    pub fn with_slot(mut self, index: usize, value: f64) -> Self {
        self.set_slot(index, Numeric::from_f64(value));
        self
    }

    pub fn with_kp(mut self, kp: i32) -> Self {
        self.kp = kp;
        self
    }

    pub fn slot(&self, index: usize) -> Option<&Numeric> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Slot value with absent slots read as zero.
    pub fn slot_value(&self, index: usize) -> f64 {
        self.slot(index).map_or(0.0, Numeric::value)
    }

    /// Out-of-range indices are ignored.
    pub fn set_slot(&mut self, index: usize, value: Numeric) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(value);
        }
    }

    pub fn clear_slot(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn slots(&self) -> &[Option<Numeric>; SLOT_COUNT] {
        &self.slots
    }

    pub fn is_coulomb(&self) -> bool {
        self.kind == COULOMB_TYPE
    }

    /// Negative `kp` marks the last record of a sequence.
    pub fn is_last(&self) -> bool {
        self.kp < 0
    }

    pub fn at(&self) -> f64 {
        self.slot_value(1)
    }

    pub fn ap(&self) -> f64 {
        self.slot_value(2)
    }

    pub fn rc(&self) -> f64 {
        self.slot_value(3)
    }

    pub fn ac(&self) -> f64 {
        self.slot_value(4)
    }

    pub fn shape_family(&self) -> ShapeFamily {
        catalog::shape_family(self.kind)
    }

    /// Catalog mismatches for this record. Empty when the record is
    /// consistent with the type table.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let Some(info) = catalog::potential_type(self.kind) else {
            warnings.push(format!("unknown potential type {}", self.kind));
            return warnings;
        };
        if let Some(shape) = self.shape {
            if !info.valid_shapes.is_empty() && !info.valid_shapes.contains(&shape) {
                warnings.push(format!(
                    "shape {shape} is not valid for potential type {}",
                    self.kind
                ));
            }
        }
        if catalog::it_option(self.it).is_none() {
            warnings.push(format!("it={} is outside 0..=3", self.it));
        }
        warnings
    }
}

/// Flat JSON form: `{"kp":1,"type":0,"at":12,"ap":4,"rc":1.2}` or
/// `{"kp":1,"type":1,"shape":0,"p1":40,...}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RecordRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    kp: Option<i32>,
    #[serde(rename = "type")]
    kind: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    it: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    at: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ap: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rc: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ac: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p0: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p1: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p2: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p3: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p4: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p5: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p6: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p7: Option<Numeric>,
    #[serde(flatten)]
    extras: IndexMap<String, NamelistValue>,
}

impl From<RecordRepr> for PotentialRecord {
    fn from(repr: RecordRepr) -> Self {
        let mut slots = [
            repr.p0, repr.p1, repr.p2, repr.p3, repr.p4, repr.p5, repr.p6, repr.p7,
        ];
        if repr.kind == COULOMB_TYPE {
            for (index, named) in [repr.at, repr.ap, repr.rc, repr.ac].into_iter().enumerate() {
                if named.is_some() {
                    slots[index + 1] = named;
                }
            }
        }
        Self {
            kp: repr.kp.unwrap_or(1),
            kind: repr.kind,
            shape: repr.shape,
            it: repr.it.unwrap_or(0),
            slots,
            extras: repr.extras,
        }
    }
}

impl From<PotentialRecord> for RecordRepr {
    fn from(record: PotentialRecord) -> Self {
        let [p0, p1, p2, p3, p4, p5, p6, p7] = record.slots;
        let mut repr = Self {
            kp: Some(record.kp),
            kind: record.kind,
            shape: record.shape,
            it: (record.it != 0).then_some(record.it),
            p0,
            extras: record.extras,
            ..Self::default()
        };
        if record.kind == COULOMB_TYPE {
            repr.at = p1;
            repr.ap = p2;
            repr.rc = p3;
            repr.ac = p4;
            repr.p5 = p5;
            repr.p6 = p6;
            repr.p7 = p7;
        } else {
            repr.p1 = p1;
            repr.p2 = p2;
            repr.p3 = p3;
            repr.p4 = p4;
            repr.p5 = p5;
            repr.p6 = p6;
            repr.p7 = p7;
        }
        repr
    }
}
