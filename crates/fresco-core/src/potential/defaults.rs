use super::model::PotentialRecord;
use crate::domain::ReactionType;

/// Fixed starting sequence for a reaction type.
pub fn defaults_for(reaction: ReactionType) -> Vec<PotentialRecord> {
    match reaction {
        ReactionType::Elastic => vec![
            coulomb(4.0),
            optical([40.0, 1.2, 0.65, 10.0, 1.2, 0.5]),
        ],
        ReactionType::Inelastic => vec![
            coulomb(4.0),
            optical([40.0, 1.2, 0.65, 10.0, 1.2, 0.5]),
            deformed_target(1.8),
        ],
        ReactionType::Transfer => vec![
            coulomb(3.0),
            optical([50.0, 1.15, 0.75, 12.0, 1.3, 0.58]),
        ],
        ReactionType::Capture => vec![
            coulomb(1.0),
            optical([45.0, 1.25, 0.65, 8.0, 1.25, 0.48]),
        ],
    }
}

/// Woods-Saxon volume potential added when no record is supplied.
pub fn default_nuclear() -> PotentialRecord {
    optical([40.0, 1.2, 0.65, 10.0, 1.2, 0.5])
}

fn coulomb(ap: f64) -> PotentialRecord {
    PotentialRecord::coulomb(1, 12.0, ap, 1.2).with_slot(4, 0.0)
}

/// Real depth, radius, diffuseness followed by the imaginary triple.
fn optical(parameters: [f64; 6]) -> PotentialRecord {
    let record = PotentialRecord::nuclear(1, 1, 0).with_slot(0, 0.0);
    parameters
        .into_iter()
        .enumerate()
        .fold(record, |record, (offset, value)| record.with_slot(offset + 1, value))
        .with_slot(7, 0.0)
}

fn deformed_target(length: f64) -> PotentialRecord {
    (0..8)
        .fold(PotentialRecord::nuclear(1, 11, 10), |record, index| {
            record.with_slot(index, 0.0)
        })
        .with_slot(2, length)
}
