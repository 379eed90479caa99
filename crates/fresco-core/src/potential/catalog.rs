//! Reference tables for `&POT` TYPE, SHAPE and IT codes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    All,
    Inelastic,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PotentialTypeInfo {
    pub code: i32,
    pub label: &'static str,
    pub description: &'static str,
    pub applies_to: Applicability,
    /// Empty when SHAPE is not read for this type.
    pub valid_shapes: &'static [i32],
    pub nuclear: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeInfo {
    pub code: i32,
    pub label: &'static str,
    pub formula: Option<&'static str>,
    pub description: &'static str,
    pub variables: Option<&'static str>,
    pub requires_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFamily {
    Volume,
    Surface,
    Deformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItOption {
    pub code: i32,
    pub label: &'static str,
    pub description: &'static str,
}

const SHAPES_0_TO_9: &[i32] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const DEFORMATION_CODES: &[i32] = &[7, 8, 9, 10, 11, 12, 13];

const fn kind(
    code: i32,
    label: &'static str,
    description: &'static str,
    applies_to: Applicability,
    valid_shapes: &'static [i32],
) -> PotentialTypeInfo {
    PotentialTypeInfo {
        code,
        label,
        description,
        applies_to,
        valid_shapes,
        nuclear: code != 0,
    }
}

pub const POTENTIAL_TYPES: &[PotentialTypeInfo] = &[
    kind(0, "0 - Coulomb potential", "Defines radii and diagonal Coulomb potential", Applicability::All, &[]),
    kind(
        1,
        "1 - Central potential, Volume",
        "Central volume potential (SHAPE determines form)",
        Applicability::All,
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, -1, -7, -8, -9],
    ),
    kind(
        2,
        "2 - Central potential, Derivative (surface)",
        "Surface potential (first derivative forms)",
        Applicability::All,
        SHAPES_0_TO_9,
    ),
    kind(3, "3 - Spin-orbit for projectile", "Spin-orbit potential for projectile", Applicability::All, SHAPES_0_TO_9),
    kind(4, "4 - Spin-orbit for target", "Spin-orbit potential for target", Applicability::All, SHAPES_0_TO_9),
    kind(
        5,
        "5 - Tr tensor force for projectile",
        "Tensor force for projectile (second derivative forms)",
        Applicability::All,
        SHAPES_0_TO_9,
    ),
    kind(
        6,
        "6 - Tr tensor force for target",
        "Tensor force for target (second derivative forms)",
        Applicability::All,
        SHAPES_0_TO_9,
    ),
    kind(
        7,
        "7 - Tensor force between L and combined spins",
        "Tensor force between L and combined projectile+target spins (e.g. n-p tensor)",
        Applicability::All,
        SHAPES_0_TO_9,
    ),
    kind(8, "8 - Spin·spin force", "Spin-spin force for target & projectile spins", Applicability::All, SHAPES_0_TO_9),
    kind(9, "9 - Effective mass reduction", "Effective mass: reduction from unity", Applicability::All, &[0, 1, 2, 3, 4]),
    kind(
        10,
        "10 - Deformed projectile (ROTOR)",
        "Deformed projectile with matrix elements from ROTOR",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        11,
        "11 - Deformed target (ROTOR)",
        "Deformed target with matrix elements from ROTOR",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        12,
        "12 - Projectile coupled by matrix elements",
        "Projectile coupled by matrix elements read in",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        13,
        "13 - Target coupled by matrix elements",
        "Target coupled by matrix elements read in",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        14,
        "14 - Projectile second-order coupled",
        "Projectile second-order coupled by matrix elements read in",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        15,
        "15 - Target second-order coupled",
        "Target second-order coupled by matrix elements read in",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        16,
        "16 - Target & projectile simultaneous second-order",
        "Target & projectile simultaneous second-order coupled by matrix elements",
        Applicability::Inelastic,
        DEFORMATION_CODES,
    ),
    kind(
        17,
        "17 - Target & projectile all-order coupled",
        "Target & projectile all-order coupled by matrix elements (Kermode-Rowley method)",
        Applicability::Inelastic,
        &[],
    ),
    kind(
        20,
        "20 - Super-soft N-N potential (SSC)",
        "Super-soft N-N potential of de Tourreil & Sprung (SSC)",
        Applicability::Transfer,
        &[],
    ),
    kind(
        21,
        "21 - User-supplied N-N potential",
        "User-supplied N-N potential via subroutine NNPOT",
        Applicability::Transfer,
        &[],
    ),
];

const WS_VARIABLES: Option<&str> = Some("R = P2*CC, RH = (r-R)/P3, E = exp(-(r-R)/P3)");
const E_VARIABLES: Option<&str> = Some("E = exp(-(r-R)/P3)");

const fn shape(
    code: i32,
    label: &'static str,
    formula: Option<&'static str>,
    description: &'static str,
) -> ShapeInfo {
    ShapeInfo {
        code,
        label,
        formula,
        description,
        variables: None,
        requires_file: false,
    }
}

const fn file_shape(code: i32, label: &'static str, description: &'static str) -> ShapeInfo {
    ShapeInfo {
        requires_file: true,
        ..shape(code, label, None, description)
    }
}

pub const VOLUME_SHAPES: &[ShapeInfo] = &[
    ShapeInfo {
        variables: WS_VARIABLES,
        ..shape(0, "0 - Woods-Saxon", Some("-P1 / (1 + 1/E)"), "Standard Woods-Saxon form factor")
    },
    ShapeInfo {
        variables: WS_VARIABLES,
        ..shape(1, "1 - WS squared", Some("-P1 / (1 + 1/E)²"), "Woods-Saxon squared form factor")
    },
    ShapeInfo {
        variables: Some("R = P2*CC, RH = (r-R)/P3"),
        ..shape(2, "2 - Gaussian", Some("-P1 * exp(-RH²)"), "Gaussian form factor")
    },
    ShapeInfo {
        variables: E_VARIABLES,
        ..shape(3, "3 - Yukawa", Some("-P1 * E / r"), "Yukawa form factor")
    },
    ShapeInfo {
        variables: E_VARIABLES,
        ..shape(4, "4 - Exponential", Some("-P1 * E"), "Exponential form factor")
    },
    shape(
        5,
        "5 - Reid soft core T=0",
        Some("Reid soft core for T=0, central part"),
        "Reid soft core potential for isospin T=0",
    ),
    shape(
        6,
        "6 - Reid soft core T=1",
        Some("Reid soft core for T=1, central part"),
        "Reid soft core potential for isospin T=1",
    ),
    file_shape(7, "7 - Read Real from file", "Read real part from external file (Input File 4)"),
    file_shape(8, "8 - Read Imaginary from file", "Read imaginary part from external file (Input File 4)"),
    file_shape(9, "9 - Read Complex from file", "Read complex (both parts) from external file (Input File 4)"),
    shape(-1, "-1 - Fourier-Bessel", Some("j₀(RH) = sin(RH)/RH"), "Fourier-Bessel form factor"),
    file_shape(-7, "-7 - Read Real (rewind)", "Rewind file 4, then read real part"),
    file_shape(-8, "-8 - Read Imaginary (rewind)", "Rewind file 4, then read imaginary part"),
    file_shape(-9, "-9 - Read Complex (rewind)", "Rewind file 4, then read complex part"),
];

pub const SURFACE_SHAPES: &[ShapeInfo] = &[
    shape(
        0,
        "0 - Woods-Saxon derivative",
        Some("-P1 * 4 * E / (1+E)²"),
        "First derivative of Woods-Saxon, normalized to -1 when E=1",
    ),
    shape(1, "1 - WS squared derivative", Some("-P1 * 8 * E² / (1+E)³"), "First derivative of WS squared"),
    shape(2, "2 - Gaussian derivative", Some("-P1 * 2 * exp(-RH²) * RH"), "First derivative of Gaussian"),
    shape(3, "3 - Yukawa derivative", Some("-P1 * E * (1 + r/P3) / r²"), "First derivative of Yukawa"),
    shape(4, "4 - Exponential derivative", Some("-P1 * E"), "First derivative of Exponential"),
    shape(5, "5 - Reid soft core T=0 S-O", None, "Reid soft core for T=0, spin-orbit part × r"),
    shape(6, "6 - Reid soft core T=1 S-O", None, "Reid soft core for T=1, spin-orbit part × r"),
    file_shape(7, "7 - Read from file", "Read from external file (Input File 4)"),
    file_shape(8, "8 - Read from file", "Read from external file (Input File 4)"),
    file_shape(9, "9 - Read from file", "Read from external file (Input File 4)"),
];

pub const SPECIAL_SHAPES: &[ShapeInfo] = &[
    shape(
        10,
        "10 - Write to output file 25",
        None,
        "Use SHAPE-10, write resulting potential to Output file 25 in FORMAT(6E12.4)",
    ),
    shape(20, "20 - J-dependent from file (J+1)", None, "Read J-dependent potential from file #20 for each CC set"),
    shape(21, "21 - J-dependent from file", None, "Read J-dependent potential from file #21"),
    shape(22, "22 - J-dependent from file", None, "Read J-dependent potential from file #22"),
    shape(23, "23 - J-dependent from file", None, "Read J-dependent potential from file #23"),
    shape(
        24,
        "24 - J-dependent from file (int(J)+1)",
        None,
        "Read J-dependent potential from file #24, using int(J)+1",
    ),
    shape(
        30,
        "30 - L/J-dependent form factor",
        None,
        "Use SHAPE-30 with JL, LSHAPE, XLVARY, ALVARY for L/J-dependent potential",
    ),
    shape(40, "40 - Parity-dependent", None, "Use KP=P1 for + parity, KP=P2 for - parity"),
    shape(41, "41 - L-dependent", None, "Use KP=P(L+1) for L=0–5, P0 for L≥6"),
    shape(42, "42 - J-dependent", None, "Use KP=P(Ji+1) for Ji=0–5, P0 for Ji≥6"),
];

pub const DEFORMATION_SHAPES: &[ShapeInfo] = &[
    shape(7, "7 - Read from file (external)", None, "Read multipoles from external file, multiplied by P(k)"),
    shape(8, "8 - Read from file (external)", None, "Read multipoles from external file, multiplied by P(k)"),
    shape(9, "9 - Read from file (external)", None, "Read multipoles from external file, multiplied by P(k)"),
    shape(
        10,
        "10 - Coulomb/Nuclear multipoles",
        None,
        "Coulomb: M(Ek)=P(k) charged sphere. Nuclear: DEF(k)=P(k) × dU/dr",
    ),
    shape(
        11,
        "11 - Nuclear deformation (quadrature)",
        None,
        "Numerically deform radii of previous potential, project onto multipoles",
    ),
    shape(
        12,
        "12 - Nuclear deformation + monopole",
        None,
        "Same as 11, but recalculate monopole k=0 part with volume conservation",
    ),
    shape(
        13,
        "13 - Nuclear deformation (no correction)",
        None,
        "Same as 12, but without first-order radius correction for volume conservation",
    ),
];

pub const IT_OPTIONS: &[ItOption] = &[
    ItOption {
        code: 0,
        label: "0 - Normal (default)",
        description: "Include potential normally in all calculations",
    },
    ItOption {
        code: 1,
        label: "1 - Include iteratively only",
        description: "Include this component only iteratively",
    },
    ItOption {
        code: 2,
        label: "2 - Do not subtract in KIND=3,4",
        description: "Do NOT subtract this component in KIND=3,4 single-particle couplings",
    },
    ItOption {
        code: 3,
        label: "3 - Both: iterative & no subtract",
        description: "Combine options 1 and 2: iterative and no subtract in KIND=3,4",
    },
];

pub fn potential_type(code: i32) -> Option<&'static PotentialTypeInfo> {
    POTENTIAL_TYPES.iter().find(|info| info.code == code)
}

pub fn it_option(code: i32) -> Option<&'static ItOption> {
    IT_OPTIONS.iter().find(|option| option.code == code)
}

pub const fn shape_family(type_code: i32) -> ShapeFamily {
    match type_code {
        2 => ShapeFamily::Surface,
        10..=17 => ShapeFamily::Deformation,
        _ => ShapeFamily::Volume,
    }
}

/// Shape table offered for a TYPE. Deformation types also accept the
/// special L/J/parity-dependent shapes.
pub fn shapes_for_type(type_code: i32) -> Vec<&'static ShapeInfo> {
    match shape_family(type_code) {
        ShapeFamily::Volume => VOLUME_SHAPES.iter().collect(),
        ShapeFamily::Surface => SURFACE_SHAPES.iter().collect(),
        ShapeFamily::Deformation => DEFORMATION_SHAPES
            .iter()
            .chain(SPECIAL_SHAPES.iter().filter(|special| special.code >= 30))
            .collect(),
    }
}

pub fn shape_info(type_code: i32, shape_code: i32) -> Option<&'static ShapeInfo> {
    shapes_for_type(type_code)
        .into_iter()
        .find(|info| info.code == shape_code)
        .or_else(|| SPECIAL_SHAPES.iter().find(|info| info.code == shape_code))
}

#[cfg(test)]
mod tests {
    use super::{
        Applicability, ShapeFamily, potential_type, shape_family, shape_info, shapes_for_type,
    };

    #[test]
    fn coulomb_is_the_only_non_nuclear_type() {
        let coulomb = potential_type(0).expect("type 0 should exist");
        assert!(!coulomb.nuclear);
        assert!(potential_type(1).is_some_and(|info| info.nuclear));
        assert_eq!(
            potential_type(20).map(|info| info.applies_to),
            Some(Applicability::Transfer)
        );
        assert!(potential_type(18).is_none());
    }

    #[test]
    fn shape_families_follow_type_ranges() {
        assert_eq!(shape_family(1), ShapeFamily::Volume);
        assert_eq!(shape_family(2), ShapeFamily::Surface);
        assert_eq!(shape_family(11), ShapeFamily::Deformation);
        assert_eq!(shape_family(3), ShapeFamily::Volume);
    }

    #[test]
    fn deformation_types_offer_special_shapes_from_thirty() {
        let codes: Vec<i32> = shapes_for_type(11).iter().map(|info| info.code).collect();
        assert_eq!(codes, vec![7, 8, 9, 10, 11, 12, 13, 30, 40, 41, 42]);
    }

    #[test]
    fn shape_lookup_falls_back_to_special_table() {
        let woods_saxon = shape_info(1, 0).expect("volume shape 0 should exist");
        assert_eq!(woods_saxon.formula, Some("-P1 / (1 + 1/E)"));
        assert!(shape_info(1, 7).is_some_and(|info| info.requires_file));
        assert_eq!(shape_info(1, 21).map(|info| info.code), Some(21));
        assert!(shape_info(2, -1).is_none());
    }
}
