//! Parameter catalog for the `&FRESCO` and `&CDCC` namelists.

use super::{Literal, ParameterCategory, ParameterDefinition, ParameterKind, SelectOption};

const RADIAL_COORDINATES: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "hcm",
        label: "Integration step size (hcm)",
        tooltip: "Wave functions calculated at intervals of HCM up to abs(RMATCH). Step size for integration in center-of-mass frame.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.1)),
        step: Some(0.01),
        min: Some(0.001),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rmatch",
        label: "Matching radius (rmatch)",
        tooltip: "The radius at which the internal and asymptotic solutions are matched. If negative, use coupled Coulomb wave functions.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(60.0)),
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rintp",
        label: "Non-local radius step (rintp)",
        tooltip: "Non-local kernels calculated at Rf intervals of RINTP. Rounded to multiples of HCM.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "hnl",
        label: "Non-local step size (hnl)",
        tooltip: "Step size for non-local range discretization. Rounded to multiple or sub-multiple of HCM.",
        kind: ParameterKind::Number,
        step: Some(0.01),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rnl",
        label: "Non-local range (rnl)",
        tooltip: "Non-local range for kernels K0fi(Rf;Dfi).",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "centre",
        label: "Non-local center (centre)",
        tooltip: "Center position for non-local range RNL.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "hnn",
        label: "N-N step size (hnn)",
        tooltip: "Target step size for nucleon-nucleon distance discretization in two-nucleon transfers.",
        kind: ParameterKind::Number,
        step: Some(0.01),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rnn",
        label: "N-N max distance (rnn)",
        tooltip: "Maximum nucleon-nucleon distance for two-nucleon transfers.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rmin",
        label: "N-N min distance (rmin)",
        tooltip: "Minimum nucleon-nucleon distance for two-nucleon transfers.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rsp",
        label: "State radius limit (rsp)",
        tooltip: "Upper limit of state radius when folding single-particle states with KIND=3 or 4 couplings.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "cutl",
        label: "Lower radial cutoff factor (cutl)",
        tooltip: "Radial points per ℓ for lower cutoff. Default=-1.6. >0: use ℓ=J, <0: use ℓ=Lin.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(-1.6)),
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "cutr",
        label: "Lower radial cutoff (cutr)",
        tooltip: "Lower radial cutoff in fm. If negative, cutoff at point-Coulomb turning point.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "cutc",
        label: "Off-diagonal cutoff (cutc)",
        tooltip: "Lower radial cutoff in fm for off-diagonal couplings.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rasym",
        label: "Asymptotic radius (rasym)",
        tooltip: "Asymptotic radius for coupled Coulomb wave functions. If negative, determine from classical angle.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "accrcy",
        label: "Accuracy parameter (accrcy)",
        tooltip: "Accuracy parameter for piecewise step length. Default=0.01, smaller gives greater accuracy.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.01)),
        step: Some(0.001),
        min: Some(0.0001),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "switch",
        label: "Switch radius (switch)",
        tooltip: "Radius to switch from Airy functions to sines/cosines in piecewise method. Default=1000 fm.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1000.0)),
        step: Some(10.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "sinjmax",
        label: "Sin switch J-max (sinjmax)",
        tooltip: "If >0, change switchover condition to J > SINJMAX instead of radius.",
        kind: ParameterKind::Number,
        step: Some(0.5),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ajswtch",
        label: "Angular momentum switch (ajswtch)",
        tooltip: "Coupled Coulomb matching allowed only when J ≤ AJSWITCH. Default=0.0.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(0.5),
        ..ParameterDefinition::BLANK
    },
];

const PARTIAL_WAVES: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "jtmin",
        label: "Minimum J (jtmin)",
        tooltip: "Minimum total angular momentum. If negative, J < |JTMIN| include only incoming channel.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(0.5),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "jtmax",
        label: "Maximum J (jtmax)",
        tooltip: "Maximum total angular momentum included in calculation.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(50.0)),
        step: Some(0.5),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "absend",
        label: "Convergence criterion (absend)",
        tooltip: "Stop if absorption < ABSEND mb for 3 successive J/parity sets. If negative, take full J interval.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.001)),
        step: Some(0.001),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "jump",
        label: "J-value intervals (jump)",
        tooltip: "Calculate at intervals of JUMP(i) for J ≥ JBORD(i). Comma-separated for multiple intervals.",
        kind: ParameterKind::Text,
        placeholder: Some("1,2,5"),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "jbord",
        label: "J-value borders (jbord)",
        tooltip: "J borders for different JUMP intervals. Comma-separated values.",
        kind: ParameterKind::Text,
        placeholder: Some("10,20,40"),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "pset",
        label: "Parity restriction (pset)",
        tooltip: "Restrict parity: -1 (negative), +1 (positive), 0 (no restriction).",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(-1.0), "-1 (Negative parity only)"),
            SelectOption::new(Literal::Number(0.0), "0 (No restriction)"),
            SelectOption::new(Literal::Number(1.0), "+1 (Positive parity only)"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "jset",
        label: "Number of sets (jset)",
        tooltip: "Number of CRC sets to calculate before stopping. 0 = all sets.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "iso",
        label: "Isocentrifugal approximation (iso)",
        tooltip: "Replace barriers: 'A'/'J' for L=J barrier, 'B'/'L' for L=Lin barrier, 0/blank for none.",
        kind: ParameterKind::Select,
        default: Some(Literal::Text("")),
        options: &[
            SelectOption::new(Literal::Text(""), "None (exact barriers)"),
            SelectOption::new(Literal::Text("A"), "A - L=J barrier"),
            SelectOption::new(Literal::Text("J"), "J - L=J barrier"),
            SelectOption::new(Literal::Text("B"), "B - L=Lin barrier"),
            SelectOption::new(Literal::Text("L"), "L - L=Lin barrier"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "llmax",
        label: "Maximum L (llmax)",
        tooltip: "Maximum partial wave L in any CRC set.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
];

const ANGULAR_DISTRIBUTIONS: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "kqmax",
        label: "Max tensor rank (kqmax)",
        tooltip: "Maximum tensor analyzing power rank K.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "thmin",
        label: "Minimum angle (thmin)",
        tooltip: "Minimum center-of-mass scattering angle in degrees.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(0.1),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "thmax",
        label: "Maximum angle (thmax)",
        tooltip: "Maximum scattering angle. If negative, absolute cross sections instead of ratio to Rutherford.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(180.0)),
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "thinc",
        label: "Angle increment (thinc)",
        tooltip: "Increment between calculated scattering angles in degrees.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(0.1),
        min: Some(0.01),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "pp",
        label: "Polarization type (pp)",
        tooltip: "Calculate analyzing powers for: 0=projectile, 1=target, 2=ejectile, 3=residual, 4=projectile+Kyy.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - Projectile"),
            SelectOption::new(Literal::Number(1.0), "1 - Target"),
            SelectOption::new(Literal::Number(2.0), "2 - Ejectile"),
            SelectOption::new(Literal::Number(3.0), "3 - Residual nucleus"),
            SelectOption::new(Literal::Number(4.0), "4 - Projectile + Kyy"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "koords",
        label: "Coordinate system (koords)",
        tooltip: "Coordinate systems: 0=Madison, 1=Madison+Transverse, 2=+Recoil, 3=+Hooton-Johnson.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - Madison coordinates"),
            SelectOption::new(Literal::Number(1.0), "1 - Madison + Transverse"),
            SelectOption::new(Literal::Number(2.0), "2 - Madison + Transverse + Recoil"),
            SelectOption::new(Literal::Number(3.0), "3 - Madison + Transverse + Recoil + Hooton-Johnson"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nearfa",
        label: "Near/far analysis (nearfa)",
        tooltip: "0/1=usual, 2/-2=+far side, 3/-3=+near&far. >0=elastic only, <0=all channels. >10=split Coulomb.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
];

const COUPLED_EQUATIONS: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "inh",
        label: "Transfer form storage (inh)",
        tooltip: "Zero-range transfer forms: 0=HCM intervals, 1=proj.core/proj.composite, 2=targ.core/targ.composite.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - HCM intervals exactly"),
            SelectOption::new(Literal::Number(1.0), "1 - Projectile recoil correction"),
            SelectOption::new(Literal::Number(2.0), "2 - Target recoil correction"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nnu",
        label: "Angular integration points (nnu)",
        tooltip: "Gaussian integration points for non-local transfer kernels. Multiple of 6, minimum 18.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(24.0)),
        step: Some(6.0),
        min: Some(18.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "maxl",
        label: "Max L for kernels (maxl)",
        tooltip: "Maximum L for non-local kernels. Default=JTMAX+6 if zero.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "minl",
        label: "Min L for kernels (minl)",
        tooltip: "Minimum L for non-local kernels. Default=|JTMIN|-6 if negative.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "mtmin",
        label: "Min L-transfer for m-dep (mtmin)",
        tooltip: "Lowest L-transfer for m-dependent spherical harmonics. Default=6 if zero, <0 avoids default.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(6.0)),
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "epc",
        label: "Angular integration accuracy (epc)",
        tooltip: "Percentage cutoff accuracy in NNU angular integration. Default=(30/NNU)²% if zero.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "erange",
        label: "Continuum energy range (erange)",
        tooltip: "Energy range for continuum bins: >0=ratio of boundaries, <0=difference in MeV.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "dk",
        label: "Continuum k step (dk)",
        tooltip: "Step size of k (fm⁻¹) for integration over ERANGE for continuum bins.",
        kind: ParameterKind::Number,
        step: Some(0.01),
        min: Some(0.001),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "plane",
        label: "Coulomb zeroing (plane)",
        tooltip: "Zero Coulomb potential: 1/3=elastic channel, 2/3=all nonelastic channels.",
        kind: ParameterKind::Select,
        options: &[
            SelectOption::new(Literal::Text(""), "None (include all Coulomb)"),
            SelectOption::new(Literal::Number(1.0), "1 - Zero elastic Coulomb"),
            SelectOption::new(Literal::Number(2.0), "2 - Zero nonelastic Coulomb"),
            SelectOption::new(Literal::Number(3.0), "3 - Zero all Coulomb"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rela",
        label: "Relativistic kinematics (rela)",
        tooltip: "Relativistic options: 'a'=Ingemarsson eq(16), 'b'=eq(17), 'c'/'3d'=knockout, 'na'=potential factor.",
        kind: ParameterKind::Text,
        placeholder: Some("a, b, c, 3d, na"),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "unitmass",
        label: "Mass unit (unitmass)",
        tooltip: "Unit in amu for MASS values read in. Default=1.000.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(0.001),
        min: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "finec",
        label: "Fine structure constant (finec)",
        tooltip: "1/(fine-structure constant) for electrostatic e². Default=137.03599.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(137.03599)),
        step: Some(0.001),
        min: Some(100.0),
        ..ParameterDefinition::BLANK
    },
];

const INCIDENT_CHANNEL: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "pel",
        label: "Elastic partition (pel)",
        tooltip: "Incoming plane waves present in partition PEL. Default=1.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "exl",
        label: "Elastic excitation (exl)",
        tooltip: "Excitation pair EXL for incoming waves. Default=1.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "lab",
        label: "Laboratory partition (lab)",
        tooltip: "Partition for laboratory energy definition. Default=PEL.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "lin",
        label: "Laboratory nucleus (lin)",
        tooltip: "Nucleus for laboratory energy: 1=projectile, 2=target. Default=1.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(1.0)),
        options: &[
            SelectOption::new(Literal::Number(1.0), "1 - Projectile"),
            SelectOption::new(Literal::Number(2.0), "2 - Target"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "lex",
        label: "Laboratory excitation (lex)",
        tooltip: "Excitation pair LEX for laboratory energy. Default=1.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "elab",
        label: "Laboratory energy (elab)",
        tooltip: "Laboratory energies in MeV. Use spaces or commas for multiple energies (e.g., '6.9 11.0 49.35').",
        kind: ParameterKind::Text,
        required: true,
        placeholder: Some("6.9 11.0 49.35"),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nlab",
        label: "Energy intervals (nlab)",
        tooltip: "Number of linear intervals between consecutive ELAB values. Comma-separated.",
        kind: ParameterKind::Text,
        placeholder: Some("1, 1, 1"),
        ..ParameterDefinition::BLANK
    },
];

const SOLVING_EQUATIONS: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "ips",
        label: "Convergence percentage (ips)",
        tooltip: "Stop if S-matrix differences < IPS percent. If negative, skip numerical integration check.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.1)),
        step: Some(0.01),
        min: Some(0.001),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "it0",
        label: "Minimum iterations (it0)",
        tooltip: "Minimum number of iterations. IT0=ITER=0 gives elastic only, =1 gives DWBA.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "iter",
        label: "Maximum iterations (iter)",
        tooltip: "Maximum number of iterations. IT0=ITER=1 gives 1-step DWBA.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "fatal",
        label: "Continue after failure (fatal)",
        tooltip: "If False, continue even after convergence failure. Default=True.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(true)),
        options: &[
            SelectOption::new(Literal::Logical(true), "True - Stop on convergence failure"),
            SelectOption::new(Literal::Logical(false), "False - Continue after failure"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "iblock",
        label: "Blocked channels (iblock)",
        tooltip: "Number of excitation pairs coupled exactly by blocking together. Start from partition 1, excitation 1.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "pade",
        label: "Pade acceleration (pade)",
        tooltip: "Pade acceleration: 0=none, 1=epsilon algorithm, 2=N/D polynomials.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - No Pade acceleration"),
            SelectOption::new(Literal::Number(1.0), "1 - Epsilon algorithm"),
            SelectOption::new(Literal::Number(2.0), "2 - N/D polynomials"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nosol",
        label: "No solution (nosol)",
        tooltip: "If True, only construct couplings without solving CRC equations.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: &[
            SelectOption::new(Literal::Logical(false), "False - Solve equations"),
            SelectOption::new(Literal::Logical(true), "True - Only construct couplings"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "dry",
        label: "Dry run (dry)",
        tooltip: "If True, check array sizes without solving. Only elastic channels non-zero.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: &[
            SelectOption::new(Literal::Logical(false), "False - Normal run"),
            SelectOption::new(Literal::Logical(true), "True - Dry run (check arrays)"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "smallchan",
        label: "Small channel threshold (smallchan)",
        tooltip: "Fraction of unitarity to define 'small channel'. Dropped after 5 times small.",
        kind: ParameterKind::Number,
        step: Some(0.001),
        min: Some(0.0001),
        max: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "smallcoup",
        label: "Small coupling threshold (smallcoup)",
        tooltip: "If nonelastic channels < SMALLCOUP fraction, change from CC to DWBA.",
        kind: ParameterKind::Number,
        step: Some(0.001),
        min: Some(0.0001),
        max: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "hort",
        label: "QR stabilization interval (hort)",
        tooltip: "Radial interval for QR stabilization.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        min: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rmort",
        label: "QR extension radius (rmort)",
        tooltip: "Radius outside classical turning point for orthogonalizing extension.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "psiren",
        label: "Simple renormalization (psiren)",
        tooltip: "Simple renormalization of channel wave functions after Pade acceleration.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: &[
            SelectOption::new(Literal::Logical(false), "False - No renormalization"),
            SelectOption::new(Literal::Logical(true), "True - Renormalize after Pade"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "initwf",
        label: "Initial wave functions (initwf)",
        tooltip: "Read external scattering wave functions: >0=formatted file, <0=unformatted file.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
];

const TRACE_VARIABLES: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "chans",
        label: "Channel output (chans)",
        tooltip: "Print coupled partial wave sets for each J,parity. Decremented after use.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "listcc",
        label: "Coupling coefficients (listcc)",
        tooltip: "Print coupling coefficients: 1=basic, 2+=progressively more detail. Decremented.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "treneg",
        label: "Potential output (treneg)",
        tooltip: "Print potentials: 1=multipole, 3=multipole+monopole.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "cdetr",
        label: "Equation solving info (cdetr)",
        tooltip: "Print information on solving coupled equations. Decremented.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "smats",
        label: "S-matrix output (smats)",
        tooltip: "S-matrix output: 1=absorption/reaction, 2=elastic+file, 3=grazing, 4=all, 5=each iteration, 6=actual.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(2.0)),
        step: Some(1.0),
        min: Some(0.0),
        max: Some(6.0),
        ..ParameterDefinition::BLANK
    },
];

const OUTPUT_DETAILS: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "xstabl",
        label: "Cross-section file output (xstabl)",
        tooltip: "If non-zero, output cross sections to file 16 for all levels. Value sets tensor rank limit.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(1.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nlpl",
        label: "Non-local plot (nlpl)",
        tooltip: "Print contour plot of non-local kernels. Decremented after use.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "waves",
        label: "Wave function output (waves)",
        tooltip: "Wave function output: ±1=solutions, ±3=+source terms, 2=source only. Negative=ratio to asymptotic.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "lampl",
        label: "Amplitude coefficients (lampl)",
        tooltip: "Output Legendre coefficients to file 36. Negative=file 37 amplitudes only for partition |LAMPL|.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "veff",
        label: "Effective potential (veff)",
        tooltip: "Calculate effective potential: <0=add to elastic, ±2=exclude S<0.1.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "kfus",
        label: "Fusion potential number (kfus)",
        tooltip: "Calculate core fusion using potential number KFUS (TYPE=1/2).",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nfus",
        label: "Fusion channels (nfus)",
        tooltip: "Number of inelastic channels for core fusion calculation.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "wdisk",
        label: "Wave function file (wdisk)",
        tooltip: "Write wave functions to file 17: ±1=elastic, ±2=all. Positive=formatted, negative=unformatted.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - No wave function output"),
            SelectOption::new(Literal::Number(1.0), "1 - Elastic, formatted"),
            SelectOption::new(Literal::Number(2.0), "2 - All channels, formatted"),
            SelectOption::new(Literal::Number(-1.0), "-1 - Elastic, unformatted"),
            SelectOption::new(Literal::Number(-2.0), "-2 - All channels, unformatted"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "bpm",
        label: "Barrier penetration model (bpm)",
        tooltip: "BPM fusion: 1=calculate, 2=+L-distributions.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        min: Some(0.0),
        max: Some(2.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "melfil",
        label: "MEL file output (melfil)",
        tooltip: "Write mel/spec files 53/54: ±1=real, ±2=complex. Negative=text format.",
        kind: ParameterKind::Number,
        default: Some(Literal::Number(0.0)),
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "cdcc",
        label: "CDCC output (cdcc)",
        tooltip: "CDCC amplitude output to file 57: 1=uncoupled bins, 2=coupled bins.",
        kind: ParameterKind::Select,
        default: Some(Literal::Number(0.0)),
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - No CDCC output"),
            SelectOption::new(Literal::Number(1.0), "1 - Uncoupled bin states"),
            SelectOption::new(Literal::Number(2.0), "2 - Coupled bin states"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "tmp",
        label: "Temporary directory (tmp)",
        tooltip: "Directory for temporary files. Default='/tmp/'.",
        kind: ParameterKind::Text,
        default: Some(Literal::Text("/tmp/")),
        placeholder: Some("/tmp/ or ."),
        ..ParameterDefinition::BLANK
    },
];

const LOGICAL_OPTIONS: &[SelectOption] = &[
    SelectOption::new(Literal::Logical(false), "False"),
    SelectOption::new(Literal::Logical(true), "True"),
];

const CDCC_BINS: &[ParameterDefinition] = &[
    ParameterDefinition {
        name: "nk",
        label: "Bin integration points (nk)",
        tooltip: "Number of k sub-intervals used to integrate each continuum bin.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "hktarg",
        label: "Target k step (hktarg)",
        tooltip: "Target step size in k (fm⁻¹) when discretizing continuum bins.",
        kind: ParameterKind::Number,
        step: Some(0.01),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ip1",
        label: "Projectile multipoles (q)",
        tooltip: "Maximum multipole order Q of the projectile single-particle couplings. Written as Q.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ip2",
        label: "Nuclear/Coulomb selection (ncoul)",
        tooltip: "Selects nuclear and Coulomb parts of the cluster-target couplings. Written as NCOUL.",
        kind: ParameterKind::Select,
        options: &[
            SelectOption::new(Literal::Number(0.0), "0 - Nuclear and Coulomb"),
            SelectOption::new(Literal::Number(1.0), "1 - Nuclear only"),
            SelectOption::new(Literal::Number(2.0), "2 - Coulomb only"),
        ],
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ip3",
        label: "Diagonal couplings (reor)",
        tooltip: "Controls diagonal and off-diagonal (reorientation) couplings between bins. Written as REOR.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ip4",
        label: "Core multipoles (qc)",
        tooltip: "Maximum multipole of the deformed core potential. Written as QC.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ip5",
        label: "Multipole order limit (la)",
        tooltip: "Maximum multipole order of the couplings. Written as LA.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "isc",
        label: "Ground-state shape (iscgs)",
        tooltip: "Potential shape used for the projectile ground state. Written as ISCGS.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "ipc",
        label: "Ground-state print control (ipcgs)",
        tooltip: "Trace level for the projectile ground-state bound-state search. Written as IPCGS.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "rmatr",
        label: "R-matrix radius (rmatr)",
        tooltip: "Radius of the R-matrix boundary when solving by R-matrix basis expansion.",
        kind: ParameterKind::Number,
        step: Some(0.1),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nrbases",
        label: "R-matrix basis size (nrbases)",
        tooltip: "Number of Lagrange basis functions per channel inside the R-matrix radius.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "nrbmin",
        label: "Minimum basis size (nrbmin)",
        tooltip: "Minimum number of R-matrix basis functions for any channel.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "pralpha",
        label: "Print R-matrix coefficients (pralpha)",
        tooltip: "If True, print the R-matrix expansion coefficients.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: LOGICAL_OPTIONS,
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "pcon",
        label: "Convergence trace (pcon)",
        tooltip: "Trace level for the R-matrix convergence checks.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "meigs",
        label: "Eigen-channels (meigs)",
        tooltip: "Number of R-matrix eigen-channels to keep.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "numnode",
        label: "Bound-state nodes (numnode)",
        tooltip: "Node-count convention used for the projectile bound states.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "trans",
        label: "Transfer couplings (trans)",
        tooltip: "Include transfer couplings between bins and rearranged partitions.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "qscale",
        label: "Multipole scaling (qscale)",
        tooltip: "Scaling selector for the coupling multipoles.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "hat",
        label: "Hat bins (hat)",
        tooltip: "If True, use hat-shaped weight functions for the continuum bins.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: LOGICAL_OPTIONS,
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "quasi",
        label: "Quasi-bound treatment (quasi)",
        tooltip: "Handling of narrow resonances inside continuum bins.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "sumform",
        label: "Summed form factors (sumform)",
        tooltip: "If True, sum the form factors over multipoles before coupling.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: LOGICAL_OPTIONS,
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "remnant",
        label: "Remnant terms (remnant)",
        tooltip: "Include remnant terms in transfer couplings from bins.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "postprior",
        label: "Post/prior form (postprior)",
        tooltip: "If True, use the post form of the transfer interaction; False gives prior.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(true)),
        options: LOGICAL_OPTIONS,
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "pauli",
        label: "Pauli blocking (pauli)",
        tooltip: "Number of Pauli-forbidden states removed from the projectile basis.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        min: Some(0.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "static",
        label: "Static potentials (static)",
        tooltip: "If True, replace the cluster folding with static potentials.",
        kind: ParameterKind::Select,
        default: Some(Literal::Logical(false)),
        options: LOGICAL_OPTIONS,
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "expand",
        label: "Multipole expansion (expand)",
        tooltip: "Number of terms in the multipole expansion of the folded couplings.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
    ParameterDefinition {
        name: "maxcoup",
        label: "Coupling limit (maxcoup)",
        tooltip: "Maximum number of couplings stored for the continuum bins.",
        kind: ParameterKind::Number,
        step: Some(1.0),
        ..ParameterDefinition::BLANK
    },
];

pub(crate) const CATEGORIES: &[ParameterCategory] = &[
    ParameterCategory {
        id: "radialCoordinates",
        title: "Radial Coordinates",
        description: "Wave function calculation and radial grid parameters",
        parameters: RADIAL_COORDINATES,
    },
    ParameterCategory {
        id: "partialWaves",
        title: "Partial Waves",
        description: "Angular momentum and J-value control parameters",
        parameters: PARTIAL_WAVES,
    },
    ParameterCategory {
        id: "angularDistributions",
        title: "Angular Distributions",
        description: "Scattering angle and analyzing power parameters",
        parameters: ANGULAR_DISTRIBUTIONS,
    },
    ParameterCategory {
        id: "coupledEquations",
        title: "Coupled Equations",
        description: "Coupling definition and accuracy parameters",
        parameters: COUPLED_EQUATIONS,
    },
    ParameterCategory {
        id: "incidentChannel",
        title: "Incident Channel",
        description: "Incoming wave and energy parameters",
        parameters: INCIDENT_CHANNEL,
    },
    ParameterCategory {
        id: "solvingEquations",
        title: "Solving Equations",
        description: "Iteration and convergence control parameters",
        parameters: SOLVING_EQUATIONS,
    },
    ParameterCategory {
        id: "traceVariables",
        title: "Trace Variables",
        description: "Debug and output control parameters",
        parameters: TRACE_VARIABLES,
    },
    ParameterCategory {
        id: "outputDetails",
        title: "Output Details",
        description: "File output and analysis parameters",
        parameters: OUTPUT_DETAILS,
    },
    ParameterCategory {
        id: "cdccBins",
        title: "CDCC Continuum Bins",
        description: "Continuum discretization and cluster-folding controls for the &CDCC namelist",
        parameters: CDCC_BINS,
    },
];
