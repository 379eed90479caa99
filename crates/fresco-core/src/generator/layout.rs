use serde::Serialize;

/// Fixed two-way mapping between form field names and namelist names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    pairs: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    pub const EMPTY: Self = Self { pairs: &[] };

    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    pub fn output_name<'a>(&self, internal: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(from, _)| *from == internal)
            .map_or(internal, |(_, to)| *to)
    }

    pub fn internal_name<'a>(&self, output: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(_, to)| *to == output)
            .map_or(output, |(from, _)| *from)
    }

    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }
}

pub const CDCC_ALIASES: AliasTable = AliasTable::new(&[
    ("cdcc", "cdccc"),
    ("ip1", "q"),
    ("ip2", "ncoul"),
    ("ip3", "reor"),
    ("ip4", "qc"),
    ("ip5", "la"),
    ("isc", "iscgs"),
    ("ipc", "ipcgs"),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// ` &FRESCO a=1 b=2\n\t c=3 /`
    Wrapped,
    /// ` &CDCC\n   a=1 b=2\n   /`
    Indented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamelistLayout {
    pub name: &'static str,
    /// Output names, one cluster per rendered line.
    pub clusters: &'static [&'static [&'static str]],
    pub aliases: AliasTable,
    pub style: BlockStyle,
    /// Whether names outside every cluster are still written, on a final line.
    pub passthrough_unlisted: bool,
}

const FRESCO_CLUSTERS: &[&[&str]] = &[
    &["hcm", "rmatch", "rintp", "hnl", "rnl", "centre", "hnn", "rnn", "rmin", "rsp", "rasym"],
    &["accrcy", "switch", "ajswtch", "sinjmax", "absend"],
    &["cutl", "cutr", "cutc"],
    &["jtmin", "jtmax", "jump", "jbord", "pset", "jset", "iso", "llmax"],
    &["thmin", "thmax", "thinc", "kqmax", "pp", "koords", "nearfa"],
    &[
        "inh", "nnu", "maxl", "minl", "mtmin", "epc", "erange", "dk", "plane", "rela",
        "unitmass", "finec",
    ],
    &["elab", "nlab", "pel", "exl", "lab", "lin", "lex"],
    &[
        "ips", "it0", "iter", "fatal", "iblock", "pade", "nosol", "dry", "smallchan",
        "smallcoup", "hort", "rmort", "psiren", "initwf",
    ],
    &["chans", "listcc", "treneg", "cdetr", "smats"],
    &[
        "xstabl", "nlpl", "waves", "lampl", "veff", "kfus", "nfus", "wdisk", "bpm", "melfil",
        "cdcc", "tmp",
    ],
];

const CDCC_CLUSTERS: &[&[&str]] = &[
    &["hcm", "rmatch", "rintp", "hnl", "rnl", "centre", "rsp", "rasym"],
    &["accrcy", "switch", "ajswtch", "sinjmax", "absend"],
    &["jtmin", "jbord", "jump", "llmax", "pset", "dry"],
    &["cutl", "cutr", "cutc"],
    &["thmin", "thmax", "thinc"],
    &["iter", "nnu", "rmatr", "nrbases", "nrbmin"],
    &["pralpha", "pcon", "meigs", "listcc", "smats", "veff", "chans", "xstabl"],
    &["smallchan", "smallcoup", "melfil", "nosol"],
    &["cdetr", "numnode", "treneg", "nlpl"],
    &["trans", "pel", "exl", "qscale", "pade", "kfus"],
    &["elab", "lab", "lin", "lex", "hktarg"],
    &["nk", "cdccc", "q", "ncoul", "reor", "qc", "la"],
    &["hat", "quasi", "sumform", "iscgs", "ipcgs"],
    &["remnant", "postprior", "pauli", "static", "expand", "maxcoup"],
];

impl NamelistLayout {
    pub const fn fresco() -> Self {
        Self {
            name: "FRESCO",
            clusters: FRESCO_CLUSTERS,
            aliases: AliasTable::EMPTY,
            style: BlockStyle::Wrapped,
            passthrough_unlisted: true,
        }
    }

    pub const fn cdcc() -> Self {
        Self {
            name: "CDCC",
            clusters: CDCC_CLUSTERS,
            aliases: CDCC_ALIASES,
            style: BlockStyle::Indented,
            passthrough_unlisted: false,
        }
    }

    /// Cluster index of an output name.
    pub fn cluster_of(&self, output_name: &str) -> Option<(usize, usize)> {
        self.clusters.iter().enumerate().find_map(|(cluster, names)| {
            names
                .iter()
                .position(|name| *name == output_name)
                .map(|position| (cluster, position))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CDCC_ALIASES, NamelistLayout};
    use crate::registry::ParameterRegistry;

    #[test]
    fn cdcc_aliases_map_both_directions() {
        assert_eq!(CDCC_ALIASES.output_name("ip2"), "ncoul");
        assert_eq!(CDCC_ALIASES.output_name("hcm"), "hcm");
        assert_eq!(CDCC_ALIASES.internal_name("cdccc"), "cdcc");
        assert_eq!(CDCC_ALIASES.internal_name("rmatch"), "rmatch");
    }

    #[test]
    fn fresco_clusters_only_name_registered_parameters() {
        let registry = ParameterRegistry::standard();
        for cluster in NamelistLayout::fresco().clusters {
            for name in *cluster {
                assert!(registry.contains(name), "{name} should be registered");
            }
        }
    }

    #[test]
    fn cdcc_clusters_resolve_through_aliases_to_registered_parameters() {
        let registry = ParameterRegistry::standard();
        let layout = NamelistLayout::cdcc();
        for cluster in layout.clusters {
            for name in *cluster {
                let internal = layout.aliases.internal_name(name);
                assert!(registry.contains(internal), "{internal} should be registered");
            }
        }
    }

    #[test]
    fn cluster_lookup_reports_position() {
        let layout = NamelistLayout::fresco();
        assert_eq!(layout.cluster_of("hcm"), Some((0, 0)));
        assert_eq!(layout.cluster_of("thinc"), Some((4, 2)));
        assert_eq!(layout.cluster_of("namep"), None);
    }
}
