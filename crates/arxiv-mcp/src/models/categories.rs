//! arXiv subject category table.

use std::collections::BTreeMap;

/// A group of related categories.
#[derive(Debug, Clone, Copy)]
pub struct CategoryGroup {
    /// Group name (e.g. "Computer Science").
    pub name: &'static str,
    /// `(code, description)` pairs.
    pub categories: &'static [(&'static str, &'static str)],
}

/// Commonly used arXiv categories.
pub const CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "Computer Science",
        categories: &[
            ("cs.AI", "Artificial Intelligence"),
            ("cs.CL", "Computation and Language"),
            ("cs.CR", "Cryptography and Security"),
            ("cs.CV", "Computer Vision and Pattern Recognition"),
            ("cs.DC", "Distributed, Parallel, and Cluster Computing"),
            ("cs.DS", "Data Structures and Algorithms"),
            ("cs.IR", "Information Retrieval"),
            ("cs.LG", "Machine Learning"),
            ("cs.NE", "Neural and Evolutionary Computing"),
            ("cs.PL", "Programming Languages"),
            ("cs.RO", "Robotics"),
            ("cs.SE", "Software Engineering"),
        ],
    },
    CategoryGroup {
        name: "Economics",
        categories: &[
            ("econ.EM", "Econometrics"),
            ("econ.GN", "General Economics"),
            ("econ.TH", "Theoretical Economics"),
        ],
    },
    CategoryGroup {
        name: "Electrical Engineering and Systems Science",
        categories: &[
            ("eess.AS", "Audio and Speech Processing"),
            ("eess.IV", "Image and Video Processing"),
            ("eess.SP", "Signal Processing"),
            ("eess.SY", "Systems and Control"),
        ],
    },
    CategoryGroup {
        name: "Mathematics",
        categories: &[
            ("math.AG", "Algebraic Geometry"),
            ("math.CO", "Combinatorics"),
            ("math.GT", "Geometric Topology"),
            ("math.LO", "Logic"),
            ("math.NT", "Number Theory"),
            ("math.OC", "Optimization and Control"),
            ("math.PR", "Probability"),
            ("math.ST", "Statistics Theory"),
        ],
    },
    CategoryGroup {
        name: "Physics",
        categories: &[
            ("astro-ph", "Astrophysics"),
            ("cond-mat", "Condensed Matter"),
            ("gr-qc", "General Relativity and Quantum Cosmology"),
            ("hep-th", "High Energy Physics - Theory"),
            ("physics.comp-ph", "Computational Physics"),
            ("physics.data-an", "Data Analysis, Statistics and Probability"),
            ("quant-ph", "Quantum Physics"),
        ],
    },
    CategoryGroup {
        name: "Quantitative Biology",
        categories: &[
            ("q-bio.BM", "Biomolecules"),
            ("q-bio.GN", "Genomics"),
            ("q-bio.NC", "Neurons and Cognition"),
        ],
    },
    CategoryGroup {
        name: "Quantitative Finance",
        categories: &[
            ("q-fin.CP", "Computational Finance"),
            ("q-fin.PM", "Portfolio Management"),
            ("q-fin.ST", "Statistical Finance"),
        ],
    },
    CategoryGroup {
        name: "Statistics",
        categories: &[
            ("stat.AP", "Applications"),
            ("stat.CO", "Computation"),
            ("stat.ME", "Methodology"),
            ("stat.ML", "Machine Learning"),
            ("stat.TH", "Theory"),
        ],
    },
];

/// Look up the description of a category code.
#[must_use]
pub fn category_name(code: &str) -> Option<&'static str> {
    CATEGORY_GROUPS
        .iter()
        .flat_map(|g| g.categories.iter())
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Categories keyed by group, each rendered as `"code - Name"`.
#[must_use]
pub fn categories_by_group() -> BTreeMap<&'static str, Vec<String>> {
    CATEGORY_GROUPS
        .iter()
        .map(|g| {
            let entries =
                g.categories.iter().map(|(code, name)| format!("{code} - {name}")).collect();
            (g.name, entries)
        })
        .collect()
}
