//! Static data for the 28-node European reference network.
//!
//! Distances are link lengths in kilometres. A `0` entry means the ordered
//! pair has no direct fibre link. The matrix is symmetric in this dataset,
//! but nothing in the crate assumes symmetry.

/// Number of nodes in the reference network.
pub const N_NODES: usize = 28;

/// Link length matrix in km, `DISTANCES[u][v]` for the unidirectional link u -> v.
#[rustfmt::skip]
pub const DISTANCES: [[u32; N_NODES]; N_NODES] = [
    [0, 0, 0, 0, 0, 0, 210, 0, 0, 0, 750, 440, 460, 0, 540, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1050, 800, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 580, 0, 0, 0, 0, 0, 0, 0, 0, 0, 640, 620, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 600, 380, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 400, 0, 0, 0, 400],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 440, 0, 0, 290, 0, 0, 0, 0, 0, 590, 0, 0, 350, 0, 0, 0, 0, 570, 0],
    [0, 0, 580, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1130, 0, 0, 690, 0, 0, 0, 580, 0, 0, 0, 0, 0, 0, 0],
    [210, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 400, 0, 0, 370, 0, 0, 0, 0, 0, 310, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 600, 0, 0, 0, 0, 840, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 360, 0, 0, 0, 0],
    [0, 0, 0, 380, 0, 0, 0, 840, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 240, 870, 350],
    [0, 0, 0, 0, 440, 0, 0, 0, 0, 0, 0, 0, 340, 0, 0, 0, 0, 0, 0, 600, 0, 0, 0, 0, 660, 0, 0, 0],
    [750, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 560, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [440, 0, 0, 0, 0, 0, 400, 0, 0, 0, 0, 0, 500, 0, 0, 0, 0, 0, 400, 0, 0, 510, 0, 0, 0, 0, 0, 0],
    [460, 0, 0, 0, 290, 0, 0, 0, 0, 340, 0, 500, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1130, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 630, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [540, 0, 0, 0, 0, 0, 370, 0, 0, 0, 560, 0, 0, 0, 0, 0, 0, 0, 0, 0, 460, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 640, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 450, 0, 0, 470, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 620, 0, 0, 690, 0, 0, 0, 0, 0, 0, 0, 630, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 450, 0, 0, 490, 0, 0, 0, 580, 0, 0, 870, 0, 0],
    [0, 0, 0, 0, 590, 0, 0, 0, 0, 0, 0, 400, 0, 0, 0, 0, 0, 490, 0, 0, 0, 380, 0, 0, 0, 460, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 600, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 530, 0, 0, 0],
    [0, 0, 0, 0, 0, 580, 310, 0, 0, 0, 0, 0, 0, 0, 460, 470, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 350, 0, 0, 0, 0, 0, 0, 510, 0, 0, 0, 0, 0, 0, 380, 0, 0, 0, 0, 0, 0, 330, 680, 0],
    [0, 1050, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 580, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 800, 0, 400, 0, 0, 0, 360, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 660, 0, 0, 0, 0, 0, 0, 0, 0, 0, 530, 0, 0, 0, 0, 0, 0, 810, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 240, 0, 0, 0, 0, 0, 0, 0, 0, 870, 460, 0, 0, 330, 0, 0, 0, 0, 0, 370],
    [0, 0, 0, 0, 570, 0, 0, 0, 870, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 680, 0, 0, 810, 0, 0, 0],
    [0, 0, 0, 400, 0, 0, 0, 0, 350, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 370, 0, 0],
];

/// `(name, country)` metadata per node, indexed by node id.
pub const CITIES: [(&str, &str); N_NODES] = [
    ("Amsterdam", "Netherlands"),
    ("Athens", "Greece"),
    ("Barcelona", "Spain"),
    ("Belgrade", "Serbia"),
    ("Berlin", "Germany"),
    ("Bordeaux", "France"),
    ("Brussels", "Belgium"),
    ("Bucharest", "Romania"),
    ("Budapest", "Hungary"),
    ("Copenhagen", "Denmark"),
    ("Dublin", "Ireland"),
    ("Frankfurt", "Germany"),
    ("Hamburg", "Germany"),
    ("Lisbon", "Portugal"),
    ("London", "United Kingdom"),
    ("Lyon", "France"),
    ("Madrid", "Spain"),
    ("Milan", "Italy"),
    ("Munich", "Germany"),
    ("Oslo", "Norway"),
    ("Paris", "France"),
    ("Prague", "Czechia"),
    ("Rome", "Italy"),
    ("Sofia", "Bulgaria"),
    ("Stockholm", "Sweden"),
    ("Vienna", "Austria"),
    ("Warsaw", "Poland"),
    ("Zagreb", "Croatia"),
];
