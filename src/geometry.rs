//! Atoms and the seven-atom octahedral core.
//!
//! The data model is flat and immutable: an [`Atom`] couples an element
//! label with a Cartesian position, and an [`Octahedron`] is exactly seven
//! atoms with the metal centre at index 0. All coordinates are plain
//! `f64` Cartesian values; the library attaches no unit, it only requires
//! that all seven points use the same one.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Element symbols indexed by atomic number − 1, hydrogen through
/// lawrencium.
const ELEMENT_SYMBOLS: [&str; 103] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr",
];

/// Atomic number for an element label.
///
/// The label is either an element symbol (case-insensitive, so `"Fe"`,
/// `"FE"` and `"fe"` all mean iron) or a decimal atomic number such as
/// `"26"`. Returns `None` for anything else.
pub fn atomic_number_of(label: &str) -> Option<u32> {
    let label = label.trim();
    if let Ok(z) = label.parse::<u32>() {
        return (1..=ELEMENT_SYMBOLS.len() as u32).contains(&z).then_some(z);
    }
    let mut chars = label.chars();
    let first = chars.next()?.to_ascii_uppercase();
    let rest = chars.as_str().to_ascii_lowercase();
    let canonical = format!("{first}{rest}");
    ELEMENT_SYMBOLS
        .iter()
        .position(|s| *s == canonical)
        .map(|i| i as u32 + 1)
}

/// A single atom: element label plus Cartesian position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Element label: a symbol (`"Fe"`) or a decimal atomic number (`"26"`).
    pub label: String,
    /// Cartesian position.
    pub position: Vector3<f64>,
}

impl Atom {
    /// Create an atom from a label and a position.
    pub fn new(label: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }

    /// Atomic number parsed from the label, or `None` when the label is not
    /// a recognised element symbol or number.
    pub fn atomic_number(&self) -> Option<u32> {
        atomic_number_of(&self.label)
    }
}

/// A seven-atom octahedral core: one metal centre followed by six ligands.
///
/// Index 0 is the metal; indices 1..=6 are the ligands. When the core was
/// built by [`select_octahedron`](crate::selector::select_octahedron) the
/// ligands are ordered by ascending distance from the metal, but none of
/// the distortion engines relies on that order (the Θ engine canonicalises
/// the labelling internally).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Octahedron {
    atoms: [Atom; 7],
}

impl Octahedron {
    /// Build a core from seven atoms, metal first.
    pub fn new(atoms: [Atom; 7]) -> Self {
        Self { atoms }
    }

    /// Build an unlabelled core from seven points, metal first.
    ///
    /// The atoms receive the placeholder labels `M` and `L1`..`L6`.
    pub fn from_points(points: [Vector3<f64>; 7]) -> Self {
        let [m, l1, l2, l3, l4, l5, l6] = points;
        Self {
            atoms: [
                Atom::new("M", m),
                Atom::new("L1", l1),
                Atom::new("L2", l2),
                Atom::new("L3", l3),
                Atom::new("L4", l4),
                Atom::new("L5", l5),
                Atom::new("L6", l6),
            ],
        }
    }

    /// The metal centre.
    pub fn metal(&self) -> &Atom {
        &self.atoms[0]
    }

    /// The six ligand atoms.
    pub fn ligands(&self) -> &[Atom] {
        &self.atoms[1..]
    }

    /// All seven atoms, metal first.
    pub fn atoms(&self) -> &[Atom; 7] {
        &self.atoms
    }

    /// The seven positions, metal first. This is the coordinate layout the
    /// distortion engines consume.
    pub fn positions(&self) -> [Vector3<f64>; 7] {
        std::array::from_fn(|i| self.atoms[i].position)
    }
}
