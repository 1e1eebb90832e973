//! Metal-centre and nearest-neighbour selection.
//!
//! Given a full atom list, the selector picks the single heavy atom
//! (atomic number >= 21, scandium and beyond) as the metal centre and its
//! six nearest neighbours by plain Euclidean distance. It refuses to guess
//! when zero or several heavy atoms are present; disambiguation is a
//! caller concern.
//!
//! Neighbours are not filtered by element type. Distance alone decides,
//! with ties at equal distance broken by original input index.

use crate::geometry::{Atom, Octahedron};
use crate::linear;
use thiserror::Error;

/// Smallest atomic number treated as a candidate metal centre.
pub const HEAVY_Z: u32 = 21;

/// Errors raised while selecting the octahedral core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No atom with atomic number >= [`HEAVY_Z`] was found.
    #[error("no metal centre: no atom with atomic number >= {}", HEAVY_Z)]
    NoMetalCenter,
    /// More than one candidate metal centre; the caller must pick one.
    #[error("ambiguous metal centre: {} candidates ({})", .candidates.len(), .candidates.join(", "))]
    AmbiguousMetalCenter {
        /// Labels of all candidate metal atoms, in input order.
        candidates: Vec<String>,
    },
    /// Fewer than seven atoms (one metal plus six neighbours) available.
    #[error("an octahedral core needs a metal and six neighbours, found {found} atoms in total")]
    InsufficientAtoms {
        /// Total number of atoms supplied.
        found: usize,
    },
}

/// Select the octahedral core from a full atom list.
///
/// Policy:
///
/// 1. Collect every atom whose atomic number is >= [`HEAVY_Z`].
/// 2. Zero candidates fail with [`SelectionError::NoMetalCenter`]; more
///    than one fails with [`SelectionError::AmbiguousMetalCenter`].
/// 3. Otherwise the six atoms closest to the metal become the ligands,
///    ordered by ascending distance (ties by input index).
///
/// # Examples
///
/// ```
/// use nalgebra::Vector3;
/// use octapar::{select_octahedron, Atom};
///
/// let atoms = vec![
///     Atom::new("Co", Vector3::zeros()),
///     Atom::new("N", Vector3::new(1.9, 0.0, 0.0)),
///     Atom::new("N", Vector3::new(-1.9, 0.0, 0.0)),
///     Atom::new("N", Vector3::new(0.0, 1.9, 0.0)),
///     Atom::new("N", Vector3::new(0.0, -1.9, 0.0)),
///     Atom::new("N", Vector3::new(0.0, 0.0, 1.9)),
///     Atom::new("N", Vector3::new(0.0, 0.0, -1.9)),
///     Atom::new("H", Vector3::new(2.8, 0.0, 0.0)),
/// ];
///
/// let core = select_octahedron(&atoms).unwrap();
/// assert_eq!(core.metal().label, "Co");
/// assert!(core.ligands().iter().all(|a| a.label == "N"));
/// ```
pub fn select_octahedron(atoms: &[Atom]) -> Result<Octahedron, SelectionError> {
    let heavy: Vec<usize> = atoms
        .iter()
        .enumerate()
        .filter(|(_, a)| a.atomic_number().is_some_and(|z| z >= HEAVY_Z))
        .map(|(i, _)| i)
        .collect();

    let metal_index = match heavy.as_slice() {
        [] => return Err(SelectionError::NoMetalCenter),
        [single] => *single,
        _ => {
            return Err(SelectionError::AmbiguousMetalCenter {
                candidates: heavy.iter().map(|&i| atoms[i].label.clone()).collect(),
            })
        }
    };

    let metal = atoms[metal_index].clone();
    let mut neighbours: Vec<(usize, f64)> = atoms
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != metal_index)
        .map(|(i, a)| (i, linear::distance(&metal.position, &a.position)))
        .collect();

    if neighbours.len() < 6 {
        return Err(SelectionError::InsufficientAtoms { found: atoms.len() });
    }

    neighbours.sort_by(|x, y| x.1.total_cmp(&y.1).then(x.0.cmp(&y.0)));

    let ligand = |k: usize| atoms[neighbours[k].0].clone();
    Ok(Octahedron::new([
        metal,
        ligand(0),
        ligand(1),
        ligand(2),
        ligand(3),
        ligand(4),
        ligand(5),
    ]))
}
