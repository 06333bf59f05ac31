pub mod atom;
pub mod config;
pub mod molecule;

pub use atom::{Atom, AtomType};
pub use molecule::Molecule;
