use std::{
    fmt,
    io::{self, Write},
};

use crate::atom::Atom;

/// The line printed by [`Molecule::sort_atoms_by_mass`] before it reorders the atoms.
pub const SORT_STATUS: &str = "Atoms sorted by ascending mass:";

/// Represents a molecule: a named, ordered list of atoms.
///
/// Insertion order is kept until the atoms are explicitly sorted. The same atom
/// may appear more than once.
#[derive(Clone, Debug, PartialEq)]
pub struct Molecule {
    pub(crate) name: String,
    pub(crate) atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atoms: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The atoms of this molecule, in their current order
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Appends an atom to the end of the molecule.
    pub fn add_atom(&mut self, atom: Atom) {
        log::trace!("adding {atom} to {}", self.name);
        self.atoms.push(atom);
    }

    /// Prints [`SORT_STATUS`], then sorts the atoms by ascending mass.
    ///
    /// The sort is stable. NaN masses are ordered after all others.
    pub fn sort_atoms_by_mass(&mut self) {
        println!("{SORT_STATUS}");
        self.sort_by_mass();
    }

    /// Same as [`Molecule::sort_atoms_by_mass`], but writes the status line to `out`.
    ///
    /// The atoms are only reordered once the status line was written.
    pub fn sort_atoms_by_mass_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{SORT_STATUS}")?;
        self.sort_by_mass();
        Ok(())
    }

    fn sort_by_mass(&mut self) {
        log::debug!("sorting {} atoms of {} by mass", self.atoms.len(), self.name);

        self.atoms
            .sort_by(|a, b| a.atomic_mass_unit.total_cmp(&b.atomic_mass_unit));
    }

    /// Returns the mean atomic mass, or `None` if the molecule has no atoms.
    pub fn find_average_mass(&self) -> Option<f64> {
        if self.atoms.is_empty() {
            return None;
        }

        let total = self
            .atoms
            .iter()
            .map(|atom| atom.atomic_mass_unit)
            .sum::<f64>();

        Some(total / self.atoms.len() as f64)
    }
}

impl Extend<Atom> for Molecule {
    fn extend<T: IntoIterator<Item = Atom>>(&mut self, iter: T) {
        for atom in iter {
            self.add_atom(atom);
        }
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for atom in &self.atoms {
            write!(f, "\n  {atom}")?;
        }
        Ok(())
    }
}
