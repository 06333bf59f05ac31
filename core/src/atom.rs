use std::{error::Error, fmt, str::FromStr};

use serde::Deserialize;

/// Classification tag of an atom. Purely descriptive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AtomType {
    Isotope,
    Radioactive,
    Ion,
    Antimatter,
    #[default]
    Stable,
}

impl AtomType {
    pub const ALL: [AtomType; 5] = [
        AtomType::Isotope,
        AtomType::Radioactive,
        AtomType::Ion,
        AtomType::Antimatter,
        AtomType::Stable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AtomType::Isotope => "isotope",
            AtomType::Radioactive => "radioactive",
            AtomType::Ion => "ion",
            AtomType::Antimatter => "antimatter",
            AtomType::Stable => "stable",
        }
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any [`AtomType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAtomTypeError(String);

impl fmt::Display for ParseAtomTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown atom type {:?}", self.0)
    }
}

impl Error for ParseAtomTypeError {}

impl FromStr for AtomType {
    type Err = ParseAtomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtomType::ALL
            .into_iter()
            .find(|atom_type| atom_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAtomTypeError(s.to_owned()))
    }
}

impl TryFrom<String> for AtomType {
    type Error = ParseAtomTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Represents a single atom: its name, mass and particle counts.
///
/// No physical consistency is checked. Any mass, including zero, negative or
/// non-finite values, and any particle count, negative ones included, is
/// accepted as given.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub(crate) name: String,
    pub(crate) atomic_mass_unit: f64,
    pub(crate) neutrons: i64,
    pub(crate) protons: i64,
    pub(crate) electrons: i64,
    pub(crate) atom_type: AtomType,
}

impl Atom {
    /// Creates an atom with no particles and the [`AtomType::Stable`] tag.
    pub fn new(name: impl Into<String>, atomic_mass_unit: f64) -> Self {
        Self {
            name: name.into(),
            atomic_mass_unit,
            neutrons: 0,
            protons: 0,
            electrons: 0,
            atom_type: AtomType::default(),
        }
    }

    pub fn with_particles(mut self, neutrons: i64, protons: i64, electrons: i64) -> Self {
        self.neutrons = neutrons;
        self.protons = protons;
        self.electrons = electrons;
        self
    }

    pub fn with_atom_type(mut self, atom_type: AtomType) -> Self {
        self.atom_type = atom_type;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atomic_mass_unit(&self) -> f64 {
        self.atomic_mass_unit
    }

    pub fn neutrons(&self) -> i64 {
        self.neutrons
    }

    pub fn protons(&self) -> i64 {
        self.protons
    }

    pub fn electrons(&self) -> i64 {
        self.electrons
    }

    pub fn atom_type(&self) -> AtomType {
        self.atom_type
    }

    /// Returns true if the neutron count equals the electron count.
    ///
    /// Note that this is not electrical neutrality, which would compare protons
    /// and electrons. See [`Atom::net_charge`] for that.
    pub fn is_neutral(&self) -> bool {
        self.neutrons == self.electrons
    }

    /// Returns the charge of this atom in elementary charges
    pub fn net_charge(&self) -> i64 {
        self.protons - self.electrons
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.atomic_mass_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let atom = Atom::new("Carbon", 12.011);

        assert_eq!(atom.name(), "Carbon");
        assert_eq!(atom.atomic_mass_unit(), 12.011);
        assert_eq!(
            (atom.neutrons(), atom.protons(), atom.electrons()),
            (0, 0, 0)
        );
        assert_eq!(atom.atom_type(), AtomType::Stable);
    }

    #[test]
    fn neutrality_compares_neutrons_and_electrons() {
        let hydrogen = Atom::new("Hydrogen", 6.008).with_particles(0, 1, 1);
        assert!(!hydrogen.is_neutral());
        assert_eq!(hydrogen.net_charge(), 0);

        // protons play no part
        let odd = Atom::new("Odd", 1.0).with_particles(3, 40, 3);
        assert!(odd.is_neutral());
        assert_eq!(odd.net_charge(), 37);

        assert!(Atom::new("Empty", 0.0).is_neutral());
    }

    #[test]
    fn negative_counts_are_kept() {
        let atom = Atom::new("Strange", 1.0).with_particles(-1, 1, -1);
        assert_eq!(
            (atom.neutrons(), atom.protons(), atom.electrons()),
            (-1, 1, -1)
        );
        assert!(atom.is_neutral());
        assert_eq!(atom.net_charge(), 2);

        assert!(!Atom::new("Skewed", 1.0).with_particles(-2, 0, 2).is_neutral());
    }

    #[test]
    fn mass_is_not_validated() {
        for mass in [0.0, -4.2, f64::INFINITY] {
            assert_eq!(Atom::new("X", mass).atomic_mass_unit(), mass);
        }
        assert!(Atom::new("X", f64::NAN).atomic_mass_unit().is_nan());
    }

    #[test]
    fn atom_type_tags() {
        for atom_type in AtomType::ALL {
            assert_eq!(atom_type.to_string().parse::<AtomType>(), Ok(atom_type));
        }
        assert_eq!("ANTIMATTER".parse::<AtomType>(), Ok(AtomType::Antimatter));
        assert_eq!(
            "plasma".parse::<AtomType>(),
            Err(ParseAtomTypeError("plasma".to_owned()))
        );
    }

    #[test]
    fn display() {
        let helium = Atom::new("Helium", 4.0026)
            .with_particles(2, 2, 2)
            .with_atom_type(AtomType::Isotope);
        assert_eq!(helium.to_string(), "Helium: 4.0026");
    }
}
