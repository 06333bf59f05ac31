use std::{
    error::Error,
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    atom::{Atom, AtomType},
    molecule::Molecule,
};

/// Represents a full molecule in a config file.
/// A molecule is a name and a list of atoms, in order.
#[derive(Debug, Deserialize)]
pub struct ConfigMolecule {
    pub name: String,
    #[serde(default)]
    pub atoms: Vec<ConfigAtom>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigAtom {
    pub name: String,
    pub atomic_mass_unit: f64,
    #[serde(default)]
    pub neutrons: i64,
    #[serde(default)]
    pub protons: i64,
    #[serde(default)]
    pub electrons: i64,
    #[serde(default)]
    pub atom_type: AtomType,
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, .. } => write!(f, "could not read {}", path.display()),
            ConfigError::Parse { path, .. } => {
                write!(f, "{} is not a valid molecule description", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl ConfigMolecule {
    /// Reads a molecule description from a json file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading molecule from {}", path.display());

        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl From<ConfigAtom> for Atom {
    fn from(value: ConfigAtom) -> Self {
        Atom::new(value.name, value.atomic_mass_unit)
            .with_particles(value.neutrons, value.protons, value.electrons)
            .with_atom_type(value.atom_type)
    }
}

impl From<ConfigMolecule> for Molecule {
    fn from(value: ConfigMolecule) -> Self {
        let ConfigMolecule { name, atoms } = value;

        let mut molecule = Molecule::new(name);
        molecule.extend(atoms.into_iter().map(Atom::from));
        molecule
    }
}
