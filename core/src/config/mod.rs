pub use molecule::{ConfigAtom, ConfigError, ConfigMolecule};

mod molecule;
