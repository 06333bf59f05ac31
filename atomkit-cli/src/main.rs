use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use atomkit_core::{config::ConfigMolecule, Atom, AtomType, Molecule};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A path to a molecule description to use instead of the built-in water sample
    #[arg(long, short)]
    molecule: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

fn sample_water() -> Molecule {
    let hydrogen = Atom::new("Hydrogen", 6.008)
        .with_particles(0, 1, 1)
        .with_atom_type(AtomType::Stable);
    let helium = Atom::new("Helium", 4.0026)
        .with_particles(2, 2, 2)
        .with_atom_type(AtomType::Stable);
    let oxygen = Atom::new("Oxygen", 2.999)
        .with_particles(8, 8, 8)
        .with_atom_type(AtomType::Stable);

    let mut molecule = Molecule::new("Water");
    molecule.add_atom(hydrogen);
    molecule.add_atom(helium);
    molecule.add_atom(oxygen);
    molecule
}

/// Printed in place of the average mass when the molecule has no atoms
const NO_AVERAGE: &str = "none";

fn load_molecule(path: Option<PathBuf>) -> anyhow::Result<Molecule> {
    let molecule = match path {
        Some(path) => ConfigMolecule::load(&path)
            .with_context(|| format!("failed to load molecule from {}", path.display()))?
            .into(),
        None => sample_water(),
    };
    Ok(molecule)
}

/// Writes the neutrality of the first atom, the atoms sorted by mass and the
/// average mass to `out`.
fn report(molecule: &mut Molecule, out: &mut impl Write) -> io::Result<()> {
    if let Some(first) = molecule.atoms().first() {
        writeln!(out, "{}", first.is_neutral())?;
    }

    molecule.sort_atoms_by_mass_to(out)?;
    for atom in molecule.atoms() {
        writeln!(out, "{atom}")?;
    }

    match molecule.find_average_mass() {
        Some(average) => writeln!(out, "{average}"),
        None => writeln!(out, "{NO_AVERAGE}"),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    if args.verbose && std::env::var_os("RUST_LOG").is_none() {
        pretty_env_logger::formatted_builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        pretty_env_logger::init();
    }

    let mut molecule = load_molecule(args.molecule)?;
    log::info!("{} has {} atoms", molecule.name(), molecule.len());

    report(&mut molecule, &mut io::stdout().lock())?;

    Ok(())
}
