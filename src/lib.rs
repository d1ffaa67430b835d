use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

pub mod circuit;
pub mod gate;
pub mod statement;

pub use circuit::Circuit;

#[derive(Debug)]
pub enum Error {
    InvalidStatementText(String),
    UnknownOperator(String, String),
    InvalidSignalText(String),
    UnboundWire(String),
    CircularDependency(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStatementText(s) => write!(
                f,
                "Invalid statement text({}), expect \"<source> -> <wire>\", \"NOT <source> -> <wire>\" or \"<source> <op> <source> -> <wire>\".",
                s
            ),
            Error::UnknownOperator(op, s) => write!(
                f,
                "Unknown operator({}) in statement({}), only support AND, OR, LSHIFT and RSHIFT.",
                op, s
            ),
            Error::InvalidSignalText(s) => {
                write!(f, "Invalid signal text({}), expect number in [0, 65535].", s)
            }
            Error::UnboundWire(name) => write!(f, "Wire({}) has no input bound.", name),
            Error::CircularDependency(name) => {
                write!(f, "Wire({}) depends on its own signal.", name)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Wire whose signal is reported.
    #[arg(short, long, default_value = "a")]
    pub wire: String,
    /// Wire overridden with the first signal before re-evaluation (part 2).
    #[arg(short, long, default_value = "b")]
    pub override_wire: String,
    /// Print signals of all wires instead.
    #[arg(long)]
    pub all: bool,
}

pub fn read_circuit<P: AsRef<Path>>(path: P) -> Result<Circuit> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut circuit = Circuit::new();
    let mut statement_n = 0;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        circuit.apply_statement(&line).with_context(|| {
            format!(
                "Failed to apply statement at line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        statement_n += 1;
    }

    info!(
        "Read {} statements on {} wires from file({}).",
        statement_n,
        circuit.wire_count(),
        path.as_ref().display()
    );
    Ok(circuit)
}

/// Prints the signal of every bound wire as "name: signal" lines.
pub fn print_all_signals(circuit: &mut Circuit) -> Result<()> {
    for (name, signal) in circuit
        .evaluate_all()
        .context("Failed to evaluate all wires in circuit.")?
    {
        println!("{}: {}", name, signal);
    }

    Ok(())
}
