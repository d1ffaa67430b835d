use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CLIArgs::parse();
    let mut circuit = day7::read_circuit(&args.input_path).with_context(|| {
        format!(
            "Failed to read circuit in given file({}).",
            args.input_path.display()
        )
    })?;

    let signal = circuit
        .signal_of(&args.wire)
        .with_context(|| format!("Failed to evaluate wire({}).", args.wire))?;
    info!(
        "Override wire {} with signal {} of wire {}, then reset the other wires.",
        args.override_wire, signal, args.wire
    );
    circuit
        .override_wire(&args.override_wire, signal)
        .with_context(|| format!("Failed to override wire({}).", args.override_wire))?;

    if args.all {
        return day7::print_all_signals(&mut circuit);
    }

    let new_signal = circuit.signal_of(&args.wire).with_context(|| {
        format!(
            "Failed to evaluate wire({}) after overriding wire({}).",
            args.wire, args.override_wire
        )
    })?;
    info!(
        "The new signal ultimately provided to wire {} is {}.",
        args.wire, new_signal
    );
    println!("{}", new_signal);

    Ok(())
}
