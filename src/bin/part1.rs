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

    if args.all {
        return day7::print_all_signals(&mut circuit);
    }

    let signal = circuit
        .signal_of(&args.wire)
        .with_context(|| format!("Failed to evaluate wire({}).", args.wire))?;
    info!(
        "The signal ultimately provided to wire {} is {}, {} gates fired.",
        args.wire,
        signal,
        circuit.eval_count()
    );
    println!("{}", signal);

    Ok(())
}
