use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use tinyvm::Machine;

/// Emulator: executes a tinyvm binary image against the machine model.
#[derive(Parser)]
#[command(name = "emu", version, about)]
struct Cli {
    /// Binary image produced by `asm`
    program: PathBuf,

    /// Print a per-cycle debug trace to stdout
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug { "emu=debug" } else { "emu=info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let image = match emu::load_image(&cli.program) {
        Ok(image) => image,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut machine = Machine::new();
    machine.load_program(&image);

    if cli.debug {
        println!("DEBUG mode enabled");
    }

    let result = emu::run_with_trace(&mut machine, |line| {
        if cli.debug {
            println!("{}", line);
        }
    });

    match result {
        Ok(()) => {
            info!("halted");
            println!("Programm Halted Execution");
            ExitCode::SUCCESS
        }
        Err(fault) => {
            error!(%fault, "faulted");
            eprintln!("{}", fault);
            ExitCode::FAILURE
        }
    }
}
