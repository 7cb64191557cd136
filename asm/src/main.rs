use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};

use asm::error::{Error, IoErrorContext};

/// Two-pass assembler: translates tinyvm source into a binary image.
#[derive(Parser)]
#[command(name = "asm", version, about)]
struct Cli {
    /// Assembly source file
    input: PathBuf,

    /// Destination for the assembled binary image
    output: PathBuf,

    /// Enable a debug trace of the assembly process on stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug { "asm=debug" } else { "asm=info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let source = fs::read_to_string(&cli.input)
        .map_err(|err| Error::Io(err, IoErrorContext::ReadSource, cli.input.clone()))?;

    let words = asm::assemble(&source)?;
    debug!(count = words.len(), "assembled instruction words");
    for (address, word) in words.iter().enumerate() {
        debug!(address, word = format!("0x{:04X}", word), "encoded");
    }

    let image = asm::words_to_image(&words);
    fs::write(&cli.output, &image)
        .map_err(|err| Error::Io(err, IoErrorContext::WriteImage, cli.output.clone()))?;

    info!(
        instructions = words.len(),
        output = %cli.output.display(),
        "assembled"
    );
    println!("Assembled {} instructions.", words.len());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
