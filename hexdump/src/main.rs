use std::path::PathBuf;
use std::process::ExitCode;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
enum Endian {
    Le,
    Be,
}

/// Dumps a tinyvm binary image as `0xADDR: 0xWORD` pairs.
#[derive(Parser)]
#[command(name = "hexdump", version, about)]
struct Cli {
    /// Binary image to dump
    file: PathBuf,

    /// Force an interpretation of the on-disk words; defaults to the
    /// image format's native little-endian layout
    #[arg(value_enum)]
    endian: Option<Endian>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let bytes = match std::fs::read(&cli.file) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Failed to open file '{}': {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let endian = cli.endian.unwrap_or(Endian::Le);
    let label = match endian {
        Endian::Le => "Little Endian",
        Endian::Be => "Big Endian",
    };
    println!("Dumping with endianness: {}", label);
    println!();

    for (address, chunk) in bytes.chunks(2).enumerate() {
        let word = if chunk.len() == 2 {
            match endian {
                Endian::Le => LittleEndian::read_u16(chunk),
                Endian::Be => BigEndian::read_u16(chunk),
            }
        } else {
            u16::from(chunk[0])
        };
        println!("0x{:04X}: 0x{:04X}", address, word);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use byteorder::{ByteOrder, LittleEndian};

    #[test]
    fn reads_little_endian_word() {
        let bytes = [0x34u8, 0x12u8];
        assert_eq!(LittleEndian::read_u16(&bytes), 0x1234);
    }
}
