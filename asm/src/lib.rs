//! Two-pass assembler for the tinyvm instruction set.
//!
//! `.asm` source text goes in; a little-endian stream of 16-bit instruction
//! words comes out, ready to be written as a binary image the emulator can
//! load directly.

pub mod encoder;
pub mod error;
pub mod lexer;
pub mod symtab;

use byteorder::{ByteOrder, LittleEndian};

pub use error::{AssembleError, Error, IoErrorContext};

/// Assembles `source` into a stream of encoded instruction words, returning
/// one word per non-label source line in source order.
pub fn assemble(source: &str) -> Result<Vec<u16>, AssembleError> {
    let token_lines = lexer::tokenize(source)?;
    let (labels, addressed) = symtab::resolve_labels(&token_lines)?;

    addressed
        .iter()
        .map(|line| encoder::encode(line, &labels))
        .collect()
}

/// Serializes encoded instruction words as a little-endian binary image, the
/// format written to an output `.bin` file.
pub fn words_to_image(words: &[u16]) -> Vec<u8> {
    let mut image = vec![0u8; words.len() * 2];
    for (chunk, word) in image.chunks_mut(2).zip(words.iter()) {
        LittleEndian::write_u16(chunk, *word);
    }
    image
}

/// Assembles `source` and serializes the result as a little-endian binary
/// image, as written to an output `.bin` file.
pub fn assemble_to_image(source: &str) -> Result<Vec<u8>, AssembleError> {
    Ok(words_to_image(&assemble(source)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_scenario_one_image_bytes() {
        let image = assemble_to_image("LDIMA 5\nLDIMB 7\nADDR RB\nOUT\nHLT\n").unwrap();
        assert_eq!(
            image,
            vec![0x05, 0x0A, 0x07, 0x0B, 0x02, 0x14, 0x00, 0x16, 0x00, 0xFF]
        );
    }
}
