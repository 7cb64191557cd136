use std::fs;
use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn asm_binary() -> &'static str {
    env!("CARGO_BIN_EXE_asm")
}

#[test]
fn assembles_scenario_one_to_expected_image() {
    let mut source = NamedTempFile::new().unwrap();
    writeln!(source, "LDIMA 5\nLDIMB 7\nADDR RB\nOUT\nHLT").unwrap();
    let output = NamedTempFile::new().unwrap();

    let status = Command::new(asm_binary())
        .arg(source.path())
        .arg(output.path())
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = fs::read(output.path()).unwrap();
    assert_eq!(
        bytes,
        vec![0x05, 0x0A, 0x07, 0x0B, 0x02, 0x14, 0x00, 0x16, 0x00, 0xFF]
    );
}

#[test]
fn reports_error_for_unknown_mnemonic() {
    let mut source = NamedTempFile::new().unwrap();
    writeln!(source, "NOPE 1").unwrap();
    let output = NamedTempFile::new().unwrap();

    let status = Command::new(asm_binary())
        .arg(source.path())
        .arg(output.path())
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn reports_error_for_missing_input_file() {
    let output = NamedTempFile::new().unwrap();
    let status = Command::new(asm_binary())
        .arg("/nonexistent/path/does-not-exist.asm")
        .arg(output.path())
        .status()
        .unwrap();
    assert!(!status.success());
}
