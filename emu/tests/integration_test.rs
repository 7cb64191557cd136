use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn emu_binary() -> &'static str {
    env!("CARGO_BIN_EXE_emu")
}

fn write_image(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn runs_scenario_one_and_exits_zero() {
    let image = write_image(&[0x05, 0x0A, 0x07, 0x0B, 0x02, 0x14, 0x00, 0x16, 0x00, 0xFF]);
    let output = Command::new(emu_binary()).arg(image.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("OUT: 12"));
}

#[test]
fn stack_overflow_exits_nonzero() {
    let mut words = Vec::new();
    for _ in 0..256 {
        words.push(0x01u8);
        words.push(0x1Bu8);
    }
    let image = write_image(&words);
    let output = Command::new(emu_binary()).arg(image.path()).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn missing_program_file_exits_nonzero() {
    let status = Command::new(emu_binary())
        .arg("/nonexistent/path/does-not-exist.bin")
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn debug_flag_emits_per_cycle_trace() {
    let image = write_image(&[0xFF, 0x00]);
    let output = Command::new(emu_binary())
        .arg(image.path())
        .arg("-d")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("OPCODE=FF"));
}
