//! End-to-end tests for `matricula check`

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn write_record(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn matricula(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("matricula").unwrap();
    // Keep the run hermetic: settings go to a throwaway directory
    cmd.env("MATRICULA_DATA_DIR", data_dir.path());
    cmd
}

const VALID_RECORD: &str = r#"{
    "name": "Ana Souza",
    "cpf": "12345678901",
    "rg": "123456789",
    "birthDate": "2010-03-14",
    "phoneNumber": "11987654321",
    "password": "segredo-forte",
    "email": "ana@clube.com.br",
    "responsibleName": "Carlos Souza",
    "responsibleEmail": "carlos@clube.com.br",
    "motherPhoneNumber": "11987654322",
    "fatherPhoneNumber": "11987654323"
}"#;

#[test]
fn check_passes_for_valid_record() {
    let data_dir = TempDir::new().unwrap();
    let file = write_record(VALID_RECORD);

    matricula(&data_dir)
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All fields pass."));
}

#[test]
fn check_fails_for_short_cpf() {
    let data_dir = TempDir::new().unwrap();
    let file = write_record(&VALID_RECORD.replace("12345678901", "123456789"));

    matricula(&data_dir)
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "CPF deve ter exatamente 11 dígitos.",
        ));
}

#[test]
fn check_fails_for_malformed_email() {
    let data_dir = TempDir::new().unwrap();
    let file = write_record(&VALID_RECORD.replace("ana@clube.com.br", "ana@clube"));

    matricula(&data_dir)
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Email inválido."));
}

#[test]
fn check_rejects_missing_file() {
    let data_dir = TempDir::new().unwrap();

    matricula(&data_dir)
        .arg("check")
        .arg("nao-existe.json")
        .assert()
        .failure();
}

#[test]
fn config_prints_resolved_paths() {
    let data_dir = TempDir::new().unwrap();

    matricula(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings file:"));
}
