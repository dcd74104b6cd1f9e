use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn cargo_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_disadv"))
}

const VALID_RECORD: &str = r#"{
    "messageRef": "654321",
    "shipmentNumber": "SHIP001",
    "parties": [
        {"qualifier": "BY", "id": "123456789"},
        {"qualifier": "SU", "id": "987654321"},
        {"qualifier": "CA", "id": "555555555"}
    ],
    "transport": {"mode": "30", "carrier": "DHL"},
    "items": [
        {
            "productCode": "ABC123",
            "description": "Product A",
            "quantity": "10",
            "weight": "2.5",
            "vin": "1HGCM82633A123456"
        },
        {
            "productCode": "XYZ456",
            "description": "Product B",
            "quantity": "5",
            "weight": "3.0",
            "vin": "1HGCM82633A654321"
        }
    ]
}"#;

fn write_record(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("shipment.json");
    fs::write(&path, content).expect("record file should be writable");
    path
}

fn run(args: &[&str], dir: &TempDir) -> Output {
    Command::new(cargo_bin())
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("binary should run")
}

#[test]
fn generate_writes_message_to_requested_path() {
    let dir = TempDir::new().unwrap();
    let input = write_record(&dir, VALID_RECORD);
    let output = dir.path().join("out.edi");

    let result = run(
        &[
            "generate",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
        &dir,
    );

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let message = fs::read_to_string(&output).unwrap();
    assert!(message.starts_with("UNA:+.? '"));
    assert!(message.contains("MEA+WT+AAA:40.00:KG'"));
    assert!(message.trim_end().ends_with("UNT+18+654321'"));
}

#[test]
fn generate_defaults_to_disadv_edi_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_record(&dir, VALID_RECORD);

    let result = run(&["generate", input.to_str().unwrap()], &dir);

    assert!(result.status.success());
    let message = fs::read_to_string(dir.path().join("disadv.edi")).unwrap();
    assert!(message.contains("BGM+351+SHIP001+9'"));
}

#[test]
fn generate_fails_for_incomplete_record() {
    let dir = TempDir::new().unwrap();
    let input = write_record(&dir, r#"{"messageRef": "654321"}"#);

    let result = run(&["generate", input.to_str().unwrap()], &dir);

    assert!(!result.status.success());
    assert!(!dir.path().join("disadv.edi").exists(), "no partial output expected");
}

#[test]
fn generate_fails_for_malformed_json() {
    let dir = TempDir::new().unwrap();
    let input = write_record(&dir, "{ not json");

    let result = run(&["generate", input.to_str().unwrap()], &dir);

    assert!(!result.status.success());
}

#[test]
fn validate_accepts_complete_record() {
    let dir = TempDir::new().unwrap();
    let input = write_record(&dir, VALID_RECORD);

    let result = run(&["validate", input.to_str().unwrap()], &dir);

    assert!(result.status.success());
}

#[test]
fn validate_rejects_record_without_items() {
    let dir = TempDir::new().unwrap();
    let input = write_record(
        &dir,
        r#"{
            "messageRef": "654321",
            "shipmentNumber": "SHIP001",
            "parties": [{"qualifier": "BY", "id": "123456789"}],
            "items": []
        }"#,
    );

    let result = run(&["validate", input.to_str().unwrap()], &dir);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("at least one item"), "stderr: {stderr}");
}
