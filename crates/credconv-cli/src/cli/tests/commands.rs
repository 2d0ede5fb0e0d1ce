//! Tests for command handlers against temporary files.

use crate::cli::commands::{run_check, run_convert, ConvertTarget};
use credconv_core::ConvertOptions;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "url,username,password\nhttps://www.example.com,user1,pass1\n,,\n";

#[test]
fn convert_writes_next_to_input_by_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.csv");
    fs::write(&input, SAMPLE).unwrap();

    let written = run_convert(
        &input,
        ConvertTarget::File(None),
        false,
        &ConvertOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_eq!(written, dir.path().join("export_bitwarden.csv"));
    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(
        text,
        "folder,favorite,type,name,notes,fields,reprompt,login_uri,login_username,login_password,login_totp\n\
         ,,login,example.com,,,,https://www.example.com,user1,pass1,"
    );
}

#[test]
fn convert_refuses_to_overwrite_without_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, SAMPLE).unwrap();
    fs::write(&output, "keep me").unwrap();

    let err = run_convert(
        &input,
        ConvertTarget::File(Some(output.clone())),
        false,
        &ConvertOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

    run_convert(
        &input,
        ConvertTarget::File(Some(output.clone())),
        true,
        &ConvertOptions::default(),
    )
    .unwrap();
    assert!(fs::read_to_string(&output).unwrap().starts_with("folder,"));
}

#[test]
fn convert_error_names_input_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "username,password\nbob,pw\n").unwrap();

    let err = run_convert(
        &input,
        ConvertTarget::File(None),
        false,
        &ConvertOptions::default(),
    )
    .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("bad.csv"), "{msg}");
    assert!(msg.contains("'url'"), "{msg}");
    assert!(!dir.path().join("bad_bitwarden.csv").exists());
}

#[test]
fn check_missing_file_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(run_check(&missing, false, &ConvertOptions::default()).is_err());
}
