// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for attack profile loading

use attackctl::attack::AttackProfile;
use attackctl::types::AttackKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_profile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lab.yaml");
    fs::write(
        &path,
        r#"
interface: wlan0mon
commands:
  deauth:
    program: aireplay-ng
    args: ["--deauth", "10", "-a", "{target}", "{interface}"]
"#,
    )
    .unwrap();

    let profile = AttackProfile::load(&path).expect("yaml profile should parse");
    assert_eq!(profile.interface.as_deref(), Some("wlan0mon"));

    let deauth = profile.command_for(AttackKind::Deauth).unwrap();
    let args = deauth
        .render("00:11:22:33:44:55", profile.interface.as_deref())
        .unwrap();
    assert_eq!(
        args,
        vec!["--deauth", "10", "-a", "00:11:22:33:44:55", "wlan0mon"]
    );
}

#[test]
fn test_load_json_profile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lab.json");
    fs::write(
        &path,
        r#"{"commands": {"auth-flood": {"program": "mdk3", "args": ["{interface}", "a"]}}}"#,
    )
    .unwrap();

    let profile = AttackProfile::load(&path).expect("json profile should parse");
    assert!(profile.interface.is_none());
    assert_eq!(
        profile.command_for(AttackKind::AuthFlood).unwrap().program,
        "mdk3"
    );
}

#[test]
fn test_unlisted_kinds_keep_builtin_commands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.yml");
    fs::write(&path, "commands:\n  disassoc:\n    program: custom-disassoc\n").unwrap();

    let profile = AttackProfile::load(&path).unwrap();
    let builtin = AttackProfile::builtin();
    assert_eq!(
        profile.command_for(AttackKind::Disassoc).unwrap().program,
        "custom-disassoc"
    );
    assert!(profile
        .command_for(AttackKind::Disassoc)
        .unwrap()
        .args
        .is_empty());
    for kind in [AttackKind::Deauth, AttackKind::AuthFlood, AttackKind::BeaconFlood] {
        assert_eq!(
            profile.command_for(kind).unwrap(),
            builtin.command_for(kind).unwrap()
        );
    }
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.toml");
    fs::write(&path, "interface = 'wlan0'").unwrap();

    let err = AttackProfile::load(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported attack profile extension"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"commands": {"evil-twin": {"program": "x"}}}"#).unwrap();

    assert!(AttackProfile::load(&path).is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = AttackProfile::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.yaml"));
}
