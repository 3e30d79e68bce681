// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path, process::Output};

use assert_cmd::Command;

fn collateral_deploy() -> Command {
    let mut cmd = Command::cargo_bin("collateral-deploy").unwrap();
    for var in ["RPC_URL", "PRIVATE_KEY", "CHAIN_ID", "DEPLOYMENTS_DIR", "NETWORK_CONFIG"] {
        cmd.env_remove(var);
    }
    cmd
}

fn offline(subcommand: &str, chain_id: u64, dir: &Path) -> Command {
    let mut cmd = collateral_deploy();
    cmd.arg(subcommand)
        .arg("--chain-id")
        .arg(chain_id.to_string())
        .arg("--deployments-dir")
        .arg(dir);
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn lookup_known_and_unknown_tokens() {
    collateral_deploy()
        .args(["lookup", "0x6b175474e89094c44da98b954eedeac495271d0f"])
        .assert()
        .success()
        .stdout("DAI\n");

    collateral_deploy()
        .args(["lookup", "0x00000000000000000000000000000000DeaDBeef"])
        .assert()
        .success()
        .stdout("0x00000000000000000000000000000000DeaDBeef\n");
}

#[test]
fn lists_plugins() {
    let output = collateral_deploy().arg("plugins").output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("aave-v3-pyusd"));
    assert!(out.contains("saEthPyUSD"));
    assert!(out.contains("aerodrome-mog-weth"));
    assert!(out.contains("aeroMOGWETH"));
}

#[test]
fn check_requires_core_deployment() {
    let dir = tempfile::tempdir().unwrap();
    let output = offline("check", 1, dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("doesn't exist yet. Run phase 1"));
}

#[test]
fn check_enforces_network_restrictions() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("8453-tmp-deployments.json"), "{}").unwrap();

    offline("check", 8453, dir.path())
        .arg("aerodrome-mog-weth")
        .assert()
        .success();

    let output = offline("check", 8453, dir.path())
        .arg("aave-v3-pyusd")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("only available on Mainnet"));
    // nothing was written
    assert!(!dir.path().join("8453-tmp-assets-collateral.json").exists());
}

#[test]
fn show_names_known_tokens() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("1-tmp-assets-collateral.json"),
        r#"{
  "collateral": {
    "saEthPyUSD": "0x0000000000000000000000000000000000000001"
  },
  "erc20s": {
    "saEthPyUSD": "0xe176A5ebFB873D5b3cf1909d0EdaE4FE095F5bc7"
  }
}"#,
    )
    .unwrap();

    let output = offline("show", 1, dir.path()).output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("0x0000000000000000000000000000000000000001"));
    assert!(out.contains("0xe176A5ebFB873D5b3cf1909d0EdaE4FE095F5bc7"));
    assert!(out.contains("(\u{1b}"), "token symbol should be printed: {out}");
}

#[test]
fn corrupt_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("1-tmp-assets-collateral.json");
    fs::write(&path, r#"{"collateral": {}, "erc20s": {}, "extra": {}}"#).unwrap();

    let output = offline("show", 1, dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("corrupt"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"collateral": {}, "erc20s": {}, "extra": {}}"#
    );
}

#[test]
fn unknown_chain_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = offline("show", 10, dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing network configuration for chain 10"));
}

#[test]
fn network_overrides_add_chains() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("networks.toml");
    fs::write(&config, "[chains.10]\nname = \"optimism\"\n").unwrap();

    offline("show", 10, dir.path())
        .arg("--network-config")
        .arg(&config)
        .assert()
        .success();
}
