// Copyright 2025 Hotpot Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the fail-fast behavior of the deployment pipelines.
//!
//! Each pipeline must abort on a missing required parameter, or an
//! unresolvable artifact, before opening any network connection. No RPC node
//! or verification backend is reachable from these tests, so a pipeline that
//! got as far as connecting would fail with a different error than the one
//! asserted here.

use assert_cmd::Command;
use predicates::str::contains;

const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

fn hotpot() -> Command {
    let mut cmd = Command::cargo_bin("hotpot").unwrap();
    // Start from a clean environment so ambient MNEMONIC etc. cannot satisfy
    // a requirement the test wants to see missing.
    cmd.env_clear().env("NO_COLOR", "1");
    cmd
}

#[test]
fn deploy_factory_aborts_without_mnemonic() {
    hotpot()
        .args(["deploy-factory"])
        .env("HOTPOT_IMPLEMENTATION", "0x1111111111111111111111111111111111111111")
        .assert()
        .failure()
        .stderr(contains("Signing mnemonic not provided"));
}

#[test]
fn empty_mnemonic_counts_as_missing() {
    hotpot()
        .args(["deploy-factory"])
        .env("MNEMONIC", "")
        .env("HOTPOT_IMPLEMENTATION", "0x1111111111111111111111111111111111111111")
        .assert()
        .failure()
        .stderr(contains("Signing mnemonic not provided"));
}

#[test]
fn deploy_factory_aborts_without_implementation_address() {
    hotpot()
        .args(["deploy-factory"])
        .env("MNEMONIC", TEST_MNEMONIC)
        .assert()
        .failure()
        .stderr(contains("Implementation contract address not provided"));
}

#[test]
fn deploy_proxy_aborts_without_beacon_address() {
    hotpot()
        .args(["deploy-proxy"])
        .env("MNEMONIC", TEST_MNEMONIC)
        .env("MARKETPLACE", "0x2222222222222222222222222222222222222222")
        .assert()
        .failure()
        .stderr(contains("Beacon contract address not provided"));
}

#[test]
fn create_instance_aborts_without_factory_address() {
    hotpot()
        .args(["create-instance"])
        .env("MNEMONIC", TEST_MNEMONIC)
        .env("MARKETPLACE", "0x2222222222222222222222222222222222222222")
        .assert()
        .failure()
        .stderr(contains("Factory contract address not provided"));
}

#[test]
fn create_instance_aborts_without_marketplace_address() {
    hotpot()
        .args(["create-instance"])
        .env("MNEMONIC", TEST_MNEMONIC)
        .env("HOTPOT_FACTORY", "0x3333333333333333333333333333333333333333")
        .assert()
        .failure()
        .stderr(contains("Marketplace contract address not provided"));
}

#[test]
fn chain_mode_typo_is_rejected() {
    // A mistyped mode must error out instead of silently deploying to the
    // public network.
    hotpot()
        .args(["deploy-factory", "--chain-mode", "tset"])
        .env("MNEMONIC", TEST_MNEMONIC)
        .env("HOTPOT_IMPLEMENTATION", "0x1111111111111111111111111111111111111111")
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn unresolved_artifact_aborts_before_any_network_call() {
    let empty_dir = tempfile::tempdir().unwrap();
    hotpot()
        .args(["deploy-factory"])
        .env("MNEMONIC", TEST_MNEMONIC)
        .env("HOTPOT_IMPLEMENTATION", "0x1111111111111111111111111111111111111111")
        .env("CHAIN_MODE", "test")
        .env("HOTPOT_ARTIFACTS", empty_dir.path())
        .assert()
        .failure()
        .stderr(contains("artifact not found for contract HotpotFactory"));
}
