// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal_macros::dec;

use pocketledger::config::{load_profile_from, store_profile_at};
use pocketledger::models::Profile;

#[test]
fn profile_cache_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");

    let profile = Profile {
        currency_symbol: "€".to_string(),
        budget_target: dec!(850),
        categories: vec!["Food".to_string(), "Bills".to_string()],
        onboarded: true,
    };
    store_profile_at(&path, &profile).unwrap();

    let loaded = load_profile_from(&path).unwrap().unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn missing_cache_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    assert!(load_profile_from(&path).unwrap().is_none());
}

#[test]
fn malformed_cache_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(load_profile_from(&path).is_err());
}

#[test]
fn cache_uses_the_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    store_profile_at(&path, &Profile::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["currency"], "$");
    assert_eq!(value["onboarded"], false);
}
