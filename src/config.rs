// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Profile;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketledger", "pocketledger"));

const BACKEND_URL_VAR: &str = "POCKETLEDGER_BACKEND_URL";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL of the budget backend, from the environment or the local
/// default.
pub fn backend_url() -> String {
    std::env::var(BACKEND_URL_VAR).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Where the adopted profile is cached between runs.
pub fn profile_cache_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("profile.json"))
}

/// The locally adopted profile, if one was cached by a previous `onboard`.
pub fn load_cached_profile() -> Result<Option<Profile>> {
    load_profile_from(&profile_cache_path()?)
}

/// Cache the adopted profile so later runs keep it even when the backend
/// never acknowledged the onboarding submission.
pub fn store_cached_profile(profile: &Profile) -> Result<()> {
    store_profile_at(&profile_cache_path()?, profile)
}

pub fn load_profile_from(path: &Path) -> Result<Option<Profile>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile cache at {}", path.display()))?;
    let profile = serde_json::from_str(&text)
        .with_context(|| format!("Malformed profile cache at {}", path.display()))?;
    Ok(Some(profile))
}

pub fn store_profile_at(path: &Path, profile: &Profile) -> Result<()> {
    let text = serde_json::to_string_pretty(profile)?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write profile cache at {}", path.display()))
}
