// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! The five checks
//!
//! Each check reads what it needs, never mutates shared state and returns
//! its findings. A missing file is an ordinary branch, not an error.

use std::path::Path;

use super::CheckerConfig;
use super::patterns::{
    self, HARDCODED_SECRET_PATTERNS, SAFE_LOGGING_MARKER, UNSAFE_LOGGING_PATTERNS,
};
use super::report::Finding;
use crate::config::Secrets;
use crate::error::Result;

const CI_SECRET_REFERENCE: &str = "${{ secrets.";
const CI_ENVIRONMENT_KEY: &str = "environment:";

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        tracing::debug!("{} not found", path.display());
        return Ok(None);
    }
    tracing::debug!("Reading {}", path.display());
    // Lossy decoding: a stray non-UTF-8 byte must not hide the rest of the file
    let bytes = std::fs::read(path)?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Looks for credential literals in the service source and its tests
pub fn hardcoded_secrets(config: &CheckerConfig) -> Result<Vec<Finding>> {
    let patterns = patterns::compile(&HARDCODED_SECRET_PATTERNS)?;
    let mut findings = Vec::new();

    let mut targets = config.expand_sources(&config.service_sources)?;
    targets.extend(config.expand_sources(&config.test_sources)?);

    for target in &targets {
        let Some(content) = read_if_exists(&config.app_path(target))? else {
            continue;
        };
        for (name, regex) in &patterns {
            if regex.is_match(&content) {
                findings.push(Finding::fail(format!(
                    "Potential hardcoded secret found in {} ({})",
                    target.display(),
                    name
                )));
            }
        }
    }

    if findings.is_empty() {
        findings.push(Finding::pass("No hardcoded secrets detected"));
    }
    Ok(findings)
}

/// `.env.example` must exist; a local `.env` must be gitignored
pub fn env_files(config: &CheckerConfig) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    if config.app_path(&config.env_example).exists() {
        findings.push(Finding::pass(".env.example file exists"));
    } else {
        findings.push(Finding::fail(".env.example file missing"));
    }

    if !config.app_path(&config.env_file).exists() {
        findings.push(Finding::pass(".env file properly excluded from repository"));
        return Ok(findings);
    }

    findings.push(Finding::warn(".env file exists (should be gitignored)"));
    match read_if_exists(&config.repo_path(&config.gitignore))? {
        Some(gitignore) if gitignore.contains(".env") => {
            findings.push(Finding::pass(".env is properly gitignored"));
        }
        Some(_) => findings.push(Finding::fail(".env is not gitignored")),
        None => findings.push(Finding::warn(
            ".gitignore not found; cannot confirm .env is ignored",
        )),
    }
    Ok(findings)
}

/// Reports which runtime secrets are missing. Never fails: pipelines
/// without secrets configured are expected to run this check too.
pub fn runtime_secrets(secrets: &Secrets) -> Vec<Finding> {
    let missing = secrets.missing();
    if missing.is_empty() {
        return vec![Finding::pass("All required environment variables are loaded")];
    }
    vec![
        Finding::warn(format!(
            "Missing environment variables: {}",
            missing.join(", ")
        )),
        Finding::info("This is expected in CI/CD environments without secrets configured"),
    ]
}

/// Flags logging statements that print environment lookups directly
///
/// The safe-logging marker exempts only the file it appears in.
pub fn logging_practices(config: &CheckerConfig) -> Result<Vec<Finding>> {
    let sources = config.expand_sources(&config.service_sources)?;
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    let patterns = patterns::compile(&UNSAFE_LOGGING_PATTERNS)?;
    let mut findings = Vec::new();

    for source in &sources {
        let Some(content) = read_if_exists(&config.app_path(source))? else {
            continue;
        };
        let has_marker = content.contains(SAFE_LOGGING_MARKER);
        let unsafe_logging = patterns.iter().any(|(name, regex)| {
            let hit = regex.is_match(&content);
            if hit {
                tracing::debug!(
                    "Logging pattern '{}' matched in {} (marker present: {})",
                    name,
                    source.display(),
                    has_marker
                );
            }
            hit && !has_marker
        });

        if unsafe_logging {
            findings.push(Finding::fail(format!(
                "Potentially unsafe logging of environment variables in {}",
                source.display()
            )));
        }
    }

    if findings.is_empty() {
        findings.push(Finding::pass("Safe logging practices detected"));
    }
    Ok(findings)
}

/// The pipeline must reference secrets through the CI secret store
pub fn ci_configuration(config: &CheckerConfig) -> Result<Vec<Finding>> {
    let Some(content) = read_if_exists(&config.repo_path(&config.ci_config))? else {
        return Ok(vec![Finding::fail("CI/CD pipeline configuration missing")]);
    };

    let mut findings = vec![Finding::pass("CI/CD pipeline configuration exists")];

    if content.contains(CI_SECRET_REFERENCE) {
        findings.push(Finding::pass("GitHub Secrets are properly referenced"));
    } else {
        findings.push(Finding::fail(
            "GitHub Secrets not found in CI/CD configuration",
        ));
    }

    if content.contains(CI_ENVIRONMENT_KEY) {
        findings.push(Finding::pass("Environment separation configured"));
    } else {
        findings.push(Finding::warn("Environment separation not configured"));
    }
    Ok(findings)
}
