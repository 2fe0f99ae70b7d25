// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Static secrets-hygiene checker
//!
//! Runs a fixed sequence of independent checks over the service's source
//! files, environment files and CI configuration. Every check runs; the
//! per-check reports are folded into one [`SecurityReport`].

mod patterns;
mod report;
mod rules;


use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Secrets;
use crate::error::Result;

pub use patterns::SAFE_LOGGING_MARKER;
pub use report::{CheckReport, Finding, Level, SecurityReport};

/// Default file locations, relative to their root
pub mod defaults {
    pub const APP_ROOT: &str = ".";
    pub const REPO_ROOT: &str = ".";
    /// Service code: the entry point plus the modules that read the
    /// environment and build responses. Directories are walked for `.rs`
    /// files; the checker's own sources are not part of the service.
    pub const SERVICE_SOURCES: [&str; 3] = ["src/main.rs", "src/config", "src/api"];
    pub const TEST_SOURCES: [&str; 1] = ["tests/http_endpoints.rs"];
    pub const ENV_EXAMPLE: &str = ".env.example";
    pub const ENV_FILE: &str = ".env";
    pub const GITIGNORE: &str = ".gitignore";
    pub const CI_CONFIG: &str = ".github/workflows/ci-cd.yml";
}

/// Environment variable names read by the checker
pub mod env_vars {
    pub const APP_ROOT: &str = "SECURITY_CHECK_APP_ROOT";
    pub const REPO_ROOT: &str = "SECURITY_CHECK_REPO_ROOT";
}

/// Where the checker looks
///
/// Service files resolve against `app_root`; `.gitignore` and the CI
/// pipeline resolve against `repo_root`.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub app_root: PathBuf,
    pub repo_root: PathBuf,
    /// Files or directories scanned for secrets and unsafe logging
    pub service_sources: Vec<PathBuf>,
    /// Files or directories scanned for secrets only
    pub test_sources: Vec<PathBuf>,
    pub env_example: PathBuf,
    pub env_file: PathBuf,
    pub gitignore: PathBuf,
    pub ci_config: PathBuf,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::rooted_at(defaults::APP_ROOT, defaults::REPO_ROOT)
    }
}

impl CheckerConfig {
    /// Default file layout under the given roots
    pub fn rooted_at(app_root: impl Into<PathBuf>, repo_root: impl Into<PathBuf>) -> Self {
        CheckerConfig {
            app_root: app_root.into(),
            repo_root: repo_root.into(),
            service_sources: defaults::SERVICE_SOURCES.into_iter().map(PathBuf::from).collect(),
            test_sources: defaults::TEST_SOURCES.into_iter().map(PathBuf::from).collect(),
            env_example: PathBuf::from(defaults::ENV_EXAMPLE),
            env_file: PathBuf::from(defaults::ENV_FILE),
            gitignore: PathBuf::from(defaults::GITIGNORE),
            ci_config: PathBuf::from(defaults::CI_CONFIG),
        }
    }

    /// Loads the roots from environment variables
    pub fn from_env() -> Self {
        let app_root = std::env::var(env_vars::APP_ROOT)
            .unwrap_or_else(|_| defaults::APP_ROOT.to_string());
        let repo_root = std::env::var(env_vars::REPO_ROOT)
            .unwrap_or_else(|_| defaults::REPO_ROOT.to_string());
        Self::rooted_at(app_root, repo_root)
    }

    pub fn app_path(&self, relative: &Path) -> PathBuf {
        self.app_root.join(relative)
    }

    pub fn repo_path(&self, relative: &Path) -> PathBuf {
        self.repo_root.join(relative)
    }

    /// Expands `entries` into the files that exist under `app_root`
    ///
    /// A file entry is kept as is; a directory contributes every `.rs` file
    /// beneath it, in file-name order. Missing entries are skipped.
    /// Returned paths are relative to `app_root`.
    pub fn expand_sources(&self, entries: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in entries {
            let root = self.app_path(entry);
            if !root.exists() {
                tracing::debug!("{} not found", root.display());
                continue;
            }
            for item in WalkDir::new(&root).sort_by_file_name() {
                let item = item.map_err(std::io::Error::from)?;
                let is_source = item.depth() == 0
                    || item.path().extension().is_some_and(|ext| ext == "rs");
                if item.file_type().is_file() && is_source {
                    let relative = item.path().strip_prefix(&self.app_root).unwrap_or(item.path());
                    files.push(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }
}

/// The checks, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityCheck {
    HardcodedSecrets,
    EnvFiles,
    RuntimeSecrets,
    LoggingPractices,
    CiConfiguration,
}

impl SecurityCheck {
    pub const ALL: [SecurityCheck; 5] = [
        SecurityCheck::HardcodedSecrets,
        SecurityCheck::EnvFiles,
        SecurityCheck::RuntimeSecrets,
        SecurityCheck::LoggingPractices,
        SecurityCheck::CiConfiguration,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SecurityCheck::HardcodedSecrets => "Checking for hardcoded secrets",
            SecurityCheck::EnvFiles => "Checking environment file configuration",
            SecurityCheck::RuntimeSecrets => "Checking environment variable usage",
            SecurityCheck::LoggingPractices => "Checking logging practices",
            SecurityCheck::CiConfiguration => "Checking CI/CD configuration",
        }
    }

    pub fn run(self, config: &CheckerConfig, secrets: &Secrets) -> Result<Vec<Finding>> {
        match self {
            SecurityCheck::HardcodedSecrets => rules::hardcoded_secrets(config),
            SecurityCheck::EnvFiles => rules::env_files(config),
            SecurityCheck::RuntimeSecrets => Ok(rules::runtime_secrets(secrets)),
            SecurityCheck::LoggingPractices => rules::logging_practices(config),
            SecurityCheck::CiConfiguration => rules::ci_configuration(config),
        }
    }
}

/// Runs every check in order and folds the results
///
/// `on_report` is called as soon as each check finishes. A check that
/// errors is reported as a failure and the run continues.
pub fn run_checks<F>(config: &CheckerConfig, secrets: &Secrets, mut on_report: F) -> SecurityReport
where
    F: FnMut(&CheckReport),
{
    let mut report = SecurityReport::default();

    for (index, check) in SecurityCheck::ALL.into_iter().enumerate() {
        let findings = check.run(config, secrets).unwrap_or_else(|e| {
            tracing::error!("Check '{}' failed: {}", check.title(), e);
            vec![Finding::fail(format!("Check could not complete: {e}"))]
        });

        let check_report = CheckReport {
            number: index + 1,
            title: check.title(),
            findings,
        };
        on_report(&check_report);
        report.checks.push(check_report);
    }

    report
}
