// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::process::ExitCode;

use secrets_demo::{CheckerConfig, Config, run_checks, setup_tracing};

fn main() -> ExitCode {
    setup_tracing("warn");

    // Process environment only: a local .env does not make secrets loaded
    let secrets = Config::from_env().secrets;
    let checker_config = CheckerConfig::from_env();
    tracing::debug!("Checker configuration: {:?}", checker_config);

    println!("🔒 Running security checks...\n");

    let report = run_checks(&checker_config, &secrets, |check| println!("{check}"));

    println!("🔒 Security Check Summary:");
    println!("{}", report.summary());

    ExitCode::from(report.exit_status())
}
