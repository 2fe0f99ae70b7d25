// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Check results and their console rendering

use std::fmt;

/// Severity of a single finding
///
/// Only [`Level::Fail`] affects the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Pass,
    Fail,
    Warn,
    Info,
}

impl Level {
    fn symbol(self) -> &'static str {
        match self {
            Level::Pass => "✅",
            Level::Fail => "❌",
            Level::Warn => "⚠️ ",
            Level::Info => "ℹ️ ",
        }
    }
}

/// One status line produced by a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub level: Level,
    pub message: String,
}

impl Finding {
    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Level::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Level::Fail, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Level::Warn, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Finding {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   {} {}", self.level.symbol(), self.message)
    }
}

/// Outcome of one check
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub number: usize,
    pub title: &'static str,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// True when the check contributes to the overall failure
    pub fn is_flagged(&self) -> bool {
        self.findings.iter().any(|f| f.level == Level::Fail)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {}...", self.number, self.title)?;
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        Ok(())
    }
}

/// Aggregate of every check in a run
#[derive(Debug, Clone, Default)]
pub struct SecurityReport {
    pub checks: Vec<CheckReport>,
}

impl SecurityReport {
    pub fn has_issues(&self) -> bool {
        self.checks.iter().any(CheckReport::is_flagged)
    }

    /// Process exit status: 1 if any check is flagged, 0 otherwise
    pub fn exit_status(&self) -> u8 {
        u8::from(self.has_issues())
    }

    pub fn summary(&self) -> &'static str {
        if self.has_issues() {
            "❌ Some security issues were found. Please review and fix them."
        } else {
            "✅ All security checks passed!"
        }
    }
}
