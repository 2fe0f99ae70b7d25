// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Regular expressions used by the source scans

use regex::Regex;

use crate::error::Result;

/// A named regular expression, compiled on demand
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: &'static str,
}

/// Quoted literal assigned to a credential-like identifier
pub const HARDCODED_SECRET_PATTERNS: [NamedPattern; 5] = [
    NamedPattern {
        name: "password assignment",
        regex: r#"(?i)password\s*=\s*["'][^"']{3,}["']"#,
    },
    NamedPattern {
        name: "secret assignment",
        regex: r#"(?i)secret\s*=\s*["'][^"']{3,}["']"#,
    },
    NamedPattern {
        name: "key assignment",
        regex: r#"(?i)key\s*=\s*["'][^"']{3,}["']"#,
    },
    NamedPattern {
        name: "token assignment",
        regex: r#"(?i)token\s*=\s*["'][^"']{3,}["']"#,
    },
    NamedPattern {
        name: "API key literal",
        regex: r#"(?i)api[_-]?key\s*[:=]\s*["'][^"']{10,}["']"#,
    },
];

/// Logging macros that print an environment lookup directly
pub const UNSAFE_LOGGING_PATTERNS: [NamedPattern; 3] = [
    NamedPattern {
        name: "print of env var",
        regex: r"(?:println|print)!.*env::var",
    },
    NamedPattern {
        name: "tracing of env var",
        regex: r"(?:trace|debug|info|warn)!.*env::var",
    },
    NamedPattern {
        name: "error output of env var",
        regex: r"(?:eprintln|error)!.*env::var",
    },
];

/// Label expression used by the service's startup log. Its presence in the
/// service source marks env-derived logging as status-only.
///
/// This is a textual heuristic: it proves the safe idiom exists somewhere
/// in the file, not that every log line uses it.
pub const SAFE_LOGGING_MARKER: &str = r#"{ "✅ Loaded" } else { "❌ Missing" }"#;

/// Compiles a pattern set, keeping each regex paired with its name
pub fn compile(patterns: &[NamedPattern]) -> Result<Vec<(&'static str, Regex)>> {
    patterns
        .iter()
        .map(|p| -> Result<(&'static str, Regex)> { Ok((p.name, Regex::new(p.regex)?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_any(patterns: &[NamedPattern], text: &str) -> bool {
        compile(patterns)
            .unwrap()
            .iter()
            .any(|(_, re)| re.is_match(text))
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(compile(&HARDCODED_SECRET_PATTERNS).unwrap().len(), 5);
        assert_eq!(compile(&UNSAFE_LOGGING_PATTERNS).unwrap().len(), 3);
    }

    #[test]
    fn test_hardcoded_patterns() {
        assert!(matches_any(&HARDCODED_SECRET_PATTERNS, r#"const password = "abcdef123";"#));
        assert!(matches_any(&HARDCODED_SECRET_PATTERNS, r#"let jwt_SECRET='xyz'"#));
        assert!(matches_any(&HARDCODED_SECRET_PATTERNS, r#"apiKey: "0123456789abcdef""#));
        assert!(matches_any(&HARDCODED_SECRET_PATTERNS, r#"auth_token = "t0k""#));

        // too short, unquoted, or not an assignment
        assert!(!matches_any(&HARDCODED_SECRET_PATTERNS, r#"password = "ab""#));
        assert!(!matches_any(&HARDCODED_SECRET_PATTERNS, "password = env_value"));
        assert!(!matches_any(&HARDCODED_SECRET_PATTERNS, r#"DB_PASSWORD: &str = "DB_PASSWORD""#));
        assert!(!matches_any(&HARDCODED_SECRET_PATTERNS, r#"api_key: "short""#));
    }

    #[test]
    fn test_unsafe_logging_patterns() {
        assert!(matches_any(
            &UNSAFE_LOGGING_PATTERNS,
            r#"println!("{}", std::env::var("API_KEY").unwrap());"#
        ));
        assert!(matches_any(
            &UNSAFE_LOGGING_PATTERNS,
            r#"tracing::info!("key={:?}", env::var("API_KEY"));"#
        ));
        assert!(matches_any(
            &UNSAFE_LOGGING_PATTERNS,
            r#"eprintln!("{:?}", std::env::var("JWT_SECRET"));"#
        ));
        assert!(!matches_any(
            &UNSAFE_LOGGING_PATTERNS,
            r#"tracing::info!("Environment: {}", config.environment);"#
        ));
    }
}
