//! Configuration management for the RST validation hook.
//!
//! Handles:
//! - Command-line argument parsing
//! - Environment overrides
//! - Documentation path gate settings

use anyhow::Result;
use clap::Parser;

/// Substring that marks a path as living under the documentation tree
pub const DEFAULT_DOCS_MARKER: &str = "Documentation";

/// Suffix a path must carry to be checked
pub const DEFAULT_EXTENSION: &str = ".rst";

/// Command-line arguments for the RST validation hook
#[derive(Debug, Parser)]
#[command(name = "validate-rst")]
#[command(about = "Advisory RST checks for pending TYPO3 documentation writes")]
#[command(version)]
pub struct Args {
    /// Path substring identifying the documentation tree
    #[arg(
        long,
        env = "RST_HOOK_DOCS_MARKER",
        default_value = DEFAULT_DOCS_MARKER,
        help = "Path substring marking documentation files"
    )]
    pub docs_marker: String,

    /// Required file suffix
    #[arg(
        long,
        env = "RST_HOOK_EXTENSION",
        default_value = DEFAULT_EXTENSION,
        help = "File suffix to check (case-sensitive)"
    )]
    pub extension: String,

    /// Log level for stderr diagnostics
    #[arg(
        long,
        env = "RST_HOOK_LOG_LEVEL",
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error, off)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Substring a path must contain
    pub docs_marker: String,
    /// Suffix a path must end with
    pub extension: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_marker: DEFAULT_DOCS_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments and environment.
    ///
    /// The hook must never block the write it is attached to, so malformed
    /// arguments fall back to the defaults. `--help` and `--version` still
    /// print and exit successfully.
    pub fn from_args_and_env() -> Self {
        match Args::try_parse() {
            Ok(args) => Self::from_args(args),
            Err(e) if !e.use_stderr() => e.exit(),
            Err(_) => Self::default(),
        }
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Self {
        Config {
            docs_marker: args.docs_marker,
            extension: args.extension,
            log_level: args.log_level,
        }
    }

    /// Parse configuration from an explicit argument list
    pub fn try_from_iter<I, T>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_args(Args::try_parse_from(iter)?))
    }

    /// Whether a path is a candidate for RST checking
    pub fn is_applicable(&self, file_path: &str) -> bool {
        !file_path.is_empty()
            && file_path.contains(&self.docs_marker)
            && file_path.ends_with(&self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documentation_rst() {
        let config = Config::try_from_iter(["validate-rst"]).expect("parse defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.docs_marker, "Documentation");
        assert_eq!(config.extension, ".rst");
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_from_iter([
            "validate-rst",
            "--docs-marker",
            "docs",
            "--extension",
            ".txt",
            "--log-level",
            "debug",
        ])
        .expect("parse flags");
        assert_eq!(config.docs_marker, "docs");
        assert_eq!(config.extension, ".txt");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(Config::try_from_iter(["validate-rst", "--bogus"]).is_err());
    }

    #[test]
    fn test_applicability_gate() {
        let config = Config::default();
        assert!(config.is_applicable("/repo/Documentation/Index.rst"));
        assert!(!config.is_applicable(""));
        assert!(!config.is_applicable("/repo/Documentation/Index.md"));
        assert!(!config.is_applicable("/repo/docs/Index.rst"));
        // Case-sensitive on both conditions
        assert!(!config.is_applicable("/repo/documentation/Index.rst"));
        assert!(!config.is_applicable("/repo/Documentation/Index.RST"));
    }
}
