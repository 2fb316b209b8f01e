//! Configuration types for analysis and output.
//!
//! These are plain structs with builder methods and no CLI framework
//! dependency, so library users construct them directly.
//!
//! - [`AnalysisConfig`] - knobs for the aggregation engine
//! - [`OutputConfig`] - serialization settings for writers
//!
//! Record filtering is configured with
//! [`FilterConfig`](crate::core::filter::FilterConfig).
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, OutputConfig};
//! use chatstats::core::Analyzer;
//!
//! let analyzer = Analyzer::with_config(
//!     AnalysisConfig::new().with_most_active_days_limit(5),
//! );
//! let output = OutputConfig::compact();
//! # let _ = (analyzer, output);
//! ```

use serde::{Deserialize, Serialize};

/// Settings for the aggregation engine.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_most_active_days_limit(3);
/// assert_eq!(config.most_active_days_limit, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of entries in `most_active_days` (default: 10)
    pub most_active_days_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            most_active_days_limit: 10,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many days the most-active-days view keeps.
    #[must_use]
    pub fn with_most_active_days_limit(mut self, limit: usize) -> Self {
        self.most_active_days_limit = limit;
        self
    }
}

/// Serialization settings shared by the writers.
///
/// JSON is pretty-printed with a two-space indent by default. Non-ASCII
/// text is always written verbatim, never escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Enables or disables pretty-printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.most_active_days_limit, 10);
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new().with_most_active_days_limit(25);
        assert_eq!(config.most_active_days_limit, 25);
    }

    #[test]
    fn test_output_config_default() {
        assert!(OutputConfig::default().pretty);
        assert!(!OutputConfig::compact().pretty);
        assert!(!OutputConfig::new().with_pretty(false).pretty);
    }
}
