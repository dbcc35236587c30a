//! Configuration system for DispatchForge.
//!
//! Load planner configuration from TOML or YAML files to control team
//! size, per-grade scoring and search bounds without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use dispatchforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     team_size = 4
//!
//!     [search]
//!     max_extra = 2
//!
//!     [[grades]]
//!     grade = 2
//!     name = "Epic"
//!     base_points = 250
//!     buff_percent = 0.30
//! "#).unwrap();
//!
//! assert_eq!(config.base_points(2), 250);
//! assert_eq!(config.search.max_extra, 2);
//! assert_eq!(config.search.joint_candidate_limit, 16);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use dispatchforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("planner.toml").unwrap_or_default();
//! assert_eq!(config.team_size, 4);
//! ```

use std::path::Path;

use dispatchforge_core::DispatchForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for DispatchForgeError {
    fn from(err: ConfigError) -> Self {
        DispatchForgeError::Config(err.to_string())
    }
}

/// Default number of resources per slot.
pub const DEFAULT_TEAM_SIZE: usize = 4;

/// Main planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Number of resources every slot receives (K).
    #[serde(default = "default_team_size")]
    pub team_size: usize,

    /// Per-grade display name and scoring.
    #[serde(default = "default_grades")]
    pub grades: Vec<GradeConfig>,

    /// Search bounds.
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

fn default_grades() -> Vec<GradeConfig> {
    vec![
        GradeConfig::new(0, "Common", 100, 0.10),
        GradeConfig::new(1, "Rare", 150, 0.20),
        GradeConfig::new(2, "Epic", 250, 0.30),
        GradeConfig::new(3, "Legendary", 500, 0.40),
        GradeConfig::new(4, "Mythical", 1000, 0.50),
    ]
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            grades: default_grades(),
            search: SearchConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a file, picking the format from its extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Sets the team size.
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Adds or replaces the row for `grade.grade`.
    pub fn with_grade(mut self, grade: GradeConfig) -> Self {
        self.grades.retain(|g| g.grade != grade.grade);
        self.grades.push(grade);
        self.grades.sort_by_key(|g| g.grade);
        self
    }

    /// Sets the maximum number of extra resources the joint search adds.
    pub fn with_max_extra(mut self, max_extra: usize) -> Self {
        self.search.max_extra = max_extra;
        self
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::Invalid("team_size must be at least 1".into()));
        }
        for (i, row) in self.grades.iter().enumerate() {
            if self.grades[..i].iter().any(|g| g.grade == row.grade) {
                return Err(ConfigError::Invalid(format!(
                    "grade {} is configured more than once",
                    row.grade
                )));
            }
            if !row.buff_percent.is_finite() || row.buff_percent < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "grade {} has invalid buff_percent {}",
                    row.grade, row.buff_percent
                )));
            }
        }
        Ok(())
    }

    /// Returns the row for `grade`, if configured.
    pub fn grade(&self, grade: u8) -> Option<&GradeConfig> {
        self.grades.iter().find(|g| g.grade == grade)
    }

    /// Base score of a slot of `grade`; 0 when unconfigured.
    pub fn base_points(&self, grade: u8) -> u32 {
        self.grade(grade).map_or(0, |g| g.base_points)
    }

    /// Buff percentage per satisfied constraint set; 0.0 when unconfigured.
    pub fn buff_percent(&self, grade: u8) -> f64 {
        self.grade(grade).map_or(0.0, |g| g.buff_percent)
    }

    /// Display name of `grade`, falling back to the number.
    pub fn grade_name(&self, grade: u8) -> String {
        self.grade(grade)
            .map_or_else(|| grade.to_string(), |g| g.name.clone())
    }

    /// Extra resources the joint search may add next to the key.
    pub fn effective_max_extra(&self) -> usize {
        self.search.max_extra.min(self.team_size.saturating_sub(1))
    }
}

/// Scoring row for one slot grade.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GradeConfig {
    pub grade: u8,
    pub name: String,
    pub base_points: u32,
    /// Fraction of the base score added per satisfied constraint set.
    pub buff_percent: f64,
}

impl GradeConfig {
    pub fn new(grade: u8, name: impl Into<String>, base_points: u32, buff_percent: f64) -> Self {
        Self {
            grade,
            name: name.into(),
            base_points,
            buff_percent,
        }
    }
}

/// Bounds that keep per-slot search small.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Cheapest matches kept per constraint set when building candidates.
    pub candidates_per_constraint: usize,

    /// Cheapest matching candidates the joint search considers.
    pub joint_candidate_limit: usize,

    /// Extra resources the joint search may add next to the key.
    pub max_extra: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidates_per_constraint: 8,
            joint_candidate_limit: 16,
            max_extra: 3,
        }
    }
}
