use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: &str = "1.0";

pub const DEFAULT_LESSON_CONTENT: &str = "This is a generated lesson plan document. In a production environment, this would contain the actual lesson plan content with properly formatted learning objectives, activities, and assessment criteria.";

pub const DEFAULT_ATTRIBUTION: &str = "Generated by Checkgu - Lesson Plan Management System";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub docx: DocxConfig,
    #[serde(default)]
    pub drive: DriveConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            language: default_language(),
            docx: DocxConfig::default(),
            drive: DriveConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_language() -> String {
    "English".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxConfig {
    /// DEFLATE level, 0-9.
    #[serde(default = "default_compression_level")]
    pub compression_level: i64,
    /// Body text of the "Lesson Content" section.
    #[serde(default = "default_lesson_content")]
    pub lesson_content: String,
    /// Closing italic line of every document.
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

fn default_compression_level() -> i64 {
    6
}

fn default_lesson_content() -> String {
    DEFAULT_LESSON_CONTENT.to_string()
}

fn default_attribution() -> String {
    DEFAULT_ATTRIBUTION.to_string()
}

impl Default for DocxConfig {
    fn default() -> Self {
        Self {
            compression_level: default_compression_level(),
            lesson_content: default_lesson_content(),
            attribution: default_attribution(),
        }
    }
}

/// Settings for the simulated Google Drive connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    #[serde(default = "default_account_email")]
    pub account_email: String,
    /// Artificial delay applied to every Drive call.
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_account_email() -> String {
    "teacher@school.edu.my".to_string()
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            account_email: default_account_email(),
            latency_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
