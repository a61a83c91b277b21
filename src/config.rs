use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// Configuration for quizbank, stored as config.json next to the data file.
///
/// Constructed explicitly and passed into the command layer; the page size
/// is never read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizConfig {
    /// Page window size for all paginated listings.
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,
}

fn default_questions_per_page() -> usize {
    DEFAULT_QUESTIONS_PER_PAGE
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
        }
    }
}

impl QuizConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuizError::Io)?;
        let config: QuizConfig = serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuizError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuizError::Serialization)?;
        fs::write(config_path, content).map_err(QuizError::Io)?;
        Ok(())
    }
}
