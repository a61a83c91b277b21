use super::{Bank, QuestionStore};
use crate::error::{QuizError, Result};
use crate::model::{Category, NewQuestion, Question};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "data.json";

/// Categories a fresh bank is seeded with, matching the classic trivia set.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// File-backed store: the whole bank lives in one `data.json`.
///
/// Every operation loads the bank, applies the change through [`Bank`], and
/// writes the file back. The file is small enough that this keeps the store
/// free of any in-process cache to go stale.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Create the data directory and seed [`DEFAULT_CATEGORIES`] if no bank
    /// exists yet. Returns true if a new bank was created.
    pub fn init(&self) -> Result<bool> {
        if self.data_file().exists() {
            return Ok(false);
        }

        let mut bank = Bank::new();
        for kind in DEFAULT_CATEGORIES {
            bank.add_category(kind)?;
        }
        self.save_bank(&bank)?;
        Ok(true)
    }

    fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn load_bank(&self) -> Result<Bank> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Bank::new());
        }
        let content = fs::read_to_string(data_file).map_err(QuizError::Io)?;
        let bank: Bank = serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        Ok(bank)
    }

    fn save_bank(&self, bank: &Bank) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(QuizError::Io)?;
        }
        let content = serde_json::to_string_pretty(bank).map_err(QuizError::Serialization)?;
        fs::write(self.data_file(), content).map_err(QuizError::Io)?;
        Ok(())
    }
}

impl QuestionStore for FileStore {
    fn add_question(&mut self, new: NewQuestion) -> Result<Question> {
        let mut bank = self.load_bank()?;
        let question = bank.add_question(new)?;
        self.save_bank(&bank)?;
        Ok(question)
    }

    fn question(&self, id: u32) -> Result<Question> {
        self.load_bank()?.question(id)
    }

    fn questions(&self) -> Result<Vec<Question>> {
        Ok(self.load_bank()?.questions())
    }

    fn delete_question(&mut self, id: u32) -> Result<()> {
        let mut bank = self.load_bank()?;
        bank.delete_question(id)?;
        self.save_bank(&bank)
    }

    fn add_category(&mut self, kind: &str) -> Result<Category> {
        let mut bank = self.load_bank()?;
        let category = bank.add_category(kind)?;
        self.save_bank(&bank)?;
        Ok(category)
    }

    fn category(&self, id: u32) -> Result<Category> {
        self.load_bank()?.category(id)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.load_bank()?.categories())
    }
}
