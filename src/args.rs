use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quizbank")]
#[command(about = "Trivia question bank with paginated listings and quiz selection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data file and seed the default categories
    Init,

    /// List all categories
    Categories,

    /// List questions, paginated
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Search question text, case-insensitive
    Search {
        term: String,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Add a question to the bank
    Add {
        #[arg(long)]
        question: Option<String>,

        #[arg(long)]
        answer: Option<String>,

        /// Category id
        #[arg(long)]
        category: Option<u32>,

        /// Difficulty, 1-5
        #[arg(long)]
        difficulty: Option<u8>,
    },

    /// Delete a question by id
    #[command(alias = "rm")]
    Delete {
        id: u32,

        /// Page number for the returned listing
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// List the questions of one category
    Category {
        id: u32,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Draw the next quiz question
    Quiz {
        /// Category id (0 for all categories)
        #[arg(short, long)]
        category: Option<u32>,

        /// Ids already served this session
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<u32>>,
    },
}
