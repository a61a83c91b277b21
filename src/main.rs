use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quizbank::api::QuizApi;
use quizbank::config::QuizConfig;
use quizbank::error::Result;
use quizbank::store::fs::FileStore;
use quizbank::transport::{self, QuestionPost, QuizCategory, QuizPost};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(success) => {
            if !success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli);
    let store = FileStore::new(&data_dir);

    if let Commands::Init = cli.command {
        if store.init()? {
            println!(
                "{}",
                format!("Initialized question bank in {}", data_dir.display()).green()
            );
        } else {
            println!("Question bank already initialized");
        }
        return Ok(true);
    }

    let config = QuizConfig::load(&data_dir)?;
    let mut api = QuizApi::new(store, config);

    let reply = match cli.command {
        Commands::Init => return Ok(true),
        Commands::Categories => transport::get_categories(&api),
        Commands::List { page } => transport::get_questions(&api, page),
        Commands::Search { term, page } => transport::post_questions(
            &mut api,
            QuestionPost {
                search_term: Some(term),
                ..Default::default()
            },
            page,
        ),
        Commands::Add {
            question,
            answer,
            category,
            difficulty,
        } => transport::post_questions(
            &mut api,
            QuestionPost {
                question,
                answer,
                category,
                difficulty,
                search_term: None,
            },
            None,
        ),
        Commands::Delete { id, page } => transport::delete_question(&mut api, id, page),
        Commands::Category { id, page } => transport::get_questions_by_category(&api, id, page),
        Commands::Quiz { category, exclude } => transport::post_quizzes(
            &api,
            QuizPost {
                // The CLI holds the session: no --exclude is an empty set
                previous_questions: Some(exclude.unwrap_or_default()),
                quiz_category: category.map(|id| QuizCategory { id }),
            },
        ),
    };

    println!("{}", serde_json::to_string_pretty(&reply.body)?);
    Ok(reply.is_success())
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }

    let proj_dirs =
        ProjectDirs::from("com", "quizbank", "quizbank").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}
