#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn, new_pool,
    models::{Choice, Question},
    run_migrations,
};
use errors::Error;

// (question, days from now, choices)
const POLLS: &[(&str, i64, &[&str])] = &[
    ("What's new?", -1, &["Not much", "The sky", "Just hacking again"]),
    (
        "Which race is the strongest?",
        -7,
        &["Terran", "Protoss", "Zerg"],
    ),
    ("Favourite editor?", -30, &["vim", "emacs", "Something else"]),
    ("Who wins the finals?", 3, &["Serral", "Maru", "Clem"]),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::ConfigError("DATABASE_URL must be set".to_string()))?;
    let pool = new_pool(&database_url)?;
    run_migrations(&pool)?;

    let mut conn = get_conn(&pool)?;
    let now = Utc::now();

    for (question_text, days, choices) in POLLS {
        let question = Question::create(&mut conn, question_text, now + Duration::days(*days))?;
        for choice_text in choices.iter() {
            Choice::create(&mut conn, question.id, choice_text)?;
        }
        info!("Created question {} - {}", question.id, question.question_text);
    }

    Ok(())
}
