use chrono::Utc;

use db::{
    get_conn,
    models::{Choice, Question},
    DbPool,
};
use errors::Error;

mod detail;
mod index;
mod results;
mod vote;

pub use self::detail::*;
pub use self::index::*;
pub use self::results::*;
pub use self::vote::*;

/// Resolves a question the public may see, along with its choices.
fn find_question_with_choices(
    pool: &DbPool,
    question_id: i32,
) -> Result<(Question, Vec<Choice>), Error> {
    let mut conn = get_conn(pool)?;
    let question = Question::find_published_by_id(&mut conn, question_id, Utc::now())?;
    let choices = Choice::find_by_question(&mut conn, &question)?;

    Ok((question, choices))
}
