use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpRequest, HttpResponse, Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    DbPool,
};
use errors::Error;

const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

#[derive(Debug, Deserialize, Serialize)]
pub struct VoteRequest {
    pub choice: Option<i32>,
}

pub async fn vote(
    req: HttpRequest,
    question_id: Path<i32>,
    pool: Data<DbPool>,
    params: Form<VoteRequest>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let params = params.into_inner();

    let choice = block(move || {
        let mut conn = get_conn(&pool)?;
        // the choice is checked only once the question resolves
        let question = Question::find_published_by_id(&mut conn, question_id, Utc::now())?;
        let Some(choice_id) = params.choice else {
            return Err(Error::ValidationError(vec![NO_CHOICE_SELECTED.to_string()]));
        };

        Choice::vote(&mut conn, question.id, choice_id).map_err(|err| match err {
            Error::NotFound(_) => Error::BadRequest(NO_CHOICE_SELECTED.to_string()),
            err => err,
        })
    })
    .await??;

    debug!(
        "Vote counted for choice {} on question {}",
        choice.id, choice.question_id
    );

    let results_url = req.url_for("polls:results", [question_id.to_string()])?;
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, results_url.path()))
        .finish())
}
