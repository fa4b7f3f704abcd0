use actix_web::{
    web::{block, Data, Path},
    HttpRequest, HttpResponse, Result,
};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    DbPool,
};
use errors::Error;

use super::find_question_with_choices;
use crate::render::{escape, respond, Page};

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsContext {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl Page for ResultsContext {
    fn title(&self) -> String {
        format!("Results: {}", self.question.question_text)
    }

    fn render_body(&self, req: &HttpRequest) -> Result<String, Error> {
        let detail_url = req.url_for("polls:detail", [self.question.id.to_string()])?;

        let mut items = String::new();
        for choice in &self.choices {
            items.push_str(&format!(
                "<li>{} -- {} vote{}</li>\n",
                escape(&choice.choice_text),
                choice.votes,
                if choice.votes == 1 { "" } else { "s" }
            ));
        }

        Ok(format!(
            "<h1>{}</h1>\n<ul>\n{}</ul>\n<a href=\"{}\">Vote again?</a>",
            escape(&self.question.question_text),
            items,
            detail_url.path()
        ))
    }
}

pub async fn results(
    req: HttpRequest,
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let (question, choices) =
        block(move || find_question_with_choices(&pool, question_id)).await??;

    respond(&req, &ResultsContext { question, choices })
}
