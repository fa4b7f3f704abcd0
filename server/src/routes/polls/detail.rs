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
pub struct DetailContext {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl Page for DetailContext {
    fn title(&self) -> String {
        self.question.question_text.clone()
    }

    fn render_body(&self, req: &HttpRequest) -> Result<String, Error> {
        let vote_url = req.url_for("polls:vote", [self.question.id.to_string()])?;

        let mut body = format!("<h1>{}</h1>\n", escape(&self.question.question_text));
        if self.choices.is_empty() {
            body.push_str("<p>No choices yet.</p>");
            return Ok(body);
        }

        body.push_str(&format!(
            "<form action=\"{}\" method=\"post\">\n<fieldset>\n",
            vote_url.path()
        ));
        for choice in &self.choices {
            body.push_str(&format!(
                "<input type=\"radio\" name=\"choice\" id=\"choice{id}\" value=\"{id}\">\n<label for=\"choice{id}\">{text}</label><br>\n",
                id = choice.id,
                text = escape(&choice.choice_text)
            ));
        }
        body.push_str("</fieldset>\n<input type=\"submit\" value=\"Vote\">\n</form>");

        Ok(body)
    }
}

pub async fn detail(
    req: HttpRequest,
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let (question, choices) =
        block(move || find_question_with_choices(&pool, question_id)).await??;

    respond(&req, &DetailContext { question, choices })
}
