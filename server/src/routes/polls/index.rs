use actix_web::{
    web::{block, Data},
    HttpRequest, HttpResponse, Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, DbPool};
use errors::Error;

use crate::render::{escape, respond, Page};

pub const LATEST_QUESTIONS_LIMIT: i64 = 5;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
}

impl Page for IndexContext {
    fn title(&self) -> String {
        "Polls".to_string()
    }

    fn render_body(&self, req: &HttpRequest) -> Result<String, Error> {
        if self.latest_question_list.is_empty() {
            return Ok("<p>No polls are available.</p>".to_string());
        }

        let mut items = String::new();
        for question in &self.latest_question_list {
            let url = req.url_for("polls:detail", [question.id.to_string()])?;
            items.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                url.path(),
                escape(&question.question_text)
            ));
        }

        Ok(format!("<ul>\n{}</ul>", items))
    }
}

pub async fn index(req: HttpRequest, pool: Data<DbPool>) -> Result<HttpResponse, Error> {
    let latest_question_list = block(move || {
        let mut conn = get_conn(&pool)?;
        Question::find_published(&mut conn, Utc::now(), LATEST_QUESTIONS_LIMIT)
    })
    .await??;

    respond(&req, &IndexContext {
        latest_question_list,
    })
}
