use std::fmt;

use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub question_text: &'a str,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &mut SqliteConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .returning(Question::as_returning())
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions published at or before `now`, most recent first.
    pub fn find_published(
        conn: &mut SqliteConnection,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .limit(limit)
            .select(Question::as_select())
            .load(conn)?;

        Ok(results)
    }

    /// Unpublished questions fail the same way missing ones do.
    pub fn find_published_by_id(
        conn: &mut SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .select(Question::as_select())
            .first(conn)?;

        Ok(question)
    }

    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.pub_date <= now
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.question_text)
    }
}
