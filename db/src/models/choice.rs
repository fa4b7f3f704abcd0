use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices::{self, table};

#[derive(
    Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Selectable, Serialize,
)]
#[diesel(belongs_to(Question))]
#[diesel(table_name = choices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = choices)]
pub struct NewChoice<'a> {
    pub question_id: i32,
    pub choice_text: &'a str,
}

impl Choice {
    pub fn create(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_text: &str,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .returning(Choice::as_returning())
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(
        conn: &mut SqliteConnection,
        question: &Question,
    ) -> Result<Vec<Choice>, Error> {
        let results = Choice::belonging_to(question)
            .order(choices::id.asc())
            .select(Choice::as_select())
            .load(conn)?;

        Ok(results)
    }

    /// Counts one vote. The increment happens in the database so concurrent
    /// votes are not lost. Fails with not found when the choice does not
    /// belong to the question.
    pub fn vote(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Choice, Error> {
        use choices::dsl::{id, question_id as question_id_field, votes};

        let choice = diesel::update(table)
            .filter(id.eq(choice_id))
            .filter(question_id_field.eq(question_id))
            .set(votes.eq(votes + 1))
            .returning(Choice::as_returning())
            .get_result(conn)?;

        Ok(choice)
    }
}
