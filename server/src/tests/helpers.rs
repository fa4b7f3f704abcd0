#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::BoxBody, dev::ServiceResponse, error::Error, http::header, test, web::Data, App,
    };
    use chrono::{Duration, Utc};
    use serde::{de::DeserializeOwned, Serialize};
    use tempfile::TempDir;

    use db::{
        get_conn,
        models::{Choice, Question},
        new_pool, run_migrations, DbPool,
    };

    use crate::routes::routes;

    /// A migrated SQLite database that lives as long as this value.
    pub struct TestDb {
        pub pool: DbPool,
        _dir: TempDir,
    }

    pub fn test_db() -> TestDb {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polls.sqlite3");
        let pool = new_pool(path.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();

        TestDb { pool, _dir: dir }
    }

    /// Create a question published `days` offset from now (negative for
    /// questions published in the past, positive for ones yet to be published).
    pub fn create_question(pool: &DbPool, question_text: &str, days: i64) -> Question {
        let mut conn = get_conn(pool).unwrap();
        Question::create(&mut conn, question_text, Utc::now() + Duration::days(days)).unwrap()
    }

    pub fn create_choice(pool: &DbPool, question_id: i32, choice_text: &str) -> Choice {
        let mut conn = get_conn(pool).unwrap();
        Choice::create(&mut conn, question_id, choice_text).unwrap()
    }

    pub async fn get_service(
        pool: &DbPool,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .configure(routes),
        )
        .await
    }

    /// Helper for HTTP GET integration tests that want the view context as JSON
    pub async fn test_get<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service(pool).await;
        let req = test::TestRequest::get()
            .uri(route)
            .insert_header((header::ACCEPT, "application/json"));

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests against the rendered page
    pub async fn test_get_html(pool: &DbPool, route: &str) -> (u16, String) {
        let app = get_service(pool).await;
        let req = test::TestRequest::get()
            .uri(route)
            .insert_header((header::ACCEPT, "text/html"));

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    pub struct FormResponse {
        pub status: u16,
        pub location: Option<String>,
        pub body: String,
    }

    /// Helper for HTTP POST integration tests submitting a urlencoded form
    pub async fn test_post_form<T: Serialize>(pool: &DbPool, route: &str, params: T) -> FormResponse {
        let app = get_service(pool).await;
        let req = test::TestRequest::post().uri(route).set_form(params);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = test::read_body(res).await;

        FormResponse {
            status,
            location,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}
