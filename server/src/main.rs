#[macro_use]
extern crate log;

use std::io;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

mod config;
mod render;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::routes;
use errors::ErrorResponse;

fn to_io_error(error: errors::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(to_io_error)?;
    let pool = db::new_pool(&config.database_url).map_err(to_io_error)?;

    if config.run_migrations {
        let applied = db::run_migrations(&pool).map_err(to_io_error)?;
        info!("{} pending migrations applied", applied);
    }

    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
            }))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
