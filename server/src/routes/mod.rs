use actix_web::web;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .service(
                web::resource("/")
                    .name("polls:index")
                    .route(web::get().to(polls::index)),
            )
            .service(
                web::resource("/{id}/")
                    .name("polls:detail")
                    .route(web::get().to(polls::detail)),
            )
            .service(
                web::resource("/{id}/results/")
                    .name("polls:results")
                    .route(web::get().to(polls::results)),
            )
            .service(
                web::resource("/{id}/vote/")
                    .name("polls:vote")
                    .route(web::post().to(polls::vote)),
            ),
    );
}
