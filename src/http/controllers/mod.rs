use actix_web::web;

pub mod authors;
pub mod posts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(super::util::handle_json_error))
        .app_data(web::PathConfig::default().error_handler(super::util::handle_path_error))
        .service(
            web::scope("/authors")
                .route("", web::get().to(authors::list))
                .route("", web::post().to(authors::create)),
        )
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::patch().to(posts::update))
                .route("/{id}", web::delete().to(posts::destroy)),
        );
}
