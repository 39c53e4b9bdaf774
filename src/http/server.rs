use actix_web::{web, App as ActixApp, HttpServer};
use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::{config, database, App};

#[derive(Debug, Error)]
#[error("Failed to start HTTP server")]
pub struct StartServerError;

/// Builds the [`App`], makes sure the two tables exist and serves
/// the API until the process is stopped.
pub async fn run(config: config::Server) -> Result<(), StartServerError> {
    let app = App::new(config).await.change_context(StartServerError)?;

    let mut conn = app.db.get().await.change_context(StartServerError)?;
    database::setup::create_schema(&mut conn)
        .await
        .change_context(StartServerError)?;
    drop(conn);

    let addr = (app.config.ip, app.config.port);
    let workers = app.config.workers.get();
    info!("Listening on {}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        ActixApp::new()
            .app_data(web::Data::new(app.clone()))
            .wrap(TracingLogger::default())
            .configure(super::controllers::configure)
    })
    .workers(workers)
    .bind(addr)
    .change_context(StartServerError)
    .attach_printable("could not bind HTTP listener")?
    .run()
    .await
    .change_context(StartServerError)
}
