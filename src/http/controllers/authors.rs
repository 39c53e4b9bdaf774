use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use validator::Validate;

use crate::{
    database::ErrorExt, http::Error, schema::Author, types::form::authors::CreateAuthor, App,
};

#[tracing::instrument(skip_all)]
pub async fn list(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let mut conn = app.db_read().await?;
    let authors = Author::all(&mut conn).await?;

    Ok(HttpResponse::Ok().json(authors))
}

#[tracing::instrument(skip_all)]
pub async fn create(app: web::Data<App>, form: Json<CreateAuthor>) -> Result<HttpResponse, Error> {
    // fail fast before a connection is even acquired; the store
    // revalidates (and checks uniqueness) inside the transaction
    form.validate()?;

    let mut tx = app.db_write().await?;
    let author = Author::create(&mut tx, &form).await?;
    tx.commit().await.into_db_error()?;

    Ok(HttpResponse::Created().json(author))
}
