use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use validator::Validate;

use crate::{
    database::ErrorExt,
    http::Error,
    schema::Post,
    types::form::posts::{CreatePost, UpdatePost},
    types::Resource,
    App,
};

#[tracing::instrument(skip_all)]
pub async fn list(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let mut conn = app.db_read().await?;
    let posts = Post::all(&mut conn).await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[tracing::instrument(skip_all)]
pub async fn create(app: web::Data<App>, form: Json<CreatePost>) -> Result<HttpResponse, Error> {
    form.validate()?;

    let mut tx = app.db_write().await?;
    let post = Post::create(&mut tx, &form).await?;
    tx.commit().await.into_db_error()?;

    Ok(HttpResponse::Created().json(post))
}

#[tracing::instrument(skip_all, fields(id = %path))]
pub async fn get(app: web::Data<App>, path: web::Path<i64>) -> Result<HttpResponse, Error> {
    let mut conn = app.db_read().await?;
    match Post::by_id(&mut conn, *path).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(Error::not_found(Resource::Post)),
    }
}

#[tracing::instrument(skip_all, fields(id = %path))]
pub async fn update(
    app: web::Data<App>,
    path: web::Path<i64>,
    form: Json<UpdatePost>,
) -> Result<HttpResponse, Error> {
    let mut tx = app.db_write().await?;

    let Some(post) = Post::by_id(&mut tx, *path).await? else {
        return Err(Error::not_found(Resource::Post));
    };

    let post = post.apply(&mut tx, &form).await?;
    tx.commit().await.into_db_error()?;

    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip_all, fields(id = %path))]
pub async fn destroy(app: web::Data<App>, path: web::Path<i64>) -> Result<HttpResponse, Error> {
    let mut tx = app.db_write().await?;

    // deleting a post that never existed is a silent no-op; unlike
    // GET and PATCH this endpoint does not 404
    let _rows = Post::delete(&mut tx, *path).await?;
    tx.commit().await.into_db_error()?;

    Ok(HttpResponse::NoContent().finish())
}
