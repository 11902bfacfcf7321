use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use ks_dao::{project::ProjectDao, session::Session};
use ks_error::Error;
use uuid::Uuid;

use crate::{
    context::ApiRestCtx,
    model::{
        project::{
            InsertOneProjectReqJson, ProjectIDResJson, ProjectReqPath, ProjectResJson,
            UpdateOneProjectReqJson,
        },
        Response,
    },
    session,
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/project", web::post().to(insert_one))
        .route("/project/{project_id}", web::patch().to(update_one))
        .route("/project/{project_id}", web::delete().to(delete_one))
        .route("/project/{project_id}/submit", web::post().to(submit_one));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOneProjectReqJson>,
) -> HttpResponse {
    let session = match session::required(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    let project_data = match ProjectDao::new(session.user_id(), data.into_inner().into_fields()) {
        Ok(project) => project,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = project_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &ProjectResJson::new(&project_data),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<ProjectReqPath>,
    data: web::Json<UpdateOneProjectReqJson>,
) -> HttpResponse {
    let session = match session::required(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    let changes = data.into_inner().into_changes();
    if changes.is_all_none() {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            "Must have at least one field to update",
        );
    }

    let mut project_data = match find_visible(&ctx, &session, path.project_id()).await {
        Ok(project) => project,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = project_data.apply_changes(&changes) {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if let Err(err) = project_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::OK, &None, &ProjectResJson::new(&project_data))
}

async fn submit_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<ProjectReqPath>,
) -> HttpResponse {
    let session = match session::required(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    let mut project_data = match find_visible(&ctx, &session, path.project_id()).await {
        Ok(project) => project,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = project_data.submit() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if let Err(err) = project_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::OK, &None, &ProjectResJson::new(&project_data))
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<ProjectReqPath>,
) -> HttpResponse {
    let session = match session::required(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    let project_data = match find_visible(&ctx, &session, path.project_id()).await {
        Ok(project) => project,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = ProjectDao::db_delete(ctx.dao().db(), project_data.id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &ProjectIDResJson::new(project_data.id()),
    )
}

/// Looks the project up within the caller's scope. Missing and foreign
/// projects are the same not-found error.
pub async fn find_visible(
    ctx: &ApiRestCtx,
    session: &Session,
    project_id: &Uuid,
) -> Result<ProjectDao, Error> {
    match ProjectDao::db_select(ctx.dao().db(), project_id, &session.project_scope()).await {
        Ok(Some(project)) => Ok(project),
        Ok(None) => Err(Error::project_not_found()),
        Err(err) => Err(Error::InternalServerError(err.to_string())),
    }
}
