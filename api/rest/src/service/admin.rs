use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::{
    context::ApiRestCtx,
    model::{
        project::{ProjectReqPath, ProjectResJson, RejectOneProjectReqJson},
        Response,
    },
    service::project::find_visible,
    session,
};

pub fn admin_api(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/admin/project/{project_id}/approve",
        web::post().to(approve_one),
    )
    .route(
        "/admin/project/{project_id}/reject",
        web::post().to(reject_one),
    );
}

async fn approve_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<ProjectReqPath>,
) -> HttpResponse {
    let session = match session::required_admin(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    let mut project_data = match find_visible(&ctx, &session, path.project_id()).await {
        Ok(project) => project,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = project_data.approve() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if let Err(err) = project_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    ks_log::info(
        None,
        format!("[ApiRestServer] Project {} approved", project_data.id()),
    );

    Response::data(&StatusCode::OK, &None, &ProjectResJson::new(&project_data))
}

async fn reject_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<ProjectReqPath>,
    data: web::Json<RejectOneProjectReqJson>,
) -> HttpResponse {
    let session = match session::required_admin(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    let mut project_data = match find_visible(&ctx, &session, path.project_id()).await {
        Ok(project) => project,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = project_data.reject(data.reason()) {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if let Err(err) = project_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    ks_log::info(
        None,
        format!("[ApiRestServer] Project {} rejected", project_data.id()),
    );

    Response::data(&StatusCode::OK, &None, &ProjectResJson::new(&project_data))
}
