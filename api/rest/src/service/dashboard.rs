use std::str::FromStr;

use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use ks_dao::{
    access::{fetch_project, ProjectFetch},
    project::{ProjectDao, ProjectStatus},
};
use ks_error::Error;
use ks_view::{card::ProjectCardView, detail::ProjectDetailView, route::Route};

use crate::{
    context::ApiRestCtx,
    model::{
        dashboard::{AdminListReqQuery, ProjectDetailReqQuery},
        PaginationRes, Response,
    },
    session,
};

pub fn dashboard_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard/project", web::get().to(project_list))
        .route("/dashboard/project/{project_id}", web::get().to(project_detail))
        .route("/dashboard/admin", web::get().to(admin_list));
}

async fn project_detail(
    ctx: web::Data<ApiRestCtx>,
    auth: Option<BearerAuth>,
    path: web::Path<String>,
    query: web::Query<ProjectDetailReqQuery>,
) -> HttpResponse {
    let session = match session::optional(&ctx, &auth).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    match fetch_project(ctx.dao().db(), Some(path.as_str()), session.as_ref()).await {
        Ok(ProjectFetch::Found(project)) => Response::data(
            &StatusCode::OK,
            &None,
            &ProjectDetailView::new(&project, query.from()),
        ),
        Ok(ProjectFetch::NotFound) => Response::error(&Error::project_not_found()),
        Ok(ProjectFetch::RedirectHome) => Response::redirect(&Route::Home),
        Err(err) => Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

async fn project_list(ctx: web::Data<ApiRestCtx>, auth: Option<BearerAuth>) -> HttpResponse {
    let session = match session::optional(&ctx, &auth).await {
        Ok(Some(session)) => session,
        Ok(None) => return Response::redirect(&Route::Home),
        Err(err) => return Response::error(&err),
    };

    let projects =
        match ProjectDao::db_select_many_by_user_id(ctx.dao().db(), session.user_id()).await {
            Ok(projects) => projects,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };

    cards(&projects)
}

async fn admin_list(
    ctx: web::Data<ApiRestCtx>,
    auth: Option<BearerAuth>,
    query: web::Query<AdminListReqQuery>,
) -> HttpResponse {
    let session = match session::optional(&ctx, &auth).await {
        Ok(Some(session)) => session,
        Ok(None) => return Response::redirect(&Route::Home),
        Err(err) => return Response::error(&err),
    };

    if !session.is_admin() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "Page not found");
    }

    let status = match query.status() {
        Some(status) => match ProjectStatus::from_str(status) {
            Ok(status) => Some(status),
            Err(_) => {
                return Response::error_raw(
                    &StatusCode::BAD_REQUEST,
                    &format!("Unknown project status '{status}'"),
                )
            }
        },
        None => None,
    };

    let projects = match ProjectDao::db_select_many(ctx.dao().db(), &status).await {
        Ok(projects) => projects,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    cards(&projects)
}

fn cards(projects: &[ProjectDao]) -> HttpResponse {
    let cards: Vec<_> = projects.iter().map(ProjectCardView::new).collect();

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&cards.len(), &cards.len())),
        &cards,
    )
}
