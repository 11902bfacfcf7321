use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::{
    context::ApiRestCtx,
    model::{diagnostic::EnvResJson, Response},
    session,
};

pub fn diagnostic_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/env", web::get().to(env))
        .route("/env-test", web::get().to(env));
}

/// Answers only when enabled in configuration and called by an admin. Every
/// other caller sees a plain not-found.
async fn env(ctx: web::Data<ApiRestCtx>, auth: Option<BearerAuth>) -> HttpResponse {
    if !ctx.diagnostic().enabled() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "Page not found");
    }

    match session::optional(&ctx, &auth).await {
        Ok(Some(session)) if session.is_admin() => Response::data(
            &StatusCode::OK,
            &None,
            &EnvResJson::new(ctx.diagnostic()),
        ),
        Ok(_) => Response::error_raw(&StatusCode::NOT_FOUND, "Page not found"),
        Err(err) => Response::error(&err),
    }
}
