use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use ks_dao::user::{UserDao, UserRole};
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        auth::{AuthTokenResJson, PasswordBasedReqJson, RegisterReqJson, RegisterResJson},
        Response,
    },
};

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/token", web::get().to(token))
        .route("/auth/register", web::post().to(register))
        .route("/auth/password-based", web::post().to(password_based));
}

async fn token(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(claim) => claim,
        Err(err) => return Response::error_raw(&StatusCode::UNAUTHORIZED, &err.to_string()),
    };

    match UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        Ok(Some(_)) => (),
        Ok(None) => return Response::error_raw(&StatusCode::UNAUTHORIZED, "User no longer exists"),
        Err(err) => {
            return Response::error_raw(
                &StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to get user data: {err}"),
            )
        }
    }

    let token = match ctx.token().jwt().need_renew(&token_claim) {
        Ok(true) => match ctx.token().jwt().renew(&token_claim) {
            Ok(token) => token,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        },
        Ok(false) => token.to_owned(),
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}

async fn register(ctx: web::Data<ApiRestCtx>, data: web::Json<RegisterReqJson>) -> HttpResponse {
    if !ctx.user_registration() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "User registration is disabled");
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(None) => (),
        Ok(Some(_)) => {
            return Response::error_raw(&StatusCode::BAD_REQUEST, "Account has been registered")
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }

    let password_hash = match ctx.hash().argon2().hash_password(data.password()) {
        Ok(hash) => hash,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let user_data = UserDao::new(data.email(), &password_hash, &UserRole::User);

    if let Err(err) = user_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &RegisterResJson::new(user_data.id()),
    )
}

async fn password_based(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<PasswordBasedReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let user_data = match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            return Response::error_raw(&StatusCode::BAD_REQUEST, "Wrong email or password")
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    if ctx
        .hash()
        .argon2()
        .verify_password(data.password(), user_data.password_hash())
        .is_err()
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Wrong email or password");
    }

    let token = match ctx.token().jwt().encode(user_data.id()) {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}
