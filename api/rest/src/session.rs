use actix_web_httpauth::extractors::bearer::BearerAuth;
use ks_dao::{session::Session, user::UserDao};
use ks_error::Error;

use crate::context::ApiRestCtx;

pub async fn optional(
    ctx: &ApiRestCtx,
    auth: &Option<BearerAuth>,
) -> Result<Option<Session>, Error> {
    match auth {
        Some(auth) => from_token(ctx, auth.token()).await,
        None => Ok(None),
    }
}

pub async fn required(ctx: &ApiRestCtx, auth: &BearerAuth) -> Result<Session, Error> {
    match from_token(ctx, auth.token()).await? {
        Some(session) => Ok(session),
        None => Err(Error::Unauthorized(
            "Invalid or expired session, please log in again".to_owned(),
        )),
    }
}

pub async fn required_admin(ctx: &ApiRestCtx, auth: &BearerAuth) -> Result<Session, Error> {
    let session = required(ctx, auth).await?;
    if !session.is_admin() {
        return Err(Error::Forbidden("Only admins can moderate projects".to_owned()));
    }
    Ok(session)
}

/// An invalid or expired token, or one whose user no longer exists, is no
/// session at all. The role always comes from the stored user, never from
/// the token.
async fn from_token(ctx: &ApiRestCtx, token: &str) -> Result<Option<Session>, Error> {
    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(claim) => claim,
        Err(err) => {
            ks_log::debug(None, format!("Rejected bearer token: {err}"));
            return Ok(None);
        }
    };

    match UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        Ok(user) => Ok(user.map(|user| Session::from_user(&user))),
        Err(err) => Err(Error::InternalServerError(err.to_string())),
    }
}
