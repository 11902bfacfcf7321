use std::sync::Arc;

use ks_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx, ApiRestDiagnosticCtx, ApiRestHashCtx, ApiRestTokenCtx},
    ApiRestServer,
};
use ks_dao::Db;
use ks_db_postgresql::db::PostgresDb;
use ks_db_sqlite::db::SqliteDb;
use ks_hash_argon2::argon2::Argon2Hash;
use ks_token_jwt::token::JwtToken;
use tokio_util::sync::CancellationToken;

mod admin;
mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match ks_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => panic!("Failed to load {config_path}: {err}"),
    };

    ks_log::init(config.log().display_level(), config.log().level_filter());

    ks_log::info(Some("🚀"), "[Kiosk] Starting");

    let argon2_hash = match Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    ) {
        Ok(hash) => hash,
        Err(err) => ks_log::panic(None, format!("[Kiosk] Invalid argon2 configuration: {err}")),
    };

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let db = if let Some(postgres) = config.db().postgres() {
        match PostgresDb::new(&postgres.url(), postgres.max_connections()).await {
            Ok(db) => Arc::new(Db::PostgresqlDb(db)),
            Err(err) => ks_log::panic(None, format!("[Kiosk] Connecting to PostgreSQL failed: {err}")),
        }
    } else if let Some(sqlite) = config.db().sqlite() {
        match SqliteDb::new(sqlite.path(), sqlite.max_connections()).await {
            Ok(db) => Arc::new(Db::SqliteDb(db)),
            Err(err) => ks_log::panic(None, format!("[Kiosk] Opening SQLite failed: {err}")),
        }
    } else {
        ks_log::panic(None, "[Kiosk] No database configuration is specified");
    };

    if let Some(admin) = config.auth().admin() {
        if let Err(err) = admin::seed(&db, &argon2_hash, admin).await {
            ks_log::panic(None, format!("[Kiosk] Seeding admin account failed: {err}"));
        }
    }

    let api_rest_server = ApiRestServer::new(
        config.app().mode(),
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash),
            ApiRestTokenCtx::new(jwt_token),
            ApiRestDaoCtx::new(db),
            ApiRestDiagnosticCtx::new(
                *config.diagnostic().enabled(),
                config.app().deployment_url().clone(),
                config.app().branch_url().clone(),
                config.app().auth_url().clone(),
                config.app().sign_in_url().clone(),
            ),
            *config.auth().user_registration(),
        ),
    );

    let cancel_token = CancellationToken::new();

    match api_rest_server.run(cancel_token.clone()).await {
        Ok(_) => ks_log::info(Some("👋"), "[Kiosk] Turned off"),
        Err(err) => {
            ks_log::warn(None, "[Kiosk] Shutting down all running components");
            cancel_token.cancel();
            ks_log::warn(Some("👋"), format!("[Kiosk] Turned off with error: {err}"));
        }
    }
}
