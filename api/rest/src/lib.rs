use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use context::ApiRestCtx;
use ks_config::app::AppConfigMode;
use error_handler::default_error_handler;
use logger::logger_format;
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;
mod session;

pub use configure::configure;

pub struct ApiRestServer {
    mode: AppConfigMode,
    address: String,
    allowed_origin: Option<String>,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(
        mode: &AppConfigMode,
        host: &str,
        port: &u16,
        allowed_origin: &Option<String>,
        ctx: ApiRestCtx,
    ) -> Self {
        ks_log::info(Some("⚡"), "[ApiRestServer] Initializing component");

        Self {
            mode: *mode,
            address: format!("{host}:{port}"),
            allowed_origin: allowed_origin.clone(),
            context: web::Data::new(ctx),
        }
    }

    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        ks_log::info(Some("💫"), "[ApiRestServer] Running component");

        let mode = self.mode;
        let allowed_origin = self.allowed_origin;
        let context = self.context;

        let server = HttpServer::new(move || {
            // Without an allowed origin, production only serves same-origin requests.
            let cors = match (mode, &allowed_origin) {
                (_, Some(origin)) => Cors::default()
                    .allowed_origin(origin)
                    .allow_any_method()
                    .allow_any_header(),
                (AppConfigMode::Development, None) => Cors::permissive(),
                (AppConfigMode::Production, None) => Cors::default(),
            };

            App::new()
                .wrap(Logger::new(logger_format()))
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .wrap(cors)
                .app_data(context.clone())
                .configure(configure)
        })
        .disable_signals()
        .bind(&self.address)?
        .run();

        let handle = server.handle();

        tokio::select! {
            res = server => res?,
            _ = cancel_token.cancelled() => handle.stop(true).await,
            _ = tokio::signal::ctrl_c() => handle.stop(true).await,
        }

        ks_log::info(Some("👋"), "[ApiRestServer] Stopped");

        Ok(())
    }
}
