use actix_web::web;

use crate::service::{
    admin::admin_api, auth::auth_api, dashboard::dashboard_api, diagnostic::diagnostic_api,
    project::project_api, root::root_api,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .configure(dashboard_api)
        .configure(diagnostic_api)
        .service(
            web::scope("/api/rest")
                .configure(auth_api)
                .configure(project_api)
                .configure(admin_api),
        );
}
