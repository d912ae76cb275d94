use actix_web::web::{get, put, scope, ServiceConfig};
use actix_web_lab::middleware::from_fn;

use crate::handlers::settings::{get_rates, update_rate};
use crate::middlewares::auth::auth_middleware;

pub fn settings_route_group(conf: &mut ServiceConfig) {
    let scope = scope("/api/settings")
        .route("/rates", get().to(get_rates).wrap(from_fn(auth_middleware)))
        .route("/rates", put().to(update_rate).wrap(from_fn(auth_middleware)));

    conf.service(scope);
}
