use actix_web::web::{get, post, scope, ServiceConfig};
use actix_web_lab::middleware::from_fn;

use crate::handlers::agents::{login, me, signup, verify_account};
use crate::middlewares::auth::auth_middleware;

pub fn agent_route_group(conf: &mut ServiceConfig) {
    let scope = scope("/api/agent")
        .route("/signup", post().to(signup))
        .route("/login", post().to(login))
        .route("/verify-account", get().to(verify_account))
        .route("/me", get().to(me).wrap(from_fn(auth_middleware)));

    conf.service(scope);
}
