use actix_web::web::{get, post, scope, ServiceConfig};
use actix_web_lab::middleware::from_fn;

use crate::handlers::transactions::{create_transaction, get_transaction, list_transactions};
use crate::middlewares::auth::auth_middleware;

pub fn transaction_route_group(conf: &mut ServiceConfig) {
    let scope = scope("/api/transaction")
        .route(
            "",
            post().to(create_transaction).wrap(from_fn(auth_middleware)),
        )
        .route(
            "",
            get().to(list_transactions).wrap(from_fn(auth_middleware)),
        )
        .route(
            "/{identifier}",
            get().to(get_transaction).wrap(from_fn(auth_middleware)),
        );

    conf.service(scope);
}
