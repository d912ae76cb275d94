use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::{ErrorInternalServerError, ErrorUnauthorized},
    http, web, Error as ActixWebError, HttpMessage,
};
use actix_web_lab::middleware::Next;
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::*;
use serde_json::json;
use tracing::error;

use crate::dto::agents::TokenClaims;
use crate::entities::{agents, prelude::Agents};
use crate::AppState;

pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, ActixWebError> {
    let app_state = match req.app_data::<web::Data<AppState>>() {
        Some(app_state) => app_state.clone(),
        None => {
            error!("AppState missing from request data");
            return Err(ErrorInternalServerError(
                json!({ "status": "error", "message": "An unexpected error occured" }),
            ));
        }
    };

    let authorization = match req.headers().get(http::header::AUTHORIZATION) {
        Some(auth) => auth,
        None => {
            return Err(ErrorUnauthorized(
                json!({ "status": "error", "message": "No auth header found" }),
            ));
        }
    };

    let auth_parts: Vec<&str> = match authorization.to_str() {
        Ok(value) => value.split_whitespace().collect(),
        Err(_) => {
            return Err(ErrorUnauthorized(
                json!({ "status": "error", "message": "Improper auth header format" }),
            ));
        }
    };

    if auth_parts.len() != 2 || auth_parts[0] != "Bearer" {
        return Err(ErrorUnauthorized(
            json!({ "status": "error", "message": "Improper auth header format" }),
        ));
    }

    let token = auth_parts[1].trim();
    let claims = match decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(app_state.env.app_key.as_ref()),
        &Validation::default(),
    ) {
        Ok(decoded) => decoded.claims,
        Err(err) => {
            error!("Auth middleware error decoding token ===> {}", err);
            return Err(ErrorUnauthorized(
                json!({ "status": "error", "message": "Please login again" }),
            ));
        }
    };

    if claims.auth_type != "AGENT_AUTH" {
        return Err(ErrorUnauthorized(
            json!({ "status": "error", "message": "Please login again" }),
        ));
    }

    let agent = Agents::find()
        .filter(agents::Column::Uuid.eq(&claims.sub))
        .one(&app_state.db)
        .await;

    let agent = match agent {
        Ok(Some(agent)) => agent,
        Ok(None) => {
            return Err(ErrorUnauthorized(
                json!({ "status": "error", "message": "Please login again" }),
            ));
        }
        Err(err) => {
            error!("DB error loading agent in auth middleware ===> {}", err);
            return Err(ErrorInternalServerError(
                json!({ "status": "error", "message": "An unexpected error occured" }),
            ));
        }
    };

    req.extensions_mut().insert(agent);

    next.call(req).await
}
