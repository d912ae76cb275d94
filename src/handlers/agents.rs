use actix_web::{web, HttpResponse, Responder};
use argonautica::Hasher;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::*;
use serde_json::json;
use tracing::{error, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::agents::{LoginBody, SignupBody, TokenClaims, VerifyAccountQuery};
use crate::entities::{agents, prelude::Agents};
use crate::utils::{
    email_template::verify_account_template,
    helpers::validate_password,
    send_email::{SendEmail, SendEmailTrait},
};
use crate::AppState;

#[instrument(skip(body, app_state), fields(agent_email = %body.email))]
pub async fn signup(body: web::Json<SignupBody>, app_state: web::Data<AppState>) -> impl Responder {
    let agent_payload = match body.validate() {
        Ok(_) => body.into_inner(),
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "error", "message": "Validation errors", "data": err }));
        }
    };

    let lowercase_email = agent_payload.email.to_lowercase();
    let check_agent = Agents::find()
        .filter(agents::Column::Email.eq(&lowercase_email))
        .one(&app_state.db)
        .await;

    let check_agent = match check_agent {
        Ok(check_agent) => check_agent,
        Err(err) => {
            error!("Database error while trying to fetch an agent ===> {}", err);
            return HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "An error occured trying to validate agent"
            }));
        }
    };

    if check_agent.is_some() {
        return HttpResponse::BadRequest()
            .json(json!({ "status": "error",  "message": "Agent with this email already exists" }));
    }

    let mut hasher = Hasher::default();
    let hashed_password = hasher
        .with_password(agent_payload.password)
        .with_secret_key(&app_state.env.hash_key)
        .hash();

    let hashed_password = match hashed_password {
        Ok(hashed_password) => hashed_password,
        Err(err) => {
            error!("Failed to hash password ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "An unexpected error occured" }));
        }
    };

    let new_agent = agents::ActiveModel {
        uuid: Set(Uuid::new_v4().to_string()),
        first_name: Set(agent_payload.first_name.clone()),
        last_name: Set(agent_payload.last_name),
        email: Set(lowercase_email.clone()),
        phone: Set(agent_payload.phone),
        branch: Set(agent_payload.branch),
        password: Set(hashed_password),
        ..Default::default()
    };

    let saved_agent = new_agent.insert(&app_state.db).await;
    if let Err(err) = saved_agent {
        error!("Database error when trying to save agent ===> {}", err);
        return HttpResponse::InternalServerError().json(
            json!({ "status": "error", "message": "An error occured trying to create agent" }),
        );
    }

    // SIGN TOKEN FOR EMAIL VERIFICATION
    let now = Utc::now();
    let claims = TokenClaims {
        sub: lowercase_email.clone(),
        auth_type: String::from("ACCOUNT_VERIFICATION"),
        exp: (now + Duration::days(3)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(app_state.env.app_key.as_ref()),
    )
    .unwrap_or_else(|err| {
        error!("Error signing verification token: {}", err);
        String::new()
    });

    let template = verify_account_template(&agent_payload.first_name, &token, &app_state.env);
    let email = SendEmail {
        to: claims.sub,
        from: app_state.env.from_email.clone(),
        subject: String::from("WELCOME, VERIFY YOUR ACCOUNT"),
        template,
    };

    let _ = email.send_email(&app_state.env).await;

    HttpResponse::Created()
        .json(json!({ "status": "success", "message": "Agent created successfully" }))
}

#[instrument(skip(body, app_state), fields(agent_email = %body.email))]
pub async fn login(body: web::Json<LoginBody>, app_state: web::Data<AppState>) -> impl Responder {
    let agent_payload = match body.validate() {
        Ok(_) => body.into_inner(),
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "error", "message": "Validation errors", "data": err }));
        }
    };

    let lowercase_email = agent_payload.email.to_lowercase();
    let check_agent = Agents::find()
        .filter(agents::Column::Email.eq(&lowercase_email))
        .one(&app_state.db)
        .await;

    let check_agent = match check_agent {
        Ok(Some(check_agent)) => check_agent,
        Ok(None) => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "error", "message": "Incorrect login details" }));
        }
        Err(err) => {
            error!("Database error while validating agent details ===> {}", err);
            return HttpResponse::InternalServerError().json(
                json!({ "status": "error", "message": "An error occured trying to validate agent" }),
            );
        }
    };

    let is_valid_password = validate_password(
        &check_agent.password,
        &agent_payload.password,
        &app_state.env.hash_key,
    );

    if !is_valid_password {
        return HttpResponse::BadRequest()
            .json(json!({ "status": "error",  "message": "Incorrect login details" }));
    }

    let now = Utc::now();
    let claims = TokenClaims {
        sub: check_agent.uuid.to_string(),
        auth_type: String::from("AGENT_AUTH"),
        exp: (now + Duration::minutes(60)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(app_state.env.app_key.as_ref()),
    ) {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to sign token ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "An unexpected error occured" }));
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Login successful",
        "data": {
            "token": token,
            "agent": check_agent.filter_response()
        }
    }))
}

#[instrument(skip(req_agent), fields(agent_id = %req_agent.uuid))]
pub async fn me(req_agent: web::ReqData<agents::Model>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Agent fetched successfully",
        "data": {
            "agent": req_agent.filter_response()
        }
    }))
}

#[instrument(skip(query, app_state))]
pub async fn verify_account(
    query: web::Query<VerifyAccountQuery>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let claims = match decode::<TokenClaims>(
        &query.token,
        &DecodingKey::from_secret(app_state.env.app_key.as_ref()),
        &Validation::default(),
    ) {
        Ok(decoded) => decoded.claims,
        Err(err) => {
            error!("Error decoding verification token ===> {}", err);
            return HttpResponse::BadRequest().json(
                json!({ "status": "error", "message": "Verification link is invalid or expired" }),
            );
        }
    };

    if claims.auth_type != "ACCOUNT_VERIFICATION" {
        return HttpResponse::BadRequest().json(
            json!({ "status": "error", "message": "Verification link is invalid or expired" }),
        );
    }

    let check_agent = Agents::find()
        .filter(agents::Column::Email.eq(&claims.sub))
        .one(&app_state.db)
        .await;

    let check_agent = match check_agent {
        Ok(Some(check_agent)) => check_agent,
        Ok(None) => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "error", "message": "Agent not found" }));
        }
        Err(err) => {
            error!("Database error while verifying agent ===> {}", err);
            return HttpResponse::InternalServerError().json(
                json!({ "status": "error", "message": "An error occured trying to verify agent" }),
            );
        }
    };

    let mut verified_agent: agents::ActiveModel = check_agent.into();
    verified_agent.is_verified = Set(1);
    verified_agent.updated_at = Set(Utc::now().naive_utc());

    if let Err(err) = verified_agent.update(&app_state.db).await {
        error!("Database error updating agent verification ===> {}", err);
        return HttpResponse::InternalServerError().json(
            json!({ "status": "error", "message": "An error occured trying to verify agent" }),
        );
    }

    HttpResponse::Ok()
        .json(json!({ "status": "success", "message": "Account verified successfully" }))
}
