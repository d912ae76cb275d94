use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::*;
use serde_json::json;
use tracing::{error, instrument};
use validator::Validate;

use crate::dto::settings::UpdateRateBody;
use crate::entities::{agents, prelude::Settings, settings};
use crate::service::compliance::CURRENCIES;
use crate::AppState;

#[instrument(skip(req_agent, app_state), fields(agent_id = %req_agent.uuid))]
pub async fn get_rates(
    req_agent: web::ReqData<agents::Model>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let rates = Settings::find()
        .order_by_asc(settings::Column::Currency)
        .all(&app_state.db)
        .await;

    let rates = match rates {
        Ok(rates) => rates,
        Err(err) => {
            error!("Error retrieving rates ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "Failed to fetch rates" }));
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Fetched rates",
        "data": { "rates": rates }
    }))
}

#[instrument(skip(body, req_agent, app_state), fields(agent_id = %req_agent.uuid, currency = %body.currency))]
pub async fn update_rate(
    body: web::Json<UpdateRateBody>,
    req_agent: web::ReqData<agents::Model>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let rate_payload = match body.validate() {
        Ok(_) => body.into_inner(),
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "error", "message": "Validation errors", "data": err }));
        }
    };

    if !req_agent.is_admin() {
        return HttpResponse::Forbidden()
            .json(json!({ "status": "error", "message": "Only admins can update rates" }));
    }

    if !CURRENCIES.contains(&rate_payload.currency.as_str()) {
        let msg = format!("Currency must be one of: {}", CURRENCIES.join(", "));
        return HttpResponse::BadRequest()
            .json(json!({ "status": "error", "message": msg }));
    }

    if rate_payload.rate <= Decimal::ZERO {
        return HttpResponse::BadRequest()
            .json(json!({ "status": "error", "message": "Rate must be greater than zero" }));
    }

    let existing = Settings::find()
        .filter(settings::Column::Currency.eq(&rate_payload.currency))
        .one(&app_state.db)
        .await;

    let existing = match existing {
        Ok(existing) => existing,
        Err(err) => {
            error!("Error fetching rate setting ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "Failed to update rate" }));
        }
    };

    let saved = match existing {
        Some(existing) => {
            let mut updated: settings::ActiveModel = existing.into();
            updated.rate = Set(rate_payload.rate);
            updated.fee_nzd_cents = Set(rate_payload.fee_nzd_cents);
            updated.updated_by = Set(Some(req_agent.uuid.clone()));
            updated.updated_at = Set(Utc::now().naive_utc());
            updated.update(&app_state.db).await
        }
        None => {
            let new_setting = settings::ActiveModel {
                currency: Set(rate_payload.currency.clone()),
                rate: Set(rate_payload.rate),
                fee_nzd_cents: Set(rate_payload.fee_nzd_cents),
                updated_by: Set(Some(req_agent.uuid.clone())),
                ..Default::default()
            };
            new_setting.insert(&app_state.db).await
        }
    };

    let saved = match saved {
        Ok(saved) => saved,
        Err(err) => {
            error!("Error saving rate setting ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "Failed to update rate" }));
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Rate updated successfully",
        "data": { "rate": saved }
    }))
}
