use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use sea_orm::*;
use serde_json::json;
use tracing::{error, instrument};

use crate::dto::transactions::ListTransactionsQuery;
use crate::entities::{agents, prelude::Transactions, transactions};
use crate::service::compliance::{self, TransactionRequest};
use crate::service::transaction_store::{TransactionStore, TransactionStoreTrait};
use crate::utils::{
    email_template::transaction_receipt_template,
    send_email::{spawn_email, SendEmail},
};
use crate::AppState;

#[instrument(
    skip(body, req_agent, app_state),
    fields(agent_id = %req_agent.uuid, amount_nzd_cents = %body.amount_nzd_cents)
)]
pub async fn create_transaction(
    body: web::Json<TransactionRequest>,
    req_agent: web::ReqData<agents::Model>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    if req_agent.is_verified != 1 {
        return HttpResponse::BadRequest().json(
            json!({ "status": "error",  "message": "Please verify your account before taking this action" }),
        );
    }

    let request = match compliance::validate(body.into_inner(), Utc::now()) {
        Ok(request) => request,
        Err(details) => {
            return HttpResponse::BadRequest().json(json!({
                "error": "Transaction failed compliance validation",
                "details": details
            }));
        }
    };

    let txn = match app_state.db.begin().await {
        Ok(txn) => txn,
        Err(err) => {
            error!("Failed to start a DB transaction ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "An unexpected error occured" }));
        }
    };

    let store = TransactionStore {
        agent_id: req_agent.uuid.clone(),
        request,
    };

    let saved = match store.save_with_number(&txn).await {
        Ok(saved) => saved,
        Err(err) => {
            error!("DB error saving transaction ===> {}", err);
            let _ = txn.rollback().await;
            return HttpResponse::InternalServerError().json(
                json!({ "status": "error", "message": "An error occured trying to save transaction" }),
            );
        }
    };

    if let Err(err) = txn.commit().await {
        error!("DB error committing transaction ===> {}", err);
        return HttpResponse::InternalServerError().json(
            json!({ "status": "error", "message": "An error occured trying to save transaction" }),
        );
    }

    if let Some(sender_email) = saved.sender_email.clone().filter(|email| !email.is_empty()) {
        let email = SendEmail {
            to: sender_email,
            from: app_state.env.from_email.clone(),
            subject: format!("TRANSFER RECEIPT {}", saved.transaction_number),
            template: transaction_receipt_template(&saved),
        };

        spawn_email(email, app_state.env.clone());
    }

    HttpResponse::Created().json(json!({
        "status": "success",
        "message": "Transaction created successfully",
        "data": { "transaction": saved }
    }))
}

#[instrument(skip(query, req_agent, app_state), fields(agent_id = %req_agent.uuid))]
pub async fn list_transactions(
    query: web::Query<ListTransactionsQuery>,
    req_agent: web::ReqData<agents::Model>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let mut finder = Transactions::find().order_by_desc(transactions::Column::CreatedAt);

    if let Some(currency) = &query.currency {
        finder = finder.filter(transactions::Column::Currency.eq(currency));
    }

    let transactions = finder
        .limit(query.limit.unwrap_or(50))
        .all(&app_state.db)
        .await;

    let transactions = match transactions {
        Ok(transactions) => transactions,
        Err(err) => {
            error!("Error retrieving transactions ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "Failed to fetch transactions" }));
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Fetched transactions",
        "data": { "transactions": transactions }
    }))
}

#[instrument(skip(path, req_agent, app_state), fields(agent_id = %req_agent.uuid))]
pub async fn get_transaction(
    path: web::Path<String>,
    req_agent: web::ReqData<agents::Model>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let identifier = path.into_inner();

    // Agents look transactions up either by uuid or by the printed number
    let transaction = Transactions::find()
        .filter(
            Condition::any()
                .add(transactions::Column::Uuid.eq(&identifier))
                .add(transactions::Column::TransactionNumber.eq(&identifier)),
        )
        .one(&app_state.db)
        .await;

    let transaction = match transaction {
        Ok(Some(transaction)) => transaction,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(json!({ "status": "error", "message": "Transaction not found" }));
        }
        Err(err) => {
            error!("Error retrieving transaction ===> {}", err);
            return HttpResponse::InternalServerError()
                .json(json!({ "status": "error", "message": "Failed to fetch transaction" }));
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Fetched transaction",
        "data": { "transaction": transaction }
    }))
}
