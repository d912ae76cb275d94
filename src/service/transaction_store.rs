use async_trait::async_trait;
use sea_orm::*;
use serde_json::json;
use uuid::Uuid;

use crate::entities::transactions;
use crate::service::compliance::TransactionRequest;
use crate::utils::helpers::generate_transaction_number;

/// A compliance-accepted request on its way into storage. The printed number
/// is derived from the row's auto-increment id, so concurrent creates can
/// never be handed the same number.
pub struct TransactionStore {
    pub agent_id: String,
    pub request: TransactionRequest,
}

#[async_trait]
pub trait TransactionStoreTrait {
    async fn save_with_number(
        self,
        txn: &DatabaseTransaction,
    ) -> Result<transactions::Model, DbErr>;
}

#[async_trait]
impl TransactionStoreTrait for TransactionStore {
    async fn save_with_number(
        self,
        txn: &DatabaseTransaction,
    ) -> Result<transactions::Model, DbErr> {
        let request = self.request;
        let compliance_meta = json!({
            "sourceOfFundsDetails": request.source_of_funds_details,
            "bankAccountDetails": request.bank_account_details,
            "proofDocumentsProvided": request.proof_documents_provided,
            "senderStreetAddress": request.sender_street_address,
            "senderSuburb": request.sender_suburb,
            "senderCity": request.sender_city,
            "senderPostcode": request.sender_postcode,
            "senderHomePhone": request.sender_home_phone,
            "senderMobilePhone": request.sender_mobile_phone,
            "employerName": request.employer_name,
            "employerAddress": request.employer_address,
            "employerPhone": request.employer_phone,
            "reasonForRemittance": request.reason_for_remittance,
            "relationshipToBeneficiary": request.relationship_to_beneficiary,
            "idDocumentPrimary": request.id_document_primary,
            "idDocumentSecondary": request.id_document_secondary,
        })
        .to_string();

        let uuid = Uuid::new_v4().to_string();

        let new_transaction = transactions::ActiveModel {
            uuid: Set(uuid.clone()),
            // Placeholder until the row id exists; replaced below, and unique
            // so concurrent inserts never trip the transaction_number key
            transaction_number: Set(uuid),
            agent_id: Set(self.agent_id),
            customer_id: Set(request.customer_id),
            sender_name: Set(request.sender_name.unwrap_or_default()),
            sender_phone: Set(request.sender_phone.unwrap_or_default()),
            sender_email: Set(request.sender_email),
            sender_address: Set(request.sender_address),
            beneficiary_name: Set(request.beneficiary_name.unwrap_or_default()),
            beneficiary_village: Set(request.beneficiary_village),
            beneficiary_phone: Set(request.beneficiary_phone),
            beneficiary_bank_details: Set(request.beneficiary_bank_details),
            amount_nzd_cents: Set(request.amount_nzd_cents),
            fee_nzd_cents: Set(request.fee_nzd_cents),
            rate: Set(request.rate),
            currency: Set(request.currency),
            total_paid_nzd_cents: Set(request.total_paid_nzd_cents),
            total_foreign_received: Set(request.total_foreign_received),
            dob: Set(request.dob.unwrap_or_default()),
            verified_with_original_id: Set(request.verified_with_original_id),
            source_of_funds: Set(request.source_of_funds),
            proof_of_address_type: Set(request.proof_of_address_type),
            compliance_meta: Set(Some(compliance_meta)),
            ..Default::default()
        };

        let saved = new_transaction.insert(txn).await?;

        let row_id = saved.id;
        let mut numbered: transactions::ActiveModel = saved.into();
        numbered.transaction_number = Set(generate_transaction_number(row_id as u64));

        let saved = numbered.update(txn).await?;

        Ok(saved)
    }
}
