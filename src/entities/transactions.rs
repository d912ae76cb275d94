use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(unique)]
    pub id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    #[sea_orm(unique)]
    pub transaction_number: String,
    pub agent_id: String,
    pub customer_id: Option<String>,
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_email: Option<String>,
    pub sender_address: Option<String>,
    pub beneficiary_name: String,
    pub beneficiary_village: Option<String>,
    pub beneficiary_phone: Option<String>,
    pub beneficiary_bank_details: Option<String>,
    pub amount_nzd_cents: i64,
    pub fee_nzd_cents: i64,
    pub rate: Decimal,
    pub currency: String,
    pub total_paid_nzd_cents: i64,
    pub total_foreign_received: Decimal,
    pub dob: Date,
    pub verified_with_original_id: bool,
    pub source_of_funds: Option<String>,
    pub proof_of_address_type: Option<String>,
    /// Enhanced-AML block and ID documents, serialized JSON.
    pub compliance_meta: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agents::Entity",
        from = "Column::AgentId",
        to = "super::agents::Column::Uuid"
    )]
    Agents,
}

impl Related<super::agents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
