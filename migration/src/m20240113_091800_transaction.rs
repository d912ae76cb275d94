use sea_orm_migration::prelude::*;

use super::m20240112_101500_agent::Agents;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Uuid)
                            .string()
                            .not_null()
                            .unique_key()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::TransactionNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Transactions::AgentId).string().not_null())
                    .col(ColumnDef::new(Transactions::CustomerId).string().null())
                    .col(ColumnDef::new(Transactions::SenderName).string().not_null())
                    .col(ColumnDef::new(Transactions::SenderPhone).string().not_null())
                    .col(ColumnDef::new(Transactions::SenderEmail).string().null())
                    .col(ColumnDef::new(Transactions::SenderAddress).string().null())
                    .col(
                        ColumnDef::new(Transactions::BeneficiaryName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::BeneficiaryVillage)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::BeneficiaryPhone)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::BeneficiaryBankDetails)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::AmountNzdCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Transactions::FeeNzdCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Transactions::Rate)
                            .decimal_len(18, 6)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Currency).string_len(3).not_null())
                    .col(
                        ColumnDef::new(Transactions::TotalPaidNzdCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Transactions::TotalForeignReceived)
                            .decimal_len(18, 2)
                            .not_null()
                            .default(0.00),
                    )
                    .col(ColumnDef::new(Transactions::Dob).date().not_null())
                    .col(
                        ColumnDef::new(Transactions::VerifiedWithOriginalId)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Transactions::SourceOfFunds).string().null())
                    .col(
                        ColumnDef::new(Transactions::ProofOfAddressType)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Transactions::ComplianceMeta).text().null())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::UpdatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::DeletedAt).timestamp().null())
                    .index(
                        Index::create()
                            .name("transactions_transaction_number_index")
                            .col(Transactions::TransactionNumber),
                    )
                    .index(
                        Index::create()
                            .name("transactions_agent_id_index")
                            .col(Transactions::AgentId),
                    )
                    .index(
                        Index::create()
                            .name("transactions_amount_nzd_cents_index")
                            .col(Transactions::AmountNzdCents),
                    )
                    .index(
                        Index::create()
                            .name("transactions_currency_index")
                            .col(Transactions::Currency),
                    )
                    .index(
                        Index::create()
                            .name("transactions_sender_phone_index")
                            .col(Transactions::SenderPhone),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("transactions_agent_id_foreign")
                            .from(Transactions::Table, Transactions::AgentId)
                            .to(Agents::Table, Agents::Uuid),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transactions {
    Table,
    Id,
    Uuid,
    TransactionNumber,
    AgentId,
    CustomerId,
    SenderName,
    SenderPhone,
    SenderEmail,
    SenderAddress,
    BeneficiaryName,
    BeneficiaryVillage,
    BeneficiaryPhone,
    BeneficiaryBankDetails,
    AmountNzdCents,
    FeeNzdCents,
    Rate,
    Currency,
    TotalPaidNzdCents,
    TotalForeignReceived,
    Dob,
    VerifiedWithOriginalId,
    SourceOfFunds,
    ProofOfAddressType,
    ComplianceMeta,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
