use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Agents::Uuid)
                            .string()
                            .not_null()
                            .unique_key()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Agents::FirstName).string().not_null())
                    .col(ColumnDef::new(Agents::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Agents::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Agents::Phone).string().null())
                    .col(ColumnDef::new(Agents::Branch).string().null())
                    .col(
                        ColumnDef::new(Agents::Role)
                            .string()
                            .not_null()
                            .default("agent"),
                    )
                    .col(ColumnDef::new(Agents::Password).string().not_null())
                    .col(
                        ColumnDef::new(Agents::IsVerified)
                            .tiny_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Agents::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Agents::UpdatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(ColumnDef::new(Agents::DeletedAt).timestamp().null())
                    .index(Index::create().name("agents_email_index").col(Agents::Email))
                    .index(Index::create().name("agents_role_index").col(Agents::Role))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Agents {
    Table,
    Id,
    Uuid,
    FirstName,
    LastName,
    Email,
    Phone,
    Branch,
    Role,
    Password,
    IsVerified,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
