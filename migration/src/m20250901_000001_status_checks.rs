use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusCheck::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusCheck::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StatusCheck::Id)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StatusCheck::ClientName).string().not_null())
                    .col(
                        ColumnDef::new(StatusCheck::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 列表按写入时间返回
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_status_checks_timestamp")
                    .table(StatusCheck::Table)
                    .col(StatusCheck::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_status_checks_timestamp")
                    .table(StatusCheck::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StatusCheck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatusCheck {
    #[sea_orm(iden = "status_checks")]
    Table,
    Seq,
    Id,
    ClientName,
    Timestamp,
}
