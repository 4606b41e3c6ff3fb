use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 inspirations 表
        let backend = manager.get_database_backend();
        manager.create_table(inspirations_table(backend)).await?;

        // 列表查询按创建时间倒序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inspirations_created_at")
                    .table(Inspiration::Table)
                    .col(Inspiration::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // 国家 / 城市分组与过滤
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inspirations_country_city")
                    .table(Inspiration::Table)
                    .col(Inspiration::Country)
                    .col(Inspiration::City)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_inspirations_country_city")
                    .table(Inspiration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_inspirations_created_at")
                    .table(Inspiration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Inspiration::Table).to_owned())
            .await
    }
}

/// inspirations 表结构
///
/// MySQL 的 TEXT 上限为 64 KB，图片列改用 LONGTEXT。
/// country/city 参与联合索引，保留 varchar(255)。
fn inspirations_table(backend: DatabaseBackend) -> TableCreateStatement {
    let mut image_base64 = ColumnDef::new(Inspiration::ImageBase64);
    match backend {
        DatabaseBackend::MySql => image_base64.custom("LONGTEXT"),
        _ => image_base64.text(),
    };
    image_base64.null();

    Table::create()
        .table(Inspiration::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Inspiration::Id)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Inspiration::Url).text().not_null())
        .col(ColumnDef::new(Inspiration::Title).text().null())
        .col(image_base64)
        .col(ColumnDef::new(Inspiration::Country).string().not_null())
        .col(ColumnDef::new(Inspiration::City).string().not_null())
        .col(ColumnDef::new(Inspiration::Kind).string().not_null())
        .col(ColumnDef::new(Inspiration::Theme).text().null())
        .col(ColumnDef::new(Inspiration::CostIndicator).string().null())
        .col(ColumnDef::new(Inspiration::VibeNotes).text().null())
        .col(ColumnDef::new(Inspiration::AddedBy).text().null())
        .col(ColumnDef::new(Inspiration::Contributors).text().null())
        .col(
            ColumnDef::new(Inspiration::CreatedAt)
                .timestamp_with_time_zone()
                .null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Inspiration {
    #[sea_orm(iden = "inspirations")]
    Table,
    Id,
    Url,
    Title,
    ImageBase64,
    Country,
    City,
    #[sea_orm(iden = "type")]
    Kind,
    Theme,
    CostIndicator,
    VibeNotes,
    AddedBy,
    Contributors,
    CreatedAt,
}
