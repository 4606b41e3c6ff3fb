use sea_orm::entity::prelude::*;

/// `theme` 与 `contributors` 以 JSON 数组文本存储；旧数据可能为 NULL
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "inspirations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_base64: Option<String>,
    pub country: String,
    pub city: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub theme: Option<String>,
    pub cost_indicator: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub vibe_notes: Option<String>,
    pub added_by: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contributors: Option<String>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
