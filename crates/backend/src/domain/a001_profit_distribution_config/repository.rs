use chrono::Utc;
use contracts::domain::a001_profit_distribution_config::aggregate::{
    DistributionConfigEntry, DistributionConfigId,
};
use contracts::domain::common::{AggregateId, EntityMetadata};
use contracts::enums::ProfitCategory;
use sea_orm::prelude::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

mod profit_distribution_config {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "a001_profit_distribution_config")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub owner_id: String,
        pub category: String,
        pub percentage: f64,
        pub description: Option<String>,
        pub is_active: bool,
        pub created_at: Option<chrono::DateTime<chrono::Utc>>,
        pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
        pub version: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

use profit_distribution_config::{ActiveModel, Column, Entity, Model};

impl TryFrom<Model> for DistributionConfigEntry {
    type Error = DbErr;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let category = ProfitCategory::from_code(&m.category)
            .ok_or_else(|| DbErr::Custom(format!("Unknown profit category: {}", m.category)))?;
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| DbErr::Custom(format!("Invalid config id {}: {}", m.id, e)))?;

        Ok(DistributionConfigEntry {
            id: DistributionConfigId::from_uuid(uuid),
            owner_id: m.owner_id,
            category,
            percentage: m.percentage,
            description: m.description,
            is_active: m.is_active,
            metadata: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
                updated_at: m.updated_at.unwrap_or_else(Utc::now),
                version: m.version,
            },
        })
    }
}

fn to_active_model(entry: &DistributionConfigEntry) -> ActiveModel {
    ActiveModel {
        id: Set(entry.id.as_string()),
        owner_id: Set(entry.owner_id.clone()),
        category: Set(entry.category.code().to_string()),
        percentage: Set(entry.percentage),
        description: Set(entry.description.clone()),
        is_active: Set(entry.is_active),
        created_at: Set(Some(entry.metadata.created_at)),
        updated_at: Set(Some(entry.metadata.updated_at)),
        version: Set(entry.metadata.version),
    }
}

fn into_entries(models: Vec<Model>) -> Result<Vec<DistributionConfigEntry>, DbErr> {
    let mut entries = models
        .into_iter()
        .map(DistributionConfigEntry::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.category.position());
    Ok(entries)
}

// ============================================================================
// Repository functions
// ============================================================================

/// Активные строки владельца в порядке реестра категорий
pub async fn list_active<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
) -> Result<Vec<DistributionConfigEntry>, DbErr> {
    let models = Entity::find()
        .filter(Column::OwnerId.eq(owner_id))
        .filter(Column::IsActive.eq(true))
        .all(db)
        .await?;
    into_entries(models)
}

pub async fn find_active_by_category<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    category: ProfitCategory,
) -> Result<Option<DistributionConfigEntry>, DbErr> {
    Entity::find()
        .filter(Column::OwnerId.eq(owner_id))
        .filter(Column::Category.eq(category.code()))
        .filter(Column::IsActive.eq(true))
        .one(db)
        .await?
        .map(DistributionConfigEntry::try_from)
        .transpose()
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    entry: &DistributionConfigEntry,
) -> Result<(), DbErr> {
    to_active_model(entry).insert(db).await?;
    Ok(())
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    entry: &DistributionConfigEntry,
) -> Result<(), DbErr> {
    to_active_model(entry).update(db).await?;
    Ok(())
}

/// Мягкое удаление строки
pub async fn deactivate<C: ConnectionTrait>(db: &C, id: &DistributionConfigId) -> Result<(), DbErr> {
    Entity::update_many()
        .col_expr(Column::IsActive, Expr::value(false))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.as_string()))
        .exec(db)
        .await?;
    Ok(())
}

/// Деактивировать все строки владельца, возвращает количество затронутых
pub async fn deactivate_all<C: ConnectionTrait>(db: &C, owner_id: &str) -> Result<u64, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::IsActive, Expr::value(false))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::OwnerId.eq(owner_id))
        .filter(Column::IsActive.eq(true))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
