use chrono::Utc;
use contracts::domain::a002_profit_distribution::aggregate::{
    DistributionRecord, DistributionRecordId,
};
use contracts::domain::common::{AggregateId, EntityMetadata};
use contracts::shared::Period;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

mod profit_distribution {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "a002_profit_distribution")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub owner_id: String,
        pub month: i32,
        pub year: i32,
        pub total_revenue: f64,
        pub total_costs: f64,
        pub total_profit: f64,
        pub pro_labore_amount: Option<f64>,
        pub equipment_reserve_amount: Option<f64>,
        pub emergency_reserve_amount: Option<f64>,
        pub investment_amount: Option<f64>,
        pub created_at: Option<chrono::DateTime<chrono::Utc>>,
        pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
        pub version: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

use profit_distribution::{ActiveModel, Column, Entity, Model};

impl TryFrom<Model> for DistributionRecord {
    type Error = DbErr;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| DbErr::Custom(format!("Invalid distribution id {}: {}", m.id, e)))?;
        let month = u32::try_from(m.month)
            .map_err(|_| DbErr::Custom(format!("Invalid month {} in {}", m.month, m.id)))?;

        Ok(DistributionRecord {
            id: DistributionRecordId::from_uuid(uuid),
            owner_id: m.owner_id,
            period: Period { year: m.year, month },
            total_revenue: m.total_revenue,
            total_costs: m.total_costs,
            total_profit: m.total_profit,
            pro_labore_amount: m.pro_labore_amount,
            equipment_reserve_amount: m.equipment_reserve_amount,
            emergency_reserve_amount: m.emergency_reserve_amount,
            investment_amount: m.investment_amount,
            metadata: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
                updated_at: m.updated_at.unwrap_or_else(Utc::now),
                version: m.version,
            },
        })
    }
}

// ============================================================================
// Repository functions
// ============================================================================

/// Распределения владельца, новые периоды первыми
pub async fn list_by_owner<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    year: Option<i32>,
) -> Result<Vec<DistributionRecord>, DbErr> {
    let mut query = Entity::find().filter(Column::OwnerId.eq(owner_id));
    if let Some(year) = year {
        query = query.filter(Column::Year.eq(year));
    }
    query
        .order_by_desc(Column::Year)
        .order_by_desc(Column::Month)
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?
        .into_iter()
        .map(DistributionRecord::try_from)
        .collect()
}

/// Запись владельца по id; чужая запись не находится
pub async fn get_by_id<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    id: &DistributionRecordId,
) -> Result<Option<DistributionRecord>, DbErr> {
    Entity::find_by_id(id.as_string())
        .filter(Column::OwnerId.eq(owner_id))
        .one(db)
        .await?
        .map(DistributionRecord::try_from)
        .transpose()
}

pub async fn insert<C: ConnectionTrait>(db: &C, record: &DistributionRecord) -> Result<(), DbErr> {
    let active_model = ActiveModel {
        id: Set(record.id.as_string()),
        owner_id: Set(record.owner_id.clone()),
        month: Set(record.period.month as i32),
        year: Set(record.period.year),
        total_revenue: Set(record.total_revenue),
        total_costs: Set(record.total_costs),
        total_profit: Set(record.total_profit),
        pro_labore_amount: Set(record.pro_labore_amount),
        equipment_reserve_amount: Set(record.equipment_reserve_amount),
        emergency_reserve_amount: Set(record.emergency_reserve_amount),
        investment_amount: Set(record.investment_amount),
        created_at: Set(Some(record.metadata.created_at)),
        updated_at: Set(Some(record.metadata.updated_at)),
        version: Set(record.metadata.version),
    };
    active_model.insert(db).await?;
    Ok(())
}

/// Удаление записи владельца целиком, возвращает количество удаленных строк
pub async fn delete<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    id: &DistributionRecordId,
) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id.as_string()))
        .filter(Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
