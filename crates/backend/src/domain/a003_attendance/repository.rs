use chrono::{NaiveDate, Utc};
use contracts::domain::a003_attendance::aggregate::{Attendance, AttendanceId};
use contracts::domain::common::{AggregateId, EntityMetadata};
use contracts::enums::{PaymentMethod, PaymentStatus};
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

mod attendance {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "a003_attendance")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub owner_id: String,
        /// YYYY-MM-DD
        pub date: String,
        pub value: f64,
        pub discount: f64,
        pub product_cost: f64,
        pub payment_method: Option<String>,
        pub payment_status: String,
        pub observations: Option<String>,
        pub created_at: Option<chrono::DateTime<chrono::Utc>>,
        pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
        pub version: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

use attendance::{ActiveModel, Column, Entity, Model};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl TryFrom<Model> for Attendance {
    type Error = DbErr;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| DbErr::Custom(format!("Invalid attendance id {}: {}", m.id, e)))?;
        let date = NaiveDate::parse_from_str(&m.date, DATE_FORMAT)
            .map_err(|e| DbErr::Custom(format!("Invalid attendance date {}: {}", m.date, e)))?;
        let payment_method = match m.payment_method.as_deref() {
            Some(code) => Some(PaymentMethod::from_code(code).ok_or_else(|| {
                DbErr::Custom(format!("Unknown payment method: {}", code))
            })?),
            None => None,
        };
        let payment_status = PaymentStatus::from_code(&m.payment_status).ok_or_else(|| {
            DbErr::Custom(format!("Unknown payment status: {}", m.payment_status))
        })?;

        Ok(Attendance {
            id: AttendanceId::from_uuid(uuid),
            owner_id: m.owner_id,
            date,
            value: m.value,
            discount: m.discount,
            product_cost: m.product_cost,
            payment_method,
            payment_status,
            observations: m.observations,
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

/// Услуги владельца за диапазон дат (границы включительно), новые первыми
pub async fn list_by_owner<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> Result<Vec<Attendance>, DbErr> {
    let mut query = Entity::find().filter(Column::OwnerId.eq(owner_id));
    if let Some(from) = date_from {
        query = query.filter(Column::Date.gte(date_to_db(from)));
    }
    if let Some(to) = date_to {
        query = query.filter(Column::Date.lte(date_to_db(to)));
    }
    query
        .order_by_desc(Column::Date)
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?
        .into_iter()
        .map(Attendance::try_from)
        .collect()
}

pub async fn get_by_id<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    id: &AttendanceId,
) -> Result<Option<Attendance>, DbErr> {
    Entity::find_by_id(id.as_string())
        .filter(Column::OwnerId.eq(owner_id))
        .one(db)
        .await?
        .map(Attendance::try_from)
        .transpose()
}

pub async fn insert<C: ConnectionTrait>(db: &C, attendance: &Attendance) -> Result<(), DbErr> {
    let active_model = ActiveModel {
        id: Set(attendance.id.as_string()),
        owner_id: Set(attendance.owner_id.clone()),
        date: Set(date_to_db(attendance.date)),
        value: Set(attendance.value),
        discount: Set(attendance.discount),
        product_cost: Set(attendance.product_cost),
        payment_method: Set(attendance.payment_method.map(|m| m.code().to_string())),
        payment_status: Set(attendance.payment_status.code().to_string()),
        observations: Set(attendance.observations.clone()),
        created_at: Set(Some(attendance.metadata.created_at)),
        updated_at: Set(Some(attendance.metadata.updated_at)),
        version: Set(attendance.metadata.version),
    };
    active_model.insert(db).await?;
    Ok(())
}

/// Сменить статус оплаты, возвращает количество обновленных строк
pub async fn update_payment_status<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    id: &AttendanceId,
    status: PaymentStatus,
) -> Result<u64, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::PaymentStatus, Expr::value(status.code()))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .col_expr(Column::Version, Expr::col(Column::Version).add(1))
        .filter(Column::Id.eq(id.as_string()))
        .filter(Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete<C: ConnectionTrait>(
    db: &C,
    owner_id: &str,
    id: &AttendanceId,
) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id.as_string()))
        .filter(Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
