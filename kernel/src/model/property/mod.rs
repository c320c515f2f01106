use crate::model::id::PropertyId;
use chrono::{DateTime, Utc};

pub mod event;

// 部屋数が登録されていない物件は 1 部屋として扱う
pub const DEFAULT_TOTAL_ROOMS_NUMBER: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub description: String,
    pub total_rooms_number: i64,
    pub created_at: DateTime<Utc>,
}
