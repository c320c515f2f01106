use crate::model::{
    id::PropertyId,
    reservation::{Admission, AvailableRooms, StayPeriod},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    // 指定期間の空き部屋数を返す。過去の開始日は受け付けない
    async fn available_rooms_count(
        &self,
        property_id: PropertyId,
        period: StayPeriod,
        today: NaiveDate,
    ) -> AppResult<AvailableRooms>;
    // 予約作成前の受付判定
    async fn check_admission(
        &self,
        property_id: PropertyId,
        period: StayPeriod,
        requested_rooms: i64,
    ) -> AppResult<Admission>;
}
