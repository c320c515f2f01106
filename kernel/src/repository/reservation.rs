use crate::model::{
    id::CustomerId,
    reservation::{
        event::{CreateReservation, DeleteReservation},
        Reservation,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 空室判定を通過した場合のみ予約を作成する
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    // 予約者本人の、まだ開始していない予約だけを削除できる
    async fn delete(&self, event: DeleteReservation) -> AppResult<Reservation>;
    // 利用者 ID に紐づく予約をすべて取得する
    async fn find_by_customer_id(&self, customer_id: &CustomerId) -> AppResult<Vec<Reservation>>;
}
