use crate::model::{
    id::{CustomerId, PropertyId, ReservationId},
    reservation::StayPeriod,
};
use chrono::NaiveDate;
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateReservation {
    pub property_id: PropertyId,
    pub customer_id: CustomerId,
    pub booked_rooms_number: i64,
    pub period: StayPeriod,
}

#[derive(new, Debug)]
pub struct DeleteReservation {
    pub reservation_id: ReservationId,
    pub requested_by: CustomerId,
    // 削除可否の判定に使う「今日」
    pub requested_on: NaiveDate,
}
