use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{CustomerId, PropertyId, ReservationId},
    reservation::{event::CreateReservation, AvailableRooms, Reservation, StayPeriod},
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::calendar_date;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(range(min = 1))]
    pub booked_rooms_number: i64,
    #[garde(skip)]
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub begin_date: NaiveDate,
    #[garde(skip)]
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub end_date: NaiveDate,
}

#[derive(new)]
pub struct CreateReservationRequestWithCustomer(CustomerId, CreateReservationRequest);

impl TryFrom<CreateReservationRequestWithCustomer> for CreateReservation {
    type Error = AppError;

    fn try_from(value: CreateReservationRequestWithCustomer) -> Result<Self, Self::Error> {
        let CreateReservationRequestWithCustomer(
            customer_id,
            CreateReservationRequest {
                property_id,
                booked_rooms_number,
                begin_date,
                end_date,
            },
        ) = value;
        Ok(CreateReservation::new(
            property_id,
            customer_id,
            booked_rooms_number,
            StayPeriod::new(begin_date, end_date)?,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCountQuery {
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub begin_date: NaiveDate,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub end_date: NaiveDate,
}

impl TryFrom<AvailableCountQuery> for StayPeriod {
    type Error = AppError;

    fn try_from(value: AvailableCountQuery) -> Result<Self, Self::Error> {
        StayPeriod::new(value.begin_date, value.end_date)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub property_id: PropertyId,
    pub customer_id: CustomerId,
    pub booked_rooms_number: i64,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            property_id,
            customer_id,
            booked_rooms_number,
            period,
        } = value;
        Self {
            id,
            property_id,
            customer_id,
            booked_rooms_number,
            begin_date: period.begin_date(),
            end_date: period.end_date(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableRoomsResponse {
    pub available_rooms_count: i64,
}

impl From<AvailableRooms> for AvailableRoomsResponse {
    fn from(value: AvailableRooms) -> Self {
        Self {
            available_rooms_count: value.available_rooms_count,
        }
    }
}
