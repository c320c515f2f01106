use aws_sdk_dynamodb::types::AttributeValue;
use chrono::NaiveDate;
use kernel::model::{
    id::{CustomerId, PropertyId, ReservationId},
    reservation::{Reservation, StayPeriod},
};
use shared::error::{AppError, AppResult};

use super::{get_number, get_string, parse_attr};
use crate::database::Item;

pub const ID: &str = "id";
pub const CUSTOMER_ID: &str = "customerId";
pub const PROPERTY_ID: &str = "propertyId";
pub const BOOKED_ROOMS_NUMBER: &str = "bookedRoomsNumber";
pub const BEGIN_DATE: &str = "beginDate";
pub const END_DATE: &str = "endDate";

const DATE_FORMAT: &str = "%Y-%m-%d";

// reservation テーブルの 1 行分。主キーは (customerId, id)
pub struct ReservationRow {
    pub id: String,
    pub customer_id: String,
    pub property_id: String,
    pub booked_rooms_number: i64,
    pub begin_date: String,
    pub end_date: String,
}

impl ReservationRow {
    pub fn key(customer_id: &CustomerId, reservation_id: ReservationId) -> Item {
        Item::from([
            (
                CUSTOMER_ID.to_string(),
                AttributeValue::S(customer_id.to_string()),
            ),
            (ID.to_string(), AttributeValue::S(reservation_id.to_string())),
        ])
    }
}

impl TryFrom<Item> for ReservationRow {
    type Error = AppError;

    fn try_from(item: Item) -> AppResult<Self> {
        Ok(Self {
            id: get_string(&item, ID)?,
            customer_id: get_string(&item, CUSTOMER_ID)?,
            property_id: get_string(&item, PROPERTY_ID)?,
            booked_rooms_number: get_number(&item, BOOKED_ROOMS_NUMBER)?.ok_or_else(|| {
                AppError::ConversionEntityError(format!("attribute {BOOKED_ROOMS_NUMBER} is missing"))
            })?,
            begin_date: get_string(&item, BEGIN_DATE)?,
            end_date: get_string(&item, END_DATE)?,
        })
    }
}

impl From<ReservationRow> for Item {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            id,
            customer_id,
            property_id,
            booked_rooms_number,
            begin_date,
            end_date,
        } = value;
        Item::from([
            (ID.to_string(), AttributeValue::S(id)),
            (CUSTOMER_ID.to_string(), AttributeValue::S(customer_id)),
            (PROPERTY_ID.to_string(), AttributeValue::S(property_id)),
            (
                BOOKED_ROOMS_NUMBER.to_string(),
                AttributeValue::N(booked_rooms_number.to_string()),
            ),
            (BEGIN_DATE.to_string(), AttributeValue::S(begin_date)),
            (END_DATE.to_string(), AttributeValue::S(end_date)),
        ])
    }
}

impl From<&Reservation> for ReservationRow {
    fn from(value: &Reservation) -> Self {
        Self {
            id: value.id.to_string(),
            customer_id: value.customer_id.to_string(),
            property_id: value.property_id.to_string(),
            booked_rooms_number: value.booked_rooms_number,
            begin_date: value.period.begin_date().format(DATE_FORMAT).to_string(),
            end_date: value.period.end_date().format(DATE_FORMAT).to_string(),
        }
    }
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> AppResult<Self> {
        let ReservationRow {
            id,
            customer_id,
            property_id,
            booked_rooms_number,
            begin_date,
            end_date,
        } = value;
        let begin_date: NaiveDate = parse_attr(BEGIN_DATE, &begin_date)?;
        let end_date: NaiveDate = parse_attr(END_DATE, &end_date)?;
        Ok(Reservation {
            id: parse_attr::<ReservationId>(ID, &id)?,
            property_id: parse_attr::<PropertyId>(PROPERTY_ID, &property_id)?,
            customer_id: CustomerId::new(customer_id),
            booked_rooms_number,
            period: StayPeriod::new(begin_date, end_date)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
        })
    }
}

// Item から直接ドメインモデルへ変換する
pub fn to_reservation(item: Item) -> AppResult<Reservation> {
    ReservationRow::try_from(item).and_then(Reservation::try_from)
}
