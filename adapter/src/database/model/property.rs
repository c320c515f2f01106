use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use kernel::model::{
    id::PropertyId,
    property::{Property, DEFAULT_TOTAL_ROOMS_NUMBER},
};
use shared::error::{AppError, AppResult};

use super::{get_number, get_optional_string, get_string, parse_attr};
use crate::database::Item;

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const CREATED_DATE: &str = "created_date";
pub const TOTAL_ROOMS_NUMBER: &str = "totalRoomsNumber";

pub struct PropertyRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_date: String,
    pub total_rooms_number: Option<i64>,
}

impl PropertyRow {
    pub fn key(property_id: PropertyId) -> Item {
        Item::from([(ID.to_string(), AttributeValue::S(property_id.to_string()))])
    }
}

impl TryFrom<Item> for PropertyRow {
    type Error = AppError;

    fn try_from(item: Item) -> AppResult<Self> {
        Ok(Self {
            id: get_string(&item, ID)?,
            name: get_optional_string(&item, NAME)?.unwrap_or_default(),
            description: get_optional_string(&item, DESCRIPTION)?.unwrap_or_default(),
            created_date: get_string(&item, CREATED_DATE)?,
            total_rooms_number: get_number(&item, TOTAL_ROOMS_NUMBER)?,
        })
    }
}

impl From<PropertyRow> for Item {
    fn from(value: PropertyRow) -> Self {
        let PropertyRow {
            id,
            name,
            description,
            created_date,
            total_rooms_number,
        } = value;
        let mut item = Item::from([
            (ID.to_string(), AttributeValue::S(id)),
            (NAME.to_string(), AttributeValue::S(name)),
            (DESCRIPTION.to_string(), AttributeValue::S(description)),
            (CREATED_DATE.to_string(), AttributeValue::S(created_date)),
        ]);
        if let Some(total) = total_rooms_number {
            item.insert(
                TOTAL_ROOMS_NUMBER.to_string(),
                AttributeValue::N(total.to_string()),
            );
        }
        item
    }
}

impl From<&Property> for PropertyRow {
    fn from(value: &Property) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            description: value.description.clone(),
            created_date: value.created_at.to_rfc3339(),
            total_rooms_number: Some(value.total_rooms_number),
        }
    }
}

impl TryFrom<PropertyRow> for Property {
    type Error = AppError;

    fn try_from(value: PropertyRow) -> AppResult<Self> {
        let PropertyRow {
            id,
            name,
            description,
            created_date,
            total_rooms_number,
        } = value;
        Ok(Property {
            id: parse_attr(ID, &id)?,
            name,
            description,
            total_rooms_number: total_rooms_number.unwrap_or(DEFAULT_TOTAL_ROOMS_NUMBER),
            created_at: parse_attr::<DateTime<Utc>>(CREATED_DATE, &created_date)?,
        })
    }
}

pub fn to_property(item: Item) -> AppResult<Property> {
    PropertyRow::try_from(item).and_then(Property::try_from)
}
