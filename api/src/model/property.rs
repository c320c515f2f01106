use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::PropertyId,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(range(min = 1))]
    pub total_rooms_number: Option<i64>,
}

impl From<CreatePropertyRequest> for CreateProperty {
    fn from(value: CreatePropertyRequest) -> Self {
        let CreatePropertyRequest {
            name,
            description,
            total_rooms_number,
        } = value;
        CreateProperty::new(name, description, total_rooms_number)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(range(min = 1))]
    pub total_rooms_number: Option<i64>,
}

#[derive(new)]
pub struct UpdatePropertyRequestWithId(PropertyId, UpdatePropertyRequest);

impl From<UpdatePropertyRequestWithId> for UpdateProperty {
    fn from(value: UpdatePropertyRequestWithId) -> Self {
        let UpdatePropertyRequestWithId(
            property_id,
            UpdatePropertyRequest {
                name,
                description,
                total_rooms_number,
            },
        ) = value;
        UpdateProperty::new(property_id, name, description, total_rooms_number)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: PropertyId,
    pub name: String,
    pub description: String,
    pub total_rooms_number: i64,
    pub created_date: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(value: Property) -> Self {
        let Property {
            id,
            name,
            description,
            total_rooms_number,
            created_at,
        } = value;
        Self {
            id,
            name,
            description,
            total_rooms_number,
            created_date: created_at,
        }
    }
}
