use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::PropertyId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::parse_path_id;
use crate::{
    extractor::AuthorizedUser,
    model::property::{
        CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest,
        UpdatePropertyRequestWithId,
    },
};

const PROPERTY_NOT_FOUND: &str = "Property not found";

pub async fn register_property(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    req: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> AppResult<Json<PropertyResponse>> {
    let Json(req) = req.map_err(|e| AppError::BadRequest(e.body_text()))?;
    req.validate(&())?;

    registry
        .property_repository()
        .create(req.into())
        .await
        .map(PropertyResponse::from)
        .map(Json)
}

pub async fn show_property_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    registry
        .property_repository()
        .find_all()
        .await
        .map(|v| v.into_iter().map(PropertyResponse::from).collect())
        .map(Json)
}

pub async fn show_property(
    Path(property_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PropertyResponse>> {
    let property_id: PropertyId = parse_path_id(&property_id, PROPERTY_NOT_FOUND)?;
    registry
        .property_repository()
        .find_by_id(property_id)
        .await
        .and_then(|p| match p {
            Some(p) => Ok(Json(p.into())),
            None => Err(AppError::EntityNotFound(PROPERTY_NOT_FOUND.into())),
        })
}

pub async fn update_property(
    _user: AuthorizedUser,
    Path(property_id): Path<String>,
    State(registry): State<AppRegistry>,
    req: Result<Json<UpdatePropertyRequest>, JsonRejection>,
) -> AppResult<Json<PropertyResponse>> {
    let property_id: PropertyId = parse_path_id(&property_id, PROPERTY_NOT_FOUND)?;
    let Json(req) = req.map_err(|e| AppError::BadRequest(e.body_text()))?;
    req.validate(&())?;

    let update_property = UpdatePropertyRequestWithId::new(property_id, req);
    registry
        .property_repository()
        .update(update_property.into())
        .await
        .map(PropertyResponse::from)
        .map(Json)
}
