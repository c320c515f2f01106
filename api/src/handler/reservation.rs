use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::{PropertyId, ReservationId},
    reservation::{event::DeleteReservation, StayPeriod},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::parse_path_id;
use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        AvailableCountQuery, AvailableRoomsResponse, CreateReservationRequest,
        CreateReservationRequestWithCustomer, ReservationResponse,
    },
};

pub async fn create_reservation(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    req: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> AppResult<Json<ReservationResponse>> {
    let Json(req) = req.map_err(|e| AppError::BadRequest(e.body_text()))?;
    req.validate(&())?;

    let event = CreateReservationRequestWithCustomer::new(user.id(), req).try_into()?;
    registry
        .reservation_repository()
        .create(event)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn delete_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let reservation_id: ReservationId = parse_path_id(&reservation_id, "Reservation not found")?;
    // 開始日判定は UTC の日付で行う
    let today = Utc::now().date_naive();
    registry
        .reservation_repository()
        .delete(DeleteReservation::new(reservation_id, user.id(), today))
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn show_customer_reservations(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    registry
        .reservation_repository()
        .find_by_customer_id(&user.id())
        .await
        .map(|v| v.into_iter().map(ReservationResponse::from).collect())
        .map(Json)
}

pub async fn show_available_count(
    Path(property_id): Path<String>,
    State(registry): State<AppRegistry>,
    query: Result<Query<AvailableCountQuery>, QueryRejection>,
) -> AppResult<Json<AvailableRoomsResponse>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let period = StayPeriod::try_from(query)?;
    let property_id: PropertyId = parse_path_id(&property_id, "Property not found")?;

    registry
        .availability_repository()
        .available_rooms_count(property_id, period, Utc::now().date_naive())
        .await
        .map(AvailableRoomsResponse::from)
        .map(Json)
}
