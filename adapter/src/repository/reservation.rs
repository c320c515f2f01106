use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use kernel::model::{
    id::{CustomerId, PropertyId, ReservationId},
    reservation::{
        event::{CreateReservation, DeleteReservation},
        Reservation,
    },
};
use kernel::repository::{
    availability::AvailabilityRepository, reservation::ReservationRepository,
};
use shared::error::{AppError, AppResult};

use super::availability::AvailabilityRepositoryImpl;
use crate::database::{
    model::reservation::{to_reservation, ReservationRow, CUSTOMER_ID, PROPERTY_ID},
    query::{query_all, QueryParams},
    StoreClient,
};

pub struct ReservationRepositoryImpl {
    db: StoreClient,
    availability: AvailabilityRepositoryImpl,
}

impl ReservationRepositoryImpl {
    pub fn new(db: StoreClient) -> Self {
        let availability = AvailabilityRepositoryImpl::new(db.clone());
        Self { db, availability }
    }
}

// 物件 ID のセカンダリインデックスを使って、その物件の予約を全ページ分取得する
pub(crate) async fn find_reservations_by_property(
    db: &StoreClient,
    property_id: PropertyId,
) -> AppResult<Vec<Reservation>> {
    let cfg = db.config();
    let params = QueryParams::new(
        &cfg.reservation_table,
        PROPERTY_ID,
        AttributeValue::S(property_id.to_string()),
        cfg.page_size,
    )
    .with_index(&cfg.reservation_by_property_index);

    query_all(db.inner_ref(), params)
        .await?
        .into_iter()
        .map(to_reservation)
        .collect()
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        // 空室の確認と書き込みは同一トランザクションではない。
        // 同時に作成された予約どうしが互いの分を見落とす可能性がある
        let admission = self
            .availability
            .check_admission(event.property_id, event.period, event.booked_rooms_number)
            .await?;

        if !admission.admit {
            return Err(AppError::CapacityExceeded {
                available: admission.available_rooms_count,
            });
        }

        let reservation = Reservation {
            id: ReservationId::new(),
            property_id: event.property_id,
            customer_id: event.customer_id,
            booked_rooms_number: event.booked_rooms_number,
            period: event.period,
        };

        self.db
            .inner_ref()
            .put_item(
                &self.db.config().reservation_table,
                ReservationRow::from(&reservation).into(),
            )
            .await?;

        tracing::info!(
            reservation_id = %reservation.id,
            property_id = %reservation.property_id,
            booked_rooms_number = reservation.booked_rooms_number,
            "reservation created"
        );
        Ok(reservation)
    }

    async fn delete(&self, event: DeleteReservation) -> AppResult<Reservation> {
        let table = &self.db.config().reservation_table;
        // 主キーに利用者 ID を含むので、他人の予約はここで見つからない
        let key = ReservationRow::key(&event.requested_by, event.reservation_id);

        let reservation = self
            .db
            .inner_ref()
            .get_item(table, key.clone())
            .await?
            .map(to_reservation)
            .transpose()?
            .ok_or_else(|| AppError::EntityNotFound("Reservation not found".into()))?;

        if reservation.customer_id != event.requested_by {
            return Err(AppError::ForbiddenOperation(
                "You cannot delete someone else's reservation".into(),
            ));
        }

        if reservation.period.has_started(event.requested_on) {
            return Err(AppError::ReservationAlreadyStarted);
        }

        self.db.inner_ref().delete_item(table, key).await?;

        tracing::info!(reservation_id = %reservation.id, "reservation deleted");
        Ok(reservation)
    }

    async fn find_by_customer_id(&self, customer_id: &CustomerId) -> AppResult<Vec<Reservation>> {
        let cfg = self.db.config();
        let params = QueryParams::new(
            &cfg.reservation_table,
            CUSTOMER_ID,
            AttributeValue::S(customer_id.to_string()),
            cfg.page_size,
        );

        query_all(self.db.inner_ref(), params)
            .await?
            .into_iter()
            .map(to_reservation)
            .collect()
    }
}
