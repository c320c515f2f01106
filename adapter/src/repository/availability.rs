use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::PropertyId,
    reservation::{occupancy::count_peak_overlap, Admission, AvailableRooms, StayPeriod},
};
use kernel::repository::availability::AvailabilityRepository;
use shared::error::{AppError, AppResult};

use super::{property::find_property, reservation::find_reservations_by_property};
use crate::database::StoreClient;

#[derive(new, Clone)]
pub struct AvailabilityRepositoryImpl {
    db: StoreClient,
}

impl AvailabilityRepositoryImpl {
    // 物件の総部屋数から、期間中に最も埋まっている日の予約部屋数を引く
    async fn count_available_rooms(
        &self,
        property_id: PropertyId,
        period: &StayPeriod,
    ) -> AppResult<i64> {
        let property = find_property(&self.db, property_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Property not found".into()))?;

        let reservations = find_reservations_by_property(&self.db, property.id).await?;
        let locked_rooms_count = count_peak_overlap(period, &reservations);

        tracing::debug!(
            property_id = %property.id,
            total_rooms_number = property.total_rooms_number,
            locked_rooms_count,
            reservations = reservations.len(),
            "availability computed"
        );
        Ok(property.total_rooms_number - locked_rooms_count)
    }
}

#[async_trait]
impl AvailabilityRepository for AvailabilityRepositoryImpl {
    async fn available_rooms_count(
        &self,
        property_id: PropertyId,
        period: StayPeriod,
        today: NaiveDate,
    ) -> AppResult<AvailableRooms> {
        if period.has_started(today) {
            return Err(AppError::InvalidRange(
                "Reservation date unavailable".into(),
            ));
        }

        let available_rooms_count = self.count_available_rooms(property_id, &period).await?;
        Ok(AvailableRooms {
            available_rooms_count,
        })
    }

    async fn check_admission(
        &self,
        property_id: PropertyId,
        period: StayPeriod,
        requested_rooms: i64,
    ) -> AppResult<Admission> {
        let available_rooms_count = self.count_available_rooms(property_id, &period).await?;
        Ok(Admission {
            admit: requested_rooms <= available_rooms_count,
            available_rooms_count,
        })
    }
}
