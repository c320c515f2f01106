use crate::model::id::{CustomerId, PropertyId, ReservationId};
use chrono::NaiveDate;
use shared::error::{AppError, AppResult};

pub mod event;
pub mod occupancy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub property_id: PropertyId,
    pub customer_id: CustomerId,
    pub booked_rooms_number: i64,
    pub period: StayPeriod,
}

// 宿泊期間。開始日・終了日ともにその日を含む閉区間として扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    begin_date: NaiveDate,
    end_date: NaiveDate,
}

impl StayPeriod {
    pub fn new(begin_date: NaiveDate, end_date: NaiveDate) -> AppResult<Self> {
        if begin_date > end_date {
            return Err(AppError::InvalidRange(format!(
                "beginDate ({begin_date}) must not be after endDate ({end_date})"
            )));
        }
        Ok(Self {
            begin_date,
            end_date,
        })
    }

    pub fn begin_date(&self) -> NaiveDate {
        self.begin_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    // 開始日から終了日まで 1 日ずつ列挙する（終了日を含む）
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end_date = self.end_date;
        self.begin_date
            .iter_days()
            .take_while(move |day| *day <= end_date)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.begin_date <= day && day <= self.end_date
    }

    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.begin_date <= other.end_date && other.begin_date <= self.end_date
    }

    // 開始日当日以降は宿泊が始まっているとみなす。
    // 取消しの可否と空室照会の受付はどちらもこの判定に従う
    pub fn has_started(&self, today: NaiveDate) -> bool {
        self.begin_date <= today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableRooms {
    pub available_rooms_count: i64,
}

// 予約受付判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub admit: bool,
    pub available_rooms_count: i64,
}
