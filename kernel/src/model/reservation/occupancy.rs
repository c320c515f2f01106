use super::{Reservation, StayPeriod};

/// Returns the highest number of rooms held on any single day of `period`.
///
/// Every calendar day is visited, so a peak that falls between the boundaries
/// of the contributing reservations is still found. Only the days covered by
/// at least one overlapping reservation are walked; an open-ended candidate
/// range costs no more than the booked span.
pub fn count_peak_overlap(period: &StayPeriod, reservations: &[Reservation]) -> i64 {
    let overlapping: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.period.overlaps(period))
        .collect();

    let Some(first_day) = overlapping.iter().map(|r| r.period.begin_date()).min() else {
        return 0;
    };
    let last_day = overlapping
        .iter()
        .map(|r| r.period.end_date())
        .max()
        .unwrap_or(first_day);

    // 重なりがあるので begin_date <= end_date が保証される
    let window = StayPeriod {
        begin_date: first_day.max(period.begin_date()),
        end_date: last_day.min(period.end_date()),
    };

    window
        .days()
        .map(|day| {
            overlapping
                .iter()
                .filter(|r| r.period.contains(day))
                .map(|r| r.booked_rooms_number)
                .sum::<i64>()
        })
        .max()
        .unwrap_or(0)
}
