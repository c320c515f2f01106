use std::str::FromStr;

use shared::error::{AppError, AppResult};

pub mod health;
pub mod property;
pub mod reservation;

// UUID として読めないパスの ID は、該当するデータが無いものとして扱う
pub(crate) fn parse_path_id<T: FromStr>(raw: &str, not_found: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(not_found.to_string()))
}
