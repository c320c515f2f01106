use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use shared::error::{AppError, AppResult};

use super::Item;

pub mod property;
pub mod reservation;

pub(crate) fn get_string(item: &Item, name: &str) -> AppResult<String> {
    match item.get(name) {
        Some(AttributeValue::S(v)) => Ok(v.clone()),
        Some(other) => Err(AppError::ConversionEntityError(format!(
            "attribute {name} is not a string: {other:?}"
        ))),
        None => Err(AppError::ConversionEntityError(format!(
            "attribute {name} is missing"
        ))),
    }
}

// 属性が無い場合だけ None とし、型違いはエラーにする
pub(crate) fn get_optional_string(item: &Item, name: &str) -> AppResult<Option<String>> {
    match item.get(name) {
        None => Ok(None),
        Some(_) => get_string(item, name).map(Some),
    }
}

pub(crate) fn get_number<T>(item: &Item, name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match item.get(name) {
        Some(AttributeValue::N(v)) => v.parse().map(Some).map_err(|e| {
            AppError::ConversionEntityError(format!("attribute {name} is not a number: {e}"))
        }),
        Some(other) => Err(AppError::ConversionEntityError(format!(
            "attribute {name} is not a number: {other:?}"
        ))),
        None => Ok(None),
    }
}

pub(crate) fn parse_attr<T>(name: &str, value: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| {
        AppError::ConversionEntityError(format!("attribute {name} has an invalid value {value}: {e}"))
    })
}
