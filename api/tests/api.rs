use std::sync::Arc;

use adapter::database::{memory::InMemoryItemStore, StoreClient};
use api::{extractor::DEV_CUSTOMER_HEADER, route::routes};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Days, NaiveDate, Utc};
use registry::AppRegistry;
use serde_json::{json, Value};
use shared::config::DatabaseConfig;
use tower::ServiceExt;

fn app() -> Router {
    let cfg = DatabaseConfig::default();
    let db = StoreClient::new(Arc::new(InMemoryItemStore::for_config(&cfg)), cfg);
    routes().with_state(AppRegistry::new(db))
}

fn day(offset: u64) -> NaiveDate {
    Utc::now().date_naive() + Days::new(offset)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    customer: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(customer) = customer {
        builder = builder.header(DEV_CUSTOMER_HEADER, customer);
    }
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

async fn register_property(app: &Router, rooms: i64) -> anyhow::Result<String> {
    let (status, body) = send(
        app,
        "POST",
        "/properties",
        Some("owner"),
        Some(json!({ "name": "Seaside Inn", "totalRoomsNumber": rooms })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body["id"].as_str().unwrap_or_default().to_string())
}

async fn book(
    app: &Router,
    customer: &str,
    property_id: &str,
    rooms: i64,
    begin: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<(StatusCode, Value)> {
    send(
        app,
        "POST",
        "/reservation",
        Some(customer),
        Some(json!({
            "propertyId": property_id,
            "bookedRoomsNumber": rooms,
            "beginDate": begin.to_string(),
            "endDate": end.to_string(),
        })),
    )
    .await
}

async fn available(
    app: &Router,
    property_id: &str,
    begin: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<(StatusCode, Value)> {
    send(
        app,
        "GET",
        &format!(
            "/properties/{property_id}/reservation/available-count?beginDate={begin}&endDate={end}"
        ),
        None,
        None,
    )
    .await
}

#[tokio::test]
async fn health_endpoints_respond() -> anyhow::Result<()> {
    let app = app();
    assert_eq!(send(&app, "GET", "/health", None, None).await?.0, StatusCode::OK);
    assert_eq!(send(&app, "GET", "/health/db", None, None).await?.0, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn booking_reduces_availability_and_over_capacity_is_rejected() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 5).await?;

    let (status, created) = book(&app, "alice", &property_id, 2, day(10), day(14)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["customerId"], "alice");
    assert_eq!(created["propertyId"], property_id.as_str());
    assert_eq!(created["bookedRoomsNumber"], 2);
    assert_eq!(created["beginDate"], day(10).to_string());
    assert_eq!(created["endDate"], day(14).to_string());

    let (status, body) = available(&app, &property_id, day(12), day(16)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "availableRoomsCount": 3 }));

    let (status, body) = book(&app, "bob", &property_id, 4, day(12), day(13)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["availableRoomsCount"], 3);

    let (status, body) = send(&app, "GET", "/customers/reservation", Some("bob"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn customer_reads_back_own_reservations() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 3).await?;
    let (_, created) = book(&app, "alice", &property_id, 1, day(3), day(4)).await?;

    let (status, body) = send(&app, "GET", "/customers/reservation", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([created]));
    Ok(())
}

#[tokio::test]
async fn reservation_routes_require_an_identity() -> anyhow::Result<()> {
    let app = app();
    let (status, _) = send(&app, "GET", "/customers/reservation", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 3).await?;

    let (status, _) = book(&app, "alice", &property_id, 0, day(3), day(4)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = book(&app, "alice", &property_id, 1, day(5), day(4)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/reservation",
        Some("alice"),
        Some(json!({ "propertyId": property_id })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn availability_rejects_past_dates_and_unknown_properties() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 3).await?;
    let yesterday = Utc::now().date_naive() - Days::new(1);

    for begin in [yesterday, day(0)] {
        let (status, body) = available(&app, &property_id, begin, day(2)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Reservation date unavailable");
    }

    let (status, _) = available(
        &app,
        "6f1c1d62-8d1f-4b0e-9d0c-2b9f0b8d3a11",
        day(1),
        day(2),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn only_the_owner_deletes_before_the_stay_begins() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 3).await?;
    let (_, future) = book(&app, "alice", &property_id, 1, day(5), day(6)).await?;
    let (_, started) = book(&app, "alice", &property_id, 1, day(0), day(2)).await?;
    let future_id = future["id"].as_str().unwrap_or_default();
    let started_id = started["id"].as_str().unwrap_or_default();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/reservation/{future_id}"),
        Some("mallory"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/reservation/{started_id}"),
        Some("alice"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, deleted) = send(
        &app,
        "DELETE",
        &format!("/reservation/{future_id}"),
        Some("alice"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, future);

    let (_, remaining) = send(&app, "GET", "/customers/reservation", Some("alice"), None).await?;
    assert_eq!(remaining, json!([started]));
    Ok(())
}

#[tokio::test]
async fn registered_property_is_listed_and_fetched() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 4).await?;

    let (status, body) = send(&app, "GET", &format!("/properties/{property_id}"), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRoomsNumber"], 4);
    assert_eq!(body["name"], "Seaside Inn");

    let (_, list) = send(&app, "GET", "/properties", None, None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, _) = send(
        &app,
        "POST",
        "/properties",
        Some("owner"),
        Some(json!({ "name": "" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn open_ended_range_counts_only_booked_days() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 5).await?;
    for offset in 0..50 {
        let (status, _) = book(&app, "alice", &property_id, 1, day(offset + 1), day(offset + 3)).await?;
        assert_eq!(status, StatusCode::OK);
    }

    let far_future = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);
    let (status, body) = available(&app, &property_id, day(1), far_future).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "availableRoomsCount": 2 }));
    Ok(())
}

#[tokio::test]
async fn malformed_ids_read_as_not_found() -> anyhow::Result<()> {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/reservation/abc", Some("alice"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Reservation not found" }));

    let (status, body) = available(&app, "abc", day(1), day(2)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Property not found" }));

    let (status, body) = send(&app, "GET", "/properties/abc", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Property not found" }));
    Ok(())
}

#[tokio::test]
async fn property_update_keeps_omitted_fields() -> anyhow::Result<()> {
    let app = app();
    let property_id = register_property(&app, 4).await?;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/properties/{property_id}"),
        Some("owner"),
        Some(json!({ "description": "Renovated", "totalRoomsNumber": 6 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], property_id.as_str());
    assert_eq!(body["name"], "Seaside Inn");
    assert_eq!(body["description"], "Renovated");
    assert_eq!(body["totalRoomsNumber"], 6);

    let (_, fetched) = send(&app, "GET", &format!("/properties/{property_id}"), None, None).await?;
    assert_eq!(fetched, body);

    let (status, _) = available(&app, &property_id, day(1), day(2)).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/properties/{property_id}"),
        Some("owner"),
        Some(json!({ "totalRoomsNumber": 0 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn updating_unknown_property_is_not_found() -> anyhow::Result<()> {
    let app = app();
    for id in ["6f1c1d62-8d1f-4b0e-9d0c-2b9f0b8d3a11", "abc"] {
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/properties/{id}"),
            Some("owner"),
            Some(json!({ "name": "Renamed" })),
        )
        .await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{id}");
        assert_eq!(body, json!({ "message": "Property not found" }));
    }
    Ok(())
}
