use axum::{
    extract::{Multipart, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use super::models::*;
use crate::error::Error;
use crate::format::format_coordinate;
use crate::projection::{batch_convert, Coordinate, Transformer};
use crate::provider::MapProvider;
use crate::records::convert_records;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps a crate error onto an HTTP status and JSON body
pub fn error_response(err: Error) -> ApiError {
    let status = match err {
        Error::Io(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    warn!(%status, error = %err, "request failed");
    (status, Json(ErrorResponse { error: err.to_string() }))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message.into() }),
    )
}

pub async fn convert_point(
    Query(req): Query<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let coord = Coordinate::new(req.lng, req.lat);
    coord.validate().map_err(error_response)?;

    let transformer = Transformer::from_names(&req.from, &req.to).map_err(error_response)?;
    let converted = transformer.transform(coord);

    Ok(Json(ConvertResponse {
        lng: converted.lng,
        lat: converted.lat,
        from: transformer.from_system().to_string(),
        to: transformer.to_system().to_string(),
    }))
}

pub async fn convert_batch(
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let coordinates =
        batch_convert(&req.coordinates, &req.from, &req.to).map_err(error_response)?;

    Ok(Json(BatchResponse { coordinates }))
}

pub async fn display_point(
    Query(req): Query<DisplayRequest>,
) -> Result<Json<DisplayResponse>, ApiError> {
    let provider: MapProvider = req.provider.parse().map_err(error_response)?;
    let native = Coordinate::new(req.lng, req.lat);
    let display = provider.to_display(native).map_err(error_response)?;

    Ok(Json(DisplayResponse {
        provider: provider.to_string(),
        lng: display.lng,
        lat: display.lat,
        formatted: format_coordinate(display, req.format),
    }))
}

pub async fn upload_csv(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut csv_data: Option<Vec<u8>> = None;
    let mut from: Option<String> = None;
    let mut to: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "csv" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read csv field: {}", e)))?;
                csv_data = Some(bytes.to_vec());
            }
            "from" | "to" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read {} field: {}", name, e)))?;
                if name == "from" {
                    from = Some(text);
                } else {
                    to = Some(text);
                }
            }
            _ => {}
        }
    }

    let csv_data = csv_data.ok_or_else(|| bad_request("Missing CSV file"))?;
    let from = from.ok_or_else(|| bad_request("Missing from parameter"))?;
    let to = to.ok_or_else(|| bad_request("Missing to parameter"))?;

    let transformer = Transformer::from_names(&from, &to).map_err(error_response)?;
    debug!(bytes = csv_data.len(), %from, %to, "converting uploaded csv");

    let (output, summary) = tokio::task::spawn_blocking(move || {
        let mut output = Vec::with_capacity(csv_data.len());
        let summary = convert_records(csv_data.as_slice(), &mut output, &transformer)?;
        Ok::<_, Error>((output, summary))
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: format!("Conversion task failed: {}", e) }),
        )
    })?
    .map_err(error_response)?;

    let headers = [
        (header::CONTENT_TYPE, mime::TEXT_CSV.to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"converted.csv\"".to_string(),
        ),
        (header::HeaderName::from_static("x-records-total"), summary.total.to_string()),
        (header::HeaderName::from_static("x-records-converted"), summary.converted.to_string()),
        (header::HeaderName::from_static("x-records-skipped"), summary.skipped.to_string()),
    ];

    Ok((headers, output).into_response())
}
