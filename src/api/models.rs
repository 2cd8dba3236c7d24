use serde::{Deserialize, Serialize};

use crate::format::{CoordinateFormat, FormattedCoordinate};
use crate::projection::Shape;

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub lng: f64,
    pub lat: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub lng: f64,
    pub lat: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    pub coordinates: Vec<Shape>,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub coordinates: Vec<Shape>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayRequest {
    pub provider: String,
    pub lng: f64,
    pub lat: f64,
    #[serde(default)]
    pub format: CoordinateFormat,
}

#[derive(Debug, Serialize)]
pub struct DisplayResponse {
    pub provider: String,
    pub lng: f64,
    pub lat: f64,
    pub formatted: FormattedCoordinate,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
