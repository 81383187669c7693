use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub descrp: String,
    pub priceday: f64,
    pub discount: f64,
    /// Stored as a bare filename; rewritten to an absolute URL on read.
    pub img: String,
}

/// Text fields of the multipart car upload. The image file itself is
/// handled separately by the upload handler.
#[derive(Debug, Clone, Validate)]
pub struct NewCar {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub descrp: String,
    pub priceday: f64,
    pub discount: f64,
}

/// Full-record overwrite payload for PUT /cars/{id} — every field is
/// required, this is not a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarUpdate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub descrp: String,
    pub priceday: f64,
    pub discount: f64,
    pub img: String,
}
