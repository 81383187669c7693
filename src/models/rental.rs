use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Frontends send the driver flag either as a JSON boolean or as the 0/1
// integer it is stored as.
fn deserialize_driver_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => Ok(b),
        BoolOrInt::Int(n) => Ok(n != 0),
    }
}

/// Booking request for POST /rentals. `name` is the customer's name; a
/// fresh customer row is created for every booking, repeat names included.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RentalCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub car_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1, message = "days must be at least 1"))]
    pub days: i32,
    #[serde(deserialize_with = "deserialize_driver_flag")]
    pub driver: bool,
    pub total: f64,
}

/// Column values for the rentals insert, with the car name/price already
/// snapshotted from the referenced car row.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub customer_id: i64,
    pub car_id: i64,
    pub car_name: String,
    pub car_price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub driver: i32,
    pub total: f64,
}

/// Denormalized row returned by GET /rentals (rentals joined with
/// customers and cars).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RentalView {
    pub id: i64,
    pub customer_name: String,
    pub car_name: String,
    pub car_price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub driver: i32,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking_json(driver: serde_json::Value) -> serde_json::Value {
        json!({
            "name": "Alice",
            "car_id": 1,
            "start_date": "2024-01-01",
            "end_date": "2024-01-03",
            "days": 2,
            "driver": driver,
            "total": 90
        })
    }

    #[test]
    fn booking_deserializes_boolean_driver() {
        let req: RentalCreate = serde_json::from_value(booking_json(json!(true))).unwrap();
        assert!(req.driver);
        assert_eq!(req.name, "Alice");
        assert_eq!(req.car_id, 1);
        assert_eq!(req.days, 2);
        assert_eq!(req.total, 90.0);
        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(req.end_date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn booking_deserializes_integer_driver() {
        let req: RentalCreate = serde_json::from_value(booking_json(json!(1))).unwrap();
        assert!(req.driver);

        let req: RentalCreate = serde_json::from_value(booking_json(json!(0))).unwrap();
        assert!(!req.driver);
    }

    #[test]
    fn booking_rejects_string_driver() {
        assert!(serde_json::from_value::<RentalCreate>(booking_json(json!("yes"))).is_err());
    }

    #[test]
    fn booking_rejects_malformed_date() {
        let mut body = booking_json(json!(true));
        body["start_date"] = json!("01/01/2024");
        assert!(serde_json::from_value::<RentalCreate>(body).is_err());
    }
}
