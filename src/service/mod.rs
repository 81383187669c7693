pub mod booking;
pub mod catalog;
pub mod image_store;

pub use booking::{BookingReceipt, RentalBookingService, TotalUnderpricedError};
pub use catalog::CarCatalogService;
pub use image_store::ImageStore;
