pub const API_NAME: &str = "[Rental-API]";

/// URL path under which uploaded car images are served.
pub const IMAGES_PATH: &str = "/images";
