pub mod calibration;
pub mod error;
pub mod moisture_level;
pub mod normalized_reading;
pub mod range_token;
pub mod reading;
pub mod time_range;
