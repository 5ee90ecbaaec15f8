pub mod moisture;
pub mod range;
pub mod raw_field;
pub mod reading;
pub mod routes;
pub mod temperature;
