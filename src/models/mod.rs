//! Wire types exchanged with the shortening backend

mod expiry;
mod link;
pub mod timestamp;

pub use expiry::ExpiryOption;
pub use link::{AnalyticsResult, ErrorBody, HealthStatus, ShortenRequest, ShortenResult};
