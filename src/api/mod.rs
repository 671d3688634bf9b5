//! Client for the library REST backend.
//!
//! The console owns no data: counts, chart series, activities and logins all
//! come from here.

mod auth;
mod client;
mod dashboard;

pub use self::auth::{AuthUser, LOGIN_FAILED, LoginOutcome};
pub use self::client::{ApiClient, ApiError};
pub use self::dashboard::{
    ActivityPayload, ActivityUser, CategoryPayload, MonthKey, StatsPayload, TransactionPayload,
};
