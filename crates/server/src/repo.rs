//! Read access to the verification store, plus the account tables behind
//! sign-in. Queries use the runtime `query_as` API and map failures with
//! [`SqlxErrorExt`](crate::error_convert::SqlxErrorExt).

pub mod exam;
pub mod fraud_flag;
pub mod profile;
pub mod refresh_token;
pub mod system_status;
pub mod user;
pub mod verification;
