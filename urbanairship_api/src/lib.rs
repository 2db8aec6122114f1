//! Typed client for the UrbanAirship push API.
//!
//! [`Client::push`] serializes a [`types::Push`], sends it with Basic auth and
//! the versioned `Accept` header, and turns the HTTP response into either a
//! [`types::PushResponse`] or exactly one [`Error`].

mod client;
mod errors;
mod executor;
mod response;
pub mod types;
pub use self::client::{Client, UrbanAirship, API_VERSION, BASE_URL, MIME_TYPE};
pub use self::errors::{BoxError, Error};
pub use self::executor::Executor;
pub use self::response::{check_response, decode_body};
