mod push;
pub use self::push::{
    Actions, Audience, DeviceType, Notification, OpenAction, OpenType, Push, PushResponse,
};

mod error_response;
pub use self::error_response::{ErrorDetails, ErrorResponse};
