use super::http_response::{response_common, tle_feed};

pub mod request_common;
pub mod tle_feed_get;
