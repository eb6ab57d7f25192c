pub mod response_common;
pub mod tle_feed;
