use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::tle_feed::TleFeedResponse;

/// `GET <base>?GROUP=<group>&FORMAT=tle`, the CelesTrak GP query for one
/// object group in three-line format.
#[derive(Debug)]
pub struct TleFeedRequest {
    group: String,
}

impl TleFeedRequest {
    pub fn new(group: &str) -> Self { Self { group: group.to_string() } }
}

impl NoBodyHTTPRequestType for TleFeedRequest {}

impl HTTPRequestType for TleFeedRequest {
    type Response = TleFeedResponse;
    fn endpoint(&self) -> &'static str { "" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("GROUP", self.group.clone()), ("FORMAT", String::from("tle"))]
    }
}
