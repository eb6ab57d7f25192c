use strum_macros::Display;

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, FeedFetchError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FeedFetchError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(FeedFetchError::ServerError(status.as_u16()))
        } else if status.is_client_error() {
            Err(FeedFetchError::ClientError(status.as_u16()))
        } else {
            Err(FeedFetchError::Unknown)
        }
    }
}

/// Transport or status failure while fetching one feed.
#[derive(Debug, Display)]
pub enum FeedFetchError {
    ServerError(u16),
    ClientError(u16),
    Timeout,
    NoConnection,
    Body,
    Builder,
    Unknown,
}

impl std::error::Error for FeedFetchError {}
impl From<reqwest::Error> for FeedFetchError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            FeedFetchError::Timeout
        } else if value.is_connect() {
            FeedFetchError::NoConnection
        } else if value.is_body() || value.is_decode() {
            FeedFetchError::Body
        } else if value.is_builder() {
            FeedFetchError::Builder
        } else if let Some(status) = value.status() {
            if status.is_server_error() {
                FeedFetchError::ServerError(status.as_u16())
            } else {
                FeedFetchError::ClientError(status.as_u16())
            }
        } else {
            FeedFetchError::Unknown
        }
    }
}
