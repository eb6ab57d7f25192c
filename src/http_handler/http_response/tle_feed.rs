use super::response_common::{FeedFetchError, HTTPResponseType};

/// Plain-text three-line element feed, returned as-is.
#[derive(Debug)]
pub struct TleFeedResponse;

impl HTTPResponseType for TleFeedResponse {
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, FeedFetchError> {
        let resp = Self::unwrap_return_code(response).await?;
        Ok(resp.text().await?)
    }
}
