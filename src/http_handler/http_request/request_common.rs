use super::response_common::{FeedFetchError, HTTPResponseType};
use crate::http_handler::http_client::HTTPClient;

pub(crate) enum HTTPRequestMethod {
    Get,
}

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, FeedFetchError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
        };
        let response =
            request.headers(self.header_params()).query(&self.query_params()).send().await?;
        Self::Response::read_response(response).await
    }
}
