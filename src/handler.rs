use crate::response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;

/// Answer any request with the path-echo greeting.
///
/// Method, headers, and body are deliberately not inspected; the URL path
/// (query string excluded) is the only part of the request consulted.
/// Generic over the body type because the body is never read.
pub async fn handle_request<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(response::build_greeting_response(req.uri().path()))
}
