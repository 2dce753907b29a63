use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::logger;

/// Build the 200 greeting response for a request path.
///
/// The path is inserted verbatim: no escaping, no normalization.
pub fn build_greeting_response(path: &str) -> Response<Full<Bytes>> {
    let body = Bytes::from(format!("Hello, you've requested: {path}\n"));

    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("failed to build greeting response: {e}"));
            Response::new(Full::new(body))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn sets_status_and_content_type() {
        let resp = build_greeting_response("/");

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn inserts_the_path_verbatim() {
        // No escaping: whatever hyper parsed as the path goes straight through
        let resp = build_greeting_response("/a%20b/<tag>");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from("Hello, you've requested: /a%20b/<tag>\n"));
    }
}
