//! HTTP order client
//!
//! POSTs the checkout payload as JSON to the configured order endpoint and
//! maps the response onto [`OrderReceipt`] or [`SubmitError`].

use storefront_core::prelude::*;
use storefront_core::SubmitCheckoutData;
use url::Url;

use crate::error::SubmitError;
use crate::receipt::OrderReceipt;
use crate::submitter::OrderSubmitter;

const USER_AGENT: &str = concat!("green-storefront/", env!("CARGO_PKG_VERSION"));

/// Order backend reached over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpOrderClient {
    /// Build a client for `endpoint`.
    ///
    /// Fails with [`Error::InvalidEndpoint`] unless the endpoint is an
    /// absolute `http` or `https` URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint.trim()).map_err(|_| Error::invalid_endpoint(endpoint))?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(Error::invalid_endpoint(endpoint)),
    }
}

impl OrderSubmitter for HttpOrderClient {
    async fn submit(&self, payload: &SubmitCheckoutData) -> std::result::Result<OrderReceipt, SubmitError> {
        debug!(endpoint = %self.endpoint, total = %payload.total_price, "Submitting order");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let receipt = OrderReceipt::from_body(status.as_u16(), &body)?;
            info!(status = status.as_u16(), order_id = ?receipt.order_id(), "Order accepted");
            Ok(receipt)
        } else {
            let err = SubmitError::from_status(status.as_u16(), &body);
            warn!(status = status.as_u16(), "Order not accepted: {}", err);
            Err(err)
        }
    }

    fn destination(&self) -> String {
        self.endpoint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_payload;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Accept one connection, reply with a canned response and hand back the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}/api/checkout"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn request_body(request: &str) -> serde_json::Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_rejects_non_http_endpoints() {
        for bad in ["", "not a url", "ftp://orders.example.lk", "file:///tmp/orders"] {
            let err = HttpOrderClient::new(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidEndpoint { .. }), "{bad}");
        }
    }

    #[test]
    fn test_accepts_http_and_https() {
        assert!(HttpOrderClient::new("http://localhost:8080/api/checkout").is_ok());
        let client = HttpOrderClient::new("https://orders.example.lk/checkout").unwrap();
        assert_eq!(client.destination(), "https://orders.example.lk/checkout");
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let (endpoint, server) = serve_once("201 Created", r#"{"orderId":"GS-1001"}"#).await;
        let client = HttpOrderClient::new(&endpoint).unwrap();

        let receipt = client.submit(&sample_payload()).await.unwrap();
        assert_eq!(receipt.status, 201);
        assert_eq!(receipt.order_id(), Some("GS-1001".to_string()));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/checkout HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));

        let body = request_body(&request);
        assert_eq!(body["firstName"], "Nimal");
        assert_eq!(body["zipcode"], 10100);
        assert_eq!(body["paymentMethod"], "Cash on Delivery");
        assert_eq!(body["totalPrice"], 1549.0);
    }

    #[tokio::test]
    async fn test_empty_success_body() {
        let (endpoint, server) = serve_once("200 OK", "").await;
        let client = HttpOrderClient::new(&endpoint).unwrap();

        let receipt = client.submit(&sample_payload()).await.unwrap();
        assert_eq!(receipt.body, serde_json::Value::Null);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_4xx_maps_to_rejected() {
        let (endpoint, server) =
            serve_once("400 Bad Request", r#"{"message":"Invalid zipcode"}"#).await;
        let client = HttpOrderClient::new(&endpoint).unwrap();

        let err = client.submit(&sample_payload()).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 400,
                message: "Invalid zipcode".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_5xx_maps_to_server_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", "").await;
        let client = HttpOrderClient::new(&endpoint).unwrap();

        let err = client.submit(&sample_payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Server { status: 500, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_success_with_garbage_body_is_invalid_response() {
        let (endpoint, server) = serve_once("200 OK", "thanks!").await;
        let client = HttpOrderClient::new(&endpoint).unwrap();

        let err = client.submit(&sample_payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidResponse { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpOrderClient::new(&format!("http://{addr}/api/checkout")).unwrap();
        let err = client.submit(&sample_payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Network { .. }));
        assert!(err.is_retryable());
    }
}
