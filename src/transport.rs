use std::time::Duration;

/// A fully prepared outbound request: URL, headers, serialized JSON body.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct OutboundResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the message builder and the wire. The production
/// implementation is [`HttpTransport`]; tests substitute their own.
pub trait Transport {
    fn post(&self, req: &OutboundRequest) -> Result<OutboundResponse, String>;
}

/// Blocking reqwest transport. One client per call, no connection reuse.
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        HttpTransport { timeout }
    }
}

impl Transport for HttpTransport {
    fn post(&self, req: &OutboundRequest) -> Result<OutboundResponse, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;

        let mut request = client.post(&req.url);
        for (name, value) in &req.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let resp = request
            .body(req.body.clone())
            .send()
            .map_err(|e| format!("request failed: {}", e))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| format!("failed to read response body: {}", e))?;

        Ok(OutboundResponse { status, body })
    }
}
