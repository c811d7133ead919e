// Slack API HTTP client.
// Handles authentication, pagination, rate-limit retry, and response
// processing for form-encoded POST endpoints.

use indicatif::ProgressBar;
use reqwest::{
    Client,
    header::{COOKIE, HeaderMap, HeaderValue},
};
use tokio::time::sleep;

use crate::config::{Config, Credentials, RetryPolicy};
use crate::error::{EmojiboardError, Result};

use super::types::{PageAdvance, Paginated};

/// Raw response from one request: HTTP status plus body text.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

/// Transport boundary: something that can POST a form-encoded body and
/// hand back the status and body. The production impl wraps reqwest;
/// tests script responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<WireResponse>;
}

/// reqwest-backed transport carrying the `d` session cookie.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("d={}", credentials.cookie))
                .map_err(|e| EmojiboardError::Other(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(EmojiboardError::Http)?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<WireResponse> {
        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(EmojiboardError::Http)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(EmojiboardError::Http)?;

        Ok(WireResponse { status, body })
    }
}

/// Slack API client driving paginated fetches over a transport.
pub struct SlackClient<T: Transport> {
    transport: T,
    base_url: String,
    credentials: Credentials,
    retry: RetryPolicy,
}

impl<T: Transport> SlackClient<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            retry: config.retry.clone(),
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/api/{}", self.base_url, method)
    }

    /// Issue one request, retrying on 429 up to the retry budget.
    async fn post_page(&self, method: &str, params: &[(String, String)]) -> Result<String> {
        let url = self.url(method);

        for attempt in 1..=self.retry.max_attempts {
            let response = self.transport.post_form(&url, params).await?;

            if response.status == 429 {
                if attempt < self.retry.max_attempts {
                    sleep(self.retry.backoff).await;
                }
                continue;
            }

            if !(200..300).contains(&response.status) {
                return Err(EmojiboardError::FetchFailed {
                    method: method.to_string(),
                    detail: format!("HTTP {}", response.status),
                    body: response.body,
                });
            }

            return Ok(response.body);
        }

        Err(EmojiboardError::RetryExhausted {
            method: method.to_string(),
            attempts: self.retry.max_attempts,
        })
    }

    fn parse_page<P: Paginated>(&self, method: &str, body: &str) -> Result<P> {
        let page: P = serde_json::from_str(body)?;
        if !page.is_ok() {
            return Err(EmojiboardError::ApiRejected {
                method: method.to_string(),
                body: body.to_string(),
            });
        }
        Ok(page)
    }

    /// Fetch every page of `method`, accumulating records. The first
    /// response decides the pagination mode: cursor-chained pages or a
    /// declared total page count.
    pub async fn fetch_all<P: Paginated>(
        &self,
        method: &str,
        initial_params: Vec<(String, String)>,
        progress: &ProgressBar,
    ) -> Result<Vec<P::Record>> {
        let mut params = initial_params;
        params.push(("token".to_string(), self.credentials.token.clone()));

        let body = self.post_page(method, &params).await?;
        let page: P = self.parse_page(method, &body)?;

        if let Some(total) = page.total() {
            progress.set_length(total);
        }

        let advance = page.advance();
        let mut records = page.into_records();
        progress.inc(records.len() as u64);

        match advance {
            PageAdvance::Cursor(mut cursor) => {
                while !cursor.is_empty() {
                    // Proactive pacing keeps us under the rate limit.
                    sleep(self.retry.page_delay).await;
                    set_param(&mut params, "cursor", cursor);

                    let body = self.post_page(method, &params).await?;
                    let page: P = self.parse_page(method, &body)?;
                    cursor = match page.advance() {
                        PageAdvance::Cursor(next) => next,
                        PageAdvance::Pages(_) => String::new(),
                    };

                    let batch = page.into_records();
                    progress.inc(batch.len() as u64);
                    records.extend(batch);
                }
            }
            PageAdvance::Pages(pages) => {
                for page_no in 2..=pages {
                    set_param(&mut params, "page", page_no.to_string());

                    let body = self.post_page(method, &params).await?;
                    let page: P = self.parse_page(method, &body)?;

                    let batch = page.into_records();
                    progress.inc(batch.len() as u64);
                    records.extend(batch);
                }
            }
        }

        Ok(records)
    }
}

fn set_param(params: &mut Vec<(String, String)>, key: &str, value: String) {
    if let Some(entry) = params.iter_mut().find(|(k, _)| k == key) {
        entry.1 = value;
    } else {
        params.push((key.to_string(), value));
    }
}
