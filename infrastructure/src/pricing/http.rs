//! HTTP streaming price provider
//!
//! Posts a search to `{endpoint}/v1/prices/search` and decodes the response
//! body as newline-delimited JSON while it arrives. Each line is either
//! `{"price": {...}}` or `{"error": {...}}`; price records without entries
//! are skipped. Dropping the returned stream drops the response body, which
//! closes the connection.

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use scout_application::ports::price_stream::{PriceStream, PriceStreamError, PriceStreamPort};
use scout_domain::{PriceQuote, PriceSearchMessage, RawPriceData, UpstreamError};
use serde::Deserialize;
use std::fmt::Display;
use tracing::debug;

pub const DEFAULT_CURRENCY: &str = "USD";

pub struct HttpPriceStreamProvider {
    client: reqwest::Client,
    endpoint: String,
    currency: String,
}

impl HttpPriceStreamProvider {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    fn search_url(&self) -> String {
        format!("{}/v1/prices/search", self.endpoint.trim_end_matches('/'))
    }
}

/// Two-label public suffixes the price service files under one TLD filter.
const MULTI_LABEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "me.uk", "ltd.uk", "plc.uk", "ac.uk", "com.au", "net.au", "org.au",
    "co.nz", "org.nz", "co.jp", "ne.jp", "or.jp", "co.kr", "co.in", "co.za", "com.br", "com.mx",
    "com.ar", "com.cn", "com.hk", "com.tw", "com.sg", "com.tr",
];

/// Upper bound for a single NDJSON line held in the decoder buffer.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Split a query into the registrable label and its public suffix.
///
/// Subdomains are dropped: `"Shop.BeanHaus.com "` gives `("beanhaus", "com")` and
/// `"foo.co.uk"` gives `("foo", "co.uk")`. A query without a dot has an empty TLD.
pub fn split_query(query: &str) -> (String, String) {
    let clean = query.trim().trim_end_matches('.').to_lowercase();
    let Some(last_dot) = clean.rfind('.') else {
        return (clean, String::new());
    };

    let suffix_start = MULTI_LABEL_SUFFIXES
        .iter()
        .find(|suffix| {
            clean.len() > suffix.len()
                && clean.ends_with(**suffix)
                && clean.as_bytes()[clean.len() - suffix.len() - 1] == b'.'
        })
        .map(|suffix| clean.len() - suffix.len())
        .unwrap_or(last_dot + 1);

    let label = clean[..suffix_start]
        .trim_end_matches('.')
        .rsplit('.')
        .next()
        .unwrap_or_default();
    (label.to_string(), clean[suffix_start..].to_string())
}

#[async_trait]
impl PriceStreamPort for HttpPriceStreamProvider {
    async fn search(&self, domain: &str) -> Result<PriceStream, PriceStreamError> {
        let (label, tld) = split_query(domain);
        let body = serde_json::json!({
            "product": "domain",
            "query": label,
            "currency_code": self.currency,
            "filter": { "included_tld_names": tld },
        });

        debug!(%domain, %label, %tld, "Searching prices");
        let response = self
            .client
            .post(self.search_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| PriceStreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(PriceStreamError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }

        Ok(decode_ndjson(response.bytes_stream(), domain.to_string()))
    }
}

#[derive(Deserialize)]
struct WireLine {
    #[serde(default)]
    price: Option<RawPriceData>,
    #[serde(default)]
    error: Option<UpstreamError>,
}

struct LineDecoder {
    chunks: BoxStream<'static, Result<Vec<u8>, String>>,
    buf: Vec<u8>,
    domain: String,
    finished: bool,
}

/// Decode a chunked NDJSON body into price search messages.
///
/// Lines may span chunks. A transport error, or a line longer than
/// [`MAX_LINE_BYTES`], is yielded once and ends the stream.
pub fn decode_ndjson<S, B, E>(chunks: S, domain: String) -> PriceStream
where
    S: futures::Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + 'static,
    E: Display + 'static,
{
    let state = LineDecoder {
        chunks: chunks
            .map(|chunk| chunk.map(|b| b.as_ref().to_vec()).map_err(|e| e.to_string()))
            .boxed(),
        buf: Vec::new(),
        domain,
        finished: false,
    };

    stream::unfold(state, |mut st| async move {
        loop {
            if let Some(pos) = st.buf.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = st.buf.drain(..=pos).collect();
                if let Some(item) = decode_line(&line, &st.domain) {
                    return Some((item, st));
                }
                continue;
            }

            if st.finished {
                if st.buf.is_empty() {
                    return None;
                }
                let line = std::mem::take(&mut st.buf);
                return decode_line(&line, &st.domain).map(|item| (item, st));
            }

            match st.chunks.next().await {
                Some(Ok(chunk)) => {
                    st.buf.extend_from_slice(&chunk);
                    if st.buf.len() > MAX_LINE_BYTES && !st.buf.contains(&b'\n') {
                        st.finished = true;
                        st.buf.clear();
                        return Some((
                            Err(PriceStreamError::Decode(format!(
                                "line exceeds {} bytes",
                                MAX_LINE_BYTES
                            ))),
                            st,
                        ));
                    }
                }
                Some(Err(e)) => {
                    st.finished = true;
                    st.buf.clear();
                    return Some((Err(PriceStreamError::Transport(e)), st));
                }
                None => st.finished = true,
            }
        }
    })
    .boxed()
}

/// `None` for blank lines and price records that normalize to nothing.
fn decode_line(
    line: &[u8],
    domain: &str,
) -> Option<Result<PriceSearchMessage, PriceStreamError>> {
    let text = String::from_utf8_lossy(line);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let wire: WireLine = match serde_json::from_str(text) {
        Ok(wire) => wire,
        Err(e) => return Some(Err(PriceStreamError::Decode(e.to_string()))),
    };

    match (wire.price, wire.error) {
        (Some(raw), _) => match PriceQuote::from_raw(domain, &raw) {
            Some(quote) => Some(Ok(PriceSearchMessage::Price(quote))),
            None => {
                debug!(%domain, "Skipping price record without entries");
                None
            }
        },
        (None, Some(error)) => Some(Ok(PriceSearchMessage::Error(error))),
        (None, None) => Some(Err(PriceStreamError::Decode(format!(
            "line has neither price nor error: {}",
            text
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PRICE_LINE: &str = r#"{"price": {"prices": {"REQUESTED_CURRENCY": {"price": {"currency_code": "USD", "value": "12.99"}, "labels": ["hot"]}, "RENEWAL_REQUESTED_CURRENCY": {"price": {"currency_code": "USD", "units": 45}}}}}"#;

    async fn collect(stream: PriceStream) -> Vec<Result<PriceSearchMessage, PriceStreamError>> {
        stream.collect().await
    }

    #[test]
    fn test_split_query() {
        let pair = |label: &str, tld: &str| (label.to_string(), tld.to_string());
        assert_eq!(split_query(" Foo.co.uk "), pair("foo", "co.uk"));
        assert_eq!(split_query("beanhaus.com"), pair("beanhaus", "com"));
        assert_eq!(split_query("Shop.BeanHaus.com."), pair("beanhaus", "com"));
        assert_eq!(split_query("a.b.foo.com.au"), pair("foo", "com.au"));
        assert_eq!(split_query("beanhaus"), pair("beanhaus", ""));
    }

    #[tokio::test]
    async fn test_lines_split_across_chunks() {
        let (a, b) = PRICE_LINE.split_at(40);
        let chunks = vec![
            Ok::<_, String>(a.as_bytes().to_vec()),
            Ok(format!("{}\n\n", b).into_bytes()),
            Ok(br#"{"error": {"code": "NOT_FOUND", "message": "gone"}}"#.to_vec()),
        ];

        let items = collect(decode_ndjson(stream::iter(chunks), "beanhaus.com".to_string())).await;

        assert_eq!(items.len(), 2);
        let Ok(PriceSearchMessage::Price(quote)) = &items[0] else {
            panic!("expected price, got {:?}", items[0]);
        };
        assert_eq!(quote.domain, "beanhaus.com");
        assert_eq!(quote.format_cost(), "12.99");
        assert_eq!(quote.labels, vec!["hot"]);
        assert!(matches!(&items[1], Ok(PriceSearchMessage::Error(e)) if e.message == "gone"));
    }

    #[tokio::test]
    async fn test_empty_records_skipped_and_bad_lines_reported() {
        let body = "{\"price\": {\"prices\": {}}}\nnot json\n";
        let items = collect(decode_ndjson(
            stream::iter(vec![Ok::<_, String>(body.as_bytes().to_vec())]),
            "x.io".to_string(),
        ))
        .await;

        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(PriceStreamError::Decode(_))));
    }

    #[tokio::test]
    async fn test_oversized_line_ends_stream() {
        let chunks = vec![
            Ok::<_, String>(vec![b'x'; MAX_LINE_BYTES / 2]),
            Ok(vec![b'x'; MAX_LINE_BYTES / 2 + 1]),
            Ok(format!("\n{}\n", PRICE_LINE).into_bytes()),
        ];
        let items = collect(decode_ndjson(stream::iter(chunks), "x.io".to_string())).await;

        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], Err(PriceStreamError::Decode(m)) if m.contains("exceeds")));
    }

    #[tokio::test]
    async fn test_transport_error_ends_stream() {
        let chunks = vec![
            Err("connection reset".to_string()),
            Ok(format!("{}\n", PRICE_LINE).into_bytes()),
        ];
        let items = collect(decode_ndjson(stream::iter(chunks), "x.io".to_string())).await;
        assert_eq!(
            items,
            vec![Err(PriceStreamError::Transport("connection reset".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_search_posts_query_and_streams_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/prices/search"))
            .and(body_partial_json(serde_json::json!({
                "product": "domain",
                "query": "beanhaus",
                "currency_code": "EUR",
                "filter": {"included_tld_names": "com"},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("{}\n", PRICE_LINE)))
            .expect(1)
            .mount(&server)
            .await;

        let provider = HttpPriceStreamProvider::new(reqwest::Client::new(), server.uri())
            .with_currency("EUR");
        let items = collect(provider.search("BeanHaus.com").await.unwrap()).await;

        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], Ok(PriceSearchMessage::Price(q)) if q.domain == "BeanHaus.com"));
    }

    #[tokio::test]
    async fn test_search_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let provider = HttpPriceStreamProvider::new(reqwest::Client::new(), server.uri());
        let Err(err) = provider.search("a.com").await else {
            panic!("expected error");
        };
        assert_eq!(err, PriceStreamError::Transport("HTTP 502: bad gateway".to_string()));
    }
}
