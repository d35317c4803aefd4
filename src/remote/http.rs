//! HTTP dictionary client.
//!
//! Issues one GET per lookup against `<base>/<word>` and decodes the JSON
//! array of entries the service returns.

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use crate::error::{DictlogError, Result};
use crate::model::Entry;

use super::DefinitionSource;

/// Fetches definitions over HTTP/HTTPS.
#[derive(Debug)]
pub struct HttpDictionary {
    client: Client,
    base: Url,
}

impl HttpDictionary {
    /// Create a client for the dictionary rooted at `base`.
    ///
    /// No request timeout is configured; a stalled server blocks the lookup.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| DictlogError::InvalidEndpoint {
            url: base.to_string(),
            message: e.to_string(),
        })?;

        if base.cannot_be_a_base() {
            return Err(DictlogError::InvalidEndpoint {
                url: base.to_string(),
                message: "URL cannot have path segments".to_string(),
            });
        }

        let client = Client::builder()
            .user_agent(concat!("dictlog/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self { client, base })
    }

    /// Build the lookup URL for a word.
    pub fn url_for(&self, word: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

impl DefinitionSource for HttpDictionary {
    fn fetch_definitions(&self, word: &str) -> Result<Vec<Entry>> {
        let url = self.url_for(word);
        debug!("Fetching definitions from {}", url);

        let transport = |source: reqwest::Error| DictlogError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;

        debug!("Dictionary answered HTTP {} for '{}'", status, word);

        serde_json::from_str(&body).map_err(|e| DictlogError::MalformedResponse {
            word: word.to_string(),
            message: format!("HTTP {}: {}", status, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const QUIZ_JSON: &str = r#"[{"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a test","example":"this is a test"}]}]}]"#;

    #[test]
    fn rejects_invalid_base() {
        let result = HttpDictionary::new("not a url");
        assert!(matches!(result, Err(DictlogError::InvalidEndpoint { .. })));
    }

    #[test]
    fn url_appends_word_segment() {
        let dict = HttpDictionary::new("https://api.dictionaryapi.dev/api/v2/entries/en").unwrap();
        assert_eq!(
            dict.url_for("quiz").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/quiz"
        );
    }

    #[test]
    fn url_handles_trailing_slash() {
        let dict = HttpDictionary::new("http://localhost:8080/entries/").unwrap();
        assert_eq!(
            dict.url_for("quiz").as_str(),
            "http://localhost:8080/entries/quiz"
        );
    }

    #[test]
    fn url_escapes_word() {
        let dict = HttpDictionary::new("http://localhost:8080/entries").unwrap();
        assert_eq!(
            dict.url_for("ice cream/x").as_str(),
            "http://localhost:8080/entries/ice%20cream%2Fx"
        );
    }

    // --- Mock HTTP tests ---

    #[test]
    fn fetch_decodes_entries() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/entries/quiz");
            then.status(200)
                .header("content-type", "application/json")
                .body(QUIZ_JSON);
        });

        let dict = HttpDictionary::new(&server.url("/entries")).unwrap();
        let entries = dict.fetch_definitions("quiz").unwrap();

        mock.assert();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meanings[0].part_of_speech, "noun");
    }

    #[test]
    fn fetch_empty_array_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/entries/nothing");
            then.status(200).body("[]");
        });

        let dict = HttpDictionary::new(&server.url("/entries")).unwrap();
        assert!(dict.fetch_definitions("nothing").unwrap().is_empty());
    }

    #[test]
    fn fetch_not_found_object_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/entries/zzzz");
            then.status(404).body(
                r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"Try again"}"#,
            );
        });

        let dict = HttpDictionary::new(&server.url("/entries")).unwrap();
        let err = dict.fetch_definitions("zzzz").unwrap_err();

        assert!(matches!(err, DictlogError::MalformedResponse { .. }));
        assert!(err.to_string().contains("404"), "Error should mention 404: {}", err);
    }

    #[test]
    fn fetch_garbage_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/entries/quiz");
            then.status(200).body("<html>oops</html>");
        });

        let dict = HttpDictionary::new(&server.url("/entries")).unwrap();
        let err = dict.fetch_definitions("quiz").unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn fetch_connection_refused_is_transport() {
        // Port 1 is reserved and nothing listens there.
        let dict = HttpDictionary::new("http://127.0.0.1:1/entries").unwrap();
        let err = dict.fetch_definitions("quiz").unwrap_err();

        assert!(matches!(err, DictlogError::Transport { .. }));
        assert!(err.is_fatal());
    }
}
