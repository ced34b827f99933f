use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;

use quiz_core::QuizDocument;

use crate::error::SourceError;
use crate::sample::SAMPLE_QUIZ_JSON;

pub const ENV_QUIZ_FILE: &str = "QUIZ_FILE";
pub const ENV_QUIZ_API_URL: &str = "QUIZ_API_URL";
pub const ENV_QUIZ_USE_SAMPLE: &str = "QUIZ_USE_SAMPLE";

/// Where a quiz document comes from.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Fetch and parse the document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for I/O, transport, status or parse failures.
    async fn fetch(&self) -> Result<QuizDocument, SourceError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

//
// ─── FILE ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuizSource for FileSource {
    async fn fetch(&self) -> Result<QuizDocument, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(QuizDocument::from_json(&text)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

//
// ─── HTTP ──────────────────────────────────────────────────────────────────────
//

/// Fetches `{base_url}/quiz`.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/quiz", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuizSource for HttpSource {
    async fn fetch(&self) -> Result<QuizDocument, SourceError> {
        let response = self.client.get(self.url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus(status));
        }
        let text = response.text().await?;
        Ok(QuizDocument::from_json(&text)?)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url())
    }
}

//
// ─── STATIC ────────────────────────────────────────────────────────────────────
//

/// JSON text held in memory.
#[derive(Clone, Debug)]
pub struct StaticSource {
    label: String,
    json: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(label: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            json: json.into(),
        }
    }

    /// The built-in "Error Find" quiz.
    #[must_use]
    pub fn sample() -> Self {
        Self::new("built-in sample", SAMPLE_QUIZ_JSON)
    }
}

#[async_trait]
impl QuizSource for StaticSource {
    async fn fetch(&self) -> Result<QuizDocument, SourceError> {
        Ok(QuizDocument::from_json(&self.json)?)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Which source to load from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SourceConfig {
    #[default]
    Sample,
    File(PathBuf),
    Http {
        base_url: String,
    },
}

impl SourceConfig {
    /// Read `QUIZ_USE_SAMPLE`, `QUIZ_FILE` and `QUIZ_API_URL`, in that precedence.
    ///
    /// Falls back to the sample when nothing is set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if non_empty(ENV_QUIZ_USE_SAMPLE).is_some_and(|value| value.trim() == "true") {
            return Self::Sample;
        }
        if let Some(path) = non_empty(ENV_QUIZ_FILE) {
            return Self::File(PathBuf::from(path));
        }
        if let Some(base_url) = non_empty(ENV_QUIZ_API_URL) {
            return Self::Http { base_url };
        }
        Self::Sample
    }

    #[must_use]
    pub fn into_source(self) -> Box<dyn QuizSource> {
        match self {
            SourceConfig::Sample => Box::new(StaticSource::sample()),
            SourceConfig::File(path) => Box::new(FileSource::new(path)),
            SourceConfig::Http { base_url } => Box::new(HttpSource::new(base_url)),
        }
    }
}
