//! The asynchronous AnkiConnect client and its builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::actions::{
    CardActions, DeckActions, GuiActions, MiscActions, NoteActions, StatisticsActions,
};
use crate::batch::Batch;
use crate::error::Result;
use crate::request::{AnkiRequest, AnkiResponse, transport_error};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The asynchronous client for AnkiConnect.
///
/// # Example
///
/// ```no_run
/// use ranki::AnkiClient;
///
/// # async fn example() -> ranki::Result<()> {
/// let client = AnkiClient::new();
///
/// let version = client.misc().version().await?;
/// println!("AnkiConnect version: {version}");
///
/// let due = client.cards().find("is:due").await?;
/// println!("{} cards due", due.len());
/// # Ok(())
/// # }
/// ```
///
/// To coalesce several calls into a single HTTP request, see
/// [`AnkiClient::batch`].
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnkiClient {
    /// Create a client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access GUI operations.
    pub fn gui(&self) -> GuiActions<'_> {
        GuiActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access miscellaneous operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// Access statistics operations.
    pub fn statistics(&self) -> StatisticsActions<'_> {
        StatisticsActions { client: self }
    }

    /// Open a batch scope.
    ///
    /// Calls made through the batch are queued instead of sent; one
    /// combined `multi` request goes out on [`Batch::dispatch`] or on
    /// the first [`Batch::resolve`] of a pending handle.
    ///
    /// ```no_run
    /// # use ranki::AnkiClient;
    /// # async fn example() -> ranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let batch = client.batch();
    ///
    /// let due = batch.cards().find("is:due")?;
    /// let names = batch.decks().names()?;
    ///
    /// // one HTTP request resolves both
    /// let due = batch.resolve(due).await?;
    /// let names = batch.resolve(names).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn batch(&self) -> Batch<'_> {
        Batch::new(self)
    }

    /// Execute an action without parameters.
    pub(crate) async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        self.send_request(&request).await?.into_result()
    }

    /// Execute an action with parameters.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, params, self.api_key.as_deref());
        self.send_request(&request).await?.into_result()
    }

    /// Execute an action that returns null on success.
    pub(crate) async fn invoke_void<P>(&self, action: &str, params: P) -> Result<()>
    where
        P: Serialize,
    {
        let request = AnkiRequest::new(action, params, self.api_key.as_deref());
        self.send_request::<_, serde_json::Value>(&request)
            .await?
            .into_void()
    }

    /// Execute an action without parameters that returns null on success.
    pub(crate) async fn invoke_void_without_params(&self, action: &str) -> Result<()> {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        self.send_request::<_, serde_json::Value>(&request)
            .await?
            .into_void()
    }

    /// Execute an action without parameters where null is a valid result.
    pub(crate) async fn invoke_nullable_without_params<R>(&self, action: &str) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        self.send_request(&request).await?.into_nullable()
    }

    /// Perform the HTTP round trip, leaving result/error handling to
    /// the caller.
    async fn send_request<T, R>(&self, request: &AnkiRequest<'_, T>) -> Result<AnkiResponse<R>>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        debug!(action = request.action, "sending AnkiConnect request");
        let response = self
            .http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let response: AnkiResponse<R> = response.json().await?;
        if let Some(err) = &response.error {
            debug!(action = request.action, error = %err, "AnkiConnect reported an error");
        }
        Ok(response)
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ranki::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    ///
    /// Only needed when AnkiConnect is configured to require one.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to build HTTP client");

        AnkiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
