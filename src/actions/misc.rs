//! Version, permission, profile, package, and collection actions,
//! plus the raw `multi` passthrough.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::batch::{BatchQueue, Deferred};
use crate::client::AnkiClient;
use crate::error::Result;

/// Miscellaneous operations on the asynchronous client.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Miscellaneous operations queued on a batch scope.
///
/// Obtained via [`Batch::misc()`](crate::Batch::misc).
#[derive(Debug)]
pub struct BatchMisc<'a> {
    pub(crate) queue: &'a BatchQueue,
}

#[derive(Serialize)]
pub(crate) struct LoadProfileParams<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExportPackageParams<'a> {
    pub deck: &'a str,
    pub path: &'a str,
    pub include_sched: bool,
}

#[derive(Serialize)]
pub(crate) struct ImportPackageParams<'a> {
    pub path: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ApiReflectParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<&'a [&'a str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<&'a [&'a str]>,
}

#[derive(Serialize)]
pub(crate) struct MultiParams<'a> {
    pub actions: &'a [MultiAction<'a>],
}

/// A hand-assembled sub-action for the raw `multi` passthrough.
///
/// The typed [`Batch`](crate::Batch) API covers the wrapped actions;
/// this is for anything it does not.
#[derive(Debug, Clone, Serialize)]
pub struct MultiAction<'a> {
    /// The action name.
    pub action: &'a str,
    /// Optional parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl<'a> MultiAction<'a> {
    /// A sub-action without parameters.
    pub fn new(action: &'a str) -> Self {
        Self {
            action,
            params: None,
        }
    }

    /// A sub-action with parameters.
    pub fn with_params(action: &'a str, params: Value) -> Self {
        Self {
            action,
            params: Some(params),
        }
    }
}

/// Result of `requestPermission`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResult {
    /// `"granted"` or `"denied"`.
    pub permission: String,
    /// Whether requests must carry an API key.
    #[serde(default)]
    pub require_api_key: bool,
    /// API version, present when permission was granted.
    #[serde(default)]
    pub version: Option<u8>,
}

/// Result of `apiReflect`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReflectResult {
    /// Scopes reflection ran over.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Actions that exist, out of those asked about.
    #[serde(default)]
    pub actions: Vec<String>,
}

impl MiscActions<'_> {
    /// Get the AnkiConnect API version.
    ///
    /// The cheapest way to check that AnkiConnect is reachable.
    pub async fn version(&self) -> Result<u8> {
        self.client.invoke_without_params("version").await
    }

    /// Ask AnkiConnect for permission to use the API.
    ///
    /// Must be called once from origins AnkiConnect does not already
    /// trust; the user confirms in the Anki UI.
    pub async fn request_permission(&self) -> Result<PermissionResult> {
        self.client.invoke_without_params("requestPermission").await
    }

    /// Ask which API methods are available.
    pub async fn api_reflect(
        &self,
        scopes: Option<&[&str]>,
        actions: Option<&[&str]>,
    ) -> Result<ApiReflectResult> {
        self.client
            .invoke("apiReflect", ApiReflectParams { scopes, actions })
            .await
    }

    /// Synchronize the collection with AnkiWeb.
    pub async fn sync(&self) -> Result<()> {
        self.client.invoke_void_without_params("sync").await
    }

    /// List the available profiles.
    pub async fn profiles(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("getProfiles").await
    }

    /// Get the name of the open profile.
    pub async fn active_profile(&self) -> Result<String> {
        self.client.invoke_without_params("getActiveProfile").await
    }

    /// Switch to another profile.
    pub async fn load_profile(&self, name: &str) -> Result<bool> {
        self.client
            .invoke("loadProfile", LoadProfileParams { name })
            .await
    }

    /// Export a deck to an `.apkg` file.
    ///
    /// `include_sched` keeps the cards' scheduling state in the export.
    pub async fn export_package(
        &self,
        deck: &str,
        path: &str,
        include_sched: bool,
    ) -> Result<bool> {
        self.client
            .invoke(
                "exportPackage",
                ExportPackageParams {
                    deck,
                    path,
                    include_sched,
                },
            )
            .await
    }

    /// Import an `.apkg` file into the collection.
    ///
    /// The path is relative to Anki's `collection.media` folder.
    pub async fn import_package(&self, path: &str) -> Result<bool> {
        self.client
            .invoke("importPackage", ImportPackageParams { path })
            .await
    }

    /// Tell Anki to reload everything from the database.
    pub async fn reload_collection(&self) -> Result<()> {
        self.client
            .invoke_void_without_params("reloadCollection")
            .await
    }

    /// Send a hand-assembled `multi` request.
    ///
    /// Returns one raw value per sub-action, in order. Prefer
    /// [`AnkiClient::batch`](crate::AnkiClient::batch) for the typed
    /// version of this.
    pub async fn multi(&self, actions: &[MultiAction<'_>]) -> Result<Vec<Value>> {
        self.client.invoke("multi", MultiParams { actions }).await
    }
}

impl BatchMisc<'_> {
    /// Queue a version check.
    pub fn version(&self) -> Result<Deferred<u8>> {
        self.queue.push::<(), _>("version", None)
    }

    /// Queue a permission request.
    pub fn request_permission(&self) -> Result<Deferred<PermissionResult>> {
        self.queue.push::<(), _>("requestPermission", None)
    }

    /// Queue an API reflection lookup.
    pub fn api_reflect(
        &self,
        scopes: Option<&[&str]>,
        actions: Option<&[&str]>,
    ) -> Result<Deferred<ApiReflectResult>> {
        self.queue
            .push("apiReflect", Some(ApiReflectParams { scopes, actions }))
    }

    /// Queue a profile switch.
    pub fn load_profile(&self, name: &str) -> Result<Deferred<bool>> {
        self.queue
            .push("loadProfile", Some(LoadProfileParams { name }))
    }

    /// Queue a deck export.
    pub fn export_package(
        &self,
        deck: &str,
        path: &str,
        include_sched: bool,
    ) -> Result<Deferred<bool>> {
        self.queue.push(
            "exportPackage",
            Some(ExportPackageParams {
                deck,
                path,
                include_sched,
            }),
        )
    }

    /// Queue a package import.
    pub fn import_package(&self, path: &str) -> Result<Deferred<bool>> {
        self.queue
            .push("importPackage", Some(ImportPackageParams { path }))
    }

    /// Queue a sync.
    pub fn sync(&self) -> Result<Deferred<()>> {
        self.queue.push::<(), _>("sync", None)
    }

    /// Queue a profile listing.
    pub fn profiles(&self) -> Result<Deferred<Vec<String>>> {
        self.queue.push::<(), _>("getProfiles", None)
    }

    /// Queue an active-profile lookup.
    pub fn active_profile(&self) -> Result<Deferred<String>> {
        self.queue.push::<(), _>("getActiveProfile", None)
    }

    /// Queue a collection reload.
    pub fn reload_collection(&self) -> Result<Deferred<()>> {
        self.queue.push::<(), _>("reloadCollection", None)
    }
}
