//! Tracker v5 API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::models::{
    CreateEpicBody, CreateStoryBody, EpicResource, LabelName, LabelResource, StoryResource,
};
use crate::tracker::traits::{Epic, EpicRepository, Label, Story, TrackerConfig, TrackerError};
use crate::version::Version;

/// Base URL for the tracker v5 API.
const API_BASE_URL: &str = "https://www.pivotaltracker.com/services/v5";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tracker API client for a single project.
#[derive(Clone)]
pub struct TrackerClient {
    /// HTTP client.
    client: Client,
    /// API base URL; the production constant unless overridden for tests.
    base_url: String,
    /// Credentials and project addressing.
    config: TrackerConfig,
}

impl TrackerClient {
    /// Create a new client for the project named in `config`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
            config,
        })
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Path prefix for the configured project.
    fn project_path(&self, suffix: &str) -> String {
        format!("/projects/{}{}", self.config.project_id, suffix)
    }

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TrackerError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET request");

        let response = self
            .client
            .get(&url)
            .header("X-TrackerToken", &self.config.token)
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, TrackerError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST request");

        let response = self
            .client
            .post(&url)
            .header("X-TrackerToken", &self.config.token)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response, parsing JSON or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TrackerError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse response");
                TrackerError::Serialization(e)
            })
        } else {
            Err(TrackerError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Convert an epic resource to our Epic type.
    fn to_epic(epic: EpicResource) -> Epic {
        Epic {
            id: epic.id,
            name: epic.name,
            url: epic.url,
            label: epic.label.map(Self::to_label),
        }
    }

    /// Convert a label resource to our Label type.
    fn to_label(label: LabelResource) -> Label {
        Label {
            id: label.id,
            name: label.name,
        }
    }
}

#[async_trait]
impl EpicRepository for TrackerClient {
    async fn list_release_epics(&self) -> Result<Vec<Epic>, TrackerError> {
        let epics: Vec<EpicResource> = self
            .get(&self.project_path("/epics"), &[("filter", "name:release")])
            .await?;

        Ok(epics.into_iter().map(Self::to_epic).collect())
    }

    async fn find_epic_by_version(&self, version: Version) -> Result<Option<Epic>, TrackerError> {
        let filter = format!("name:?{version}");
        let epics: Vec<EpicResource> = self
            .get(&self.project_path("/epics"), &[("filter", &filter)])
            .await?;

        Ok(epics.into_iter().next().map(Self::to_epic))
    }

    async fn create_epic(&self, name: &str, label_name: &str) -> Result<Epic, TrackerError> {
        let body = CreateEpicBody {
            name: name.to_string(),
            label: LabelName {
                name: label_name.to_string(),
            },
        };

        let epic: EpicResource = self.post(&self.project_path("/epics"), &body).await?;
        Ok(Self::to_epic(epic))
    }

    async fn create_release_story(
        &self,
        version: Version,
        owner_id: u64,
        requester_id: u64,
    ) -> Result<Story, TrackerError> {
        let body = CreateStoryBody {
            name: format!("release {version}"),
            story_type: "release".to_string(),
            labels: vec![LabelName {
                name: format!("v{version}"),
            }],
            owner_ids: vec![owner_id],
            requested_by_id: requester_id,
        };

        let story: StoryResource = self.post(&self.project_path("/stories"), &body).await?;
        Ok(Story {
            id: story.id,
            name: story.name,
            story_type: story.story_type,
        })
    }

    async fn find_version_label(&self, version: Version) -> Result<Option<Label>, TrackerError> {
        let labels: Vec<LabelResource> = self.get(&self.project_path("/labels"), &[]).await?;

        let search = format!("v{version}");
        Ok(labels
            .into_iter()
            .find(|label| label.name == search)
            .map(Self::to_label))
    }
}
