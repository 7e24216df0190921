//! Tracker API request and response models.
//!
//! JSON bodies follow the tracker's v5 REST surface: flat resources, no
//! envelope, label references nested by name on create.

use serde::{Deserialize, Serialize};

// ============================================================================
// Response resources
// ============================================================================

/// Epic resource from the API.
#[derive(Debug, Deserialize)]
pub struct EpicResource {
    /// Epic ID.
    pub id: u64,
    /// Epic name.
    pub name: String,
    /// Web URL of the epic.
    pub url: String,
    /// Attached version label, when present.
    pub label: Option<LabelResource>,
}

/// Label resource from the API.
#[derive(Debug, Deserialize)]
pub struct LabelResource {
    /// Label ID.
    pub id: u64,
    /// Label name, e.g. `"v2.4.1"`.
    pub name: String,
}

/// Story resource from the API.
#[derive(Debug, Deserialize)]
pub struct StoryResource {
    /// Story ID.
    pub id: u64,
    /// Story name.
    pub name: String,
    /// Story type, e.g. `"release"`.
    pub story_type: String,
}

// ============================================================================
// Request bodies
// ============================================================================

/// Label reference used when creating epics and stories.
#[derive(Debug, Serialize)]
pub struct LabelName {
    /// Label name; the service creates the label if it does not exist.
    pub name: String,
}

/// Body for `POST /projects/{project}/epics`.
#[derive(Debug, Serialize)]
pub struct CreateEpicBody {
    /// Epic name.
    pub name: String,
    /// Version label to attach.
    pub label: LabelName,
}

/// Body for `POST /projects/{project}/stories`.
#[derive(Debug, Serialize)]
pub struct CreateStoryBody {
    /// Story name.
    pub name: String,
    /// Story type; always `"release"` here.
    pub story_type: String,
    /// Version labels to attach.
    pub labels: Vec<LabelName>,
    /// Users owning the story.
    pub owner_ids: Vec<u64>,
    /// User the story is requested by.
    pub requested_by_id: u64,
}
