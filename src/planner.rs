//! Release planning: infer the next version from existing epics and make
//! sure an epic (and its release story) exists for it.

use tracing::{debug, info};

use crate::tracker::{Epic, EpicRepository, Story, TrackerError};
use crate::version::Version;

/// Planning action, one per CLI entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bump the minor component for the next release.
    NextRelease,
    /// Bump the patch component for the next hotfix.
    NextHotfix,
}

/// Result of ensuring an epic exists for a version.
#[derive(Debug, Clone)]
pub enum EpicOutcome {
    /// A new epic and its release story were created.
    Created {
        /// The version the epic tracks.
        version: Version,
        /// The created epic.
        epic: Epic,
        /// The created release story.
        story: Story,
    },
    /// An epic for this version already existed; nothing was created.
    AlreadyExists {
        /// The version the epic tracks.
        version: Version,
        /// The pre-existing epic.
        epic: Epic,
    },
}

/// Orchestrates version inference and epic creation over an [`EpicRepository`].
pub struct ReleasePlanner<R> {
    repository: R,
    /// Owner and requester for created release stories.
    user_id: u64,
}

impl<R: EpicRepository> ReleasePlanner<R> {
    /// Create a planner backed by the given repository.
    #[must_use]
    pub const fn new(repository: R, user_id: u64) -> Self {
        Self {
            repository,
            user_id,
        }
    }

    /// The highest version embedded in any release epic's name, or `0.0.0`
    /// when no epic carries one. Names without an extractable version are
    /// skipped, not errors.
    ///
    /// # Errors
    /// Returns error if listing epics fails.
    pub async fn latest_version(&self) -> Result<Version, TrackerError> {
        let epics = self.repository.list_release_epics().await?;

        let latest = epics
            .iter()
            .filter_map(|epic| Version::extract(&epic.name))
            .fold(Version::ZERO, Version::newest);

        debug!(latest = %latest, epics = epics.len(), "Scanned release epics");
        Ok(latest)
    }

    /// The version the next release should carry.
    ///
    /// # Errors
    /// Returns error if listing epics fails.
    pub async fn plan_next_release(&self) -> Result<Version, TrackerError> {
        Ok(self.latest_version().await?.bump_minor())
    }

    /// The version the next hotfix should carry.
    ///
    /// # Errors
    /// Returns error if listing epics fails.
    pub async fn plan_next_hotfix(&self) -> Result<Version, TrackerError> {
        Ok(self.latest_version().await?.bump_patch())
    }

    /// Make sure an epic exists for `version`.
    ///
    /// If one already exists nothing is mutated. Otherwise an epic named
    /// `Release v<version>` is created with label `v<version>`, followed by
    /// its release story. The two creations are not atomic: a story failure
    /// leaves the epic in place and surfaces as an error.
    ///
    /// # Errors
    /// Returns error if any tracker call fails.
    pub async fn ensure_epic_for(&self, version: Version) -> Result<EpicOutcome, TrackerError> {
        if let Some(epic) = self.repository.find_epic_by_version(version).await? {
            info!(version = %version, url = %epic.url, "Epic already exists");
            return Ok(EpicOutcome::AlreadyExists { version, epic });
        }

        info!(version = %version, "Creating epic");
        let name = format!("Release v{version}");
        let label_name = format!("v{version}");
        let epic = self.repository.create_epic(&name, &label_name).await?;

        let story = self
            .repository
            .create_release_story(version, self.user_id, self.user_id)
            .await?;

        info!(version = %version, url = %epic.url, "Epic created");
        Ok(EpicOutcome::Created {
            version,
            epic,
            story,
        })
    }

    /// Run one planning action end to end: infer the latest version, bump it
    /// for the action, and ensure the epic exists.
    ///
    /// # Errors
    /// Returns error if any tracker call fails.
    pub async fn run(&self, action: Action) -> Result<EpicOutcome, TrackerError> {
        let version = match action {
            Action::NextRelease => self.plan_next_release().await?,
            Action::NextHotfix => self.plan_next_hotfix().await?,
        };

        self.ensure_epic_for(version).await
    }
}
