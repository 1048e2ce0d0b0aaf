//! Profile repository trait defining the interface for profile persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

/// Repository contract for `Profile` persistence
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Profile))` - profile found
    /// * `Ok(None)` - no profile with the given id
    /// * `Err(DomainError)` - storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Persist a new profile
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Save an updated profile
    ///
    /// Fails with `DomainError::NotFound` when the profile does not exist.
    async fn update(&self, profile: Profile) -> Result<Profile, DomainError>;
}
