use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::DirectoryUser;

/// Read-only access to the external user directory.
#[async_trait]
pub(crate) trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, DomainError>;
    async fn get_user(&self, id: i64) -> Result<DirectoryUser, DomainError>;
}
