use crate::data::user_directory::UserDirectory;
use crate::domain::error::DomainError;
use crate::domain::user::UserProfile;

/// Passthrough to the external user directory, reshaping every record
/// with the deterministic portrait URL.
pub(crate) struct UserService<D: UserDirectory> {
    directory: D,
}

impl<D: UserDirectory> UserService<D> {
    pub(crate) fn new(directory: D) -> Self {
        Self { directory }
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<UserProfile>, DomainError> {
        let users = self.directory.list_users().await?;
        Ok(users.into_iter().map(UserProfile::from_directory).collect())
    }

    pub(crate) async fn get_user(&self, id: i64) -> Result<UserProfile, DomainError> {
        let user = self.directory.get_user(id).await?;
        Ok(UserProfile::from_directory(user))
    }
}
