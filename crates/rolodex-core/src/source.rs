// ── Data source seam ──
//
// Stores never talk to HTTP directly; they go through `PeopleSource` so
// tests can substitute an in-memory or deliberately slow implementation.

use async_trait::async_trait;
use tracing::debug;

use rolodex_api::DirectoryClient;

use crate::error::CoreError;
use crate::model::{Person, PersonId};

/// Where directory records come from.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// Every record, in server order.
    async fn list_people(&self) -> Result<Vec<Person>, CoreError>;

    /// One record by identifier.
    async fn get_person(&self, id: &PersonId) -> Result<Person, CoreError>;
}

#[async_trait]
impl PeopleSource for DirectoryClient {
    async fn list_people(&self) -> Result<Vec<Person>, CoreError> {
        let users = self.list_users().await?;
        debug!(count = users.len(), "fetched directory");
        Ok(users.into_iter().map(Person::from).collect())
    }

    async fn get_person(&self, id: &PersonId) -> Result<Person, CoreError> {
        let identifier = id.to_string();
        match self.get_user(&identifier).await {
            Ok(user) => Ok(Person::from(user)),
            Err(e) if e.is_not_found() => Err(CoreError::PersonNotFound { identifier }),
            Err(e) => Err(e.into()),
        }
    }
}
