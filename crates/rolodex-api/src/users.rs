// `/users` endpoints
//
// The directory exposes exactly two reads: the full list and a single
// record by identifier.

use tracing::debug;

use crate::client::DirectoryClient;
use crate::error::Error;
use crate::models::User;

impl DirectoryClient {
    /// List every person in the directory, in server order.
    ///
    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let url = self.url(&["users"])?;
        debug!("listing users");
        self.get(url).await
    }

    /// Fetch a single person.
    ///
    /// `GET /users/{id}`. A `404` surfaces as [`Error::NotFound`].
    pub async fn get_user(&self, id: &str) -> Result<User, Error> {
        let url = self.url(&["users", id])?;
        debug!(id, "fetching user");
        self.get(url).await
    }
}
