//! Forks resource: list the forks of a repository and create new ones.
//!
//! [`ForksClient`] is the resource adapter: it validates arguments,
//! delegates listing to the paginating [`Connection`] and creation to the
//! plain [`ForksApi`], and hands results back as lazy streams and
//! futures. Repositories are addressed either by `owner`/`name` or by
//! their numeric id; the `*_by_id` methods mirror their named
//! counterparts.
use crate::connection::Connection;
use crate::errors::{ensure_non_empty, GhForksError};
use crate::options::{ApiOptions, ForkListFilter};
use crate::repo::{NewFork, Repository};
use crate::urls;
use futures::Stream;
use std::sync::Arc;

/// Plain forks client: one request, one result.
#[derive(Clone)]
pub struct ForksApi {
    /// Connection used for single requests.
    connection: Arc<Connection>,
}

impl ForksApi {
    /// Create a forks client over `connection`.
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Create a fork of `owner/name`.
    ///
    /// The API queues the fork server-side and answers with the new
    /// repository record.
    ///
    /// # Errors
    /// Error if owner or name is empty, or if the request fails
    pub async fn create(
        &self,
        owner: &str,
        name: &str,
        new_fork: &NewFork,
    ) -> Result<Repository, GhForksError> {
        ensure_non_empty(owner, "owner")?;
        ensure_non_empty(name, "name")?;
        let body = serde_json::to_value(new_fork)?;
        log::debug!("creating fork of {owner}/{name}");
        self.connection
            .post(&urls::repository_forks(owner, name), body)
            .await
    }

    /// Create a fork of the repository with `id`.
    ///
    /// # Errors
    /// Error if the request fails
    pub async fn create_by_id(
        &self,
        id: u64,
        new_fork: &NewFork,
    ) -> Result<Repository, GhForksError> {
        let body = serde_json::to_value(new_fork)?;
        log::debug!("creating fork of repository {id}");
        self.connection
            .post(&urls::repository_forks_by_id(id), body)
            .await
    }

    /// Fetch one page of the forks of `owner/name`, without flattening.
    ///
    /// # Errors
    /// Error if owner or name is empty, or if the request fails
    pub async fn get_page(
        &self,
        owner: &str,
        name: &str,
        filter: Option<&ForkListFilter>,
        options: ApiOptions,
    ) -> Result<Vec<Repository>, GhForksError> {
        ensure_non_empty(owner, "owner")?;
        ensure_non_empty(name, "name")?;
        let mut params = filter.map(ForkListFilter::to_query).unwrap_or_default();
        if let Some(page_size) = options.page_size {
            params.push(("per_page".to_string(), page_size.to_string()));
        }
        if let Some(start_page) = options.start_page {
            params.push(("page".to_string(), start_page.to_string()));
        }
        self.connection
            .get(&urls::repository_forks(owner, name), &params)
            .await
    }
}

/// Forks resource adapter.
///
/// Composes the two collaborators injected at construction: the plain
/// [`ForksApi`] for create requests and the paginating [`Connection`]
/// for list requests. Each call is stateless; validation happens before
/// any network work is scheduled.
#[derive(Clone)]
pub struct ForksClient {
    /// Plain client performing the create requests.
    api: ForksApi,
    /// Paginating connection performing the list requests.
    connection: Arc<Connection>,
}

impl ForksClient {
    /// Create an adapter over its two collaborators.
    pub(crate) fn new(api: ForksApi, connection: Arc<Connection>) -> Self {
        Self { api, connection }
    }

    /// List all forks of `owner/name` with server defaults.
    ///
    /// # Errors
    /// Error if owner or name is empty
    pub fn list_all(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<impl Stream<Item = Result<Repository, GhForksError>> + Send, GhForksError> {
        self.list(owner, name, None, ApiOptions::default())
    }

    /// List all forks of the repository with `id` with server defaults.
    ///
    /// # Errors
    /// Error if the stream can't be constructed
    pub fn list_all_by_id(
        &self,
        id: u64,
    ) -> Result<impl Stream<Item = Result<Repository, GhForksError>> + Send, GhForksError> {
        self.list_by_id(id, None, ApiOptions::default())
    }

    /// List the forks of `owner/name`.
    ///
    /// Every page is fetched and flattened into one lazy sequence, in
    /// page order; nothing is requested before the stream is polled.
    ///
    /// # Errors
    /// Error if owner or name is empty
    pub fn list(
        &self,
        owner: &str,
        name: &str,
        filter: Option<&ForkListFilter>,
        options: ApiOptions,
    ) -> Result<impl Stream<Item = Result<Repository, GhForksError>> + Send, GhForksError> {
        ensure_non_empty(owner, "owner")?;
        ensure_non_empty(name, "name")?;
        let params = filter.map(ForkListFilter::to_query).unwrap_or_default();
        Ok(self
            .connection
            .get_all_pages(urls::repository_forks(owner, name), params, options))
    }

    /// List the forks of the repository with `id`.
    ///
    /// Id validity is the server's concern and is not checked here.
    ///
    /// # Errors
    /// Error if the stream can't be constructed
    pub fn list_by_id(
        &self,
        id: u64,
        filter: Option<&ForkListFilter>,
        options: ApiOptions,
    ) -> Result<impl Stream<Item = Result<Repository, GhForksError>> + Send, GhForksError> {
        let params = filter.map(ForkListFilter::to_query).unwrap_or_default();
        Ok(self
            .connection
            .get_all_pages(urls::repository_forks_by_id(id), params, options))
    }

    /// Create a fork of `owner/name`.
    ///
    /// # Errors
    /// Error if owner or name is empty, or if the request fails
    pub async fn create(
        &self,
        owner: &str,
        name: &str,
        new_fork: &NewFork,
    ) -> Result<Repository, GhForksError> {
        self.api.create(owner, name, new_fork).await
    }

    /// Create a fork of the repository with `id`.
    ///
    /// # Errors
    /// Error if the request fails
    pub async fn create_by_id(
        &self,
        id: u64,
        new_fork: &NewFork,
    ) -> Result<Repository, GhForksError> {
        self.api.create_by_id(id, new_fork).await
    }
}
