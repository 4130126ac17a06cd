//! The directory client: fetch, map, and look up employee records.

use serde_json::Value;
use staffdir_core::{Error, Result, employee::Employee};
use std::time::Duration;

/// Connection settings for the directory endpoint.
///
/// The endpoint URL is opaque to this layer — whatever configuration
/// mechanism produced it, it is used verbatim.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub endpoint: String,
}

/// Async HTTP client for the employee directory.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Each call
/// performs one independent request; nothing is cached between calls.
#[derive(Clone)]
pub struct DirectoryClient {
  client: reqwest::Client,
  config: ClientConfig,
}

impl DirectoryClient {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .map_err(|e| {
        tracing::warn!(error = %e, "failed to build HTTP client");
        Error::Retrieval
      })?;
    Ok(Self { client, config })
  }

  /// Fetch the full employee collection.
  ///
  /// The success body is expected to nest the collection as
  /// `{ "record": { "Employees": [ … ] } }`. A body without that path fails
  /// with [`Error::NoEmployees`]; transport failures, non-success statuses,
  /// and parse failures all collapse into [`Error::Retrieval`]. Entities are
  /// returned in source order, invalid records included — validity is the
  /// caller's concern.
  pub async fn fetch_all(&self) -> Result<Vec<Employee>> {
    let resp = self
      .client
      .get(&self.config.endpoint)
      .send()
      .await
      .map_err(|e| {
        tracing::warn!(error = %e, "directory request failed");
        Error::Retrieval
      })?;

    // A failed response's body is never treated as a collection.
    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(%status, "directory responded with non-success status");
      return Err(Error::Retrieval);
    }

    let body: Value = resp.json().await.map_err(|e| {
      tracing::warn!(error = %e, "directory response was not valid JSON");
      Error::Retrieval
    })?;

    let records = body
      .get("record")
      .and_then(|record| record.get("Employees"))
      .and_then(Value::as_array)
      .ok_or(Error::NoEmployees)?;

    let employees = records
      .iter()
      .map(|raw| {
        serde_json::from_value::<Employee>(raw.clone()).map_err(|e| {
          tracing::warn!(error = %e, "malformed employee record");
          Error::Retrieval
        })
      })
      .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = employees.len(), "fetched employee collection");
    Ok(employees)
  }

  /// Fetch a single employee by identifier.
  ///
  /// Delegates to [`Self::fetch_all`] and scans for the first entity whose
  /// identifier matches exactly — no normalisation, first match wins if the
  /// source carries duplicates. Any collection failure is reported as
  /// [`Error::Retrieval`] so callers see one error vocabulary regardless of
  /// which stage failed.
  pub async fn fetch_one(&self, id: &str) -> Result<Employee> {
    let employees = self.fetch_all().await.map_err(|_| Error::Retrieval)?;
    employees
      .into_iter()
      .find(|e| e.id.as_deref() == Some(id))
      .ok_or(Error::EmployeeNotFound)
  }
}
