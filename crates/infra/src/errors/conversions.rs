//! Conversions from external infrastructure errors into domain errors.

use jobboard_domain::JobBoardError;
use keyring::Error as KeyringError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub JobBoardError);

impl From<InfraError> for JobBoardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<JobBoardError> for InfraError {
    fn from(value: JobBoardError) -> Self {
        Self(value)
    }
}

trait IntoJobBoardError {
    fn into_jobboard(self) -> JobBoardError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → JobBoardError */
/* -------------------------------------------------------------------------- */

impl IntoJobBoardError for KeyringError {
    fn into_jobboard(self) -> JobBoardError {
        use KeyringError::{
            Ambiguous, BadEncoding, Invalid, NoEntry, NoStorageAccess, PlatformFailure, TooLong,
        };

        let description = self.to_string();

        match self {
            NoEntry => JobBoardError::Storage("keychain entry not found".into()),
            BadEncoding(_) => {
                JobBoardError::Storage("stored session value is not valid UTF-8".into())
            }
            TooLong(name, limit) => JobBoardError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                JobBoardError::Storage(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            Ambiguous(entries) => JobBoardError::Storage(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => JobBoardError::Storage(format!("keychain platform error: {err}")),
            NoStorageAccess(err) => {
                JobBoardError::Storage(format!("session storage is unavailable: {err}"))
            }
            _ => JobBoardError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        Self(value.into_jobboard())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → JobBoardError */
/* -------------------------------------------------------------------------- */

impl IntoJobBoardError for HttpError {
    fn into_jobboard(self) -> JobBoardError {
        if self.is_builder() {
            return JobBoardError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_timeout() {
            return JobBoardError::Timeout("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return JobBoardError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return JobBoardError::Internal(format!("failed to decode HTTP body: {self}"));
        }

        JobBoardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_jobboard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    #[test]
    fn keyring_no_entry_maps_to_storage_error() {
        let mapped: JobBoardError = InfraError::from(KeyringError::NoEntry).into();
        match mapped {
            JobBoardError::Storage(msg) => assert!(msg.contains("keychain")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: JobBoardError = InfraError::from(error).into();
        assert!(matches!(mapped, JobBoardError::Network(_)), "got {mapped:?}");
    }

    #[tokio::test]
    async fn malformed_url_maps_to_invalid_input() {
        let client = reqwest::Client::new();
        let error = client.get("not a url").send().await.unwrap_err();

        let mapped: JobBoardError = InfraError::from(error).into();
        assert!(matches!(mapped, JobBoardError::InvalidInput(_)), "got {mapped:?}");
    }
}
