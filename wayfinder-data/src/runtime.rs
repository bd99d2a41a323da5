//! Blocking bridge between the synchronous provider traits and `reqwest`.
//!
//! Each adapter owns a current-thread runtime that is reused across calls.
//! When a call arrives from inside a multi-threaded Tokio runtime, that
//! runtime's handle is used through [`tokio::task::block_in_place`] instead,
//! which avoids the nested-runtime panic.
//!
//! Calls from inside a `current_thread` runtime fall back to the internal
//! runtime. This cannot panic, but it may deadlock if the caller's runtime
//! drives IO that the request depends on.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::ProviderBuildError;

pub(crate) struct BlockingRuntime {
    runtime: Runtime,
}

impl std::fmt::Debug for BlockingRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<tokio::runtime::Runtime>")
    }
}

impl BlockingRuntime {
    pub(crate) fn new() -> Result<Self, ProviderBuildError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self { runtime })
    }

    /// Drive `future` to completion on whichever runtime is safe to block.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

/// Build a client applying `timeout` to both connecting and the whole request.
pub(crate) fn build_client(timeout: Duration, user_agent: &str) -> Result<Client, ProviderBuildError> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(ProviderBuildError::HttpClient)
}

/// Join `path` onto `base_url`, tolerating a trailing slash on the base.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, ProviderBuildError> {
    let joined = format!("{}/{path}", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

/// Describe a `reqwest` failure for an error message.
pub(crate) fn describe_reqwest_error(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        return format!("request timed out after {timeout:?}");
    }
    if let Some(status) = error.status() {
        return format!("HTTP status {status}");
    }
    error.to_string()
}
