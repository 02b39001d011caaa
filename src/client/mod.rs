//! Client bootstrap: assemble connection parameters from an environment
//! source and hand them to an external authenticating factory.

use log::debug;
use std::collections::HashMap;

use crate::config::{ApiKey, ConnectionParameters};
use crate::constants::{
    COHERE_API_KEY_HEADER, COHERE_API_KEY_VAR, WEAVIATE_API_KEY_VAR, WEAVIATE_URL_VAR,
};
use crate::env::EnvironmentReader;
use crate::error::Result;

/// External factory that turns connection parameters into a live client.
///
/// Implementations own the transport, authentication protocol, and any
/// network I/O; this crate only constructs what they consume. Failures
/// surface unchanged through [`crate::ClientError::Factory`].
pub trait ClientFactory {
    /// Opaque authenticated client produced by the factory.
    type Handle;

    /// Connect with an API-key credential.
    fn connect(&self, params: ConnectionParameters, api_key: ApiKey) -> Result<Self::Handle>;

    /// Connect without credentials (local instances).
    fn connect_anonymous(&self, params: ConnectionParameters) -> Result<Self::Handle>;
}

/// Assemble cloud connection parameters and credential from the environment.
///
/// `WEAVIATE_URL` and `WEAVIATE_API_KEY` are taken verbatim; unset variables
/// yield empty strings, which flow downstream unvalidated. When
/// `COHERE_API_KEY` is set, the parameters carry exactly one additional
/// header, `X-Cohere-Api-Key`, with its value.
pub fn cloud_config<E: EnvironmentReader>(env: &E) -> (ConnectionParameters, ApiKey) {
    let host = env.var(WEAVIATE_URL_VAR).unwrap_or_default();
    let api_key = ApiKey::new(env.var(WEAVIATE_API_KEY_VAR).unwrap_or_default());

    let mut params = ConnectionParameters::new(host);
    if let Some(cohere_key) = env.var(COHERE_API_KEY_VAR) {
        let mut headers = HashMap::new();
        headers.insert(COHERE_API_KEY_HEADER.to_string(), cohere_key);
        params = params.with_headers(headers);
    }

    (params, api_key)
}

/// Connect to a Weaviate Cloud instance using environment-supplied
/// configuration.
///
/// Reads `WEAVIATE_URL` and `WEAVIATE_API_KEY` from `env`, forwards
/// `COHERE_API_KEY` as a header when present, and returns whatever handle
/// the factory produces. No retries, no validation, no caching.
pub fn connect_to_cloud<E, F>(env: &E, factory: &F) -> Result<F::Handle>
where
    E: EnvironmentReader,
    F: ClientFactory,
{
    let (params, api_key) = cloud_config(env);
    debug!(
        "connecting to {}://{} (third-party headers: {})",
        params.scheme,
        params.host,
        params.headers.is_some()
    );
    factory.connect(params, api_key)
}

/// Connect to a local, unauthenticated Weaviate instance.
pub fn connect_to_local<F: ClientFactory>(factory: &F) -> Result<F::Handle> {
    let params = ConnectionParameters::local();
    debug!("connecting to {}://{} (anonymous)", params.scheme, params.host);
    factory.connect_anonymous(params)
}
