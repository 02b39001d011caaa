//! Environment-variable names, header names, and connection defaults.
//!
//! These values are consumed bit-exact by the Weaviate service and must not
//! be transformed.

/// Environment variable holding the Weaviate Cloud instance URL.
pub const WEAVIATE_URL_VAR: &str = "WEAVIATE_URL";

/// Environment variable holding the Weaviate Cloud instance API key.
pub const WEAVIATE_API_KEY_VAR: &str = "WEAVIATE_API_KEY";

/// Environment variable holding the Cohere API key forwarded to Weaviate.
pub const COHERE_API_KEY_VAR: &str = "COHERE_API_KEY";

/// Header under which the Cohere credential is forwarded on every request.
pub const COHERE_API_KEY_HEADER: &str = "X-Cohere-Api-Key";

/// Transport scheme for cloud connections.
pub const CLOUD_SCHEME: &str = "https";

/// Transport scheme for unauthenticated local connections.
pub const LOCAL_SCHEME: &str = "http";

/// Default host for unauthenticated local connections.
pub const LOCAL_HOST: &str = "localhost:8080";
