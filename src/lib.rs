//! # weaviate-bootstrap
//!
//! Bootstrap helpers for connecting to a Weaviate instance with API-key
//! authentication. This crate reads connection parameters from an
//! environment source, assembles an immutable configuration value, and hands
//! it to an external authenticating factory that produces the actual client.
//! The client itself, its transport, and the authentication protocol are the
//! factory's responsibility.
//!
//! ## Usage
//!
//! ```rust
//! use weaviate_bootstrap::{
//!     connect_to_cloud, ApiKey, ClientFactory, ConnectionParameters,
//!     ProcessEnvironment, Result,
//! };
//!
//! // Any client library can sit behind the factory seam.
//! struct PrintingFactory;
//!
//! impl ClientFactory for PrintingFactory {
//!     type Handle = ();
//!
//!     fn connect(&self, params: ConnectionParameters, _api_key: ApiKey) -> Result<()> {
//!         println!("would connect to {}://{}", params.scheme, params.host);
//!         Ok(())
//!     }
//!
//!     fn connect_anonymous(&self, params: ConnectionParameters) -> Result<()> {
//!         println!("would connect to {}://{}", params.scheme, params.host);
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     // Set WEAVIATE_URL and WEAVIATE_API_KEY before running; set
//!     // COHERE_API_KEY as well to forward it as X-Cohere-Api-Key.
//!     let _handle = connect_to_cloud(&ProcessEnvironment, &PrintingFactory)?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;

pub use client::{cloud_config, connect_to_cloud, connect_to_local, ClientFactory};
pub use config::{ApiKey, ConnectionParameters};
pub use env::{EnvironmentReader, MapEnvironment, ProcessEnvironment};
pub use error::{ClientError, Result};
