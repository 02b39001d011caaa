//! Connect to a Weaviate Cloud instance with an API key.
//!
//! Set these environment variables before running:
//!   WEAVIATE_URL      your instance URL
//!   WEAVIATE_API_KEY  your instance API key

use std::error::Error;
use weaviate_bootstrap::{
    connect_to_cloud, ApiKey, ClientFactory, ConnectionParameters, ProcessEnvironment, Result,
};

/// Stand-in for a real client library; prints the configuration it receives.
struct PrintingFactory;

impl ClientFactory for PrintingFactory {
    type Handle = ();

    fn connect(&self, params: ConnectionParameters, api_key: ApiKey) -> Result<()> {
        println!("Connecting to {}://{}", params.scheme, params.host);
        println!("Credential: {:?}", api_key);
        Ok(())
    }

    fn connect_anonymous(&self, params: ConnectionParameters) -> Result<()> {
        println!("Connecting to {}://{} (anonymous)", params.scheme, params.host);
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    connect_to_cloud(&ProcessEnvironment, &PrintingFactory)?;
    Ok(())
}
