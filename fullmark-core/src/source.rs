use std::{sync::Arc, time::Duration};

use ureq::Agent;
use url::Url;

use crate::{catalog::Year, error::Error};

/// Seam between the navigation state and the network, so tests can feed a
/// fixture catalog instead of hitting the endpoint.
pub trait FetchCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Arc<Year>>, Error>;
}

/// Unauthenticated client for the content document. One GET, whole tree,
/// no paging.
pub struct ContentSource {
    agent: Agent,
    endpoint: Url,
}

impl ContentSource {
    pub fn new(endpoint: Url) -> Self {
        let agent = Agent::config_builder().timeout_global(Some(Duration::from_secs(5)));
        Self {
            agent: agent.build().into(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FetchCatalog for ContentSource {
    fn fetch_catalog(&self) -> Result<Vec<Arc<Year>>, Error> {
        let mut response = self
            .agent
            .get(self.endpoint.as_str())
            .call()
            .map_err(|err| Error::FetchFailed(err.to_string()))?;
        response
            .body_mut()
            .read_json()
            .map_err(|err| Error::FetchFailed(err.to_string()))
    }
}
