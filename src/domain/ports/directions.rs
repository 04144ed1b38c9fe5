use async_trait::async_trait;

use crate::domain::{errors::DomainError, Route};

#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn routes(&self, origin: &str, destination: &str) -> Result<Vec<Route>, DomainError>;
}
