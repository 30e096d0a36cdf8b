use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::shared::content::ContentError;

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<Portfolio, ContentError>;
}
