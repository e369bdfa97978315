use async_trait::async_trait;

#[async_trait]
pub trait GetItemCountUseCase: Send + Sync {
    async fn execute(&self) -> usize;
}
