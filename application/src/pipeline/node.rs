use super::PipelineError;
use async_trait::async_trait;
use tutor_domain::PipelineState;

/// One named step of the pipeline.
#[async_trait]
pub trait PipelineNode: Send + Sync {
    /// Node name used in logs and progress output
    fn name(&self) -> &'static str;

    /// Whether the node still runs after the state is resolved
    fn is_terminal(&self) -> bool {
        false
    }

    /// Advance the state
    async fn run(&self, state: &mut PipelineState) -> Result<(), PipelineError>;
}
