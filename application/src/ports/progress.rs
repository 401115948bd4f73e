//! Progress notification port
//!
//! Defines the interface for reporting progress while a question moves
//! through the pipeline.

use tutor_domain::PipelineState;

/// Callback for progress updates during pipeline execution
///
/// Implementations live in the presentation layer.
pub trait PipelineProgress: Send + Sync {
    /// Called before a node runs
    fn on_node_start(&self, node: &str);

    /// Called after a node has run
    fn on_node_complete(&self, node: &str, state: &PipelineState);

    /// Called when a node is skipped because the state is already resolved
    fn on_node_skipped(&self, _node: &str) {}

    /// Called once the pipeline has finished, successfully or not
    fn on_pipeline_finished(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PipelineProgress for NoProgress {
    fn on_node_start(&self, _node: &str) {}
    fn on_node_complete(&self, _node: &str, _state: &PipelineState) {}
}
