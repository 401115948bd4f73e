//! Straight-line runner for pipeline nodes

use super::{PipelineError, PipelineNode};
use crate::ports::progress::PipelineProgress;
use tracing::debug;
use tutor_domain::PipelineState;

/// Nodes executed one after another, entry first.
pub struct LinearPipeline {
    nodes: Vec<Box<dyn PipelineNode>>,
}

impl LinearPipeline {
    pub fn builder() -> LinearPipelineBuilder {
        LinearPipelineBuilder { nodes: Vec::new() }
    }

    /// Node names in execution order
    pub fn node_names(&self) -> Vec<&'static str> {
        self.nodes.iter().map(|n| n.name()).collect()
    }

    /// Run every node against `state` and return the final state.
    pub async fn invoke(
        &self,
        mut state: PipelineState,
        progress: &dyn PipelineProgress,
    ) -> Result<PipelineState, PipelineError> {
        for node in &self.nodes {
            if state.is_resolved() && !node.is_terminal() {
                debug!("Skipping node '{}': state already resolved", node.name());
                progress.on_node_skipped(node.name());
                continue;
            }

            debug!("Running node '{}' (stage: {})", node.name(), state.stage());
            progress.on_node_start(node.name());
            node.run(&mut state).await?;
            progress.on_node_complete(node.name(), &state);
        }
        Ok(state)
    }
}

/// Builder adding nodes with unconditional edges between them
pub struct LinearPipelineBuilder {
    nodes: Vec<Box<dyn PipelineNode>>,
}

impl LinearPipelineBuilder {
    /// Append a node after the current last one
    pub fn then(mut self, node: impl PipelineNode + 'static) -> Self {
        self.nodes.push(Box::new(node));
        self
    }

    pub fn build(self) -> Result<LinearPipeline, PipelineError> {
        if self.nodes.is_empty() {
            return Err(PipelineError::Empty);
        }
        Ok(LinearPipeline { nodes: self.nodes })
    }
}
