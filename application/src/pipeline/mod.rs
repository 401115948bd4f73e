//! Declarative wiring of the tutor pipeline.
//!
//! The three stages are named nodes joined by unconditional edges:
//!
//! ```text
//! receptor ──▶ virtual_teacher ──▶ end
//! ```
//!
//! [`LinearPipeline`] visits them in order. Once a node resolves the state,
//! the remaining work nodes are skipped; terminal nodes still run.

mod linear;
mod node;
mod nodes;

pub use linear::{LinearPipeline, LinearPipelineBuilder};
pub use node::PipelineNode;
pub use nodes::{EndNode, ReceptorNode, VirtualTeacherNode};

use crate::ports::model_client::ServiceError;
use thiserror::Error;
use tutor_domain::DomainError;

/// Errors a node can raise
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    State(#[from] DomainError),

    #[error("Pipeline has no nodes")]
    Empty,
}
