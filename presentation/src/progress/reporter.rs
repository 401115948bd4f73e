//! Progress reporting for pipeline execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tutor_application::PipelineProgress;
use tutor_domain::PipelineState;

/// Spinner on stderr while a node runs
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn node_message(node: &str) -> &'static str {
        match node {
            "receptor" => "Checking the question...",
            "virtual_teacher" => "Asking the virtual teacher...",
            "end" => "Finishing...",
            _ => "Working...",
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineProgress for ProgressReporter {
    fn on_node_start(&self, node: &str) {
        self.clear();
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(node.to_string());
        pb.set_message(Self::node_message(node));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_node_complete(&self, _node: &str, _state: &PipelineState) {
        self.clear();
    }

    fn on_pipeline_finished(&self) {
        self.clear();
    }
}

/// Simple line-based progress for non-terminal stderr
pub struct SimpleProgress;

impl PipelineProgress for SimpleProgress {
    fn on_node_start(&self, node: &str) {
        eprintln!("{} {}", "->".cyan(), node.bold());
    }

    fn on_node_complete(&self, node: &str, state: &PipelineState) {
        eprintln!("  {} {} ({})", "v".green(), node, state.stage());
    }

    fn on_node_skipped(&self, node: &str) {
        eprintln!("  {} {} (skipped)", "-".dimmed(), node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_node_start("virtual_teacher");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_node_complete("virtual_teacher", &PipelineState::received("1 + 1"));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_node_messages() {
        assert_eq!(
            ProgressReporter::node_message("virtual_teacher"),
            "Asking the virtual teacher..."
        );
        assert_eq!(ProgressReporter::node_message("other"), "Working...");
    }
}
