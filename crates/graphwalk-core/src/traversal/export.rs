//! Step export document for offline analysis

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Algorithm, Step, Traversal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportMetadata {
    pub total_steps: usize,
    pub export_date: DateTime<Utc>,
}

/// A traversal run packaged for export
#[derive(Debug, Clone, Serialize)]
pub struct StepExport<'a, N> {
    pub algorithm: Algorithm,
    pub start_node: &'a N,
    pub steps: &'a [Step<N>],
    pub visited_order: &'a [N],
    pub metadata: ExportMetadata,
}

impl<N> Traversal<N> {
    /// Package this run for export, stamped with the current time.
    pub fn export(&self) -> StepExport<'_, N> {
        self.export_at(Utc::now())
    }

    pub fn export_at(&self, export_date: DateTime<Utc>) -> StepExport<'_, N> {
        StepExport {
            algorithm: self.algorithm,
            start_node: &self.start,
            steps: &self.steps,
            visited_order: &self.visited_order,
            metadata: ExportMetadata {
                total_steps: self.total_steps,
                export_date,
            },
        }
    }
}
