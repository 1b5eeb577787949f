//! Code Tree Metrics
//!
//! Measures a project metric with one full-depth node-count query over the
//! code tree, then reduces the returned nodes to a single count.

use scanbridge_core::{
    gated, CodeTreeNode, CodeTreeRequest, NodeCountType, ProjectService, CODE_TREE_ROOT,
};

use crate::models::metrics::{MetricKind, MetricQuery};
use crate::services::context::ClientContext;
use crate::utils::error::{BridgeError, BridgeResult};
use crate::utils::validation::require_non_blank;

/// Count reported by the last node that carries `count_type`.
///
/// Nodes are not summed. Non-positive counts clamp to zero.
pub fn last_defined_count(nodes: &[CodeTreeNode], count_type: NodeCountType) -> Option<u64> {
    nodes
        .iter()
        .rev()
        .find_map(|node| node.count(count_type))
        .map(|count| u64::try_from(count).unwrap_or(0))
}

pub struct MetricsAggregator<'a, S> {
    ctx: &'a ClientContext<S>,
}

impl<'a, S: ProjectService> MetricsAggregator<'a, S> {
    pub fn new(ctx: &'a ClientContext<S>) -> Self {
        Self { ctx }
    }

    pub async fn measure(&self, project_id: &str, query: MetricQuery) -> BridgeResult<u64> {
        require_non_blank(project_id, "project id")?;

        let count_type = query.kind.count_type();
        let request = CodeTreeRequest::counting(count_type);
        let nodes = self
            .ctx
            .service()
            .get_code_tree_nodes(project_id, CODE_TREE_ROOT, &request)
            .await
            .map_err(|e| {
                BridgeError::remote_service_from(
                    &format!("Failed to query the code tree of project {}", project_id),
                    e,
                )
            })?;

        let count = last_defined_count(&nodes, count_type).ok_or_else(|| {
            BridgeError::aggregation(format!(
                "None of the {} code tree nodes of project {} reported a {:?} count",
                nodes.len(),
                project_id,
                count_type
            ))
        })?;

        gated!(
            self.ctx.log_gate(),
            debug,
            "Project {} {:?} = {}",
            project_id,
            query.kind,
            count
        );
        Ok(count)
    }

    /// Files still pending identification
    pub async fn pending_identifications(&self, project_id: &str) -> BridgeResult<u64> {
        self.measure(project_id, MetricKind::PendingIdentification.into())
            .await
    }

    /// License or policy violations
    pub async fn violations(&self, project_id: &str) -> BridgeResult<u64> {
        self.measure(project_id, MetricKind::Violations.into()).await
    }
}
