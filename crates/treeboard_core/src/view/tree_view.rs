//! Tree slice view state.
//!
//! # Responsibility
//! - Hold the current tree snapshot and expose its derived layout.
//! - Implement the mount/submit/refresh contract against the tree gateway.
//!
//! # Invariants
//! - The snapshot is only replaced by a resolved fetch the refresh guard
//!   accepts; failures keep the last-good snapshot.
//! - An insert attempt is always followed by a refresh, success or failure.

use crate::gateway::tree_gateway::TreeGateway;
use crate::gateway::GatewayResult;
use crate::layout::{self, TreeLayout};
use crate::model::tree::TreeNode;
use crate::view::{RefreshGuard, RefreshTicket, ViewState};
use log::{info, warn};

/// Stateful view over the tree service.
pub struct TreeView<G: TreeGateway> {
    gateway: G,
    tree: Option<TreeNode>,
    guard: RefreshGuard,
}

impl<G: TreeGateway> TreeView<G> {
    /// Creates an empty view; call [`mount`] to load the first snapshot.
    ///
    /// [`mount`]: TreeView::mount
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            tree: None,
            guard: RefreshGuard::default(),
        }
    }

    /// Initial load; same contract as an explicit refresh.
    pub fn mount(&mut self) {
        self.refresh();
    }

    /// Current fetch lifecycle state.
    pub fn state(&self) -> ViewState {
        self.guard.state()
    }

    /// Last successfully fetched root, if any.
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Layout of the current snapshot, recomputed on every call.
    pub fn layout(&self) -> TreeLayout {
        layout::compute(self.tree.as_ref())
    }

    /// Issues one fetch and resolves it immediately.
    pub fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let result = self.gateway.fetch_tree();
        self.finish_refresh(ticket, result);
    }

    /// Starts a refresh and returns its ticket.
    ///
    /// Split from [`finish_refresh`] so a host can overlap several fetches
    /// and resolve them in any order.
    ///
    /// [`finish_refresh`]: TreeView::finish_refresh
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.guard.begin()
    }

    /// Resolves one previously issued refresh.
    ///
    /// A failed fetch keeps the previous snapshot; a success whose ticket
    /// is older than the newest applied one is discarded.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: GatewayResult<Option<TreeNode>>,
    ) {
        match result {
            Ok(root) => {
                if self.guard.complete(ticket) {
                    info!(
                        "event=tree_refresh module=view status=ok nodes={}",
                        root.as_ref().map_or(0, TreeNode::node_count)
                    );
                    self.tree = root;
                } else {
                    info!("event=tree_refresh module=view status=stale_discarded");
                }
            }
            Err(err) => {
                self.guard.abort(ticket);
                warn!("event=tree_refresh module=view status=error error={err}");
            }
        }
    }

    /// Submits one insert; blank input is a no-op.
    ///
    /// The follow-up refresh always runs, even when the insert fails, so
    /// the view resynchronizes with whatever the server now holds.
    pub fn submit_insert(&mut self, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }

        match self.gateway.insert_value(trimmed) {
            Ok(()) => info!(
                "event=tree_insert module=view status=ok value_len={}",
                trimmed.len()
            ),
            Err(err) => warn!("event=tree_insert module=view status=error error={err}"),
        }
        self.refresh();
    }
}
