//! Tree service gateway.
//!
//! # Responsibility
//! - Fetch the current tree snapshot (`GET /api/tree`).
//! - Request server-side inserts (`POST /api/insert`).
//!
//! # Invariants
//! - `insert_value` performs no speculative local mutation; the caller
//!   refetches to observe the effect.

use crate::config::ClientConfig;
use crate::gateway::{GatewayError, GatewayResult};
use crate::model::tree::{TreeNode, TreeSnapshot};
use log::debug;
use uuid::Uuid;

/// Read/write contract against the tree service.
pub trait TreeGateway {
    /// Returns the current root, or `None` for an empty tree.
    fn fetch_tree(&self) -> GatewayResult<Option<TreeNode>>;

    /// Requests insertion of one value; success is the absence of an error.
    fn insert_value(&self, value: &str) -> GatewayResult<()>;
}

/// HTTP implementation bound to one base URL.
pub struct HttpTreeGateway {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTreeGateway {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            agent: ureq::agent(),
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl TreeGateway for HttpTreeGateway {
    fn fetch_tree(&self) -> GatewayResult<Option<TreeNode>> {
        let request_id = Uuid::new_v4();
        let response = self.agent.get(&self.endpoint("/api/tree")).call()?;
        let snapshot: TreeSnapshot = response
            .into_json()
            .map_err(|err| GatewayError::MalformedBody(err.to_string()))?;
        debug!(
            "event=tree_fetch module=gateway status=ok request_id={request_id} empty={}",
            snapshot.root.is_none()
        );
        Ok(snapshot.root)
    }

    fn insert_value(&self, value: &str) -> GatewayResult<()> {
        let request_id = Uuid::new_v4();
        let body = serde_json::json!({ "value": value });
        self.agent
            .post(&self.endpoint("/api/insert"))
            .set("Content-Type", "application/json")
            .send_string(&body.to_string())?;
        debug!("event=tree_insert module=gateway status=ok request_id={request_id}");
        Ok(())
    }
}
