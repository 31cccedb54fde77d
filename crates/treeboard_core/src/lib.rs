//! Client core for the treeboard viewer: tree layout, remote gateways,
//! and view-state refresh contracts.
//! This crate is the single source of truth for client-side invariants.

pub mod config;
pub mod gateway;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod view;

pub use config::ClientConfig;
pub use gateway::task_gateway::{HttpTaskGateway, TaskGateway};
pub use gateway::tree_gateway::{HttpTreeGateway, TreeGateway};
pub use gateway::{GatewayError, GatewayResult};
pub use layout::{Edge, NodeId, Placement, TreeLayout};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskValidationError, UrgencyMarker};
pub use model::tree::{NodeColor, TreeNode, TreeSnapshot};
pub use view::task_view::{TaskForm, TaskView};
pub use view::tree_view::TreeView;
pub use view::ViewState;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
