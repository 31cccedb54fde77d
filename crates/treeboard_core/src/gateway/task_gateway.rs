//! Task service gateway.
//!
//! # Responsibility
//! - List the stored tasks (`GET /api/tasks/all`).
//! - Request persistence of new tasks (`POST /api/tasks/add`).
//!
//! # Invariants
//! - `add_task` validates the record before issuing the request.
//! - The returned list order is the server's; the client never sorts it.

use crate::config::ClientConfig;
use crate::gateway::{GatewayError, GatewayResult};
use crate::model::task::Task;
use log::debug;
use uuid::Uuid;

/// Read/write contract against the task service.
pub trait TaskGateway {
    /// Returns the full task collection in server order.
    fn list_tasks(&self) -> GatewayResult<Vec<Task>>;

    /// Requests persistence of one task; success is the absence of an error.
    fn add_task(&self, task: &Task) -> GatewayResult<()>;
}

/// HTTP implementation bound to one base URL.
pub struct HttpTaskGateway {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTaskGateway {
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

impl TaskGateway for HttpTaskGateway {
    fn list_tasks(&self) -> GatewayResult<Vec<Task>> {
        let request_id = Uuid::new_v4();
        let response = self.agent.get(&self.endpoint("/api/tasks/all")).call()?;
        let tasks: Vec<Task> = response
            .into_json()
            .map_err(|err| GatewayError::MalformedBody(err.to_string()))?;
        debug!(
            "event=task_list module=gateway status=ok request_id={request_id} count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn add_task(&self, task: &Task) -> GatewayResult<()> {
        task.validate()?;

        let request_id = Uuid::new_v4();
        let body = serde_json::to_string(task)
            .map_err(|err| GatewayError::MalformedBody(err.to_string()))?;
        self.agent
            .post(&self.endpoint("/api/tasks/add"))
            .set("Content-Type", "application/json")
            .send_string(&body)?;
        debug!(
            "event=task_add module=gateway status=ok request_id={request_id} priority={}",
            task.priority
        );
        Ok(())
    }
}
