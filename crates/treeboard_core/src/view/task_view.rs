//! Task slice view state.
//!
//! # Responsibility
//! - Hold the current task list and the add-task form.
//! - Implement the mount/submit/refresh contract against the task gateway.
//!
//! # Invariants
//! - The list is replaced wholesale by an accepted fetch; failures keep
//!   the last-good contents.
//! - The form clears back to defaults once the add call resolves, success
//!   or failure, and the follow-up fetch always runs.

use crate::gateway::task_gateway::TaskGateway;
use crate::gateway::GatewayResult;
use crate::model::task::{Task, DEFAULT_PRIORITY};
use crate::view::{RefreshGuard, RefreshTicket, ViewState};
use log::{info, warn};

/// Editable form state for one pending task submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub due_date: String,
    pub priority: u8,
    pub description: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            due_date: String::new(),
            priority: DEFAULT_PRIORITY,
            description: String::new(),
        }
    }
}

impl TaskForm {
    /// Builds the wire record from the current field values.
    pub fn to_record(&self) -> Task {
        Task::new(
            self.name.trim(),
            self.due_date.trim(),
            self.priority,
            self.description.trim(),
        )
    }

    /// Resets every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Stateful view over the task service.
pub struct TaskView<G: TaskGateway> {
    gateway: G,
    tasks: Vec<Task>,
    form: TaskForm,
    guard: RefreshGuard,
}

impl<G: TaskGateway> TaskView<G> {
    /// Creates an empty view; call [`mount`] to load the first list.
    ///
    /// [`mount`]: TaskView::mount
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            tasks: Vec::new(),
            form: TaskForm::default(),
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

    /// Tasks in server-returned order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Read access to the pending form.
    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Write access to the pending form, for the host's input handling.
    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Issues one fetch and resolves it immediately.
    pub fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let result = self.gateway.list_tasks();
        self.finish_refresh(ticket, result);
    }

    /// Starts a refresh and returns its ticket.
    ///
    /// Split from [`finish_refresh`] so a host can overlap several fetches
    /// and resolve them in any order.
    ///
    /// [`finish_refresh`]: TaskView::finish_refresh
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.guard.begin()
    }

    /// Resolves one previously issued refresh.
    pub fn finish_refresh(&mut self, ticket: RefreshTicket, result: GatewayResult<Vec<Task>>) {
        match result {
            Ok(tasks) => {
                if self.guard.complete(ticket) {
                    info!(
                        "event=task_refresh module=view status=ok count={}",
                        tasks.len()
                    );
                    self.tasks = tasks;
                } else {
                    info!("event=task_refresh module=view status=stale_discarded");
                }
            }
            Err(err) => {
                self.guard.abort(ticket);
                warn!("event=task_refresh module=view status=error error={err}");
            }
        }
    }

    /// Submits the current form.
    ///
    /// The add attempt may fail (including local validation rejects); the
    /// form is cleared and the list refetched either way.
    pub fn submit(&mut self) {
        let record = self.form.to_record();
        match self.gateway.add_task(&record) {
            Ok(()) => info!(
                "event=task_add module=view status=ok priority={}",
                record.priority
            ),
            Err(err) => warn!("event=task_add module=view status=error error={err}"),
        }

        self.form.reset();
        self.refresh();
    }
}
