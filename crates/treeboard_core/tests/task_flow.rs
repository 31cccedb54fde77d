use std::cell::RefCell;
use treeboard_core::gateway::{GatewayError, GatewayResult};
use treeboard_core::{Task, TaskGateway, TaskView, UrgencyMarker, ViewState};

/// In-memory task service double: `add_task` appends to the store after
/// the same validation the HTTP gateway applies, `list_tasks` returns the
/// store in insertion order.
struct FakeTaskService {
    stored: RefCell<Vec<Task>>,
    fail_next_add: RefCell<bool>,
    fail_next_list: RefCell<bool>,
    calls: RefCell<Vec<&'static str>>,
}

impl FakeTaskService {
    fn new() -> Self {
        Self {
            stored: RefCell::new(Vec::new()),
            fail_next_add: RefCell::new(false),
            fail_next_list: RefCell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn fail_next_add(&self) {
        *self.fail_next_add.borrow_mut() = true;
    }

    fn fail_next_list(&self) {
        *self.fail_next_list.borrow_mut() = true;
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl TaskGateway for &FakeTaskService {
    fn list_tasks(&self) -> GatewayResult<Vec<Task>> {
        self.calls.borrow_mut().push("list");
        if std::mem::take(&mut *self.fail_next_list.borrow_mut()) {
            return Err(GatewayError::MalformedBody("scripted failure".to_string()));
        }
        Ok(self.stored.borrow().clone())
    }

    fn add_task(&self, task: &Task) -> GatewayResult<()> {
        self.calls.borrow_mut().push("add");
        if std::mem::take(&mut *self.fail_next_add.borrow_mut()) {
            return Err(GatewayError::MalformedBody("scripted failure".to_string()));
        }
        task.validate()?;
        self.stored.borrow_mut().push(task.clone());
        Ok(())
    }
}

fn fill_form(view: &mut TaskView<&FakeTaskService>) {
    let form = view.form_mut();
    form.name = "Ship report".to_string();
    form.due_date = "2025-01-01T10:00".to_string();
    form.priority = 1;
    form.description = "final".to_string();
}

#[test]
fn mount_lists_tasks_in_server_order() {
    let service = FakeTaskService::new();
    service
        .stored
        .borrow_mut()
        .push(Task::new("Later", "2025-06-01T09:00", 4, ""));
    service
        .stored
        .borrow_mut()
        .push(Task::new("Sooner", "2025-01-01T09:00", 2, ""));

    let mut view = TaskView::new(&service);
    view.mount();

    assert_eq!(view.state(), ViewState::Idle);
    let names: Vec<&str> = view.tasks().iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["Later", "Sooner"]);
}

#[test]
fn submitted_task_reappears_verbatim_after_the_refetch() {
    let service = FakeTaskService::new();
    let mut view = TaskView::new(&service);
    view.mount();

    fill_form(&mut view);
    view.submit();

    assert_eq!(service.calls(), ["list", "add", "list"]);
    assert_eq!(view.tasks().len(), 1);

    let shown = &view.tasks()[0];
    assert_eq!(*shown, Task::new("Ship report", "2025-01-01T10:00", 1, "final"));
    assert_eq!(shown.priority_label(), "Priority 1");
    assert_eq!(shown.urgency(), UrgencyMarker::High);
}

#[test]
fn form_clears_to_defaults_after_submit_resolves() {
    let service = FakeTaskService::new();
    let mut view = TaskView::new(&service);

    fill_form(&mut view);
    view.submit();

    assert_eq!(*view.form(), Default::default());
}

#[test]
fn form_clears_and_refetches_even_when_the_add_fails() {
    let service = FakeTaskService::new();
    service.fail_next_add();

    let mut view = TaskView::new(&service);
    fill_form(&mut view);
    view.submit();

    assert_eq!(service.calls(), ["add", "list"]);
    assert_eq!(*view.form(), Default::default());
    assert!(view.tasks().is_empty());
}

#[test]
fn invalid_form_is_rejected_without_touching_the_store() {
    let service = FakeTaskService::new();
    let mut view = TaskView::new(&service);

    fill_form(&mut view);
    view.form_mut().name = "   ".to_string();
    view.submit();

    assert!(service.stored.borrow().is_empty());
    assert_eq!(*view.form(), Default::default());
    assert_eq!(service.calls(), ["add", "list"]);
}

#[test]
fn list_failure_keeps_the_last_good_contents() {
    let service = FakeTaskService::new();
    service
        .stored
        .borrow_mut()
        .push(Task::new("Keep me", "2025-01-01T09:00", 3, ""));

    let mut view = TaskView::new(&service);
    view.mount();
    assert_eq!(view.tasks().len(), 1);

    service.fail_next_list();
    view.refresh();

    assert_eq!(view.state(), ViewState::Idle);
    assert_eq!(view.tasks().len(), 1);
    assert_eq!(view.tasks()[0].name, "Keep me");
}

#[test]
fn stale_list_response_is_discarded() {
    let service = FakeTaskService::new();
    let mut view = TaskView::new(&service);

    let first = view.begin_refresh();
    let second = view.begin_refresh();

    view.finish_refresh(second, Ok(vec![Task::new("New", "2025-01-01T09:00", 3, "")]));
    view.finish_refresh(first, Ok(vec![Task::new("Old", "2025-01-01T09:00", 3, "")]));

    assert_eq!(view.tasks().len(), 1);
    assert_eq!(view.tasks()[0].name, "New");
}
