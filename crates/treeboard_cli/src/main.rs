//! Command-line front for the treeboard client.
//!
//! # Responsibility
//! - Wire gateways, views, and the SVG renderer for manual use.
//! - Keep output deterministic for quick local checks.

use treeboard_core::render::svg_document;
use treeboard_core::{
    default_log_level, init_logging, ClientConfig, HttpTaskGateway, HttpTreeGateway, TaskView,
    TreeView,
};

const LOG_DIR_ENV: &str = "TREEBOARD_LOG_DIR";

fn main() {
    init_logging_from_env();

    let config = ClientConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let code = match args.split_first() {
        Some((command, rest)) => run(command, rest, &config),
        None => {
            print_usage();
            2
        }
    };
    std::process::exit(code);
}

fn run(command: &str, rest: &[String], config: &ClientConfig) -> i32 {
    match command {
        "tree" => render_tree(config),
        "insert" => match rest.first() {
            Some(value) => insert_value(config, value),
            None => {
                eprintln!("usage: treeboard insert <value>");
                2
            }
        },
        "tasks" => list_tasks(config),
        "add-task" => match rest {
            [name, due_date, priority, description @ ..] => {
                add_task(config, name, due_date, priority, description.first())
            }
            _ => {
                eprintln!("usage: treeboard add-task <name> <dueDate> <priority> [description]");
                2
            }
        },
        "version" => {
            println!("treeboard core={}", treeboard_core::core_version());
            0
        }
        other => {
            eprintln!("unknown command: {other}");
            print_usage();
            2
        }
    }
}

fn render_tree(config: &ClientConfig) -> i32 {
    let mut view = TreeView::new(HttpTreeGateway::new(config));
    view.mount();
    print!("{}", svg_document(&view.layout()));
    0
}

fn insert_value(config: &ClientConfig, value: &str) -> i32 {
    let mut view = TreeView::new(HttpTreeGateway::new(config));
    view.submit_insert(value);
    let nodes = view.tree().map_or(0, |root| root.node_count());
    eprintln!("tree now holds {nodes} node(s)");
    0
}

fn list_tasks(config: &ClientConfig) -> i32 {
    let mut view = TaskView::new(HttpTaskGateway::new(config));
    view.mount();

    if view.tasks().is_empty() {
        println!("No tasks scheduled yet.");
        return 0;
    }
    for task in view.tasks() {
        println!(
            "[{}] {} - {} (due {})",
            task.urgency().label(),
            task.priority_label(),
            task.name,
            task.due_display()
        );
        if !task.description.is_empty() {
            println!("    {}", task.description);
        }
    }
    0
}

fn add_task(
    config: &ClientConfig,
    name: &str,
    due_date: &str,
    priority: &str,
    description: Option<&String>,
) -> i32 {
    let Ok(priority) = priority.trim().parse::<u8>() else {
        eprintln!("priority must be an integer between 1 and 5");
        return 2;
    };

    let mut view = TaskView::new(HttpTaskGateway::new(config));
    {
        let form = view.form_mut();
        form.name = name.to_string();
        form.due_date = due_date.to_string();
        form.priority = priority;
        form.description = description.cloned().unwrap_or_default();
    }
    view.submit();

    eprintln!("task list now holds {} record(s)", view.tasks().len());
    list_current(&view);
    0
}

fn list_current(view: &TaskView<HttpTaskGateway>) {
    for task in view.tasks() {
        println!(
            "[{}] {} - {}",
            task.urgency().label(),
            task.priority_label(),
            task.name
        );
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn print_usage() {
    eprintln!("usage: treeboard <command>");
    eprintln!("  tree                                      fetch and render the tree as SVG");
    eprintln!("  insert <value>                            insert a value, then refetch");
    eprintln!("  tasks                                     list scheduled tasks");
    eprintln!("  add-task <name> <dueDate> <priority> [description]");
    eprintln!("  version                                   print the core crate version");
    eprintln!();
    eprintln!("environment: TREEBOARD_BASE_URL, TREEBOARD_LOG_DIR");
}
