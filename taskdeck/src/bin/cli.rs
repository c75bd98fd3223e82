//! taskdeck CLI - interactive single-user task tracker.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use dialoguer::Input;

use taskdeck::domain::dates;
use taskdeck::domain::{format_tasks, TaskStore};
use taskdeck::errors::TaskdeckResult;
use taskdeck::storage::{FileGateway, DEFAULT_TASKS_FILE};
use taskdeck::ui;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Single-user task tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// Backing task file
    #[arg(long, default_value = DEFAULT_TASKS_FILE)]
    file: PathBuf,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> TaskdeckResult<()> {
    let gateway = FileGateway::new(cli.file);
    let mut store = TaskStore::from_tasks(gateway.load()?);

    loop {
        ui::print_menu();
        let choice = prompt("Enter your choice")?;

        match choice.trim() {
            "1" => add_task(&mut store)?,
            "2" => {
                ui::print_heading("All Tasks");
                println!("{}", format_tasks(store.tasks()));
            }
            "3" => {
                ui::print_heading("Delayed Tasks");
                let delayed = dates::delayed_tasks(store.tasks(), Local::now().naive_local());
                println!("{}", format_tasks(&delayed));
            }
            "4" => {
                let priority = prompt("Enter Priority [high, low]")?;
                ui::print_heading("Filtered Tasks");
                println!(
                    "{}",
                    format_tasks(&store.filter_by_priority(priority.trim()))
                );
            }
            "5" => {
                ui::print_heading("Tasks Nearing Deadlines");
                let nearing = dates::nearing_tasks(
                    store.tasks(),
                    Local::now().naive_local(),
                    dates::DEFAULT_DEADLINE_WINDOW_DAYS,
                );
                println!("{}", format_tasks(&nearing));
            }
            "6" => delete_task(&mut store)?,
            "7" => update_task_status(&mut store)?,
            "8" => {
                gateway.save(store.tasks())?;
                ui::print_success("Tasks saved successfully. Exiting...");
                return Ok(());
            }
            _ => ui::print_warning("Invalid choice. Please try again."),
        }
    }
}

/// Prompt for a task, re-asking for the due date until it validates
fn add_task(store: &mut TaskStore) -> TaskdeckResult<()> {
    let description = prompt("Enter Task Description")?;
    let priority = prompt("Enter Task priority [high, low]")?;

    let due_date = loop {
        let input = prompt("Enter Due Date (YYYY-MM-DD)")?;
        match dates::validate(input.trim(), Local::now().naive_local()) {
            Ok(()) => break input.trim().to_string(),
            Err(e) => ui::print_error(&e.to_string()),
        }
    };

    store.add(description.trim(), &due_date, priority.trim())?;
    ui::print_success("Task added successfully");
    Ok(())
}

fn delete_task(store: &mut TaskStore) -> TaskdeckResult<()> {
    let input = prompt("Enter Task ID to delete")?;
    match input.trim().parse::<u32>() {
        Ok(id) => {
            store.delete(id);
            ui::print_success(&format!("Task ID {id} has been deleted."));
        }
        Err(_) => ui::print_error("Invalid Task ID. Please enter a number."),
    }
    Ok(())
}

fn update_task_status(store: &mut TaskStore) -> TaskdeckResult<()> {
    let input = prompt("Enter Task ID to update")?;
    let Ok(id) = input.trim().parse::<u32>() else {
        ui::print_error("Invalid Task ID. Please enter a number.");
        return Ok(());
    };

    let status = prompt("Enter new status (completed/not completed)")?;
    store.update_status(id, status.trim());
    ui::print_success(&format!(
        "Task ID {id} has been updated to {}.",
        status.trim()
    ));
    Ok(())
}

fn prompt(message: &str) -> TaskdeckResult<String> {
    Ok(Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?)
}
