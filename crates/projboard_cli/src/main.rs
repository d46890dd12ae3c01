//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projboard_core` linkage and walk one add/move script.
//! - Print one line per store notification for quick sanity checks.

use log::error;
use projboard_core::{
    default_log_level, init_logging, plan_drop, DragPayload, DropTarget, Placement, Project,
    ProjectStatus, ProjectStore, TargetBounds,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "PROJBOARD_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=demo_failed module=cli status=error error={err}");
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ProjectStore::new();
    store.add_listener(|projects: Vec<Project>| {
        for status in [ProjectStatus::Active, ProjectStatus::Finished] {
            let column: Vec<String> = projects
                .iter()
                .filter(|project| project.status == status)
                .map(|project| format!("{} ({})", project.title, project.assigned_summary()))
                .collect();
            println!("{}: [{}]", status.as_str(), column.join(", "));
        }
        println!("--");
    });

    let design = store.add_active_project("Design", "Sketch the board", 2);
    let build = store.add_active_project("Build", "Wire the store", 1);
    let ship = store.add_active_project("Ship", "Cut a release", 3);

    store.move_project(&ship, ProjectStatus::Active, Some(Placement::above(&design)))?;
    store.move_project(&build, ProjectStatus::Finished, None)?;

    // Drag "Design" onto the lower half of "Build" in the finished column.
    let raw = DragPayload::capture(design, 40.0, 50.0).encode()?;
    let payload = DragPayload::decode(&raw)?;
    let target = DropTarget::Item {
        id: build,
        bounds: TargetBounds::new(100.0, 40.0),
    };
    plan_drop(&payload, 140.0, ProjectStatus::Finished, target).apply(&mut store)?;

    Ok(())
}
