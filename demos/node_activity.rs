//! A scheduler and a cron job reacting to one shared "node active" flag.
//!
//! Run with `cargo run --example node_activity`.

use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::info;
use watchflag::{ObservableBool, Result};

const ACTIVATE_AFTER: Duration = Duration::from_millis(600);
const DEACTIVATE_AFTER: Duration = Duration::from_millis(400);
const SETTLE: Duration = Duration::from_millis(400);

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let is_node_active = ObservableBool::new(false);

    let scheduler = start_scheduler(&is_node_active)?;
    let cron = launch_cron(&is_node_active)?;

    info!("Waiting {:?} before activating node", ACTIVATE_AFTER);
    thread::sleep(ACTIVATE_AFTER);
    is_node_active.set(true);

    thread::sleep(DEACTIVATE_AFTER);
    info!("Deactivating node");
    is_node_active.set(false);

    thread::sleep(SETTLE);
    is_node_active.close();

    let _ = scheduler.join();
    let _ = cron.join();
    info!(stats = ?is_node_active.stats(), "Done");
    Ok(())
}

/// Starts jobs when the node becomes active and stops them when it goes inactive.
fn start_scheduler(is_node_active: &ObservableBool) -> Result<JoinHandle<()>> {
    let updates = is_node_active.subscribe()?;

    Ok(thread::spawn(move || {
        for active in updates {
            if active {
                info!("Scheduler: node is active, starting jobs");
                info!("[Scheduler] Jobs started");
            } else {
                info!("Scheduler: node is inactive, stopping jobs");
                info!("[Scheduler] Jobs stopped");
            }
        }
        info!("Scheduler: shutting down");
    }))
}

/// Runs its playbook on activation only.
fn launch_cron(is_node_active: &ObservableBool) -> Result<JoinHandle<()>> {
    let updates = is_node_active.subscribe()?;

    Ok(thread::spawn(move || {
        for active in updates.filter(|active| *active) {
            info!("CronA: node is active, running playbook");
            info!("[CronA] Playbook A running");
        }
    }))
}
