use std::env;
use std::process::ExitCode;

use tracing::error;

use dispatch_model::{SchedulerEngine, Workload, bernoulli_workload, compute_stats};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), dispatch_model::Error> {
    let workload = match env::args().nth(1) {
        Some(path) => Workload::from_path(path)?,
        None => bernoulli_workload(40, 0.3, 0.5, 2, 6, 0),
    };

    let mut engine = SchedulerEngine::new();
    engine.load(&workload.processes)?;

    // Each policy runs on its own snapshot so no run sees another's
    // accumulated age or timing state.
    let fcfs = engine.snapshot().run_fcfs();
    println!("== FCFS ==");
    for e in &fcfs {
        println!(
            "pid={} start={} completion={} waited={}",
            e.pid, e.start_time, e.completion_time, e.waiting_time
        );
    }
    print_stats(compute_stats(&fcfs));

    let quantum = 2;
    let slices = engine.snapshot().run_round_robin(quantum)?;
    println!("== Round-robin (quantum {quantum}) ==");
    for e in &slices {
        println!(
            "pid={} start={} exec={} waited={}",
            e.pid, e.start_time, e.execution_time, e.waiting_time
        );
    }
    print_stats(compute_stats(&slices));

    let aged = engine.snapshot().run_priority_with_aging();
    println!("== Priority with aging ==");
    for e in &aged {
        println!(
            "pid={} start={} completion={} waited={} final_priority={}",
            e.pid, e.start_time, e.completion_time, e.waiting_time, e.final_priority
        );
    }
    print_stats(compute_stats(&aged));

    Ok(())
}

fn print_stats(stats: dispatch_model::Stats) {
    println!(
        "avg_wait={:.2} max_wait={} total_exec={}\n",
        stats.avg_waiting_time, stats.max_waiting_time, stats.total_execution_time
    );
}
