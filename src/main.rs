use clap::Parser;
use colored::Colorize;
use schedsim::config::{Config, ConfigOverrides};
use schedsim::scheduler::{MlfqMode, ScheduleError};
use schedsim::simulation::{PolicyOutcome, PolicyRun, SimulationReport};
use schedsim::{ScheduleCharts, Simulator};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

#[derive(Parser, Debug)]
#[command(author, version, about = "CPU Scheduling Simulator", long_about = None)]
struct Args {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Policy to run; repeat to run several (fifo, sjf, stcf, rr, mlfq)
    #[arg(short, long = "policy")]
    policies: Vec<String>,

    /// Round-robin time quantum
    #[arg(long)]
    quantum: Option<u64>,

    /// MLFQ quanta per level, comma separated (e.g. 2,4,8)
    #[arg(long, value_delimiter = ',')]
    mlfq_quanta: Option<Vec<u64>>,

    /// Demote each MLFQ process individually instead of rotating one shared level
    #[arg(long)]
    mlfq_per_process: bool,

    /// Number of processes to generate
    #[arg(short = 'n', long)]
    processes: Option<usize>,

    /// Random seed for the generated workload
    #[arg(long)]
    seed: Option<u64>,

    /// Minimal output (comparison table only)
    #[arg(short, long)]
    quiet: bool,

    /// Report each policy as it finishes
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Save the report to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write PNG charts to this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum VerbosityLevel {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    fn verbosity_level(&self) -> VerbosityLevel {
        if self.verbose {
            VerbosityLevel::Verbose
        } else if self.quiet {
            VerbosityLevel::Quiet
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Command-line values take precedence over the config file
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            policies: (!self.policies.is_empty()).then(|| self.policies.clone()),
            quantum: self.quantum,
            mlfq_quanta: self.mlfq_quanta.clone(),
            mlfq_mode: self.mlfq_per_process.then_some(MlfqMode::PerProcess),
            num_processes: self.processes,
            seed: self.seed,
            output: self.output.clone(),
            plot_dir: self.plot_dir.clone(),
        }
    }
}

#[derive(Tabled)]
struct WorkloadRow {
    #[tabled(rename = "Process")]
    process: String,
    #[tabled(rename = "Arrival")]
    arrival: u64,
    #[tabled(rename = "Burst")]
    burst: u64,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Process")]
    process: String,
    #[tabled(rename = "Start")]
    start: u64,
    #[tabled(rename = "Finish")]
    finish: u64,
    #[tabled(rename = "Duration")]
    duration: u64,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Policy")]
    policy: String,
    #[tabled(rename = "Makespan")]
    makespan: String,
    #[tabled(rename = "Avg Turnaround")]
    turnaround: String,
    #[tabled(rename = "Avg Response")]
    response: String,
    #[tabled(rename = "Avg Waiting")]
    waiting: String,
    #[tabled(rename = "Switches")]
    switches: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let verbosity = args.verbosity_level();
    if args.no_color {
        colored::control::set_override(false);
    }

    if verbosity >= VerbosityLevel::Normal {
        println!("{}", "CPU Scheduling Simulator".bright_cyan().bold());
    }

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            if verbosity >= VerbosityLevel::Normal {
                println!("Loading configuration from: {:?}", path);
            }
            match Config::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading configuration: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Config::default(),
    };
    config.apply_overrides(&args.overrides());
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let output_path = config.simulation.output.clone();
    let plot_dir = config.simulation.plot_dir.clone();

    let simulator = match Simulator::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error creating simulator: {}", e);
            std::process::exit(1);
        }
    };

    if verbosity >= VerbosityLevel::Normal {
        print_workload(&simulator);
    }

    let report = simulator.run_with_callback(|outcome| {
        if verbosity >= VerbosityLevel::Verbose {
            print_progress(outcome);
        }
    });

    if verbosity >= VerbosityLevel::Normal {
        for outcome in &report.outcomes {
            print_outcome(outcome);
        }
    }
    print_comparison(&report);

    if let Some(path) = output_path {
        match save_report_json(&report, &path) {
            Ok(_) => {
                if verbosity >= VerbosityLevel::Normal {
                    println!("\nReport saved to: {:?}", path);
                }
            }
            Err(e) => eprintln!("Error saving report to JSON: {}", e),
        }
    }

    if let Some(dir) = plot_dir {
        match ScheduleCharts::new(&report).generate_plots(&dir) {
            Ok(paths) => {
                if verbosity >= VerbosityLevel::Normal {
                    println!("\nGenerated plots in {:?}:", dir);
                    for path in paths {
                        println!("  - {}", path.display());
                    }
                }
            }
            Err(e) => eprintln!("Error generating plots: {}", e),
        }
    }

    if report.num_failed() == report.outcomes.len() {
        std::process::exit(1);
    }
}

fn print_workload(simulator: &Simulator) {
    println!("\n{}", "WORKLOAD".yellow().bold());

    let rows: Vec<WorkloadRow> = simulator
        .workload()
        .iter()
        .map(|p| WorkloadRow {
            process: format!("P{}", p.id),
            arrival: p.arrival_time,
            burst: p.burst_time,
        })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

fn print_progress(outcome: &PolicyOutcome) {
    match &outcome.result {
        Ok(run) => println!(
            "[{}] {} entries | makespan {} | avg turnaround {:.2}",
            outcome.policy,
            run.entries.len(),
            run.summary.makespan,
            run.summary.mean_turnaround
        ),
        Err(e) => println!("[{}] {}", outcome.policy, e.to_string().red()),
    }
}

fn print_outcome(outcome: &PolicyOutcome) {
    println!("\n{}", outcome.policy.to_string().yellow().bold());

    match &outcome.result {
        Ok(run) => println!("{}", entry_table(run)),
        Err(e) => print_error(e),
    }
}

fn entry_table(run: &PolicyRun) -> String {
    let rows: Vec<EntryRow> = run
        .entries
        .iter()
        .map(|e| EntryRow {
            process: format!("P{}", e.id),
            start: e.start_time,
            finish: e.finish_time,
            duration: e.duration(),
        })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

fn print_error(error: &ScheduleError) {
    println!("  {} {}", "error:".red().bold(), error);
}

fn print_comparison(report: &SimulationReport) {
    println!("\n{}", "COMPARISON".yellow().bold());

    let rows: Vec<ComparisonRow> = report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(run) => ComparisonRow {
                policy: outcome.policy.to_string(),
                makespan: run.summary.makespan.to_string(),
                turnaround: format!("{:.2}", run.summary.mean_turnaround),
                response: format!("{:.2}", run.summary.mean_response),
                waiting: format!("{:.2}", run.summary.mean_waiting),
                switches: run.summary.context_switches.to_string(),
            },
            Err(_) => ComparisonRow {
                policy: outcome.policy.to_string(),
                makespan: "failed".to_string(),
                turnaround: "-".to_string(),
                response: "-".to_string(),
                waiting: "-".to_string(),
                switches: "-".to_string(),
            },
        })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));

    if let Some(best) = report.best_by_turnaround() {
        println!(
            "  • Lowest average turnaround: {}",
            best.policy.to_string().bright_green()
        );
    }
}

fn save_report_json(report: &SimulationReport, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, serde_json::to_string_pretty(&report.to_record())?)?;
    Ok(())
}
