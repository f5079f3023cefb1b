//! Grid game entry point — CLI wiring and config-driven engine construction.

use std::path::Path;
use std::process;

use gridpulse::config::ScenarioConfig;
use gridpulse::sim::engine::Engine;
use gridpulse::sim::types::{BatteryMode, GridStatus};
use gridpulse::telemetry::{TelemetryRow, export_csv};

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    ticks: u64,
    sample_every: u64,
    telemetry_out: Option<String>,
    autopilot: bool,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("gridpulse — arcade micro-grid balancing simulator");
    eprintln!();
    eprintln!("Usage: gridpulse [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (standard, calm, brutal)");
    eprintln!("  --seed <u64>             Override random seed");
    eprintln!("  --ticks <u64>            Headless tick budget (default: 600)");
    eprintln!("  --sample-every <u64>     Snapshot stride for telemetry (default: 1)");
    eprintln!("  --telemetry-out <path>   Export sampled snapshots to CSV");
    eprintln!("  --autopilot              Drive the controls with a bang-bang policy");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive terminal game");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the standard preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        ticks: 600,
        sample_every: 1,
        telemetry_out: None,
        autopilot: false,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--ticks" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --ticks requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(n) = args[i].parse::<u64>() {
                    cli.ticks = n;
                } else {
                    eprintln!("error: --ticks value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--sample-every" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --sample-every requires a u64 argument");
                    process::exit(1);
                }
                match args[i].parse::<u64>() {
                    Ok(n) if n > 0 => cli.sample_every = n,
                    _ => {
                        eprintln!(
                            "error: --sample-every value \"{}\" is not a positive u64",
                            args[i]
                        );
                        process::exit(1);
                    }
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            "--autopilot" => {
                cli.autopilot = true;
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads and validates the scenario from CLI selections.
fn load_scenario(cli: &CliArgs) -> ScenarioConfig {
    let mut cfg = if let Some(path) = &cli.scenario_path {
        ScenarioConfig::from_toml_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        })
    } else if let Some(preset) = &cli.preset {
        ScenarioConfig::from_preset(preset).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        })
    } else {
        ScenarioConfig::standard()
    };

    if let Some(seed) = cli.seed_override {
        cfg.simulation.seed = seed;
    }

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    cfg
}

/// A crude bang-bang dispatch policy standing in for the player.
///
/// Turns the generator on under a deficit and off under a surplus, and uses
/// the battery once the frequency drifts further from target.
fn autopilot(engine: &mut Engine) {
    let s = engine.snapshot();
    let target = engine.tuning().target_hz;

    if s.frequency < target - 0.5 && !s.is_generator_on {
        engine.toggle_generator();
    } else if s.frequency > target + 0.5 && s.is_generator_on {
        engine.toggle_generator();
    }

    if s.frequency < target - 1.5 {
        engine.set_battery_mode(BatteryMode::Discharge);
    } else if s.frequency > target + 1.5 {
        engine.set_battery_mode(BatteryMode::Charge);
    } else {
        engine.set_battery_mode(BatteryMode::Idle);
    }
}

/// Runs the simulation headless for at most `ticks` physics steps.
fn run_headless(cli: &CliArgs, cfg: &ScenarioConfig) {
    let mut engine = Engine::new(cfg.tuning());
    let mut rows: Vec<TelemetryRow> = Vec::new();

    let mut ran = 0u64;
    for tick in 0..cli.ticks {
        if cli.autopilot {
            autopilot(&mut engine);
        }
        engine.step();
        ran = tick + 1;
        if tick % cli.sample_every == 0 {
            rows.push(TelemetryRow {
                tick,
                state: engine.snapshot(),
            });
        }
        if !engine.snapshot().status.is_playing() {
            break;
        }
    }

    let s = engine.snapshot();
    println!("\n--- Run Summary ---");
    println!("Outcome: {}", s.status.as_str());
    println!("Ticks run: {ran}");
    println!("Score: {}", s.score);
    println!("Survived to: day {}, {:05.2} h", s.day, s.time_of_day);
    println!("Final frequency: {:.3} Hz", s.frequency);
    match s.status {
        GridStatus::Blackout => println!("The city went dark."),
        GridStatus::Explosion => println!("The grid tore itself apart."),
        GridStatus::Playing => println!("Tick budget exhausted with the grid still up."),
    }

    if let Some(path) = &cli.telemetry_out {
        if let Err(e) = export_csv(&rows, Path::new(path)) {
            eprintln!("error: failed to write telemetry to \"{path}\": {e}");
            process::exit(1);
        }
        println!("Telemetry: {} rows -> {path}", rows.len());
    }
}

fn main() {
    let cli = parse_args();
    let cfg = load_scenario(&cli);

    #[cfg(feature = "tui")]
    if cli.tui {
        gridpulse::tui::run(&cfg);
        return;
    }

    run_headless(&cli, &cfg);
}
