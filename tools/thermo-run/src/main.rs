//! thermo-run: headless runner for THERMO exchange scenarios.
//!
//! Usage:
//!   thermo-run --world data/demo_world.json --list
//!   thermo-run --world data/demo_world.json --scenario 0 --seed 7 --speed lightning-fast

use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;

use thermo_core::definitions::{ScenarioDefinition, WorldData};
use thermo_core::enums::SimulationSpeed;
use thermo_core::state::Outcome;
use thermo_sim::{SimConfig, SimulationEngine};

/// Safety net against a scenario that never terminates.
const MAX_TICKS: u64 = 10_000_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    let world_path = match parse_value(&args, "--world") {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Error: --world <path> is required");
            print_usage();
            process::exit(1);
        }
    };
    let data = load_world(&world_path);

    if args.iter().any(|a| a == "--list") {
        list_scenarios(&data);
        return;
    }

    let config = build_config(&args);
    let dt = match parse_value(&args, "--dt").map(str::parse::<f64>) {
        None => 1.0,
        Some(Ok(dt)) if dt > 0.0 => dt,
        Some(_) => {
            eprintln!("Error: --dt expects a positive number of seconds");
            process::exit(1);
        }
    };

    let selector = parse_value(&args, "--scenario").unwrap_or("0");
    let definition = select_scenario(&data, selector);

    let mut engine = match SimulationEngine::new(&config, &data, definition) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: cannot build scenario '{}': {e}", definition.title);
            process::exit(1);
        }
    };

    tracing::info!(
        target: "thermo::run",
        scenario = %definition.title,
        seed = config.seed,
        speed = ?config.speed,
        dt,
        "run.scenario_selected"
    );
    println!("{}", definition.title);
    println!("{}", definition.description);
    if let Some(first) = engine.scenario().party(engine.scenario().first_strike()) {
        println!("First strike: {}", first.name);
    }
    println!(
        "Nukes: {}  seed: {}  speed: {:?}  dt: {dt}s",
        engine.scenario().all_nukes().len(),
        config.seed,
        config.speed
    );

    let ticks = match engine.run_until_terminated(dt, MAX_TICKS) {
        Ok(ticks) => ticks,
        Err(e) => {
            eprintln!("Error: simulation failed: {e}");
            process::exit(1);
        }
    };
    if ticks >= MAX_TICKS {
        tracing::warn!(target: "thermo::run", max_ticks = MAX_TICKS, "run.tick_cap_reached");
    }
    tracing::info!(
        target: "thermo::run",
        scenario = %definition.title,
        ticks,
        clock = engine.clock().elapsed_secs,
        "run.finished"
    );

    println!(
        "Simulated {:.0}s in {ticks} ticks\n",
        engine.clock().elapsed_secs
    );
    print_outcome(&engine.outcome());
}

fn print_usage() {
    eprintln!(
        "thermo-run: THERMO headless exchange runner\n\
         \n\
           --world <path>          JSON world file (cities, countries, launch sites, scenarios)\n\
           --list                  List the scenarios of the world file and exit\n\
           --scenario <index|name> Scenario to run (default: 0)\n\
           --seed <n>              RNG seed (default: 42)\n\
           --speed <name>          real-time, fast, faster or lightning-fast\n\
           --dt <secs>             Wall-clock seconds per tick (default: 1)\n\
           --config <path>         JSON SimConfig; flags override its values\n\
         \n\
         Logging is controlled by RUST_LOG (default: info).\n\
         \n\
         Examples:\n\
         \n\
           thermo-run --world tools/thermo-run/data/demo_world.json --list\n\
           thermo-run --world tools/thermo-run/data/demo_world.json --scenario Europe --speed faster\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn load_world(path: &Path) -> WorldData {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", path.display());
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: invalid world file {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn build_config(args: &[String]) -> SimConfig {
    let mut config = match parse_value(args, "--config") {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read {path}: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error: invalid config {path}: {e}");
                process::exit(1);
            })
        }
        None => SimConfig::default(),
    };

    if let Some(seed) = parse_value(args, "--seed") {
        config.seed = seed.parse().unwrap_or_else(|_| {
            eprintln!("Error: --seed expects an unsigned integer, got '{seed}'");
            process::exit(1);
        });
    }
    if let Some(speed) = parse_value(args, "--speed") {
        config.speed = speed.parse::<SimulationSpeed>().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });
    }
    config
}

/// Look a scenario up by index, then by case-insensitive title.
fn select_scenario<'a>(data: &'a WorldData, selector: &str) -> &'a ScenarioDefinition {
    let found = match selector.parse::<usize>() {
        Ok(index) => data.scenarios.get(index),
        Err(_) => data
            .scenarios
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(selector)),
    };
    match found {
        Some(definition) => definition,
        None => {
            eprintln!("Error: no scenario '{selector}' (use --list)");
            process::exit(1);
        }
    }
}

fn list_scenarios(data: &WorldData) {
    for (i, scenario) in data.scenarios.iter().enumerate() {
        let parties: Vec<&str> = scenario.parties.iter().map(|p| p.short_name()).collect();
        println!(
            "{i:>3}  {:<24} {:<14} {}",
            scenario.title,
            scenario.initial_map_view,
            parties.join(" vs ")
        );
    }
}

fn print_outcome(outcome: &Outcome) {
    println!(
        "{:<28} {:>14} {:>14} {:>9} {:>11}",
        "PARTY", "POPULATION", "FATALITIES", "KILLED", "DETONATIONS"
    );
    for party in &outcome.parties {
        println!(
            "{:<28} {:>14} {:>14} {:>8.1}% {:>11}",
            party.name,
            party.population,
            party.fatalities,
            party.kill_rate * 100.0,
            party.detonations_received
        );
    }
    println!("{:<28} {:>14} {:>14}", "TOTAL", "", outcome.fatalities);
}
