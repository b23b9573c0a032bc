//! solarwind: headless driver for the magnetosphere particle simulation.
//!
//! Usage:
//!   solarwind run --config wind.json --ticks 600 --every 60
//!   solarwind defaults > wind.json
//!   solarwind serve --secs 10

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use solarwind_app::host;
use solarwind_app::state::AppState;
use solarwind_core::config::SimulationConfig;
use solarwind_sim::ParticleSystem;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "defaults" => cmd_defaults(),
        "serve" => cmd_serve(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "solarwind: solar wind / magnetosphere particle simulation\n\
         \n\
         Commands:\n\
         \n\
         run       Step the simulation headless and print JSON snapshots\n\
         \n\
           --config <path>  JSON config file (missing fields use defaults)\n\
           --ticks <N>      Number of ticks to run (default: 600)\n\
           --seed <S>       Override the config seed\n\
           --every <K>      Print a snapshot every K ticks (default: 60)\n\
         \n\
         defaults  Print the default config as JSON\n\
         \n\
         serve     Run the real-time 60Hz loop and log the live ion count\n\
         \n\
           --config <path>  JSON config file\n\
           --secs <S>       Seconds to run (default: 5)\n\
         \n\
         Log verbosity follows RUST_LOG (default: info).\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T, String> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("Invalid value for {flag}: {raw}")),
        None => Ok(default),
    }
}

fn load_config(args: &[String]) -> Result<SimulationConfig, String> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => {
            let path = PathBuf::from(path);
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            serde_json::from_str::<SimulationConfig>(&text)
                .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
        }
        None => SimulationConfig::default(),
    };
    config.seed = parse_flag(args, "--seed", config.seed)?;
    Ok(config)
}

fn cmd_run(args: &[String]) -> Result<(), String> {
    let config = load_config(args)?;
    let ticks: u64 = parse_flag(args, "--ticks", 600)?;
    let every: u64 = parse_flag(args, "--every", 60)?;
    if every == 0 {
        return Err("--every must be at least 1".into());
    }

    let mut system = ParticleSystem::new(config).map_err(|e| format!("Invalid config: {e}"))?;
    log::info!(
        "running {ticks} ticks: {} slots, ion life {}, seed {}",
        system.capacity(),
        system.ion_life(),
        config.seed
    );

    let started = Instant::now();
    for _ in 0..ticks {
        let snapshot = system.tick();
        if snapshot.time.tick % every == 0 {
            let json = serde_json::to_string(&snapshot).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    log::info!(
        "done in {:.2?}: {} live of {}",
        started.elapsed(),
        system.pool().live_count(),
        system.capacity()
    );
    Ok(())
}

fn cmd_defaults() -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(&SimulationConfig::default()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn cmd_serve(args: &[String]) -> Result<(), String> {
    let config = load_config(args)?;
    let secs: f64 = parse_flag(args, "--secs", 5.0)?;
    let run_for = parse_duration(secs)?;

    let state = AppState::new();
    let deadline = Instant::now()
        .checked_add(run_for)
        .ok_or_else(|| format!("Invalid value for --secs: {secs}"))?;
    host::start_simulation(&state, config)?;

    while Instant::now() < deadline {
        let remaining = deadline.saturating_duration_since(Instant::now());
        std::thread::sleep(remaining.min(Duration::from_secs(1)));
        if let Some(snapshot) = host::get_snapshot(&state)? {
            log::info!(
                "tick {} ({:.1}s): {} live of {}",
                snapshot.time.tick,
                snapshot.time.elapsed,
                snapshot.ions.len(),
                snapshot.capacity
            );
        }
    }

    host::stop_simulation(&state)
}

fn parse_duration(secs: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| format!("Invalid value for --secs: {secs} ({e})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_duration_rejects_out_of_range() {
        assert_eq!(parse_duration(1.5), Ok(Duration::from_millis(1500)));
        assert!(parse_duration(1e30).is_err());
        assert!(parse_duration(-1.0).is_err());
        assert!(parse_duration(f64::NAN).is_err());
        assert!(parse_duration(f64::INFINITY).is_err());
    }

    #[test]
    fn test_serve_with_huge_secs_errors_without_starting() {
        let result = cmd_serve(&args(&["--secs", "1e30"]));
        assert!(result.unwrap_err().starts_with("Invalid value for --secs"));
    }

    #[test]
    fn test_parse_flag_defaults_and_errors() {
        let list = args(&["--ticks", "12", "--seed", "x"]);
        assert_eq!(parse_flag(&list, "--ticks", 600u64), Ok(12));
        assert_eq!(parse_flag(&list, "--every", 60u64), Ok(60));
        assert!(parse_flag(&list, "--seed", 0u64).is_err());
    }
}
