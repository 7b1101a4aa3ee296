//! # Calculator Host
//!
//! Main entry point for the calculator host runtime.

use calcd::settings::load_settings_file;
use calcd::{logging, HostMode, HostRuntime, HostRuntimeConfig};
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    logging::init(logging::DEFAULT_FILTER);

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut runtime = HostRuntime::new(config, stdout.lock()).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    if let Err(e) = runtime.run(io::stdin().lock()) {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<HostRuntimeConfig, String> {
    let mut config = HostRuntimeConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.mode = HostMode::Script;
                config.script = Some(script_text);
            }
            "--settings" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --settings".to_string());
                }
                config.settings = load_settings_file(Path::new(&args[i]))
                    .map_err(|e| format!("Failed to load settings: {}", e))?;
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                config.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--snapshot" => {
                config.print_snapshot = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --script <FILE>      Replay an input script instead of reading stdin");
    eprintln!("  -c, --settings <FILE>    JSON settings file");
    eprintln!("  --max-steps <N>          Maximum steps to run (0 = unlimited)");
    eprintln!("  --snapshot               Print the final state as JSON on exit");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script calcd/scripts/chain.calc --snapshot", program);
    eprintln!("  echo '12*3=' | {}", program);
}
