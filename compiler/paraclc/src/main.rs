//! ParaCL interpreter CLI

use paraclc::commands::{dump_file, lex_file, parse_run_options, run_file, DriverError};
use paraclc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: paracl run <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --no-store              Don't print variables after the run");
                eprintln!("  --max-iterations=<n>    Abort after n loop iterations");
                std::process::exit(1);
            }
            run_command(&args[2..])
        }
        "dump" => {
            if args.len() < 3 {
                eprintln!("Usage: paracl dump <file>");
                std::process::exit(1);
            }
            dump_file(&args[2])
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: paracl lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("paracl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ if !command.starts_with('-') => run_command(&args[1..]),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_command(args: &[String]) -> Result<(), DriverError> {
    let (path, options) = parse_run_options(args)?;
    run_file(&path, &options)
}

fn print_usage() {
    eprintln!("ParaCL interpreter");
    eprintln!();
    eprintln!("Usage: paracl <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file>      Evaluate a program, then print its variables");
    eprintln!("  dump <file>     Print the syntax tree");
    eprintln!("  lex <file>      Print the token stream");
    eprintln!("  help            Show this help message");
    eprintln!("  version         Show version information");
    eprintln!();
    eprintln!("Run options:");
    eprintln!("  --no-store              Don't print variables after the run");
    eprintln!("  --max-iterations=<n>    Abort after n loop iterations");
    eprintln!();
    eprintln!("`paracl <file>` is shorthand for `paracl run <file>`.");
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=paracl_eval=debug) to trace evaluation.");
}
