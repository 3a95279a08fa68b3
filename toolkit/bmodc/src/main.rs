//! bmod Toolkit CLI
//!
//! Format, flatten, split, and check Borderlands-style mod files.

use bmodc::commands::{check_file, run_flatten, run_format, split_file};

fn main() {
    bmodc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "fmt" => {
            run_format(&args[2..]);
        }
        "flatten" => {
            run_flatten(&args[2..]);
        }
        "split" => {
            if args.len() < 3 {
                eprintln!("Usage: bmod split <file>");
                std::process::exit(1);
            }
            split_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: bmod check <file>");
                std::process::exit(1);
            }
            let mut ok = true;
            for path in &args[2..] {
                ok &= check_file(path);
            }
            if !ok {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("bmod Toolkit {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("bmod Toolkit for Borderlands-style mod files");
    println!();
    println!("Usage: bmod <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt [paths...]     Pretty-print mod files (indent bracket values)");
    println!("  flatten <file>     Collapse statements to game-console form");
    println!("  split <file>       List the individual statements of a file");
    println!("  check <files...>   Validate the set / set_cmp commands in files");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Format options:");
    println!("  --check            Check if files are formatted (exit 1 if not)");
    println!("  --stdin            Read from stdin, write to stdout");
    println!();
    println!("Flatten options:");
    println!("  --inner=N          Collapse only bracket groups up to depth N");
    println!("  --stdin            Read from stdin instead of a file");
    println!();
    println!("Examples:");
    println!("  bmod fmt patch.txt");
    println!("  bmod fmt --check mods/");
    println!("  bmod flatten patch.txt --inner=2");
    println!("  bmod split patch.txt");
    println!("  bmod check patch.txt");
}
