//! Domain Tripper - random domain discovery over live DNS
//!
//! Trip across the internet: generate random domain names and check them
//! against live DNS until one actually exists.

use domain_tripper::{
    resolve::{ExistenceOracle, OracleConfig},
    trip::TripController,
    types::{Outcome, Strategy, TripConfig},
    words::{WordSupplier, WordSupplierConfig},
    CandidateGenerator, ExplorationSession, Result, TripResult,
};
use std::env;
use std::process;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = domain_tripper::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    let strategy = match parse_strategy(&args) {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Use --help for usage information");
            process::exit(1);
        }
    };

    run_trip(strategy).await;
    Ok(())
}

/// Pick the generation strategy from the command line
fn parse_strategy(args: &[String]) -> std::result::Result<Strategy, String> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("--random") => Ok(Strategy::Random),
        Some("--words") => Ok(Strategy::WordBased),
        Some(other) => Err(format!("Unknown option: {}", other)),
    }
}

/// Run one exploration trip and present the outcome
async fn run_trip(strategy: Strategy) {
    println!("🌐 Domain Tripper - where will the internet take you?");
    println!("═════════════════════════════════════════════════════");
    println!("   Strategy: {}", strategy);
    println!();

    let mut controller = build_controller(strategy);

    let session = controller
        .run(|progress| {
            if let Some(record) = &progress.last_record {
                let marker = match record.outcome {
                    Outcome::Exists => "✓ exists",
                    Outcome::NotFound => "✗ not found",
                    Outcome::Pending => "… checking",
                };
                println!(
                    "   [{:>2}/{}] {:<24} {}",
                    progress.attempts, progress.max_attempts, record.domain, marker
                );
            } else if !progress.phase.is_terminal() {
                println!("📡 {}", progress.message);
            }
        })
        .await;

    println!();
    present_outcome(&session);
}

/// Wire the controller to the live collaborators, honoring env overrides
fn build_controller(strategy: Strategy) -> TripController {
    let oracle_config = match env::var("DOMAIN_TRIPPER_DOH_URL") {
        Ok(endpoint) => OracleConfig {
            endpoint,
            ..Default::default()
        },
        Err(_) => OracleConfig::default(),
    };

    let supplier_config = match env::var("DOMAIN_TRIPPER_WORD_API_URL") {
        Ok(endpoint) => WordSupplierConfig {
            endpoint,
            ..Default::default()
        },
        Err(_) => WordSupplierConfig::default(),
    };

    TripController::with_components(
        TripConfig::with_strategy(strategy),
        Box::new(CandidateGenerator::new()),
        Box::new(ExistenceOracle::with_config(oracle_config)),
        Box::new(WordSupplier::with_config(supplier_config)),
    )
}

/// Show the terminal message, and the Found dialog when a domain turned up
fn present_outcome(session: &ExplorationSession) {
    match &session.result {
        TripResult::Found(domain) => {
            println!("🎉 Found! {}", domain);
            println!("   ({} attempts)", session.attempts);
            println!();
            found_dialog(domain);
        }
        TripResult::Exhausted => {
            println!(
                "😔 Tried {} times, but no existing domain turned up.",
                session.max_attempts
            );
            println!("   Start another trip and see where it takes you!");
        }
        TripResult::Aborted(reason) => {
            println!("⚠️  Trip ended early: {}", reason);
            println!("   Sorry about that - please try again.");
        }
        TripResult::Running => {
            // Unreachable: run() only returns settled sessions.
            println!("⚠️  Trip ended in an unexpected state");
        }
    }
}

/// Ask whether to visit the discovered domain
fn found_dialog(domain: &str) {
    let options = vec!["Trip! 🚀", "Dismiss"];
    let choice = inquire::Select::new(
        &format!("Trip to {}?", domain),
        options,
    )
    .prompt();

    match choice {
        Ok("Trip! 🚀") => {
            println!();
            println!("🚀 Off you go: https://{}", domain);
        }
        _ => {
            println!();
            println!("👋 Maybe next time.");
        }
    }
}

/// Print help information
fn print_help() {
    println!("🌐 Domain Tripper - random domain discovery over live DNS");
    println!("═════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-tripper [OPTION]");
    println!();
    println!("OPTIONS:");
    println!("    --random    Random alphanumeric names, e.g. abc123.com (default)");
    println!("    --words     Word-based names, e.g. blue-cat.com");
    println!("    --help      Show this help");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOMAIN_TRIPPER_DOH_URL        DNS-over-HTTPS endpoint override");
    println!("    DOMAIN_TRIPPER_WORD_API_URL   Word API endpoint override");
    println!();
    println!("HOW IT WORKS:");
    println!("    • Generates up to 50 candidate domains, one at a time");
    println!("    • Checks each against live DNS (A record, 5s bound per lookup)");
    println!("    • Stops at the first domain that actually exists");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
