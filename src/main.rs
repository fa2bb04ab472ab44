use clap::{Parser, Subcommand};
use configuration::{Settings, load_settings};
use history::{Calculation, HistoryStore};
use operations::OperationRegistry;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// The main entry point for the Tally calculator.
fn main() -> anyhow::Result<()> {
    // Route library tracing through a subscriber; RUST_LOG overrides the
    // default so history consistency warnings are visible out of the box.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let settings = load_settings()?;

    // One registry for the whole process, passed down explicitly. Callers
    // that want custom operations register them here before dispatching.
    let registry = OperationRegistry::new();

    let cli = Cli::parse();
    match cli.command {
        Commands::Eval(args) => handle_eval(args, &registry, &settings),
        Commands::Ops => handle_ops(&registry),
        Commands::History => handle_history(&registry, &settings),
        Commands::Repl => run_repl(&registry, &settings),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An exact decimal calculator with named, extensible operations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operation and print the result.
    Eval(EvalArgs),
    /// List the registered operation keys.
    Ops,
    /// Print the saved calculation history.
    History,
    /// Start an interactive calculator session.
    Repl,
}

#[derive(Parser)]
struct EvalArgs {
    /// The operation key (case-insensitive), e.g. "add" or "integer_division".
    operation: String,

    /// The first operand, an exact decimal (e.g. "4.3").
    a: Decimal,

    /// The second operand.
    b: Decimal,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_eval(
    args: EvalArgs,
    registry: &OperationRegistry,
    settings: &Settings,
) -> anyhow::Result<()> {
    let calculation = Calculation::perform(registry, &args.operation, args.a, args.b)?;
    println!("{}", calculation.format_result(settings.display.precision));

    if settings.history.auto_save {
        let mut store = HistoryStore::load(
            &settings.history.file_path,
            registry,
            settings.history.max_size,
        )?;
        store.push(calculation);
        store.save(&settings.history.file_path)?;
    }
    Ok(())
}

fn handle_ops(registry: &OperationRegistry) -> anyhow::Result<()> {
    for key in registry.keys() {
        println!("{key}");
    }
    Ok(())
}

fn handle_history(registry: &OperationRegistry, settings: &Settings) -> anyhow::Result<()> {
    let store = HistoryStore::load(
        &settings.history.file_path,
        registry,
        settings.history.max_size,
    )?;
    if store.is_empty() {
        println!("No calculations recorded.");
        return Ok(());
    }
    for calculation in store.entries() {
        print_calculation(calculation, settings.display.precision);
    }
    Ok(())
}

fn print_calculation(calculation: &Calculation, precision: u32) {
    println!(
        "{}  {}({}, {}) = {}",
        calculation.timestamp.format("%Y-%m-%d %H:%M:%S"),
        calculation.operation,
        calculation.operand1,
        calculation.operand2,
        calculation.format_result(precision)
    );
}

// ==============================================================================
// Interactive Session
// ==============================================================================

const REPL_HELP: &str = "\
Enter:  <operation> <a> <b>     e.g. `divide 5.5 2`
Commands:
  ops       list available operations
  history   show this session's calculations
  clear     forget this session's calculations
  save      write the history file now
  help      show this message
  exit      quit (saves automatically when auto_save is on)";

fn run_repl(registry: &OperationRegistry, settings: &Settings) -> anyhow::Result<()> {
    let mut store = HistoryStore::load(
        &settings.history.file_path,
        registry,
        settings.history.max_size,
    )?;
    println!("Tally — exact decimal calculator. Type `help` for commands.");

    let stdin = io::stdin();
    loop {
        print!("tally> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break; // EOF behaves like `exit`
        };
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["exit"] | ["quit"] => break,
            ["help"] => println!("{REPL_HELP}"),
            ["ops"] => {
                for key in registry.keys() {
                    println!("{key}");
                }
            }
            ["history"] => {
                for calculation in store.entries() {
                    print_calculation(calculation, settings.display.precision);
                }
            }
            ["clear"] => store.clear(),
            ["save"] => {
                if let Err(e) = store.save(&settings.history.file_path) {
                    eprintln!("Error: {e}");
                }
            }
            [operation, a, b] => match parse_operands(a, b) {
                Ok((a, b)) => match Calculation::perform(registry, operation, a, b) {
                    Ok(calculation) => {
                        println!("{}", calculation.format_result(settings.display.precision));
                        store.push(calculation);
                    }
                    Err(e) => eprintln!("Error: {e}"),
                },
                Err(e) => eprintln!("Error: {e}"),
            },
            _ => eprintln!("Error: expected `<operation> <a> <b>` (see `help`)"),
        }
    }

    if settings.history.auto_save {
        store.save(&settings.history.file_path)?;
    }
    Ok(())
}

fn parse_operands(a: &str, b: &str) -> Result<(Decimal, Decimal), String> {
    let a = a
        .parse::<Decimal>()
        .map_err(|_| format!("'{a}' is not a valid decimal number"))?;
    let b = b
        .parse::<Decimal>()
        .map_err(|_| format!("'{b}' is not a valid decimal number"))?;
    Ok((a, b))
}
