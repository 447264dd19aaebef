//! courier CLI - Command-line interface
//!
//! Commands:
//!   price    - Price a delivery file
//!   rates    - Show the effective rate table
//!   schema   - Print JSON schemas for input/output types

use courier_pricing::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "price" => cmd_price(&args[2..]),
        "rates" => cmd_rates(&args[2..]),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("courier {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"
courier - parcel delivery pricing

USAGE:
    courier <COMMAND> [OPTIONS]

COMMANDS:
    price <delivery.yaml|json>       Price a delivery
    rates                            Show the effective rate table
    schema [name]                    Print JSON schema (delivery, priced, config)
    version                          Print version

OPTIONS:
    --config <file>                  Pricing config (default: standard rate card)
    --json                           JSON output format (price, rates)

EXAMPLES:
    courier price order.yaml
    courier price order.json --json
    courier rates --config pricing.yaml
"#
    );
}

fn cmd_price(args: &[String]) -> Result<()> {
    let delivery_path = args
        .first()
        .filter(|a| !a.starts_with("--"))
        .ok_or("Usage: courier price <delivery.yaml> [--config <file>] [--json]")?;
    let json_output = args.contains(&"--json".to_string());

    let config = load_config(args)?;
    let delivery = load_delivery(Path::new(delivery_path))?;
    let priced = DeliveryPricer::from_config(&config).price(&delivery)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&priced)?);
        return Ok(());
    }

    println!("Delivery {}", priced.fingerprint);
    for (i, parcel) in priced.parcels.iter().enumerate() {
        let overweight = if parcel.is_overweight {
            format!(" (overweight +{})", parcel.overweight_cost)
        } else {
            String::new()
        };
        println!(
            "  #{:<3} {:<7} {:>10}{}",
            i + 1,
            parcel.parcel_type.to_string(),
            parcel.cost,
            overweight
        );
    }
    println!("  Parcels:   {:>10}", priced.parcels_cost()?);
    if priced.discounted_shipping {
        println!("  Discounts: {:>10}", priced.shipping_discounts);
    }
    if priced.speedy_shipping {
        println!("  Speedy:    {:>10}", priced.speedy_shipping_cost);
    }
    println!("  Total:     {:>10}", priced.total_cost);
    Ok(())
}

fn cmd_rates(args: &[String]) -> Result<()> {
    let config = load_config(args)?;

    if args.contains(&"--json".to_string()) {
        println!("{}", serde_json::to_string_pretty(&config.rates)?);
        return Ok(());
    }

    println!("{:<7} {:>10} {:>13}", "Type", "Base cost", "Weight limit");
    for parcel_type in config.classification.reachable_types() {
        let rate = config.rates.rate(parcel_type)?;
        println!(
            "{:<7} {:>10} {:>13}",
            parcel_type.to_string(),
            rate.base_cost,
            rate.weight_limit
        );
    }
    println!("Overweight rate: {} per unit", config.rates.overweight_rate);
    println!("Discount selection: {:?}", config.discounts.selection);
    Ok(())
}

fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: delivery, priced, config");
            Ok(())
        }
        "delivery" => print_schema::<Delivery>(),
        "priced" => print_schema::<PricedDelivery>(),
        "config" => print_schema::<PricingConfig>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn load_config(args: &[String]) -> Result<PricingConfig> {
    match parse_path_arg(args, "--config") {
        Some(path) => PricingConfig::load_from_file(&path),
        None => Ok(PricingConfig::default()),
    }
}

fn load_delivery(path: &Path) -> Result<Delivery> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Delivery::from_json(&content),
        _ => Delivery::from_yaml(&content),
    }
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}
