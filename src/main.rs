use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront::{config, order, output, simulate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Behavior engine for the storefront page")]
#[command(long_about = "\
Behavior engine for the storefront page

Builds WhatsApp order links and replays scripted browsing sessions
(clicks, keys, swipes, scrolls, waits) against the page's carousel,
navigation and reveal logic on a virtual clock.

Script format (JSON):

  {
    \"layout\": {
      \"slides\": 3,
      \"viewport_height\": 800, \"navbar_height\": 80,
      \"sections\": { \"products\": 1500 },
      \"products\": { \"elephant\": { \"product-id\": \"cly-001\", ... } }
    },
    \"steps\": [
      { \"type\": \"load\" },
      { \"wait_ms\": 5000 },
      { \"type\": \"click\", \"on\": \"carousel_next\" },
      { \"type\": \"touch_start\", \"x\": 300 }, { \"type\": \"touch_end\", \"x\": 200 },
      { \"type\": \"key_down\", \"key\": \"ArrowLeft\" }
    ]
  }

Run 'storefront gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the WhatsApp order link for a product
    Order {
        /// Product id (upper-cased in the message)
        #[arg(long)]
        id: String,
        /// Product name
        #[arg(long)]
        name: String,
        /// Display price, including currency
        #[arg(long)]
        price: String,
        /// Product image reference (informational only)
        #[arg(long)]
        image: Option<String>,
    },
    /// Replay a JSON event script and print what the page does
    Simulate {
        /// Script file
        script: PathBuf,
        /// Print the transcript as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate config.toml without doing anything else
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Order {
            id,
            name,
            price,
            image,
        } => {
            let store = config::load_config(&cli.config)?;
            let product = order::Product::new(id, name, price, image);
            let link = order::order_link(&store.order.phone_number, &product);
            output::print_order(&product, &link);
        }
        Command::Simulate { script, json } => {
            let store = config::load_config(&cli.config)?;
            let script = simulate::load_script(&script)?;
            let transcript = simulate::run(&store, script);
            if json {
                println!("{}", serde_json::to_string_pretty(&transcript)?);
            } else {
                output::print_transcript(&transcript);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.join("config.toml").display());
            config::load_config(&cli.config)?;
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
