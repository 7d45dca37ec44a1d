//! store-cart - manage carts on a Storefront backend

use clap::{Parser, Subcommand};
use libstorefront::api::HttpCartApi;
use libstorefront::{Cart, CartPage, CartStore, Config, Result, StorefrontError};

#[derive(Parser, Debug)]
#[command(name = "store-cart")]
#[command(about = "Manage carts on a Storefront backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List carts
    List {
        /// Page to fetch (only sent with a sort order)
        #[arg(short, long, default_value_t = 0)]
        page: u64,

        /// Page size
        #[arg(short, long)]
        size: Option<u64>,

        /// Sort order, e.g. "id,asc"
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show a single cart
    Show { id: i64 },

    /// Create a cart from a JSON object (reads from stdin if not provided)
    Create { json: Option<String> },

    /// Update a cart from a JSON object (reads from stdin if not provided)
    Update { json: Option<String> },

    /// Delete a cart
    Delete { id: i64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        libstorefront::logging::init(libstorefront::logging::LogFormat::Text, "debug");
    } else {
        libstorefront::logging::init_default();
    }

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let api = HttpCartApi::new(&config.api)?;
    let mut store = CartStore::new(Box::new(api));

    match cli.command {
        Command::List { page, size, sort } => {
            let sort = sort.or_else(|| config.defaults.sort.clone());
            let size = size.unwrap_or(config.defaults.page_size);
            let fetched = store.get_entities(page, size, sort.as_deref()).await?;
            print_page(&fetched, &cli.format)?;
        }
        Command::Show { id } => {
            let cart = store.get_entity(id).await?;
            print_cart(&cart, &cli.format)?;
        }
        Command::Create { json } => {
            let cart = read_payload(json)?;
            let created = store.create_entity(&cart).await?;
            print_cart(&created, &cli.format)?;
        }
        Command::Update { json } => {
            let cart = read_payload(json)?;
            if cart.id().is_none() {
                return Err(StorefrontError::InvalidInput(
                    "update payload must carry an id".to_string(),
                ));
            }
            let updated = store.update_entity(&cart).await?;
            print_cart(&updated, &cli.format)?;
        }
        Command::Delete { id } => {
            store.delete_entity(id).await?;
            if cli.format == "json" {
                println!("{}", serde_json::json!({ "deleted": id }));
            } else {
                println!("Deleted cart {}", id);
            }
        }
    }

    Ok(())
}

/// Load the configuration, falling back to defaults when no file exists
fn load_config() -> Result<Config> {
    let path = libstorefront::config::resolve_config_path()?;
    if path.exists() {
        Config::load_from_path(&path)
    } else {
        Ok(Config::default_config())
    }
}

/// Parse the cart payload from an argument or stdin
fn read_payload(arg: Option<String>) -> Result<Cart> {
    let raw = match arg {
        Some(s) => s,
        None => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
                .map_err(|e| StorefrontError::InvalidInput(format!("failed to read stdin: {}", e)))?;
            buf
        }
    };

    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| StorefrontError::InvalidInput(format!("invalid JSON: {}", e)))?;
    Cart::from_value(value)
}

fn print_cart(cart: &Cart, format: &str) -> Result<()> {
    if format == "json" {
        let rendered = serde_json::to_string_pretty(cart)
            .map_err(|e| StorefrontError::InvalidInput(e.to_string()))?;
        println!("{}", rendered);
    } else {
        println!("{}", cart);
    }
    Ok(())
}

fn print_page(page: &CartPage, format: &str) -> Result<()> {
    if format == "json" {
        let rendered = serde_json::to_string_pretty(&page.carts)
            .map_err(|e| StorefrontError::InvalidInput(e.to_string()))?;
        println!("{}", rendered);
    } else {
        for cart in &page.carts {
            println!("{}", cart);
        }
        println!("{} of {} carts", page.carts.len(), page.total_items);
    }
    Ok(())
}
