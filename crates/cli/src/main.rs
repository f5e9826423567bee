//! Stockroom CLI - accounts, product catalog and migrations.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema (also done implicitly by every other command)
//! stockroom migrate
//!
//! # Register and log in
//! stockroom register -n "Mario Rossi" -e mario@example.com -p hunter2 -r admin
//! stockroom login -e mario@example.com -p hunter2
//!
//! # Product commands log in first
//! stockroom product -e mario@example.com -p hunter2 list
//!
//! # ...or take credentials from the environment
//! export STOCKROOM_EMAIL=mario@example.com STOCKROOM_PASSWORD=hunter2
//! stockroom product add --name Widget --description "Blue" --quantity 5 --price 9.99
//! stockroom product list
//! stockroom product update 1 --quantity 3
//! stockroom product delete 1
//!
//! # Load fixture products from YAML
//! stockroom seed fixtures/products.yaml
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_core::{Email, Price, ProductId, Role};
use stockroom_inventory::config::{LogFormat, StockroomConfig};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about = "Stockroom inventory management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Register a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Login email
        #[arg(short, long)]
        email: Email,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Role (`admin`, `user`)
        #[arg(short, long, default_value = "user")]
        role: Role,
    },
    /// Check credentials
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Manage the product catalog
    Product {
        #[command(flatten)]
        credentials: Credentials,

        #[command(subcommand)]
        action: ProductAction,
    },
    /// Insert products listed in a YAML file
    Seed {
        #[command(flatten)]
        credentials: Credentials,

        /// Path to the YAML file
        file: String,
    },
}

/// Login credentials shared by every authenticated command.
#[derive(Args)]
struct Credentials {
    /// Login email
    #[arg(short, long, env = "STOCKROOM_EMAIL")]
    email: Email,

    /// Password
    #[arg(short, long, env = "STOCKROOM_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show one product
    Show {
        /// Product ID
        id: ProductId,
    },
    /// Add a product
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Units in stock (at least 1)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,

        /// Unit price (at least 0.01)
        #[arg(long, value_parser = commands::product::parse_form_price)]
        price: Price,
    },
    /// Update a product; omitted fields keep their current value
    Update {
        /// Product ID
        id: ProductId,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New stock level (at least 1)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: Option<i64>,

        /// New unit price (at least 0.01)
        #[arg(long, value_parser = commands::product::parse_form_price)]
        price: Option<Price>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
}

/// How `product list` renders its output.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One line per product
    Table,
    /// JSON array
    Json,
}

/// Initialize tracing with `EnvFilter`; logs go to stderr so stdout carries
/// command output only.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stockroom=info,stockroom_inventory=info".into());

    let json = format == LogFormat::Json;
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration from environment (log format is needed before tracing init)
    let config = StockroomConfig::from_env();
    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::default(), |config| config.log_format),
    );

    let result = match config {
        Ok(config) => run(cli, &config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &StockroomConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run(config).await?,
        Commands::Register {
            name,
            email,
            password,
            role,
        } => commands::account::register(config, &name, &email, password, role).await?,
        Commands::Login { credentials } => {
            commands::account::login(config, credentials.email, credentials.password).await?;
        }
        Commands::Product {
            credentials,
            action,
        } => {
            let pool = stockroom_inventory::db::open(&config.database).await?;
            let session =
                commands::account::authenticate(&pool, credentials.email, credentials.password)
                    .await?;
            match action {
                ProductAction::List { format } => {
                    commands::product::list(&pool, &session, format).await?;
                }
                ProductAction::Show { id } => commands::product::show(&pool, &session, id).await?,
                ProductAction::Add {
                    name,
                    description,
                    quantity,
                    price,
                } => {
                    commands::product::add(&pool, &session, name, description, quantity, price)
                        .await?;
                }
                ProductAction::Update {
                    id,
                    name,
                    description,
                    quantity,
                    price,
                } => {
                    let changes = commands::product::ProductChanges {
                        name,
                        description,
                        quantity,
                        price,
                    };
                    commands::product::update(&pool, &session, id, changes).await?;
                }
                ProductAction::Delete { id } => {
                    commands::product::delete(&pool, &session, id).await?;
                }
            }
        }
        Commands::Seed { credentials, file } => {
            let pool = stockroom_inventory::db::open(&config.database).await?;
            let session =
                commands::account::authenticate(&pool, credentials.email, credentials.password)
                    .await?;
            commands::seed::products(&pool, &session, &file).await?;
        }
    }
    Ok(())
}
