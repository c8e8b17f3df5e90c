use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use schoolerp_cli::seeder::{SeedConfig, seed_all};
use schoolerp_config::DatabaseConfig;
use schoolerp_db::DocumentStore;
use schoolerp_models::registry;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "schoolerp-cli")]
#[command(about = "School ERP CLI - Schema inspection and seeding tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print entity field declarations as JSON
    Schema {
        /// Entity kind or collection name (all kinds when omitted)
        name: Option<String>,
    },
    /// List the collections present in the configured store
    Collections,
    /// Seed the store with fake teachers, classes, students, and invoices
    Seed {
        /// Number of teachers to create
        #[arg(long, default_value = "5")]
        teachers: usize,

        /// Number of classes to create
        #[arg(long, default_value = "4")]
        classes: usize,

        /// Number of students to create
        #[arg(short = 's', long, default_value = "40")]
        students: usize,

        /// Number of invoices per student
        #[arg(long, default_value = "1")]
        invoices: usize,

        /// Academic year for classes and numbering
        #[arg(short = 'y', long, default_value = "2025")]
        year: i32,
    },
}

async fn open_store() -> anyhow::Result<Arc<dyn DocumentStore>> {
    let config = DatabaseConfig::from_env();
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

    schoolerp_db::connect(url, config.name.as_deref(), config.max_connections)
        .await
        .context("Failed to open document store")
}

fn handle_schema(name: Option<String>) -> anyhow::Result<()> {
    let output = match name {
        Some(name) => {
            let def = registry::find(&name).ok_or_else(|| anyhow!("Unknown schema: {}", name))?;
            serde_json::to_string_pretty(def)?
        }
        None => serde_json::to_string_pretty(registry::REGISTRY)?,
    };
    println!("{output}");
    Ok(())
}

async fn handle_collections() -> anyhow::Result<()> {
    let store = open_store().await?;
    let collections = store.list_collections().await;
    store.close().await;

    for name in collections? {
        println!("{name}");
    }
    Ok(())
}

async fn handle_seed(config: SeedConfig) -> anyhow::Result<()> {
    let store = open_store().await?;
    let result = seed_all(store.as_ref(), &config).await;
    store.close().await;

    let summary = result?;
    println!("\n✅ Seeding complete!");
    println!("   Teachers: {}", summary.teachers);
    println!("   Classes:  {}", summary.classes);
    println!("   Students: {}", summary.students);
    println!("   Invoices: {}", summary.invoices);
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schema { name } => handle_schema(name),
        Commands::Collections => handle_collections().await,
        Commands::Seed {
            teachers,
            classes,
            students,
            invoices,
            year,
        } => {
            handle_seed(SeedConfig {
                teachers,
                classes,
                students,
                invoices_per_student: invoices,
                year,
            })
            .await
        }
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
