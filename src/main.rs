//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Markdown blog content resolver for a personal portfolio site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Publication date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List site information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, featured, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post
    Show {
        /// Post id (file name without extension)
        id: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show posts grouped by year and month
    Archive {
        /// Print the archive as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-resolve posts whenever content changes
    #[command(alias = "w")]
    Watch,

    /// Start the JSON query server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Invalidate cached posts when content changes
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, date } => {
            let site = folio::Folio::new(&base_dir)?;
            let path = site.new_post(&title, date.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { id, json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, &id, json)?;
        }

        Commands::Archive { json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::archive::run(&site, json)?;
        }

        Commands::Watch => {
            let site = folio::Folio::new(&base_dir)?;
            tokio::task::spawn_blocking(move || folio::commands::watch::run(&site)).await??;
        }

        Commands::Serve { port, ip, watch } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&site, &ip, port, watch).await?;
        }
    }

    Ok(())
}
