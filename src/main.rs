//! CLI entry point for techblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "techblog")]
#[command(version)]
#[command(about = "Static pages and dev server for the TechBlog site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,

        /// Regenerate even when nothing changed
        #[arg(short, long)]
        force: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder and cache
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, page, route, category, team, timeline)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "techblog=debug,info"
    } else {
        "techblog=info"
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
            tracing::info!("Initializing TechBlog site in {:?}", target_dir);
            techblog::commands::init::init_site(&target_dir)?;
            println!("Initialized TechBlog site in {:?}", target_dir);
        }

        Commands::Generate { watch, force } => {
            let site = techblog::TechBlog::new(&base_dir)?;
            tracing::info!("Generating static files...");

            match techblog::commands::generate::run_with_options(&site, force)? {
                Some(report) => println!(
                    "Generated {} pages ({} broken links)",
                    report.pages.len(),
                    report.broken_links.len()
                ),
                None => println!("Already up to date."),
            }

            if watch {
                tracing::info!("Watching for file changes...");
                tokio::task::spawn_blocking(move || techblog::commands::generate::watch(&site))
                    .await??;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = techblog::TechBlog::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            techblog::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = techblog::TechBlog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = techblog::TechBlog::new(&base_dir)?;
            techblog::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("techblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
