//! CLI entry point for ghblog-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ghblog-rs")]
#[command(version)]
#[command(about = "Render Markdown blog posts fetched from a GitHub repository", long_about = None)]
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
    /// Write a default _config.yml and stylesheet
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render the post listing
    #[command(alias = "ls")]
    List {
        /// Print one line per post instead of the HTML page
        #[arg(long)]
        plain: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a single post page
    Show {
        /// Page name as used in links, e.g. 2024-01-01-hello.html
        post: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the listing and post pages
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
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries rendered pages, so logs go to stderr
    let filter = if cli.debug {
        "ghblog_rs=debug,info"
    } else {
        "ghblog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
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
            tracing::info!("Initializing blog in {:?}", target_dir);
            ghblog_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::List { plain, output } => {
            let blog = ghblog_rs::Blog::new(&base_dir)?;
            ghblog_rs::commands::list::run(&blog, plain, output.as_deref()).await?;
        }

        Commands::Show { post, output } => {
            let blog = ghblog_rs::Blog::new(&base_dir)?;
            ghblog_rs::commands::show::run(&blog, post.as_deref(), output.as_deref()).await?;
        }

        Commands::Server { port, ip, open } => {
            let blog = ghblog_rs::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            ghblog_rs::server::start(&blog, &ip, port, open).await?;
        }

        Commands::Version => {
            println!("ghblog-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
