use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sftp_rename::client::SftpClient;
use sftp_rename::config::Config;
use sftp_rename::session::LocalSession;

#[derive(Parser)]
#[command(name = "sftp-rename")]
#[command(about = "Rename remote files, resolving paths against the remote working directory")]
struct Cli {
    /// Local directory served as remote `/` (overrides SFTP_RENAME_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Remote working directory (overrides SFTP_RENAME_CWD)
    #[arg(long, global = true)]
    cwd: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename a remote file or directory
    Rename { from: String, to: String },
    /// List a remote directory as JSON
    List {
        /// Directory to list (defaults to the working directory)
        path: Option<String>,
    },
    /// Print the entry type at a path: d, -, l, or nothing if missing
    Exists { path: String },
    /// Print the remote working directory
    Pwd,
}

/// Initialize tracing on stderr so stdout carries only command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "sftp_rename=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env()?.with_overrides(cli.root, cli.cwd)?;
    tracing::debug!("Serving {} as remote /", config.root.display());
    let client = SftpClient::new(LocalSession::from_config(&config));

    match cli.command {
        Commands::Rename { from, to } => {
            let renamed = client.rename(&from, &to).await?;
            println!("{}", renamed);
        }
        Commands::List { path } => {
            let dir = path.unwrap_or_else(|| client.cwd());
            let entries = client.list(&dir).await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Exists { path } => {
            if let Some(kind) = client.exists(&path).await? {
                println!("{}", kind.as_str());
            }
        }
        Commands::Pwd => {
            println!("{}", client.cwd());
        }
    }

    Ok(())
}
