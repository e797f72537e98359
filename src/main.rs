use clap::{Parser, Subcommand, ValueEnum};
use pagenav::{NavigationManifest, config, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pagenav")]
#[command(about = "Build a navigation manifest from a directory of numbered pages")]
#[command(long_about = "\
Build a navigation manifest from a directory of numbered pages

Page files are named {order}_{icon}_{topic}[_{title}].{ext}. Pages sharing
an icon and topic are grouped into one section; files are ordered by name.

  pages/
  ├── 100_🐍_Python_Data_Types.py    # 🐍 Python → \"100. Data Types\"
  ├── 1_🐍_Python_Basics.py          # 🐍 Python → \"1. Basics\"
  ├── 210_📊_Streamlit_Forms.py      # 📊 Streamlit → \"210. Forms\"
  └── helpers.py                     # not a page (no order/icon prefix)

A missing pages directory produces an empty manifest.

Run 'pagenav gen-config' to print a documented pagenav.toml.")]
#[command(version)]
struct Cli {
    /// Pages directory (overrides `pages_dir` from the config file)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigation tree
    Show,
    /// Write the manifest as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build the manifest and print totals
    Check,
    /// Print a stock pagenav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    match cli.command {
        Command::Show => {
            let (_, manifest) = build(cli.dir.as_deref(), &cli.config)?;
            output::print_manifest(&manifest);
        }
        Command::Json { out } => {
            let (_, manifest) = build(cli.dir.as_deref(), &cli.config)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            match out {
                Some(path) => std::fs::write(&path, json)?,
                None => println!("{}", json),
            }
        }
        Command::Check => {
            let (dir, manifest) = build(cli.dir.as_deref(), &cli.config)?;
            println!("==> Checking {}", dir.display());
            println!("{}", output::format_summary(&manifest));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config, resolve the pages directory, and build the manifest.
fn build(
    cli_dir: Option<&Path>,
    config_path: &Path,
) -> Result<(PathBuf, NavigationManifest), Box<dyn std::error::Error>> {
    let nav_config = config::load_config_file(config_path)?;
    let dir = resolve_pages_dir(cli_dir, &nav_config);
    let manifest = scan::build_navigation_with(&dir, &nav_config)?;
    Ok((dir, manifest))
}

/// `--dir` wins over the config file's `pages_dir`.
fn resolve_pages_dir(cli_dir: Option<&Path>, nav_config: &config::NavConfig) -> PathBuf {
    cli_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&nav_config.pages_dir))
}

/// Route `tracing` events to stderr. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8, format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "pagenav=info",
        1 => "pagenav=debug",
        _ => "pagenav=trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
