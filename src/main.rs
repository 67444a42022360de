//! CLI entry point for zkview

use std::io::IsTerminal;
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::debug;
use zkview::tree::normalize_root;
use zkview::{
    DEFAULT_MAX_DEPTH, MetadataConfig, OutputConfig, StreamingFormatter, TraversalError,
    TreeWalker, WalkerConfig, ZkClient,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Diagnostic log level (written to stderr)
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "zkview")]
#[command(about = "Show a ZooKeeper namespace as a tree")]
#[command(after_help = "Example:\n  zkview --host localhost /consumers")]
#[command(version)]
struct Args {
    /// Node to display
    #[arg(default_value = "/")]
    path: String,

    /// ZooKeeper host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// ZooKeeper port
    #[arg(long, default_value_t = 2181)]
    port: u16,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", default_value_t = DEFAULT_MAX_DEPTH)]
    level: usize,

    /// Show node metadata beneath each node
    #[arg(long = "meta")]
    meta: bool,

    /// Show metadata timestamps as local date-times
    #[arg(long = "human", requires = "meta")]
    human: bool,

    /// Do not show node data
    #[arg(long = "nodata")]
    nodata: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Session timeout
    /// Duration format: 500ms, 30s, 2m
    #[arg(long = "timeout", value_name = "DURATION", default_value = "100s", value_parser = parse_duration_string)]
    timeout: Duration,

    /// Print the number of nodes after the tree
    #[arg(long = "summary")]
    summary: bool,

    /// Diagnostic logging to stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "off")]
    log_level: LogLevel,
}

/// Parse a duration string like "30s" or "2m" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });
    setup_tracing(args.log_level);
    debug!(?args, "parsed arguments");

    let root = normalize_root(&args.path).unwrap_or_else(|e| {
        eprintln!("zkview: invalid path '{}': {}", args.path, e);
        process::exit(1);
    });

    let walker_config = WalkerConfig {
        max_depth: args.level,
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        metadata: if args.meta {
            MetadataConfig::shown(args.human)
        } else {
            MetadataConfig::hidden()
        },
        suppress_payload: args.nodata,
        show_summary: args.summary,
    };
    let mut formatter = StreamingFormatter::new(output_config);

    if let Err(e) = formatter.output_root(&root) {
        eprintln!("zkview: error writing output: {}", e);
        process::exit(1);
    }

    let endpoints = vec![format!("{}:{}", args.host, args.port)];
    // A failed connection is reported, then the walk runs anyway and fails on its
    // first listing.
    let client = ZkClient::connect(&endpoints, args.timeout).unwrap_or_else(|e| {
        eprintln!("zkview: cannot connect to {}: {}", endpoints.join(","), e);
        ZkClient::disconnected(&endpoints)
    });

    debug!(connected = client.is_connected(), endpoints = client.endpoints(), "starting walk");

    let walker = TreeWalker::new(walker_config, &client);
    match walker.walk(&root, &mut formatter) {
        Ok(stats) => debug!(nodes = stats.nodes, deepest = stats.deepest, "walk complete"),
        Err(e @ TraversalError::ListChildren { .. }) => {
            eprintln!("zkview: {}", e);
            process::exit(1);
        }
        Err(TraversalError::Output(e)) => {
            eprintln!("zkview: error writing output: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["zkview"]).unwrap();
        assert_eq!(args.path, "/");
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 2181);
        assert_eq!(args.level, DEFAULT_MAX_DEPTH);
        assert_eq!(args.timeout, Duration::from_secs(100));
        assert!(!args.meta && !args.human && !args.nodata && !args.summary);
    }

    #[test]
    fn test_human_requires_meta() {
        assert!(Args::try_parse_from(["zkview", "--human"]).is_err());
        assert!(Args::try_parse_from(["zkview", "--meta", "--human"]).is_ok());
    }

    #[test]
    fn test_parse_duration_string() {
        assert_eq!(parse_duration_string("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration_string(" 500ms "), Ok(Duration::from_millis(500)));
        assert!(parse_duration_string("soon").is_err());
    }

    #[test]
    fn test_explicit_color_modes() {
        assert!(should_use_color(ColorMode::Always));
        assert!(!should_use_color(ColorMode::Never));
    }
}
