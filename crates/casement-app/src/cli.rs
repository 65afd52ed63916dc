use std::path::PathBuf;

use clap::Parser;

/// Casement: a borderless native window driven over a method channel.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `casement_bridge=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Serve request frames as JSON lines on stdin/stdout without a window.
    #[arg(long)]
    pub headless: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gui_host() {
        let args = Args::try_parse_from(["casement"]).unwrap();
        assert!(!args.headless);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "casement",
            "--headless",
            "--config",
            "/tmp/casement.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(args.headless);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/casement.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["casement", "--tiling"]).is_err());
    }
}
