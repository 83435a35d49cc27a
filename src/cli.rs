use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "tshark-wrap", version, about = "Run tshark from a YAML capture config")]
pub struct Args {
    /// Path to the YAML capture config.
    pub config: PathBuf,

    /// Path to the tshark executable, for installs outside PATH.
    #[arg(long, default_value = "tshark")]
    pub tshark: String,

    /// Build and log the tshark command without running it.
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parse_positional_config() {
        let args = Args::try_parse_from(["tshark-wrap", "/etc/capture.yaml"]).unwrap();
        assert_eq!(args.config, PathBuf::from("/etc/capture.yaml"));
        assert_eq!(args.tshark, "tshark");
        assert!(!args.dry_run);
    }

    #[test]
    fn parse_overrides() {
        let args = Args::try_parse_from([
            "tshark-wrap",
            "--tshark",
            "/usr/local/bin/tshark",
            "--dry-run",
            "cap.yaml",
        ])
        .unwrap();
        assert_eq!(args.tshark, "/usr/local/bin/tshark");
        assert!(args.dry_run);
    }

    #[test]
    fn help_describes_every_option() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("Path to the YAML capture config"));
        assert!(help.contains("Path to the tshark executable"));
        assert!(help.contains("without running it"));
    }

    #[test]
    fn config_path_is_required() {
        assert!(Args::try_parse_from(["tshark-wrap"]).is_err());
    }
}
