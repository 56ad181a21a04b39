//! Command-line arguments

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use conoha_dns_core::types::{NewRecord, RecordOverrides};

/// TTL used by `add-record` when none is given.
pub const DEFAULT_TTL: u32 = 300;

/// Manage ConoHa DNS zones and records
#[derive(Parser, Debug)]
#[command(name = "conoha-dns")]
#[command(version, about = "Manage ConoHa DNS zones and records", long_about = None)]
#[command(after_help = "Examples:
  conoha-dns auth
  conoha-dns list
  conoha-dns list example.com
  conoha-dns add-record example.com @ A 192.0.2.1
  conoha-dns add-record example.com test A 192.0.2.1
  conoha-dns update-record example.com <record_id> --new-data 192.0.2.2
  conoha-dns delete-record example.com <record_id>")]
pub struct Cli {
    /// Output format for listings and results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain an API token and store it for later runs
    Auth,

    /// List domains, or the records of one domain
    List {
        /// Domain name or short ID
        domain: Option<String>,
    },

    /// Create a domain
    AddDomain {
        /// Domain name (a trailing dot is added if missing)
        name: String,
        /// Contact e-mail for the zone
        email: String,
    },

    /// Delete a domain
    DeleteDomain {
        /// Domain name or short ID
        domain: String,
    },

    /// Create a record
    AddRecord(AddRecordArgs),

    /// Change fields of a record, keeping the ones not given
    UpdateRecord(UpdateRecordArgs),

    /// Delete a record
    DeleteRecord {
        /// Domain name or short ID
        domain: String,
        /// Record short ID as shown by `list DOMAIN`
        record_id: String,
    },
}

#[derive(Args, Debug)]
pub struct AddRecordArgs {
    /// Domain name or short ID
    pub domain: String,

    /// Record name: `@`, a label such as `www`, or a full name
    pub name: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, ...)
    #[arg(value_name = "TYPE")]
    pub record_type: String,

    /// Record data
    pub data: String,

    /// TTL in seconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TTL,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub ttl: u32,
}

impl AddRecordArgs {
    pub fn new_record(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            record_type: self.record_type.clone(),
            data: self.data.clone(),
            ttl: Some(self.ttl),
        }
    }
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args(["new_name", "new_type", "new_data", "new_ttl"])
))]
pub struct UpdateRecordArgs {
    /// Domain name or short ID
    pub domain: String,

    /// Record short ID as shown by `list DOMAIN`
    pub record_id: String,

    /// New record name
    #[arg(long)]
    pub new_name: Option<String>,

    /// New record type
    #[arg(long)]
    pub new_type: Option<String>,

    /// New record data
    #[arg(long)]
    pub new_data: Option<String>,

    /// New TTL in seconds
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub new_ttl: Option<u32>,
}

impl UpdateRecordArgs {
    pub fn overrides(&self) -> RecordOverrides {
        RecordOverrides {
            name: self.new_name.clone(),
            record_type: self.new_type.clone(),
            data: self.new_data.clone(),
            ttl: self.new_ttl,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns
    Table,
    /// Comma-separated values with a header row
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("conoha-dns").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_with_and_without_domain() {
        let cli = parse(&["list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { domain: None }));
        assert_eq!(cli.format, OutputFormat::Table);

        let cli = parse(&["list", "example.com", "--format", "csv"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List { domain: Some(ref d) } if d == "example.com"
        ));
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn add_record_defaults_ttl() {
        let cli = parse(&["add-record", "example.com", "www", "A", "192.0.2.1"]).unwrap();
        let Commands::AddRecord(args) = cli.command else {
            panic!("expected add-record");
        };
        let new = args.new_record();
        assert_eq!(new.ttl, Some(DEFAULT_TTL));
        assert_eq!(new.record_type, "A");
        assert_eq!(new.name, "www");

        let cli = parse(&[
            "add-record",
            "example.com",
            "www",
            "A",
            "192.0.2.1",
            "-t",
            "60",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::AddRecord(AddRecordArgs { ttl: 60, .. })
        ));
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let err = parse(&[
            "add-record",
            "example.com",
            "www",
            "A",
            "192.0.2.1",
            "--ttl",
            "0",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn update_requires_at_least_one_change() {
        let err = parse(&["update-record", "example.com", "deadbeef"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn update_collects_overrides() {
        let cli = parse(&[
            "update-record",
            "example.com",
            "deadbeef",
            "--new-data",
            "192.0.2.2",
            "--new-ttl",
            "120",
        ])
        .unwrap();
        let Commands::UpdateRecord(args) = cli.command else {
            panic!("expected update-record");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.data.as_deref(), Some("192.0.2.2"));
        assert_eq!(overrides.ttl, Some(120));
        assert!(overrides.name.is_none());
        assert!(overrides.record_type.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["delete-domain", "example.com", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(parse(&["list", "--format", "json"]).is_err());
    }
}
