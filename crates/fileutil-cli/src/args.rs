use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fileutil::TimeCodec;
use jiff::tz::TimeZone;

#[derive(Parser, Debug)]
#[command(version, about = "Timestamp, path, and config file name helpers")]
pub struct Args {
    /// IANA time zone used to read legacy 'YYYY-MM-DD HH:MM:SS' values
    #[clap(
        short = 'z',
        long,
        global = true,
        value_name = "TZ",
        env = "FILEUTIL_TIMEZONE",
        help = "Time zone for legacy timestamps, e.g. Asia/Tokyo [default: system time zone]"
    )]
    pub timezone: Option<String>,

    /// Keep quiet and only log errors
    #[clap(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        default_value_t = false
    )]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        conflicts_with = "quiet",
        action = clap::ArgAction::Count,
        help = "Log what each helper is doing; specify multiple times for more detail"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Rewrite a timestamp in canonical UTC form ('-' for none)
    FormatTime { time: String },

    /// Decode a timestamp and show its fields
    ParseTime { time: String },

    /// Print the current time in canonical form
    Now,

    /// Exit successfully if something exists at PATH
    Exists { path: PathBuf },

    /// Open PATH for writing, creating it if needed, without truncating
    Touch { path: PathBuf },

    /// Create a uniquely named temp directory and print its path
    Tempdir {
        #[clap(
            long,
            value_name = "PREFIX",
            env = "FILEUTIL_TMP_PREFIX",
            default_value = "fileutil"
        )]
        prefix: String,
    },

    /// Print the home directory
    Home,

    /// Print the working directory
    Cwd,

    /// Expand '~' and make PATH absolute
    Resolve { path: PathBuf },

    /// Print the first MAX characters of TEXT
    Trunc { text: String, max: usize },

    /// Normalize NAME to the .yaml extension
    YamlName { name: String },
}

impl Args {
    /// Codec for the configured time zone, falling back to the system zone.
    pub fn time_codec(&self) -> Result<TimeCodec, jiff::Error> {
        match &self.timezone {
            Some(name) => Ok(TimeCodec::new(TimeZone::get(name)?)),
            None => Ok(TimeCodec::system()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommand_names() {
        let args = Args::try_parse_from(["fileutil", "format-time", "-"]).unwrap();
        assert_eq!(
            args.command,
            Command::FormatTime {
                time: "-".to_string()
            }
        );

        let args = Args::try_parse_from(["fileutil", "yaml-name", "config.yml"]).unwrap();
        assert_eq!(
            args.command,
            Command::YamlName {
                name: "config.yml".to_string()
            }
        );

        let args = Args::try_parse_from(["fileutil", "trunc", "123456789", "8"]).unwrap();
        assert_eq!(
            args.command,
            Command::Trunc {
                text: "123456789".to_string(),
                max: 8
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from(["fileutil", "now", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["fileutil", "-q", "-v", "now"]).is_err());
    }

    #[test]
    fn named_time_zone() {
        let args = Args::try_parse_from(["fileutil", "--timezone", "UTC", "now"]).unwrap();
        let codec = args.time_codec().unwrap();

        let parsed = codec.parse("2022-02-01 02:02:02").unwrap();
        assert_eq!(codec.format(parsed.as_ref()), "2022-02-01T02:02:02Z");
    }

    #[test]
    fn unknown_time_zone() {
        let args = Args::try_parse_from(["fileutil", "--timezone", "Nowhere/Atlantis", "now"])
            .unwrap();
        assert!(args.time_codec().is_err());
    }
}
