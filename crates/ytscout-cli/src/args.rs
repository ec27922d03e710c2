//! Command-line argument parsing
//!
//! Flags accept both `--max-results` and `--max_results` spellings.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use ytscout_core::url::default_search_query;
use ytscout_core::{PublishedAfter, SearchQuery};

pub const DEFAULT_IDS_FILE: &str = "out/video_ids.txt";
pub const DEFAULT_CSV_FILE: &str = "out/videos_ai_descriptive.csv";
pub const DEFAULT_MAX_RESULTS: usize = 500;
pub const DEFAULT_DAYS: u32 = 90;

pub const USAGE: &str = "\
Usage:
  ytscout search-ids [OPTIONS]
      --query <TEXT>          Search query, '|' acts as OR (default: AI video keywords)
      --max-results <N>       Total video IDs to find (default: 500)
      --days <N>              Lookback period in days (default: 90)
      --start-date <DATE>     YYYY-MM-DD, overrides --days
      --lang <CODE>           Relevance language, e.g. en or id
      --region <CODE>         Region code, e.g. US or ID
      --category-id <ID>      Restrict to a video category
      --output-file <PATH>    Where to write IDs (default: out/video_ids.txt)

  ytscout fetch-details [OPTIONS]
      --input-file <PATH>     File of video IDs (default: out/video_ids.txt)
      --output-file <PATH>    CSV destination (default: out/videos_ai_descriptive.csv)

The API key is read from YOUTUBE_API_KEY. Set RUST_LOG to change verbosity.
";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchArgs {
    pub query: String,
    pub max_results: usize,
    pub days: u32,
    pub start_date: Option<String>,
    pub lang: Option<String>,
    pub region: Option<String>,
    pub category_id: Option<String>,
    pub output_file: PathBuf,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            query: default_search_query(),
            max_results: DEFAULT_MAX_RESULTS,
            days: DEFAULT_DAYS,
            start_date: None,
            lang: None,
            region: None,
            category_id: None,
            output_file: PathBuf::from(DEFAULT_IDS_FILE),
        }
    }
}

impl SearchArgs {
    /// Build the validated search description
    pub fn to_query(&self) -> Result<SearchQuery> {
        let start_date = self
            .start_date
            .as_deref()
            .map(PublishedAfter::parse_date)
            .transpose()?;

        Ok(SearchQuery::new(self.query.clone(), self.max_results)?
            .published_after(PublishedAfter::resolve(start_date, self.days))
            .language(self.lang.clone())
            .region(self.region.clone())
            .category_id(self.category_id.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailArgs {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

impl Default for DetailArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_IDS_FILE),
            output_file: PathBuf::from(DEFAULT_CSV_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SearchIds(SearchArgs),
    FetchDetails(DetailArgs),
    Help,
}

impl Command {
    pub fn from_env() -> Result<Self> {
        Self::from_iter(std::env::args().skip(1))
    }

    pub fn from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = iter.into_iter();

        let Some(subcommand) = args.next() else {
            return Ok(Self::Help);
        };

        match subcommand.as_str() {
            "search-ids" | "search" => Self::parse_search(args).map(Self::SearchIds),
            "fetch-details" | "details" => Self::parse_details(args).map(Self::FetchDetails),
            "-h" | "--help" | "help" => Ok(Self::Help),
            other => bail!("unknown command '{other}'\n\n{USAGE}"),
        }
    }

    fn parse_search(mut args: impl Iterator<Item = String>) -> Result<SearchArgs> {
        let mut parsed = SearchArgs::default();

        while let Some(arg) = args.next() {
            let flag = normalize_flag(&arg);
            match flag.as_str() {
                "--query" => parsed.query = value(&mut args, &flag)?,
                "--max-results" => parsed.max_results = number(&mut args, &flag)?,
                "--days" => parsed.days = number(&mut args, &flag)?,
                "--start-date" => parsed.start_date = Some(value(&mut args, &flag)?),
                "--lang" => parsed.lang = Some(value(&mut args, &flag)?),
                "--region" => parsed.region = Some(value(&mut args, &flag)?),
                "--category-id" => parsed.category_id = Some(value(&mut args, &flag)?),
                "--output-file" => parsed.output_file = PathBuf::from(value(&mut args, &flag)?),
                _ => bail!("unexpected argument '{arg}' for search-ids\n\n{USAGE}"),
            }
        }

        Ok(parsed)
    }

    fn parse_details(mut args: impl Iterator<Item = String>) -> Result<DetailArgs> {
        let mut parsed = DetailArgs::default();

        while let Some(arg) = args.next() {
            let flag = normalize_flag(&arg);
            match flag.as_str() {
                "--input-file" => parsed.input_file = PathBuf::from(value(&mut args, &flag)?),
                "--output-file" => parsed.output_file = PathBuf::from(value(&mut args, &flag)?),
                _ => bail!("unexpected argument '{arg}' for fetch-details\n\n{USAGE}"),
            }
        }

        Ok(parsed)
    }
}

/// `--max_results` -> `--max-results`; non-flags pass through
fn normalize_flag(arg: &str) -> String {
    match arg.strip_prefix("--") {
        Some(name) => format!("--{}", name.replace('_', "-")),
        None => arg.to_string(),
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn number<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = value(args, flag)?;
    raw.trim()
        .parse()
        .with_context(|| format!("{flag} expects a number, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        Command::from_iter(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_shows_help() {
        assert_eq!(parse(&[]).unwrap(), Command::Help);
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn search_uses_defaults() {
        let Command::SearchIds(args) = parse(&["search-ids"]).unwrap() else {
            panic!("expected search-ids");
        };
        assert_eq!(args, SearchArgs::default());
        assert_eq!(args.max_results, 500);
        assert_eq!(args.days, 90);
        assert!(args.query.contains("\"sora\""));
        assert_eq!(args.output_file, PathBuf::from("out/video_ids.txt"));
    }

    #[test]
    fn search_accepts_both_flag_spellings() {
        let Command::SearchIds(args) = parse(&[
            "search-ids",
            "--max_results",
            "120",
            "--category-id",
            "22",
            "--start_date",
            "2024-01-01",
            "--lang",
            "id",
            "--region",
            "ID",
            "--query",
            "veo3",
            "--output-file",
            "ids.txt",
        ])
        .unwrap() else {
            panic!("expected search-ids");
        };
        assert_eq!(args.max_results, 120);
        assert_eq!(args.category_id.as_deref(), Some("22"));
        assert_eq!(args.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(args.lang.as_deref(), Some("id"));
        assert_eq!(args.region.as_deref(), Some("ID"));
        assert_eq!(args.query, "veo3");
        assert_eq!(args.output_file, PathBuf::from("ids.txt"));
    }

    #[test]
    fn search_rejects_bad_number() {
        let err = parse(&["search-ids", "--days", "soon"]).unwrap_err();
        assert!(err.to_string().contains("--days expects a number"));
    }

    #[test]
    fn search_rejects_missing_value() {
        let err = parse(&["search-ids", "--query"]).unwrap_err();
        assert!(err.to_string().contains("--query requires a value"));
    }

    #[test]
    fn details_parses_paths() {
        let Command::FetchDetails(args) =
            parse(&["fetch-details", "--input_file", "in.txt", "--output-file", "o.csv"]).unwrap()
        else {
            panic!("expected fetch-details");
        };
        assert_eq!(args.input_file, PathBuf::from("in.txt"));
        assert_eq!(args.output_file, PathBuf::from("o.csv"));
    }

    #[test]
    fn unknown_command_fails() {
        assert!(parse(&["download"]).is_err());
        assert!(parse(&["fetch-details", "--query", "x"]).is_err());
    }

    #[test]
    fn to_query_prefers_start_date() {
        let args = SearchArgs {
            start_date: Some("2024-02-29".to_string()),
            days: 7,
            ..SearchArgs::default()
        };
        let query = args.to_query().unwrap();
        assert!(matches!(query.published_after, PublishedAfter::Date(_)));
    }

    #[test]
    fn to_query_uses_days_without_date() {
        let args = SearchArgs {
            days: 7,
            ..SearchArgs::default()
        };
        let query = args.to_query().unwrap();
        assert_eq!(query.published_after, PublishedAfter::LookbackDays(7));
    }

    #[test]
    fn to_query_rejects_zero_results_and_bad_dates() {
        let zero = SearchArgs {
            max_results: 0,
            ..SearchArgs::default()
        };
        assert!(zero.to_query().is_err());

        let bad_date = SearchArgs {
            start_date: Some("01/02/2024".to_string()),
            ..SearchArgs::default()
        };
        assert!(bad_date.to_query().is_err());
    }
}
