//! A command line tool for building C-FIND/C-MOVE query files.
use clap::Parser;
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::Tag;
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use dcmkit_query::level::ALL_LEVELS;
use dcmkit_query::{QueryLevel, QueryRootType, RootQuery};
use snafu::prelude::*;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info, Level};

/// Build and validate a DICOM query/retrieve identifier
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// a DICOM file or bare data set to use as the base query
    file: Option<PathBuf>,
    /// a sequence of query terms (`«tag or keyword»=«value»`)
    #[arg(short('q'))]
    query: Vec<String>,
    /// the query/retrieve level (PATIENT, STUDY, SERIES or IMAGE),
    /// if not defined in the query
    #[arg(short = 'l', long = "level", value_parser = parse_level)]
    level: Option<QueryLevel>,
    /// use patient root information model
    #[arg(short = 'P', long, conflicts_with = "study")]
    patient: bool,
    /// use study root information model (default)
    #[arg(short = 'S', long, conflicts_with = "patient")]
    study: bool,
    /// write the query to this file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
    /// write the query even if it does not validate
    #[arg(long = "no-validate")]
    no_validate: bool,
    /// list the keys of every query level and exit
    #[arg(long = "help-tags")]
    help_tags: bool,
    /// verbose mode
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    /// Could not read base query file
    ReadBase { source: dcmkit_object::ReadError },

    /// Could not set search parameter
    SetParameter { source: dcmkit_query::QueryError },

    #[snafu(display("Query is not valid for a {}", root))]
    Validate {
        root: QueryRootType,
        source: dcmkit_query::ValidationError,
    },

    /// Could not write query file
    WriteQuery { source: dcmkit_query::QueryError },

    /// Could not write tag listing
    WriteHelp { source: std::io::Error },

    #[snafu(whatever, display("{}", message))]
    Other {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + 'static>>,
    },
}

/// Parse a level name exactly as it is written to the query.
fn parse_level(s: &str) -> Result<QueryLevel, String> {
    ALL_LEVELS
        .into_iter()
        .find(|level| level.as_str() == s)
        .ok_or_else(|| format!("expected one of PATIENT, STUDY, SERIES or IMAGE, got `{}`", s))
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
struct TermQuery {
    field: Tag,
    match_value: String,
}

/// Term queries can be parsed with the syntax `«tag»=«value»`,
/// where `«tag»` is either a DICOM tag group-element pair
/// or the respective tag keyword,
/// and `=«value»` is optional.
impl FromStr for TermQuery {
    type Err = snafu::Whatever;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag_part, value_part) = s.split_once('=').unwrap_or((s, ""));
        let field = StandardDataDictionary
            .parse_tag(tag_part)
            .whatever_context("could not resolve query field name")?;
        Ok(TermQuery {
            field,
            match_value: value_part.to_owned(),
        })
    }
}

fn main() {
    run().unwrap_or_else(|err| {
        error!("{}", snafu::Report::from_error(err));
        std::process::exit(-2);
    });
}

fn run() -> Result<(), Error> {
    let App {
        file,
        query,
        level,
        patient,
        study: _,
        output,
        no_validate,
        help_tags,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .unwrap_or_else(|e| {
        error!("{}", snafu::Report::from_error(e));
    });

    let root = if patient {
        QueryRootType::PatientRoot
    } else {
        QueryRootType::StudyRoot
    };
    let mut root_query = RootQuery::new(root);

    if help_tags {
        return root_query
            .write_help_file(std::io::stdout().lock())
            .context(WriteHelpSnafu);
    }

    if let Some(file) = &file {
        if verbose {
            info!("Opening file '{}'...", file.display());
        }
        let base = dcmkit_object::open_dataset(file).context(ReadBaseSnafu)?;
        root_query.add_query_data_set(&base);
    }

    if query.is_empty() && file.is_none() {
        whatever!("Query not specified");
    }

    for term in &query {
        let TermQuery { field, match_value } = term
            .parse()
            .with_whatever_context(|_| format!("Invalid query term `{}`", term))?;
        root_query
            .set_search_parameter_by_tag(field, &match_value)
            .context(SetParameterSnafu)?;
    }

    if let Some(level) = level {
        root_query
            .set_search_parameter_by_tag(tags::QUERY_RETRIEVE_LEVEL, level.as_str())
            .context(SetParameterSnafu)?;
    } else if !root_query.query_data_set().contains(tags::QUERY_RETRIEVE_LEVEL) {
        // default to the topmost level of the root
        root_query
            .set_search_parameter_by_tag(tags::QUERY_RETRIEVE_LEVEL, root.top_level().as_str())
            .context(SetParameterSnafu)?;
    }

    match root_query.check_query() {
        Ok(level) => info!("Valid {} at level {}", root, level),
        Err(source) if no_validate => {
            tracing::warn!("{}", snafu::Report::from_error(source));
        }
        Err(source) => return Err(Error::Validate { root, source }),
    }

    if let Some(output) = output {
        root_query.write_query(&output).context(WriteQuerySnafu)?;
        if verbose {
            info!("Query written to '{}'", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{App, TermQuery};
    use clap::{CommandFactory, Parser};
    use dcmkit_core::Tag;
    use dcmkit_query::QueryLevel;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }

    #[test]
    fn level_names_are_exact() {
        let app = App::try_parse_from(["dcmkit-query", "-l", "IMAGE", "-q", "PatientID="]).unwrap();
        assert_eq!(app.level, Some(QueryLevel::Image));

        assert!(App::try_parse_from(["dcmkit-query", "-l", "FRAME", "-q", "PatientID="]).is_err());
        assert!(App::try_parse_from(["dcmkit-query", "-l", "study", "-q", "PatientID="]).is_err());
    }

    #[test]
    fn parse_terms() {
        let term: TermQuery = "PatientName=Doe^John".parse().unwrap();
        assert_eq!(term.field, Tag(0x0010, 0x0010));
        assert_eq!(term.match_value, "Doe^John");

        let term: TermQuery = "0020,000D".parse().unwrap();
        assert_eq!(term.field, Tag(0x0020, 0x000D));
        assert_eq!(term.match_value, "");

        assert!("NotAKeyword=1".parse::<TermQuery>().is_err());
    }
}
