//! Extraction of raw data element values from DICOM files.
//!
//! The value of one data element (_Pixel Data_ by default)
//! is written verbatim to an output file.
//! Encapsulated values are either concatenated,
//! leaving out the basic offset table,
//! or split into one file per fragment.
//! Splitting recovers one file per frame
//! for transfer syntaxes which place each frame in its own fragment,
//! without decoding the frames.
use clap::Parser;
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::{Fragment, SequenceOfFragments, Tag, Value, ValueKind};
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use dcmkit_object::{open_dataset, ReadError};
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod pattern;

pub use crate::pattern::{FragmentPattern, PatternError};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Invalid command line arguments
    #[snafu(display("{}", source))]
    Args { source: clap::Error },
    #[snafu(display("Need input file (-i)"))]
    MissingInput,
    #[snafu(display("Invalid fragment file name pattern `{}`", pattern))]
    InvalidPattern {
        pattern: String,
        source: PatternError,
    },
    #[snafu(display("Failed to read: {}", filename.display()))]
    ReadInput {
        filename: PathBuf,
        #[snafu(backtrace)]
        source: ReadError,
    },
    #[snafu(display("Cannot find Tag: {}", tag))]
    TagNotFound { tag: Tag },
    #[snafu(display("Need output file (-o)"))]
    MissingOutput,
    #[snafu(display("Output is Input: {}", path.display()))]
    OutputIsInput { path: PathBuf },
    #[snafu(display("Unhandled {:?} value in element {}", kind, tag))]
    Unhandled { tag: Tag, kind: ValueKind },
    #[snafu(display("Could not write to '{}'", filename.display()))]
    WriteOutput {
        filename: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Extract the raw value of a data element from a DICOM file
#[derive(Debug, Parser)]
#[command(name = "dcmkit-raw", version)]
struct App {
    /// Path to the DICOM file to read
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Path to the output file
    /// (base name of each fragment file with `--split-frags`)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// The element to extract (`gggg,eeee` or keyword)
    #[arg(short = 't', long = "tag", default_value = "7FE0,0010", value_parser = parse_tag)]
    tag: Tag,

    /// Write each fragment of an encapsulated value to its own file
    #[arg(short = 'f', long = "split-frags")]
    split_frags: bool,

    /// printf-style pattern appended to the output path of each fragment
    /// (e.g. `_%03d.jpg`); the fragment index is appended otherwise
    #[arg(short = 'p', long = "pattern")]
    pattern: Option<String>,

    /// Print more information about the extraction
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn parse_tag(s: &str) -> Result<Tag, String> {
    StandardDataDictionary
        .parse_tag(s)
        .ok_or_else(|| format!("`{}` is neither a tag nor a known keyword", s))
}

/// The immutable configuration of an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// the file to read
    pub input: PathBuf,
    /// the file to write, or the base path of each fragment file
    pub output: Option<PathBuf>,
    /// the element to extract
    pub tag: Tag,
    /// whether to write each fragment to its own file
    pub split_frags: bool,
    /// how to name fragment files
    pub pattern: Option<FragmentPattern>,
    pub verbose: bool,
}

impl ExtractOptions {
    /// Extraction options for the pixel data of `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        ExtractOptions {
            input: input.into(),
            output: None,
            tag: tags::PIXEL_DATA,
            split_frags: false,
            pattern: None,
            verbose: false,
        }
    }
}

/// Map a command line (including the program name)
/// into extraction options.
pub fn parse_args<I, T>(args: I) -> Result<ExtractOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let App {
        input,
        output,
        tag,
        split_frags,
        pattern,
        verbose,
    } = App::try_parse_from(args).context(ArgsSnafu)?;

    let input = input.context(MissingInputSnafu)?;
    let pattern = pattern
        .map(|p| p.parse::<FragmentPattern>().context(InvalidPatternSnafu { pattern: p }))
        .transpose()?;

    Ok(ExtractOptions {
        input,
        output,
        tag,
        split_frags,
        pattern,
        verbose,
    })
}

/// Extract the element value as configured,
/// returning the paths of the files written.
pub fn extract(options: &ExtractOptions) -> Result<Vec<PathBuf>> {
    let ds = open_dataset(&options.input).context(ReadInputSnafu {
        filename: &options.input,
    })?;

    let tag = options.tag;
    let elem = ds.get(tag).context(TagNotFoundSnafu { tag })?;

    let output = options.output.as_deref().context(MissingOutputSnafu)?;
    ensure!(
        !is_same_file(&options.input, output),
        OutputIsInputSnafu { path: output }
    );

    match elem.value() {
        Value::Bytes(value) => {
            debug!("Writing {} bytes of {}", value.len(), tag);
            write_file(output, |to| value.write_to(to))?;
            Ok(vec![output.to_path_buf()])
        }
        Value::Fragments(seq) if options.split_frags => {
            write_fragments_split(seq, output, options.pattern.as_ref())
        }
        Value::Fragments(seq) => {
            debug!(
                "Writing {} fragments of {} back to back",
                seq.number_of_fragments(),
                tag
            );
            write_file(output, |to| seq.write_buffer(to))?;
            Ok(vec![output.to_path_buf()])
        }
        Value::Sequence(_) => UnhandledSnafu {
            tag,
            kind: elem.kind(),
        }
        .fail(),
    }
}

/// The path of the file for the fragment at `index`:
/// the output path followed by the formatted pattern,
/// or by the index itself without a pattern.
pub fn fragment_file_name(output: &Path, pattern: Option<&FragmentPattern>, index: usize) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    match pattern {
        Some(pattern) => name.push(pattern.format(index)),
        None => name.push(index.to_string()),
    }
    PathBuf::from(name)
}

/// Write each fragment of the sequence to its own file,
/// not including the basic offset table.
///
/// Returns the file paths in fragment order.
pub fn write_fragments_split(
    seq: &SequenceOfFragments,
    output: &Path,
    pattern: Option<&FragmentPattern>,
) -> Result<Vec<PathBuf>> {
    let targets: Vec<(PathBuf, &Fragment)> = seq
        .fragments()
        .iter()
        .enumerate()
        .map(|(i, fragment)| (fragment_file_name(output, pattern, i), fragment))
        .collect();
    debug!("Writing {} fragment files", targets.len());

    write_targets(&targets)?;
    Ok(targets.into_iter().map(|(path, _)| path).collect())
}

#[cfg(feature = "rayon")]
fn write_targets(targets: &[(PathBuf, &Fragment)]) -> Result<()> {
    use rayon::prelude::*;
    targets
        .par_iter()
        .try_for_each(|(path, fragment)| write_file(path, |to| fragment.write_to(to)))
}

#[cfg(not(feature = "rayon"))]
fn write_targets(targets: &[(PathBuf, &Fragment)]) -> Result<()> {
    targets
        .iter()
        .try_for_each(|(path, fragment)| write_file(path, |to| fragment.write_to(to)))
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).context(WriteOutputSnafu { filename: path })?;
    let mut to = BufWriter::new(file);
    write(&mut to).context(WriteOutputSnafu { filename: path })?;
    to.flush().context(WriteOutputSnafu { filename: path })
}

fn is_same_file(input: &Path, output: &Path) -> bool {
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => input == output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }

    #[test]
    fn parse_full_command_line() {
        let options = parse_args([
            "dcmkit-raw",
            "-i",
            "in.dcm",
            "-o",
            "out",
            "-t",
            "0011,0010",
            "-f",
            "-p",
            "_%02d.jpg",
        ])
        .unwrap();
        assert_eq!(options.input, PathBuf::from("in.dcm"));
        assert_eq!(options.output, Some(PathBuf::from("out")));
        assert_eq!(options.tag, Tag(0x0011, 0x0010));
        assert!(options.split_frags);
        assert_eq!(options.pattern, Some("_%02d.jpg".parse().unwrap()));
    }

    #[test]
    fn parse_defaults() {
        let options = parse_args(["dcmkit-raw", "--input", "in.dcm"]).unwrap();
        assert_eq!(options, ExtractOptions::new("in.dcm"));
    }

    #[test]
    fn parse_keyword_tag() {
        let options = parse_args(["dcmkit-raw", "-i", "in.dcm", "--tag", "PatientName"]).unwrap();
        assert_eq!(options.tag, tags::PATIENT_NAME);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            parse_args(["dcmkit-raw", "-o", "out"]),
            Err(Error::MissingInput)
        ));
        assert_eq!(
            parse_args(["dcmkit-raw", "-o", "out"]).unwrap_err().to_string(),
            "Need input file (-i)"
        );
        assert!(matches!(
            parse_args(["dcmkit-raw", "-i", "in.dcm", "-p", "%s"]),
            Err(Error::InvalidPattern { .. })
        ));
        assert!(matches!(
            parse_args(["dcmkit-raw", "-i", "in.dcm", "-t", "NotATag"]),
            Err(Error::Args { .. })
        ));
    }

    #[test]
    fn fragment_file_names() {
        let output = Path::new("/tmp/frame");
        assert_eq!(
            fragment_file_name(output, None, 3),
            PathBuf::from("/tmp/frame3")
        );
        let pattern: FragmentPattern = "_%03d.jpg".parse().unwrap();
        assert_eq!(
            fragment_file_name(output, Some(&pattern), 3),
            PathBuf::from("/tmp/frame_003.jpg")
        );
    }
}
