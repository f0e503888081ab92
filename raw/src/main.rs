//! A CLI tool for extracting the raw value of a data element,
//! such as the pixel data, from a DICOM file.
use dcmkit_raw::{extract, parse_args, Error};
use snafu::{Report, ResultExt, Whatever};
use tracing::{info, Level};

fn main() {
    let options = parse_args(std::env::args_os()).unwrap_or_else(|e| match e {
        Error::Args { source } => source.exit(),
        e => {
            eprintln!("{}", Report::from_error(e));
            std::process::exit(1);
        }
    });

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if options.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    match extract(&options) {
        Ok(files) => {
            if options.verbose {
                for file in files {
                    info!("Wrote {}", file.display());
                }
            }
        }
        Err(e) => {
            eprintln!("{}", Report::from_error(e));
            std::process::exit(1);
        }
    }
}
