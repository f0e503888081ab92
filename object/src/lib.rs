#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains the means to read and write DICOM data sets
//! and DICOM files.
//!
//! Loading a DICOM file can be done via the function [`open_file`],
//! which requires the standard file structure
//! (preamble, `DICM` code and file meta group).
//! [`open_dataset`] also accepts bare data sets
//! in _Implicit VR Little Endian_,
//! such as the query files written by `dcmkit-query`.
//!
//! ```no_run
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//! let patient_name = obj.get(tags::PATIENT_NAME).and_then(|e| e.to_str());
//! # Ok(())
//! # }
//! ```
//!
//! Plain data sets are read and written in a given transfer syntax
//! with [`read_dataset_with_ts`] and [`write_dataset_with_ts`]:
//!
//! ```
//! # use dcmkit_core::{DataElement, DataSet, Tag, VR};
//! # use dcmkit_object::{read_dataset_with_ts, write_dataset_with_ts};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ds = DataSet::new();
//! ds.put(DataElement::new_str(Tag(0x0010, 0x0010), VR::PN, "Doe^John"));
//!
//! let ts = dcmkit_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;
//! let mut serialized = Vec::new();
//! write_dataset_with_ts(&mut serialized, &ds, &ts)?;
//! assert_eq!(read_dataset_with_ts(&serialized[..], &ts)?, ds);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
pub mod file;
pub mod meta;
pub mod read;
pub mod write;

pub use crate::file::{open_dataset, open_file};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::read::read_dataset_with_ts;
pub use crate::write::write_dataset_with_ts;
pub use dcmkit_core::{DataSet, Tag};

use dcmkit_encoding::{decode, encode};
use dcmkit_transfer_syntax_registry::get_registry;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// The implementation class UID generically referring to dcmkit.
///
/// Generated as per the standard, part 5, section B.2.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.262915462401366342385937802618153871017";

/// The implementation version name generically referring to dcmkit.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMKIT 0.1";

/// An error which may occur when loading a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read from file '{}'", filename.display()))]
    ReadFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not decode data element header"))]
    DecodeHeader {
        #[snafu(backtrace)]
        source: decode::Error,
    },
    /// Could not read from the data source
    ReadSource {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read value of data element {}", tag))]
    ReadValue {
        tag: Tag,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Undefined value length in data element {}", tag))]
    UndefinedValueLength { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Unexpected item or delimiter {}", tag))]
    UnexpectedItem { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Premature data set end in data element {}", tag))]
    PrematureEnd { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Sequence {} nested deeper than {} levels", tag, max))]
    NestingTooDeep {
        tag: Tag,
        max: u32,
        backtrace: Backtrace,
    },
}

/// An error which may occur when writing a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not encode data element header"))]
    EncodeHeader {
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not write value of data element {}", tag))]
    WriteValue {
        tag: Tag,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Value of {} bytes in data element {} is too long to encode", len, tag))]
    ValueTooLong {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
}

/// A root DICOM object retrieved from a standard DICOM file,
/// containing additional information from the file meta group
/// in a separate table value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicomObject {
    meta: FileMetaTable,
    obj: DataSet,
}

impl FileDicomObject {
    /// Join a file meta table and a data set into a file object.
    pub fn new(meta: FileMetaTable, obj: DataSet) -> Self {
        FileDicomObject { meta, obj }
    }

    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve a mutable reference to the processed meta header table.
    ///
    /// Considerable care should be taken when modifying this table,
    /// as it may influence object reading and writing operations.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// Retrieve the inner data set, discarding the meta table.
    pub fn into_inner(self) -> DataSet {
        self.obj
    }

    /// Write the entire object as a DICOM file
    /// into the given file path.
    /// Preamble, magic code, and file meta group will be included
    /// before the inner object.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write_all(&mut to)?;
        to.flush().context(WriteFileSnafu { filename: path })
    }

    /// Write the entire object as a DICOM file
    /// into the given writer.
    /// Preamble, magic code, and file meta group will be included
    /// before the inner object.
    pub fn write_all<W: Write>(&self, mut to: W) -> Result<(), WriteError> {
        // write preamble
        to.write_all(&[0_u8; 128][..]).context(WritePreambleSnafu)?;

        // write magic sequence
        to.write_all(b"DICM").context(WriteMagicCodeSnafu)?;

        // write meta group
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;

        self.write_dataset(to)
    }

    /// Write the inner data set into the given writer,
    /// without preamble, magic code, nor file meta group.
    ///
    /// The transfer syntax is selected from the file meta table.
    pub fn write_dataset<W: Write>(&self, to: W) -> Result<(), WriteError> {
        let ts = get_registry()
            .get(self.meta.transfer_syntax())
            .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax().to_string(),
            })?;
        write_dataset_with_ts(to, &self.obj, ts)
    }
}

impl Deref for FileDicomObject {
    type Target = DataSet;

    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl DerefMut for FileDicomObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}
