//! Opening DICOM files and bare data set files from the file system.

use crate::meta::{FileMetaTable, DICM_MAGIC_CODE};
use crate::read::read_dataset_with_ts;
use crate::{
    FileDicomObject, OpenFileSnafu, ParseMetaDataSetSnafu, ReadError, ReadFileSnafu,
    ReadPreambleBytesSnafu, ReadUnsupportedTransferSyntaxSnafu,
};
use dcmkit_core::DataSet;
use dcmkit_transfer_syntax_registry::get_registry;
use snafu::{OptionExt, ResultExt};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

const PREAMBLE_LEN: usize = 128;

/// Create a DICOM object by reading from a file.
///
/// This function assumes the standard file encoding structure: 128-byte
/// preamble, file meta group, and the rest of the data set.
pub fn open_file<P>(path: P) -> Result<FileDicomObject, ReadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut file =
        BufReader::new(File::open(path).with_context(|_| OpenFileSnafu { filename: path })?);

    // skip the preamble
    let mut preamble = [0u8; PREAMBLE_LEN];
    file.read_exact(&mut preamble)
        .context(ReadPreambleBytesSnafu)?;

    from_reader(file)
}

/// Create a DICOM object by reading from a byte source.
///
/// This function assumes the standard file encoding structure without the
/// preamble: file meta group, followed by the rest of the data set.
pub fn from_reader<R>(mut file: R) -> Result<FileDicomObject, ReadError>
where
    R: Read,
{
    let meta = FileMetaTable::from_reader(&mut file).context(ParseMetaDataSetSnafu)?;
    let ts = get_registry()
        .get(meta.transfer_syntax())
        .with_context(|| ReadUnsupportedTransferSyntaxSnafu {
            uid: meta.transfer_syntax().to_string(),
        })?;
    debug!("Reading data set in {}", ts);
    let obj = read_dataset_with_ts(file, ts)?;
    Ok(FileDicomObject::new(meta, obj))
}

/// Read the data set in a file,
/// whether it is a standard DICOM file or a bare data set.
///
/// The file is read as a standard DICOM file
/// when the `DICM` magic code is found,
/// either after the 128-byte preamble or at the very beginning.
/// Otherwise, the whole file is read as a data set
/// in _Implicit VR Little Endian_.
/// The file meta group, if any, is not part of the returned data set.
pub fn open_dataset<P>(path: P) -> Result<DataSet, ReadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut file =
        BufReader::new(File::open(path).with_context(|_| OpenFileSnafu { filename: path })?);

    let mut head = Vec::with_capacity(PREAMBLE_LEN + 4);
    (&mut file)
        .take((PREAMBLE_LEN + 4) as u64)
        .read_to_end(&mut head)
        .with_context(|_| ReadFileSnafu { filename: path })?;

    let start = if head.len() == PREAMBLE_LEN + 4 && head[PREAMBLE_LEN..] == DICM_MAGIC_CODE {
        Some(PREAMBLE_LEN as u64)
    } else if head.starts_with(&DICM_MAGIC_CODE) {
        Some(0)
    } else {
        None
    };

    match start {
        Some(offset) => {
            file.seek(SeekFrom::Start(offset))
                .with_context(|_| ReadFileSnafu { filename: path })?;
            from_reader(file).map(FileDicomObject::into_inner)
        }
        None => {
            debug!("No DICM code in {}, reading a bare data set", path.display());
            file.seek(SeekFrom::Start(0))
                .with_context(|_| ReadFileSnafu { filename: path })?;
            read_dataset_with_ts(file, &dcmkit_transfer_syntax_registry::default())
        }
    }
}
