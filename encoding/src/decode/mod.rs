//! This module contains all DICOM data element header decoding logic.
//!
//! Decoders only read headers:
//! element headers, sequence item headers and standalone tags.
//! Reading the value that follows a header is up to the caller,
//! which knows the header's declared length.

use crate::transfer_syntax::Endianness;
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmkit_core::header::{DataElementHeader, SequenceItemHeader, SequenceItemHeaderError};
use dcmkit_core::Tag;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

pub mod explicit;
pub mod implicit_le;

pub use self::explicit::ExplicitVRDecoder;
pub use self::implicit_le::{ImplicitVRLittleEndianDecoder, StandardImplicitVRLittleEndianDecoder};

/// Module-level error type:
/// for errors which may occur while decoding DICOM data.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field"))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader { source: SequenceItemHeaderError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/** Obtain the default data element decoder.
 * According to the standard, data elements are encoded in Implicit
 * VR Little Endian by default.
 */
pub fn default_reader() -> StandardImplicitVRLittleEndianDecoder {
    ImplicitVRLittleEndianDecoder::with_std_dict()
}

/** Obtain a data element decoder for reading the data elements in a DICOM
 * file's Meta information. According to the standard, these are always
 * encoded in Explicit VR Little Endian.
 */
pub fn file_header_decoder() -> ExplicitVRDecoder {
    ExplicitVRDecoder::new(Endianness::Little)
}

/// Type trait for reading and decoding DICOM data element headers.
///
/// The methods take a dynamic reader so that decoders
/// can be used as trait objects.
pub trait Decode {
    /// The byte order expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Fetch and decode the next data element header from the given source.
    /// This method returns only the header of the element. At the end of this
    /// operation, the source will be pointing at the element's value data,
    /// which should be read or skipped as necessary.
    ///
    /// Decoding an item or sequence delimiter is considered valid, and so
    /// should be properly handled by the decoder. The value representation
    /// in this case should be `UN`.
    ///
    /// Returns the expected header and the exact number of bytes read
    /// from the source.
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)>;

    /// Fetch and decode the next sequence item head from the given source. It
    /// is a separate method because value representation is always implicit
    /// when reading item headers and delimiters.
    /// This method returns only the header of the item. At the end of this
    /// operation, the source will be pointing at the beginning of the item's
    /// data, which should be traversed if necessary.
    fn decode_item_header(&self, source: &mut dyn Read) -> Result<SequenceItemHeader> {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        let (group, element, len) = match self.endianness() {
            Endianness::Little => (
                LittleEndian::read_u16(&buf[0..2]),
                LittleEndian::read_u16(&buf[2..4]),
                LittleEndian::read_u32(&buf[4..8]),
            ),
            Endianness::Big => (
                BigEndian::read_u16(&buf[0..2]),
                BigEndian::read_u16(&buf[2..4]),
                BigEndian::read_u32(&buf[4..8]),
            ),
        };
        SequenceItemHeader::new((group, element), len.into()).context(BadSequenceHeaderSnafu)
    }

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag(&self, source: &mut dyn Read) -> Result<Tag> {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadTagSnafu)?;
        Ok(read_tag(self.endianness(), &buf))
    }
}

impl<T: ?Sized> Decode for Box<T>
where
    T: Decode,
{
    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source)
    }

    fn decode_item_header(&self, source: &mut dyn Read) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source)
    }

    fn decode_tag(&self, source: &mut dyn Read) -> Result<Tag> {
        (**self).decode_tag(source)
    }
}

/// Read a tag from the first 4 bytes of `buf`.
pub(crate) fn read_tag(endianness: Endianness, buf: &[u8]) -> Tag {
    Tag(
        read_u16(endianness, &buf[0..2]),
        read_u16(endianness, &buf[2..4]),
    )
}

#[inline]
pub(crate) fn read_u16(endianness: Endianness, buf: &[u8]) -> u16 {
    match endianness {
        Endianness::Little => LittleEndian::read_u16(buf),
        Endianness::Big => BigEndian::read_u16(buf),
    }
}

#[inline]
pub(crate) fn read_u32(endianness: Endianness, buf: &[u8]) -> u32 {
    match endianness {
        Endianness::Little => LittleEndian::read_u32(buf),
        Endianness::Big => BigEndian::read_u32(buf),
    }
}
