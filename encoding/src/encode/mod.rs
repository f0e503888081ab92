//! This module contains all DICOM data element header encoding logic.

use crate::transfer_syntax::Endianness;
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmkit_core::header::{DataElementHeader, ITEM, ITEM_DELIMITER, SEQUENCE_DELIMITER};
use dcmkit_core::Tag;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

pub mod explicit;
pub mod implicit_le;

pub use self::explicit::ExplicitVREncoder;
pub use self::implicit_le::ImplicitVRLittleEndianEncoder;

/// Module-level error type:
/// for errors which may occur while encoding DICOM data.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write Data Element tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write Data Element value representation"))]
    WriteVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write Data Element reserved bytes"))]
    WriteReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write Data Element length"))]
    WriteLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write Item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write Item Delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write Sequence Delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Length {} of element {} does not fit in a 16-bit length field", len, tag))]
    LengthOverflow {
        tag: Tag,
        len: u32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Type trait for a data element header encoder.
///
/// The methods take a dynamic writer so that encoders
/// can be used as trait objects.
pub trait Encode {
    /// The byte order of the encoded data.
    fn endianness(&self) -> Endianness;

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_element_header(&self, to: &mut dyn Write, de: DataElementHeader) -> Result<usize>;

    /// Encode and write an element tag.
    fn encode_tag(&self, to: &mut dyn Write, tag: Tag) -> Result<()> {
        let mut buf = [0u8; 4];
        write_tag(self.endianness(), &mut buf, tag);
        to.write_all(&buf).context(WriteTagSnafu)
    }

    /// Encode and write a DICOM sequence item header to the given destination.
    fn encode_item_header(&self, to: &mut dyn Write, len: u32) -> Result<()> {
        let mut buf = [0u8; 8];
        write_tag(self.endianness(), &mut buf, ITEM);
        write_u32(self.endianness(), &mut buf[4..], len);
        to.write_all(&buf).context(WriteItemHeaderSnafu)
    }

    /// Encode and write a DICOM sequence item delimiter to the given destination.
    fn encode_item_delimiter(&self, to: &mut dyn Write) -> Result<()> {
        let mut buf = [0u8; 8];
        write_tag(self.endianness(), &mut buf, ITEM_DELIMITER);
        to.write_all(&buf).context(WriteItemDelimiterSnafu)
    }

    /// Encode and write a DICOM sequence delimiter to the given destination.
    fn encode_sequence_delimiter(&self, to: &mut dyn Write) -> Result<()> {
        let mut buf = [0u8; 8];
        write_tag(self.endianness(), &mut buf, SEQUENCE_DELIMITER);
        to.write_all(&buf).context(WriteSequenceDelimiterSnafu)
    }
}

impl<T: ?Sized> Encode for Box<T>
where
    T: Encode,
{
    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn encode_element_header(&self, to: &mut dyn Write, de: DataElementHeader) -> Result<usize> {
        (**self).encode_element_header(to, de)
    }

    fn encode_tag(&self, to: &mut dyn Write, tag: Tag) -> Result<()> {
        (**self).encode_tag(to, tag)
    }

    fn encode_item_header(&self, to: &mut dyn Write, len: u32) -> Result<()> {
        (**self).encode_item_header(to, len)
    }

    fn encode_item_delimiter(&self, to: &mut dyn Write) -> Result<()> {
        (**self).encode_item_delimiter(to)
    }

    fn encode_sequence_delimiter(&self, to: &mut dyn Write) -> Result<()> {
        (**self).encode_sequence_delimiter(to)
    }
}

/// Write a tag into the first 4 bytes of `buf`.
pub(crate) fn write_tag(endianness: Endianness, buf: &mut [u8], tag: Tag) {
    write_u16(endianness, &mut buf[0..2], tag.group());
    write_u16(endianness, &mut buf[2..4], tag.element());
}

#[inline]
pub(crate) fn write_u16(endianness: Endianness, buf: &mut [u8], value: u16) {
    match endianness {
        Endianness::Little => LittleEndian::write_u16(buf, value),
        Endianness::Big => BigEndian::write_u16(buf, value),
    }
}

#[inline]
pub(crate) fn write_u32(endianness: Endianness, buf: &mut [u8], value: u32) {
    match endianness {
        Endianness::Little => LittleEndian::write_u32(buf, value),
        Endianness::Big => BigEndian::write_u32(buf, value),
    }
}
