//! Implicit VR Little Endian syntax transfer implementation.

use crate::encode::{write_tag, Encode, Result, WriteLengthSnafu};
use crate::transfer_syntax::Endianness;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::header::DataElementHeader;
use snafu::ResultExt;
use std::io::Write;

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian
#[derive(Debug, Default, Clone, Copy)]
pub struct ImplicitVRLittleEndianEncoder;

impl Encode for ImplicitVRLittleEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_element_header(&self, to: &mut dyn Write, de: DataElementHeader) -> Result<usize> {
        let mut buf = [0u8; 8];
        write_tag(Endianness::Little, &mut buf, de.tag);
        LittleEndian::write_u32(&mut buf[4..], de.len.0);
        to.write_all(&buf).context(WriteLengthSnafu)?;
        Ok(8)
    }
}
