//! Explicit VR transfer syntax header encoding, in either byte order.

use crate::encode::{
    write_tag, write_u16, write_u32, Encode, LengthOverflowSnafu, Result, WriteLengthSnafu,
};
use crate::transfer_syntax::Endianness;
use dcmkit_core::header::DataElementHeader;
use snafu::{ensure, ResultExt};
use std::io::Write;

/// A data element header encoder for the Explicit VR transfer syntaxes.
#[derive(Debug, Clone, Copy)]
pub struct ExplicitVREncoder {
    endianness: Endianness,
}

impl ExplicitVREncoder {
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVREncoder { endianness }
    }

    pub fn little_endian() -> Self {
        ExplicitVREncoder::new(Endianness::Little)
    }

    pub fn big_endian() -> Self {
        ExplicitVREncoder::new(Endianness::Big)
    }
}

impl Default for ExplicitVREncoder {
    fn default() -> Self {
        ExplicitVREncoder::little_endian()
    }
}

impl Encode for ExplicitVREncoder {
    fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn encode_element_header(&self, to: &mut dyn Write, de: DataElementHeader) -> Result<usize> {
        if de.tag.is_item_or_delimiter() {
            // items and delimiters do not have VR or reserved field
            let mut buf = [0u8; 8];
            write_tag(self.endianness, &mut buf, de.tag);
            write_u32(self.endianness, &mut buf[4..], de.len.0);
            to.write_all(&buf).context(WriteLengthSnafu)?;
            return Ok(8);
        }

        let vr = de.vr.to_bytes();
        if de.vr.has_short_length() {
            ensure!(
                de.len.0 <= u32::from(u16::MAX),
                LengthOverflowSnafu {
                    tag: de.tag,
                    len: de.len.0
                }
            );
            let mut buf = [0u8; 8];
            write_tag(self.endianness, &mut buf, de.tag);
            buf[4] = vr[0];
            buf[5] = vr[1];
            write_u16(self.endianness, &mut buf[6..], de.len.0 as u16);
            to.write_all(&buf).context(WriteLengthSnafu)?;
            Ok(8)
        } else {
            let mut buf = [0u8; 12];
            write_tag(self.endianness, &mut buf, de.tag);
            buf[4] = vr[0];
            buf[5] = vr[1];
            // buf[6..8] is kept zeroed (reserved)
            write_u32(self.endianness, &mut buf[8..], de.len.0);
            to.write_all(&buf).context(WriteLengthSnafu)?;
            Ok(12)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVREncoder;
    use crate::decode::{Decode, ExplicitVRDecoder};
    use crate::encode::Encode;
    use dcmkit_core::header::{DataElementHeader, Length};
    use dcmkit_core::{Tag, VR};

    #[test]
    fn encode_short_and_long_headers() {
        let enc = ExplicitVREncoder::little_endian();
        let mut out = Vec::new();

        let n = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0002, 0x0002), VR::UI, Length(26)),
            )
            .unwrap();
        assert_eq!(n, 8);
        assert_eq!(&out[..], &[0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00]);

        out.clear();
        let n = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x7FE0, 0x0010), VR::OB, Length::UNDEFINED),
            )
            .unwrap();
        assert_eq!(n, 12);
        assert_eq!(
            &out[..],
            &[0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn short_length_overflow_is_rejected() {
        let enc = ExplicitVREncoder::little_endian();
        let mut out = Vec::new();
        let header = DataElementHeader::new(Tag(0x0010, 0x4000), VR::LT, Length(70_000));
        assert!(enc.encode_element_header(&mut out, header).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn big_endian_header_is_read_back() {
        let enc = ExplicitVREncoder::big_endian();
        let header = DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(2));
        let mut out = Vec::new();
        enc.encode_element_header(&mut out, header).unwrap();

        let dec = ExplicitVRDecoder::big_endian();
        let (decoded, bytes_read) = dec.decode_header(&mut out.as_slice()).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(bytes_read, 8);
    }

    #[test]
    fn delimiters() {
        let enc = ExplicitVREncoder::little_endian();
        let mut out = Vec::new();
        enc.encode_item_header(&mut out, 4).unwrap();
        enc.encode_sequence_delimiter(&mut out).unwrap();
        assert_eq!(
            out,
            vec![
                0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, //
                0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            ]
        );
    }
}
