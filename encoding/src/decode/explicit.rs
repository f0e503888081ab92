//! Explicit VR transfer syntax header decoding, in either byte order.

use crate::decode::{
    read_tag, read_u16, read_u32, Decode, ReadHeaderTagSnafu, ReadItemLengthSnafu,
    ReadLengthSnafu, ReadReservedSnafu, ReadVrSnafu, Result,
};
use crate::transfer_syntax::Endianness;
use dcmkit_core::header::{DataElementHeader, Length};
use dcmkit_core::VR;
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR transfer syntaxes,
/// little or big endian.
#[derive(Debug, Clone, Copy)]
pub struct ExplicitVRDecoder {
    endianness: Endianness,
}

impl ExplicitVRDecoder {
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVRDecoder { endianness }
    }

    /// Decoder for _Explicit VR Little Endian_.
    pub fn little_endian() -> Self {
        ExplicitVRDecoder::new(Endianness::Little)
    }

    /// Decoder for _Explicit VR Big Endian_.
    pub fn big_endian() -> Self {
        ExplicitVRDecoder::new(Endianness::Big)
    }
}

impl Default for ExplicitVRDecoder {
    fn default() -> Self {
        ExplicitVRDecoder::little_endian()
    }
}

impl Decode for ExplicitVRDecoder {
    fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadHeaderTagSnafu)?;
        let tag = read_tag(self.endianness, &buf);

        if tag.is_item_or_delimiter() {
            // item delimiters do not have VR or reserved field
            source.read_exact(&mut buf).context(ReadItemLengthSnafu)?;
            let len = read_u32(self.endianness, &buf);
            return Ok((
                DataElementHeader::new(tag, VR::UN, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        source.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
        let vr = VR::from_binary([buf[0], buf[1]]).unwrap_or(VR::UN);

        // PS3.5 7.1.2
        let (len, bytes_read) = if vr.has_short_length() {
            source.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
            (u32::from(read_u16(self.endianness, &buf[0..2])), 8)
        } else {
            // 2 reserved bytes, then a 32-bit length
            source
                .read_exact(&mut buf[0..2])
                .context(ReadReservedSnafu)?;
            source.read_exact(&mut buf).context(ReadLengthSnafu)?;
            (read_u32(self.endianness, &buf), 12)
        };

        Ok((DataElementHeader::new(tag, vr, Length(len)), bytes_read))
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRDecoder;
    use crate::decode::Decode;
    use dcmkit_core::header::{Length, SequenceItemHeader};
    use dcmkit_core::{Tag, VR};
    use rstest::rstest;

    #[rstest]
    // (0002,0010) UI 20, little endian
    #[case(false, &[0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00], Tag(0x0002, 0x0010), VR::UI, 20, 8)]
    // (0028,0010) US 2, big endian
    #[case(true, &[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02], Tag(0x0028, 0x0010), VR::US, 2, 8)]
    // (7FE0,0010) OW 4, little endian, reserved bytes and 32-bit length
    #[case(false, &[0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00], Tag(0x7FE0, 0x0010), VR::OW, 4, 12)]
    // (7FE0,0010) OW 4, big endian
    #[case(true, &[0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x00, 0x04], Tag(0x7FE0, 0x0010), VR::OW, 4, 12)]
    // (0008,1110) SQ undefined length
    #[case(false, &[0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF], Tag(0x0008, 0x1110), VR::SQ, 0xFFFF_FFFF, 12)]
    fn decode_header(
        #[case] big_endian: bool,
        #[case] raw: &[u8],
        #[case] tag: Tag,
        #[case] vr: VR,
        #[case] len: u32,
        #[case] header_len: usize,
    ) {
        let dec = if big_endian {
            ExplicitVRDecoder::big_endian()
        } else {
            ExplicitVRDecoder::little_endian()
        };
        let mut source = raw;
        let (header, bytes_read) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag, tag);
        assert_eq!(header.vr, vr);
        assert_eq!(header.len.0, len);
        assert_eq!(bytes_read, header_len);
        assert!(source.is_empty());
    }

    #[test]
    fn unknown_vr_reads_as_un() {
        let raw: &[u8] = &[
            0x11, 0x00, 0x10, 0x10, b'Z', b'Z', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00,
        ];
        let dec = ExplicitVRDecoder::little_endian();
        let (header, bytes_read) = dec.decode_header(&mut &raw[..]).unwrap();
        assert_eq!(header.vr, VR::UN);
        assert_eq!(header.len.0, 2);
        assert_eq!(bytes_read, 12);

        // truncated before the length field
        assert!(dec.decode_header(&mut &raw[..8]).is_err());
    }

    #[test]
    fn decode_items() {
        const RAW: &[u8] = &[
            // item, len: undefined
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // item delimiter
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // sequence delimiter
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let dec = ExplicitVRDecoder::default();
        let mut source = RAW;
        assert_eq!(
            dec.decode_item_header(&mut source).unwrap(),
            SequenceItemHeader::Item {
                len: Length::UNDEFINED
            }
        );
        assert_eq!(
            dec.decode_item_header(&mut source).unwrap(),
            SequenceItemHeader::ItemDelimiter
        );
        assert_eq!(
            dec.decode_item_header(&mut source).unwrap(),
            SequenceItemHeader::SequenceDelimiter
        );
    }
}
