//! Implicit VR Little Endian syntax transfer implementation

use crate::decode::{read_tag, Decode, ReadHeaderTagSnafu, ReadLengthSnafu, Result};
use crate::transfer_syntax::Endianness;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmkit_core::header::{DataElementHeader, Length};
use dcmkit_core::VR;
use dcmkit_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;
use tracing::trace;

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains a reference to an attribute dictionary for resolving
/// value representations.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder { dict: dictionary }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadHeaderTagSnafu)?;
        let tag = read_tag(Endianness::Little, &buf);

        source.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = LittleEndian::read_u32(&buf);

        // VR resolution is done with the help of the data dictionary,
        // dual representations through their fixed mapping
        let vr = if tag.is_item_or_delimiter() {
            VR::UN
        } else {
            self.dict
                .by_tag(tag)
                .map(|entry| entry.vr().resolve())
                .unwrap_or_else(|| {
                    trace!("No dictionary entry for {}, reading as UN", tag);
                    VR::UN
                })
        };
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dcmkit_core::header::Length;
    use dcmkit_core::{Tag, VR};

    #[test]
    fn resolves_vr_from_dictionary() {
        const RAW: &[u8] = &[
            // (0008,0052) QueryRetrieveLevel, len 6
            0x08, 0x00, 0x52, 0x00, 0x06, 0x00, 0x00, 0x00, b'S', b'T', b'U', b'D', b'Y', b' ',
            // (7FE0,0010) PixelData, len 2
            0xE0, 0x7F, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
            // (0011,1001) private, len 0
            0x11, 0x00, 0x01, 0x10, 0x00, 0x00, 0x00, 0x00,
        ];
        let dec = ImplicitVRLittleEndianDecoder::with_std_dict();
        let mut source = RAW;

        let (header, bytes_read) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag, Tag(0x0008, 0x0052));
        assert_eq!(header.vr, VR::CS);
        assert_eq!(header.len, Length(6));
        assert_eq!(bytes_read, 8);
        source = &source[6..];

        let (header, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag, Tag(0x7FE0, 0x0010));
        assert_eq!(header.vr, VR::OB);
        source = &source[2..];

        let (header, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.vr, VR::UN);
        assert_eq!(header.len, Length(0));
    }

    #[test]
    fn truncated_header_fails() {
        let dec = ImplicitVRLittleEndianDecoder::with_std_dict();
        let mut source: &[u8] = &[0x08, 0x00, 0x52];
        assert!(dec.decode_header(&mut source).is_err());
    }
}
