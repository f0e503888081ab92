//! The file meta information group (0002,xxxx) found after the `DICM` code.
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::header::Length;
use dcmkit_core::{ByteValue, DataElement, Tag, VR};
use dcmkit_encoding::decode::{self, Decode};
use dcmkit_encoding::encode::{self, Encode, ExplicitVREncoder};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{Read, Write};
use tracing::warn;

use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

pub(crate) const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

const GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
const INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
const IMPLEMENTATION_CLASS: Tag = Tag(0x0002, 0x0012);
const IMPLEMENTATION_VERSION: Tag = Tag(0x0002, 0x0013);
const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read the DICM code"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    #[snafu(display("Missing DICM code, not a DICOM file"))]
    NotDicom { backtrace: Backtrace },

    #[snafu(display("Could not decode file meta element header"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: decode::Error,
    },

    #[snafu(display("Could not read value of file meta element {}", tag))]
    ReadValue {
        tag: Tag,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    #[snafu(display(
        "File meta element {} ended after {} of {} bytes",
        tag,
        got,
        expected
    ))]
    PrematureEnd {
        tag: Tag,
        expected: u32,
        got: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Element {} does not hold valid text", tag))]
    DecodeText {
        tag: Tag,
        source: std::string::FromUtf8Error,
    },

    /// The group length element must come first,
    /// and only group 2 elements may follow it.
    #[snafu(display("Unexpected element {} in file meta group", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    #[snafu(display("Bad length {} in file meta element {}", length, tag))]
    UnexpectedDataValueLength {
        tag: Tag,
        length: Length,
        backtrace: Backtrace,
    },

    #[snafu(display("Missing file meta element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not write file meta element header"))]
    WriteHeader {
        #[snafu(backtrace)]
        source: encode::Error,
    },

    #[snafu(display("Could not write file meta element value"))]
    WriteValue {
        backtrace: Backtrace,
        source: std::io::Error,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// The file meta information table of a DICOM file.
///
/// UID fields keep their trailing null padding, if any.
/// Text fields keep their trailing space padding.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,
    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
}

fn trim_padding(s: &str) -> &str {
    s.trim_end_matches(|c| c == '\0' || c == ' ')
}

/// Read the header and whole value of the next meta element.
fn read_element<R: Read>(source: &mut R) -> Result<(Tag, Length, Vec<u8>, u32)> {
    let (header, header_len) = decode::file_header_decoder()
        .decode_header(source)
        .context(DecodeElementSnafu)?;
    let tag = header.tag;
    let len = header.len.get().context(UnexpectedDataValueLengthSnafu {
        tag,
        length: header.len,
    })?;
    // the declared length is not trusted for allocation
    let mut value = Vec::new();
    source
        .by_ref()
        .take(u64::from(len))
        .read_to_end(&mut value)
        .context(ReadValueSnafu { tag })?;
    ensure!(
        value.len() == len as usize,
        PrematureEndSnafu {
            tag,
            expected: len,
            got: value.len(),
        }
    );
    Ok((tag, header.len, value, header_len as u32 + len))
}

impl FileMetaTable {
    /// Read a file meta group from a source
    /// positioned at the `DICM` magic code.
    ///
    /// The source is left right after the last element of the group.
    pub fn from_reader<R: Read>(mut source: R) -> Result<Self> {
        let mut magic = [0; 4];
        source.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
        ensure!(magic == DICM_MAGIC_CODE, NotDicomSnafu);

        let (tag, length, value, _) = read_element(&mut source)?;
        ensure!(tag == GROUP_LENGTH, UnexpectedTagSnafu { tag });
        ensure!(
            value.len() == 4,
            UnexpectedDataValueLengthSnafu { tag, length }
        );
        let group_length = LittleEndian::read_u32(&value);

        let mut builder = FileMetaTableBuilder::new().group_length(group_length);
        let mut remaining = group_length;
        while remaining > 0 {
            let (tag, length, value, consumed) = read_element(&mut source)?;
            remaining = remaining.saturating_sub(consumed);

            let text = || String::from_utf8(value.clone()).context(DecodeTextSnafu { tag });
            builder = match tag {
                INFORMATION_VERSION => {
                    let version: [u8; 2] = value
                        .as_slice()
                        .try_into()
                        .ok()
                        .context(UnexpectedDataValueLengthSnafu { tag, length })?;
                    builder.information_version(version)
                }
                MEDIA_STORAGE_SOP_CLASS_UID => builder.media_storage_sop_class_uid(text()?),
                MEDIA_STORAGE_SOP_INSTANCE_UID => builder.media_storage_sop_instance_uid(text()?),
                TRANSFER_SYNTAX_UID => builder.transfer_syntax(text()?),
                IMPLEMENTATION_CLASS => builder.implementation_class_uid(text()?),
                IMPLEMENTATION_VERSION => builder.implementation_version_name(text()?),
                SOURCE_APPLICATION_ENTITY_TITLE => {
                    builder.source_application_entity_title(text()?)
                }
                Tag(0x0002, _) => {
                    warn!("Ignoring file meta element {}", tag);
                    builder
                }
                tag => return UnexpectedTagSnafu { tag }.fail(),
            };
        }

        builder.build()
    }

    /// The transfer syntax UID without its trailing padding.
    pub fn transfer_syntax(&self) -> &str {
        trim_padding(&self.transfer_syntax)
    }

    /// The media storage SOP instance UID without its trailing padding.
    pub fn media_storage_sop_instance_uid(&self) -> &str {
        trim_padding(&self.media_storage_sop_instance_uid)
    }

    /// The data elements of the file meta group, group length first.
    pub fn to_elements(&self) -> Vec<DataElement> {
        let mut elements = vec![
            DataElement::new(
                GROUP_LENGTH,
                VR::UL,
                ByteValue::new(self.information_group_length.to_le_bytes().to_vec(), VR::UL),
            ),
            DataElement::new(
                INFORMATION_VERSION,
                VR::OB,
                ByteValue::new(self.information_version.to_vec(), VR::OB),
            ),
        ];

        let text_fields = [
            (MEDIA_STORAGE_SOP_CLASS_UID, VR::UI, Some(&self.media_storage_sop_class_uid)),
            (MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, Some(&self.media_storage_sop_instance_uid)),
            (TRANSFER_SYNTAX_UID, VR::UI, Some(&self.transfer_syntax)),
            (IMPLEMENTATION_CLASS, VR::UI, Some(&self.implementation_class_uid)),
            (IMPLEMENTATION_VERSION, VR::SH, self.implementation_version_name.as_ref()),
            (SOURCE_APPLICATION_ENTITY_TITLE, VR::AE, self.source_application_entity_title.as_ref()),
        ];
        elements.extend(text_fields.into_iter().filter_map(|(tag, vr, text)| {
            text.map(|text| DataElement::new(tag, vr, ByteValue::from_text(text, vr)))
        }));
        elements
    }

    /// Write the file meta group in explicit VR little endian,
    /// without the magic code.
    pub fn write<W: Write>(&self, mut to: W) -> Result<()> {
        let encoder = ExplicitVREncoder::little_endian();
        for elem in self.to_elements() {
            encoder
                .encode_element_header(&mut to, elem.header())
                .context(WriteHeaderSnafu)?;
            if let Some(value) = elem.byte_value() {
                value.write_to(&mut to).context(WriteValueSnafu)?;
            }
        }
        Ok(())
    }
}

/// Pad the text to an even length.
fn even<T: Into<String>>(text: T, pad: char) -> String {
    let mut text = text.into();
    if text.len() % 2 == 1 {
        text.push(pad);
    }
    text
}

/// A builder for file meta information tables.
///
/// UIDs are padded with `\0`, text with a space.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    group_length: Option<u32>,
    information_version: Option<[u8; 2]>,
    media_storage_sop_class_uid: Option<String>,
    media_storage_sop_instance_uid: Option<String>,
    transfer_syntax: Option<String>,
    implementation_class_uid: Option<String>,
    implementation_version_name: Option<String>,
    source_application_entity_title: Option<String>,
}

impl FileMetaTableBuilder {
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Use this group length instead of computing it.
    pub fn group_length(mut self, value: u32) -> Self {
        self.group_length = Some(value);
        self
    }

    pub fn information_version(mut self, value: [u8; 2]) -> Self {
        self.information_version = Some(value);
        self
    }

    pub fn media_storage_sop_class_uid(mut self, value: impl Into<String>) -> Self {
        self.media_storage_sop_class_uid = Some(even(value, '\0'));
        self
    }

    pub fn media_storage_sop_instance_uid(mut self, value: impl Into<String>) -> Self {
        self.media_storage_sop_instance_uid = Some(even(value, '\0'));
        self
    }

    pub fn transfer_syntax(mut self, value: impl Into<String>) -> Self {
        self.transfer_syntax = Some(even(value, '\0'));
        self
    }

    pub fn implementation_class_uid(mut self, value: impl Into<String>) -> Self {
        self.implementation_class_uid = Some(even(value, '\0'));
        self
    }

    pub fn implementation_version_name(mut self, value: impl Into<String>) -> Self {
        self.implementation_version_name = Some(even(value, ' '));
        self
    }

    pub fn source_application_entity_title(mut self, value: impl Into<String>) -> Self {
        self.source_application_entity_title = Some(even(value, ' '));
        self
    }

    /// Build the table.
    ///
    /// Without an implementation class UID,
    /// the one of this library is used along with its version name.
    /// The information version defaults to `[0, 1]`.
    pub fn build(self) -> Result<FileMetaTable> {
        let (implementation_class_uid, implementation_version_name) =
            match self.implementation_class_uid {
                Some(uid) => (uid, self.implementation_version_name),
                None => (
                    even(IMPLEMENTATION_CLASS_UID, '\0'),
                    self.implementation_version_name
                        .or_else(|| Some(even(IMPLEMENTATION_VERSION_NAME, ' '))),
                ),
            };

        let mut table = FileMetaTable {
            information_group_length: 0,
            information_version: self.information_version.unwrap_or([0, 1]),
            media_storage_sop_class_uid: self.media_storage_sop_class_uid.context(
                MissingElementSnafu {
                    alias: "MediaStorageSOPClassUID",
                },
            )?,
            media_storage_sop_instance_uid: self.media_storage_sop_instance_uid.context(
                MissingElementSnafu {
                    alias: "MediaStorageSOPInstanceUID",
                },
            )?,
            transfer_syntax: self.transfer_syntax.context(MissingElementSnafu {
                alias: "TransferSyntax",
            })?,
            implementation_class_uid,
            implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
        };

        table.information_group_length = match self.group_length {
            Some(length) => length,
            // every element after the group length, 8 byte headers except OB
            None => table
                .to_elements()
                .iter()
                .skip(1)
                .map(|elem| {
                    let header_len = if elem.vr() == VR::OB { 12 } else { 8 };
                    header_len + elem.length().get().unwrap_or(0)
                })
                .sum(),
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FileMetaTable, FileMetaTableBuilder};
    use dcmkit_core::{Tag, VR};

    #[rustfmt::skip]
    const META: &[u8] = &[
        b'D', b'I', b'C', b'M',
        // (0002,0000) UL 4: 182
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0xb6, 0x00, 0x00, 0x00,
        // (0002,0001) OB 2: 00\01
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // (0002,0002) UI 26: "1.2.840.10008.5.1.4.1.1.7\0"
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8',
        b'.', b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'7', 0x00,
        // (0002,0003) UI 36: "2.25.1234567890123456789012345678901"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x24, 0x00,
        b'2', b'.', b'2', b'5', b'.', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8',
        b'9', b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1',
        b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'1',
        // (0002,0010) UI 20: "1.2.840.10008.1.2.1\0"
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8',
        b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
        // (0002,0012) UI 20: "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'4', b'5', b'.', b'6', b'.', b'7', b'8', b'9',
        b'0', b'.', b'1', b'.', b'2', b'3', b'4',
        // (0002,0013) SH 10: "MODALITY1 "
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x0a, 0x00,
        b'M', b'O', b'D', b'A', b'L', b'I', b'T', b'Y', b'1', b' ',
        // (0002,0016) AE 8: "STORESCU"
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x08, 0x00,
        b'S', b'T', b'O', b'R', b'E', b'S', b'C', b'U',
    ];

    fn expected_table() -> FileMetaTable {
        FileMetaTable {
            information_group_length: 182,
            information_version: [0, 1],
            media_storage_sop_class_uid: "1.2.840.10008.5.1.4.1.1.7\0".to_owned(),
            media_storage_sop_instance_uid: "2.25.1234567890123456789012345678901".to_owned(),
            transfer_syntax: "1.2.840.10008.1.2.1\0".to_owned(),
            implementation_class_uid: "1.2.345.6.7890.1.234".to_owned(),
            implementation_version_name: Some("MODALITY1 ".to_owned()),
            source_application_entity_title: Some("STORESCU".to_owned()),
        }
    }

    #[test]
    fn read_meta_table() {
        let mut source = META;
        let table = FileMetaTable::from_reader(&mut source).unwrap();

        assert_eq!(table, expected_table());
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        assert!(source.is_empty());
    }

    #[test]
    fn reject_missing_magic_code() {
        let source: &[u8] = b"DICX\0\0\0\0";
        assert!(matches!(
            FileMetaTable::from_reader(source),
            Err(Error::NotDicom { .. })
        ));
    }

    #[test]
    fn truncated_element_fails_without_allocating_its_length() {
        let mut source = META[..4 + 12].to_vec();
        // (0002,0001) OB, declared 0xFFFFFFF0, only 2 bytes follow
        source.extend([
            0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0xF0, 0xFF, 0xFF, 0xFF, 0x00, 0x01,
        ]);
        assert!(matches!(
            FileMetaTable::from_reader(&source[..]),
            Err(Error::PrematureEnd {
                tag: Tag(0x0002, 0x0001),
                expected: 0xFFFF_FFF0,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn reject_element_outside_meta_group() {
        let mut source = META[..4 + 12].to_vec();
        // (0008,0052) CS 0
        source.extend([0x08, 0x00, 0x52, 0x00, b'C', b'S', 0x00, 0x00]);
        assert!(matches!(
            FileMetaTable::from_reader(&source[..]),
            Err(Error::UnexpectedTag {
                tag: Tag(0x0008, 0x0052),
                ..
            })
        ));
    }

    #[test]
    fn build_computes_group_length() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("2.25.1234567890123456789012345678901")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .implementation_version_name("MODALITY1")
            .source_application_entity_title("STORESCU")
            .build()
            .unwrap();

        assert_eq!(table, expected_table());
    }

    #[test]
    fn build_defaults_to_own_implementation() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2")
            .build()
            .unwrap();
        assert_eq!(
            table.implementation_class_uid.trim_end_matches('\0'),
            crate::IMPLEMENTATION_CLASS_UID
        );
        assert_eq!(
            table.implementation_version_name.as_deref().map(str::trim_end),
            Some(crate::IMPLEMENTATION_VERSION_NAME)
        );
    }

    #[test]
    fn build_requires_transfer_syntax() {
        let result = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4")
            .build();
        assert!(matches!(
            result,
            Err(Error::MissingElement {
                alias: "TransferSyntax",
                ..
            })
        ));
    }

    #[test]
    fn write_meta_table() {
        let mut bytes = b"DICM".to_vec();
        expected_table().write(&mut bytes).unwrap();
        assert_eq!(bytes, META);

        let elements = expected_table().to_elements();
        assert_eq!(elements.len(), 8);
        assert_eq!(elements[7].vr(), VR::AE);
    }
}
