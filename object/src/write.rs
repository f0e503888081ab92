//! Data set writing into a byte sink.
//!
//! Primitive values are written with their defined length.
//! Sequences and their items are always written with undefined length,
//! closed by the respective delimiters.
//! Encapsulated pixel data is written as its basic offset table item,
//! one item per fragment, and a sequence delimiter.

use crate::{
    EncodeHeaderSnafu, ValueTooLongSnafu, WriteError, WriteUnsupportedTransferSyntaxSnafu,
    WriteValueSnafu,
};
use dcmkit_core::header::{DataElementHeader, Length};
use dcmkit_core::value::SequenceOfFragments;
use dcmkit_core::{DataElement, DataSet, Tag, Value, VR};
use dcmkit_encoding::encode::Encode;
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use snafu::{OptionExt, ResultExt};
use std::io::Write;

type Result<T, E = WriteError> = std::result::Result<T, E>;

/// Convert a value length into a defined 32-bit length.
fn defined_length(tag: Tag, len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|len| *len != Length::UNDEFINED.0)
        .context(ValueTooLongSnafu { tag, len })
}

/// Write a bare data set in the given transfer syntax,
/// without preamble, magic code, nor file meta group.
pub fn write_dataset_with_ts<W>(mut to: W, ds: &DataSet, ts: &TransferSyntax) -> Result<()>
where
    W: Write,
{
    let encoder = ts
        .encoder()
        .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
            uid: ts.uid().to_string(),
        })?;
    let mut printer = DataSetPrinter {
        to: &mut to,
        encoder: &*encoder,
    };
    printer.write_dataset(ds)
}

struct DataSetPrinter<'a> {
    to: &'a mut dyn Write,
    encoder: &'a dyn Encode,
}

impl DataSetPrinter<'_> {
    fn write_dataset(&mut self, ds: &DataSet) -> Result<()> {
        for elem in ds {
            self.write_element(elem)?;
        }
        Ok(())
    }

    fn write_element(&mut self, elem: &DataElement) -> Result<()> {
        let tag = elem.tag();
        match elem.value() {
            Value::Bytes(value) => {
                let len = defined_length(tag, value.len())?;
                self.write_header(DataElementHeader::new(tag, elem.vr(), Length(len)))?;
                value.write_to(&mut self.to).context(WriteValueSnafu { tag })
            }
            Value::Fragments(seq) => {
                self.write_header(DataElementHeader::new(tag, elem.vr(), Length::UNDEFINED))?;
                self.write_fragments(tag, seq)
            }
            Value::Sequence(items) => {
                self.write_header(DataElementHeader::new(tag, VR::SQ, Length::UNDEFINED))?;
                for item in items {
                    self.encoder
                        .encode_item_header(self.to, Length::UNDEFINED.0)
                        .context(EncodeHeaderSnafu)?;
                    self.write_dataset(item)?;
                    self.encoder
                        .encode_item_delimiter(self.to)
                        .context(EncodeHeaderSnafu)?;
                }
                self.encoder
                    .encode_sequence_delimiter(self.to)
                    .context(EncodeHeaderSnafu)
            }
        }
    }

    fn write_header(&mut self, header: DataElementHeader) -> Result<()> {
        self.encoder
            .encode_element_header(self.to, header)
            .context(EncodeHeaderSnafu)?;
        Ok(())
    }

    fn write_fragments(&mut self, tag: Tag, seq: &SequenceOfFragments) -> Result<()> {
        let table = std::iter::once(seq.basic_offset_table());
        for fragment in table.chain(seq.fragments()) {
            let len = defined_length(tag, fragment.padded_len())?;
            self.encoder
                .encode_item_header(self.to, len)
                .context(EncodeHeaderSnafu)?;
            fragment
                .write_padded(&mut self.to)
                .context(WriteValueSnafu { tag })?;
        }
        self.encoder
            .encode_sequence_delimiter(self.to)
            .context(EncodeHeaderSnafu)
    }
}
