//! Data set reading from a byte source.
//!
//! Element headers are decoded by the transfer syntax' decoder;
//! the values that follow are read here, according to their kind:
//! primitive values of defined length,
//! sequences of items (defined or undefined length),
//! and encapsulated pixel data.
//!
//! Values are kept as they appear in the source,
//! in the byte order of the transfer syntax.

use crate::{
    DecodeHeaderSnafu, NestingTooDeepSnafu, PrematureEndSnafu, ReadError, ReadSourceSnafu, ReadUnsupportedTransferSyntaxSnafu,
    ReadValueSnafu, UndefinedValueLengthSnafu, UnexpectedItemSnafu,
};
use dcmkit_core::header::{DataElementHeader, SequenceItemHeader, ITEM_DELIMITER, SEQUENCE_DELIMITER};
use dcmkit_core::value::{Fragment, SequenceOfFragments, C};
use dcmkit_core::{ByteValue, DataElement, DataSet, Tag, Value};
use dcmkit_encoding::decode::Decode;
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, OptionExt, ResultExt};
use std::io::{BufRead, BufReader, Read};
use tracing::warn;

type Result<T, E = ReadError> = std::result::Result<T, E>;

/// How many sequences may be nested into one another.
pub const MAX_SEQUENCE_DEPTH: u32 = 64;

/// Read a bare data set encoded in the given transfer syntax
/// until the end of the source.
///
/// There is no preamble, magic code, nor file meta group.
pub fn read_dataset_with_ts<R>(from: R, ts: &TransferSyntax) -> Result<DataSet>
where
    R: Read,
{
    let decoder = ts
        .decoder()
        .with_context(|| ReadUnsupportedTransferSyntaxSnafu {
            uid: ts.uid().to_string(),
        })?;
    let mut source = BufReader::new(from);
    let mut parser = DataSetParser {
        source: &mut source,
        decoder: &*decoder,
        depth: 0,
    };
    parser.read_until(End::Source)
}

/// Where a data set being read ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum End {
    /// At the end of the source.
    Source,
    /// At an item delimiter.
    ItemDelimiter,
}

struct DataSetParser<'a, S: ?Sized> {
    source: &'a mut S,
    decoder: &'a dyn Decode,
    /// number of sequences enclosing the data set being read
    depth: u32,
}

impl<'a, S> DataSetParser<'a, S>
where
    S: BufRead + ?Sized,
{
    fn at_end(&mut self) -> Result<bool> {
        let buf = self
            .source
            .fill_buf()
            .context(ReadSourceSnafu)?;
        Ok(buf.is_empty())
    }

    fn read_until(&mut self, end: End) -> Result<DataSet> {
        let mut ds = DataSet::new();
        loop {
            if end == End::Source && self.at_end()? {
                return Ok(ds);
            }
            let (header, _) = self
                .decoder
                .decode_header(&mut self.source)
                .context(DecodeHeaderSnafu)?;
            match header.tag {
                ITEM_DELIMITER if end == End::ItemDelimiter => return Ok(ds),
                ITEM_DELIMITER | SEQUENCE_DELIMITER => {
                    return UnexpectedItemSnafu { tag: header.tag }.fail();
                }
                _ => {}
            }
            let elem = self.read_element(header)?;
            if let Some(old) = ds.put(elem) {
                warn!("Duplicate data element {} replaced", old.tag());
            }
        }
    }

    fn read_element(&mut self, header: DataElementHeader) -> Result<DataElement> {
        let value = if header.is_encapsulated_pixeldata() {
            Value::Fragments(self.read_fragments()?)
        } else if header.is_sequence() {
            ensure!(
                self.depth < MAX_SEQUENCE_DEPTH,
                NestingTooDeepSnafu {
                    tag: header.tag,
                    max: MAX_SEQUENCE_DEPTH,
                }
            );
            self.depth += 1;
            let items = self.read_items(header);
            self.depth -= 1;
            Value::Sequence(items?)
        } else {
            let len = header
                .len
                .get()
                .context(UndefinedValueLengthSnafu { tag: header.tag })?;
            if len % 2 == 1 {
                warn!("Odd length {} in data element {}, padding value", len, header.tag);
            }
            let data = self.read_bytes(header.tag, len)?;
            Value::Bytes(ByteValue::new(data, header.vr))
        };
        Ok(DataElement::new(header.tag, header.vr, value))
    }

    fn read_bytes(&mut self, tag: Tag, len: u32) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        (&mut self.source)
            .take(u64::from(len))
            .read_to_end(&mut data)
            .context(ReadValueSnafu { tag })?;
        if data.len() < len as usize {
            return PrematureEndSnafu { tag }.fail();
        }
        Ok(data)
    }

    fn read_item_header(&mut self) -> Result<SequenceItemHeader> {
        self.decoder
            .decode_item_header(&mut self.source)
            .context(DecodeHeaderSnafu)
    }

    /// Read the items of a sequence.
    fn read_items(&mut self, header: DataElementHeader) -> Result<C<DataSet>> {
        match header.len.get() {
            Some(len) => {
                // read the whole sequence, then parse the items in it
                let data = self.read_bytes(header.tag, len)?;
                let mut source: &[u8] = &data;
                let mut parser = DataSetParser {
                    source: &mut source,
                    decoder: self.decoder,
                    depth: self.depth,
                };
                let mut items = C::new();
                while !parser.at_end()? {
                    match parser.read_item_header()? {
                        SequenceItemHeader::Item { len } => items.push(parser.read_item(len)?),
                        other => return UnexpectedItemSnafu { tag: other.tag() }.fail(),
                    }
                }
                Ok(items)
            }
            None => {
                let mut items = C::new();
                loop {
                    match self.read_item_header()? {
                        SequenceItemHeader::Item { len } => items.push(self.read_item(len)?),
                        SequenceItemHeader::SequenceDelimiter => return Ok(items),
                        SequenceItemHeader::ItemDelimiter => {
                            return UnexpectedItemSnafu { tag: ITEM_DELIMITER }.fail();
                        }
                    }
                }
            }
        }
    }

    /// Read the data set in a sequence item,
    /// positioned right after the item header.
    fn read_item(&mut self, len: dcmkit_core::Length) -> Result<DataSet> {
        match len.get() {
            Some(len) => {
                let data = self.read_bytes(dcmkit_core::header::ITEM, len)?;
                let mut source: &[u8] = &data;
                DataSetParser {
                    source: &mut source,
                    decoder: self.decoder,
                    depth: self.depth,
                }
                .read_until(End::Source)
            }
            None => self.read_until(End::ItemDelimiter),
        }
    }

    /// Read an encapsulated pixel data stream,
    /// positioned right after the pixel data element header.
    fn read_fragments(&mut self) -> Result<SequenceOfFragments> {
        let tag = Tag(0x7FE0, 0x0010);
        let mut table = None;
        let mut fragments: C<Fragment> = C::new();
        loop {
            match self.read_item_header()? {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().context(UndefinedValueLengthSnafu { tag })?;
                    let data = self.read_bytes(tag, len)?;
                    if table.is_none() {
                        // the first item is always the basic offset table
                        table = Some(Fragment::new(data));
                    } else {
                        fragments.push(Fragment::new(data));
                    }
                }
                SequenceItemHeader::SequenceDelimiter => break,
                SequenceItemHeader::ItemDelimiter => {
                    return UnexpectedItemSnafu { tag: ITEM_DELIMITER }.fail();
                }
            }
        }
        Ok(SequenceOfFragments::new(table.unwrap_or_default(), fragments))
    }
}
