//! Attribute payloads.
//!
//! A data element holds exactly one kind of [`Value`]:
//! a flat [`ByteValue`],
//! an encapsulated pixel data stream ([`SequenceOfFragments`]),
//! or a sequence of nested data sets.

use crate::dataset::DataSet;
use crate::header::VR;
use smallvec::SmallVec;
use std::io::{self, Write};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// Right-pad `data` to an even length with the given pad byte.
///
/// Buffers which are already of even length are left untouched,
/// so padding twice is the same as padding once.
pub fn pad_to_even(data: &mut Vec<u8>, pad: u8) {
    if data.len() % 2 != 0 {
        data.push(pad);
    }
}

/// An owned binary payload of a single attribute.
///
/// The length of a byte value is always even:
/// odd-length input is right-padded on construction
/// with the pad byte of the given value representation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteValue {
    data: Vec<u8>,
}

impl ByteValue {
    /// Create a byte value from a raw buffer,
    /// padding it to even length according to `vr`.
    pub fn new(mut data: Vec<u8>, vr: VR) -> Self {
        pad_to_even(&mut data, vr.pad_byte());
        ByteValue { data }
    }

    /// Create a byte value from the first `len` bytes of a buffer.
    ///
    /// If `len` exceeds the buffer, the whole buffer is taken.
    pub fn with_length(data: &[u8], len: usize, vr: VR) -> Self {
        let len = len.min(data.len());
        ByteValue::new(data[..len].to_vec(), vr)
    }

    /// Create a byte value from a string,
    /// padding it to even length according to `vr`.
    pub fn from_text(text: &str, vr: VR) -> Self {
        ByteValue::new(text.as_bytes().to_vec(), vr)
    }

    /// The value length in bytes (always even).
    ///
    /// Encoders must check that it fits a 32-bit length field.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Write the buffer verbatim to the given sink.
    pub fn write_to<W: Write>(&self, mut to: W) -> io::Result<()> {
        to.write_all(&self.data)
    }
}

impl AsRef<[u8]> for ByteValue {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// One framed chunk of an encapsulated payload.
///
/// When encoded, a fragment is an item tag,
/// a 4-byte little endian length and the payload bytes.
/// The payload is kept exactly as given.
/// Encoded items are always of even length:
/// an odd payload is followed by a null byte when written as an item.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fragment {
    data: Vec<u8>,
}

/// Size of an item header: tag (4 bytes) and length (4 bytes).
pub const ITEM_HEADER_LEN: u64 = 8;

impl Fragment {
    pub fn new(data: Vec<u8>) -> Self {
        Fragment { data }
    }

    /// Payload length, not counting the item header nor any padding.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Payload length once padded to even length,
    /// as declared in the item header.
    #[inline]
    pub fn padded_len(&self) -> usize {
        self.data.len() + self.data.len() % 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes of this fragment in encoded form,
    /// including the item header.
    #[inline]
    pub fn encoded_len(&self) -> u64 {
        ITEM_HEADER_LEN + self.padded_len() as u64
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Write the fragment's payload verbatim (without its item header).
    pub fn write_to<W: Write>(&self, mut to: W) -> io::Result<()> {
        to.write_all(&self.data)
    }

    /// Write the payload as the body of an item,
    /// [`padded_len`](Fragment::padded_len) bytes long.
    pub fn write_padded<W: Write>(&self, mut to: W) -> io::Result<()> {
        to.write_all(&self.data)?;
        if self.data.len() % 2 != 0 {
            to.write_all(&[0])?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Fragment {
    fn from(data: Vec<u8>) -> Self {
        Fragment::new(data)
    }
}

impl AsRef<[u8]> for Fragment {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// The encapsulated form of pixel data:
/// a basic offset table followed by the fragments of the pixel stream.
///
/// The basic offset table is always the first item of the stream,
/// and is kept apart from the remaining fragments.
/// An empty table means that frame offsets are unknown.
/// Indices given to [`fragment`](SequenceOfFragments::fragment)
/// are zero based and never include the offset table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequenceOfFragments {
    table: Fragment,
    fragments: C<Fragment>,
}

impl SequenceOfFragments {
    /// Create a sequence from a raw offset table item and the pixel fragments.
    pub fn new<I>(table: Fragment, fragments: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        SequenceOfFragments {
            table,
            fragments: fragments.into_iter().collect(),
        }
    }

    /// Create a sequence with an empty basic offset table.
    pub fn without_offsets<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        SequenceOfFragments::new(Fragment::default(), fragments)
    }

    /// Create a sequence with a basic offset table
    /// holding the given frame offsets.
    pub fn with_offsets<I>(offsets: &[u32], fragments: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        let table = offsets
            .iter()
            .flat_map(|o| o.to_le_bytes())
            .collect::<Vec<u8>>();
        SequenceOfFragments::new(Fragment::new(table), fragments)
    }

    /// Append a fragment to the end of the pixel stream.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// The raw basic offset table item.
    pub fn basic_offset_table(&self) -> &Fragment {
        &self.table
    }

    /// Decode the basic offset table into frame start offsets,
    /// relative to the first byte of the first pixel fragment item.
    /// Trailing bytes which do not make a whole 32-bit word are ignored.
    pub fn offset_table(&self) -> C<u32> {
        self.table
            .as_bytes()
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Number of pixel fragments, not counting the offset table.
    pub fn number_of_fragments(&self) -> usize {
        self.fragments.len()
    }

    pub fn fragment(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    /// The pixel fragments, not counting the offset table.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_parts(self) -> (Fragment, C<Fragment>) {
        (self.table, self.fragments)
    }

    /// Total length of the encapsulated stream in bytes:
    /// every item with its header, plus the sequence delimiter.
    pub fn total_length(&self) -> u64 {
        self.table.encoded_len()
            + self.fragments.iter().map(Fragment::encoded_len).sum::<u64>()
            + ITEM_HEADER_LEN
    }

    /// Write the payload of every pixel fragment back to back,
    /// in sequence order, reconstructing a single byte stream.
    ///
    /// The basic offset table is not part of the output.
    pub fn write_buffer<W: Write>(&self, mut to: W) -> io::Result<()> {
        for fragment in &self.fragments {
            fragment.write_to(&mut to)?;
        }
        Ok(())
    }
}

/// The kind of payload held by a data element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A flat byte value
    Bytes,
    /// An encapsulated pixel data stream
    Fragments,
    /// A sequence of nested data sets
    Sequence,
}

/// The payload of a data element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A flat binary value.
    Bytes(ByteValue),
    /// Encapsulated pixel data.
    Fragments(SequenceOfFragments),
    /// A sequence of items, each one a nested data set.
    Sequence(C<DataSet>),
}

impl Value {
    /// Create an empty flat value.
    pub fn empty() -> Self {
        Value::Bytes(ByteValue::default())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Fragments(_) => ValueKind::Fragments,
            Value::Sequence(_) => ValueKind::Sequence,
        }
    }

    /// Get the flat value, if this is one.
    pub fn byte_value(&self) -> Option<&ByteValue> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Get the encapsulated pixel data, if this is it.
    pub fn fragments(&self) -> Option<&SequenceOfFragments> {
        match self {
            Value::Fragments(v) => Some(v),
            _ => None,
        }
    }

    /// Get the sequence items, if this is a sequence.
    pub fn items(&self) -> Option<&[DataSet]> {
        match self {
            Value::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_byte_value(self) -> Option<ByteValue> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_fragments(self) -> Option<SequenceOfFragments> {
        match self {
            Value::Fragments(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_items(self) -> Option<C<DataSet>> {
        match self {
            Value::Sequence(v) => Some(v),
            _ => None,
        }
    }
}

impl From<ByteValue> for Value {
    fn from(value: ByteValue) -> Self {
        Value::Bytes(value)
    }
}

impl From<SequenceOfFragments> for Value {
    fn from(value: SequenceOfFragments) -> Self {
        Value::Fragments(value)
    }
}

impl From<Vec<DataSet>> for Value {
    fn from(value: Vec<DataSet>) -> Self {
        Value::Sequence(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"", VR::LO)]
    #[case(b"A", VR::PN)]
    #[case(b"AB", VR::CS)]
    #[case(b"1.2.3", VR::UI)]
    #[case(b"\x01\x02\x03", VR::OB)]
    #[case(b"STUDY", VR::CS)]
    fn padding_is_even_and_idempotent(#[case] input: &[u8], #[case] vr: VR) {
        let once = ByteValue::new(input.to_vec(), vr);
        assert_eq!(once.len() % 2, 0);
        assert!(once.as_bytes().starts_with(input));

        let twice = ByteValue::new(once.as_bytes().to_vec(), vr);
        assert_eq!(once, twice);
    }

    #[test]
    fn pad_bytes_follow_vr() {
        assert_eq!(ByteValue::from_text("STUDY", VR::CS).as_bytes(), b"STUDY ");
        assert_eq!(ByteValue::from_text("1.2.3", VR::UI).as_bytes(), b"1.2.3\0");
        assert_eq!(
            ByteValue::new(vec![1, 2, 3], VR::OB).as_bytes(),
            &[1, 2, 3, 0]
        );
    }

    #[test]
    fn byte_value_with_length() {
        let v = ByteValue::with_length(b"ABCDEF", 4, VR::LO);
        assert_eq!(v.as_bytes(), b"ABCD");
        let v = ByteValue::with_length(b"ABC", 10, VR::LO);
        assert_eq!(v.as_bytes(), b"ABC ");
    }

    #[test]
    fn byte_value_written_verbatim() {
        let v = ByteValue::from_text("Doe^John", VR::PN);
        let mut out = Vec::new();
        v.write_to(&mut out).unwrap();
        assert_eq!(out, b"Doe^John");
    }

    #[test]
    fn fragments_offsets_and_lengths() {
        let seq = SequenceOfFragments::with_offsets(
            &[0, 18],
            vec![Fragment::new(vec![1; 10]), Fragment::new(vec![2; 5])],
        );
        assert_eq!(&seq.offset_table()[..], &[0, 18]);
        assert_eq!(seq.number_of_fragments(), 2);
        assert_eq!(seq.fragment(1).map(|f| f.len()), Some(5));
        assert_eq!(seq.fragment(1).map(|f| f.padded_len()), Some(6));
        assert!(seq.fragment(2).is_none());
        // (8 + 8) + (8 + 10) + (8 + 6) + 8
        assert_eq!(seq.total_length(), 56);
    }

    #[test]
    fn odd_fragments_are_kept_verbatim() {
        let fragment = Fragment::new(vec![1, 2, 3]);
        assert_eq!(fragment.as_bytes(), &[1, 2, 3]);
        assert_eq!(fragment.encoded_len(), 12);

        let mut out = Vec::new();
        fragment.write_to(&mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3]);

        let mut out = Vec::new();
        fragment.write_padded(&mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3, 0]);

        let seq = SequenceOfFragments::without_offsets(vec![fragment, Fragment::new(vec![4])]);
        let mut out = Vec::new();
        seq.write_buffer(&mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn write_buffer_excludes_offset_table() {
        let seq = SequenceOfFragments::with_offsets(
            &[0],
            vec![Fragment::new(vec![1, 2]), Fragment::new(vec![3, 4])],
        );
        let mut out = Vec::new();
        seq.write_buffer(&mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn value_kind_accessors() {
        let v = Value::from(ByteValue::from_text("X", VR::CS));
        assert_eq!(v.kind(), ValueKind::Bytes);
        assert!(v.byte_value().is_some());
        assert!(v.fragments().is_none());
        assert!(v.items().is_none());

        let v = Value::from(SequenceOfFragments::default());
        assert_eq!(v.kind(), ValueKind::Fragments);
        assert!(v.byte_value().is_none());
        assert!(v.fragments().is_some());
    }
}
