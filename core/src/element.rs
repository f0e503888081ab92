//! The data element type.

use crate::dataset::DataSet;
use crate::header::{DataElementHeader, Length, Tag, VR};
use crate::value::{ByteValue, SequenceOfFragments, Value, ValueKind, C};
use std::borrow::Cow;

/// A DICOM attribute: a tag, a value representation
/// and exactly one kind of payload.
///
/// Attaching a payload always replaces the previous one,
/// whatever its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    value: Value,
}

impl DataElement {
    /// Create a data element from the given parts.
    ///
    /// Flat values are not padded here;
    /// see [`ByteValue::new`] for building an even-length value.
    pub fn new<T, V>(tag: T, vr: VR, value: V) -> Self
    where
        T: Into<Tag>,
        V: Into<Value>,
    {
        DataElement {
            tag: tag.into(),
            vr,
            value: value.into(),
        }
    }

    /// Create a data element with an empty flat value.
    pub fn empty<T: Into<Tag>>(tag: T, vr: VR) -> Self {
        DataElement::new(tag, vr, Value::empty())
    }

    /// Create a data element from a string,
    /// padded to even length according to `vr`.
    pub fn new_str<T: Into<Tag>>(tag: T, vr: VR, text: &str) -> Self {
        DataElement::new(tag, vr, ByteValue::from_text(text, vr))
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn set_tag<T: Into<Tag>>(&mut self, tag: T) {
        self.tag = tag.into();
    }

    pub fn set_vr(&mut self, vr: VR) {
        self.vr = vr;
    }

    /// Attach a payload, replacing the one held before.
    pub fn set_value<V: Into<Value>>(&mut self, value: V) {
        self.value = value.into();
    }

    pub fn set_byte_value(&mut self, value: ByteValue) {
        self.value = Value::Bytes(value);
    }

    pub fn set_fragments(&mut self, value: SequenceOfFragments) {
        self.value = Value::Fragments(value);
    }

    pub fn set_items<I: IntoIterator<Item = DataSet>>(&mut self, items: I) {
        self.value = Value::Sequence(items.into_iter().collect());
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Which kind of payload this element holds.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Retrieve the flat value,
    /// or `None` if the element holds another kind of payload.
    pub fn byte_value(&self) -> Option<&ByteValue> {
        self.value.byte_value()
    }

    /// Retrieve the encapsulated pixel data,
    /// or `None` if the element holds another kind of payload.
    pub fn fragments(&self) -> Option<&SequenceOfFragments> {
        self.value.fragments()
    }

    /// Retrieve the nested data sets,
    /// or `None` if the element is not a sequence.
    pub fn items(&self) -> Option<&[DataSet]> {
        self.value.items()
    }

    /// Interpret the flat value as text,
    /// with trailing padding (spaces and null bytes) removed.
    ///
    /// Returns `None` for payloads other than flat values.
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        let bytes = self.byte_value()?.as_bytes();
        let text = String::from_utf8_lossy(bytes);
        Some(match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_end_matches([' ', '\0'])),
            Cow::Owned(s) => Cow::Owned(s.trim_end_matches([' ', '\0']).to_string()),
        })
    }

    /// The length of the value as it would be declared in a header:
    /// the byte count of a flat value,
    /// or undefined for sequences and encapsulated pixel data.
    /// A flat value too long for a 32-bit length field
    /// also reports an undefined length.
    pub fn length(&self) -> Length {
        match &self.value {
            Value::Bytes(v) => u32::try_from(v.len()).map_or(Length::UNDEFINED, Length),
            Value::Fragments(_) | Value::Sequence(_) => Length::UNDEFINED,
        }
    }

    /// Build the header of this element.
    pub fn header(&self) -> DataElementHeader {
        DataElementHeader::new(self.tag, self.vr, self.length())
    }
}

impl From<(DataElementHeader, Value)> for DataElement {
    fn from((header, value): (DataElementHeader, Value)) -> Self {
        DataElement::new(header.tag, header.vr, value)
    }
}

/// Convenience alias for the items of a sequence.
pub type Items = C<DataSet>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Fragment;

    #[test]
    fn payload_is_replaced_not_appended() {
        let mut e = DataElement::new_str(Tag(0x7FE0, 0x0010), VR::OB, "AB");
        assert_eq!(e.kind(), ValueKind::Bytes);

        e.set_fragments(SequenceOfFragments::without_offsets(vec![Fragment::new(
            vec![1, 2],
        )]));
        assert_eq!(e.kind(), ValueKind::Fragments);
        assert!(e.byte_value().is_none());
        assert_eq!(e.fragments().map(|f| f.number_of_fragments()), Some(1));

        e.set_byte_value(ByteValue::new(vec![9, 9], VR::OB));
        assert!(e.fragments().is_none());
        assert_eq!(e.byte_value().map(|v| v.as_bytes()), Some(&[9u8, 9][..]));
    }

    #[test]
    fn text_is_trimmed() {
        let e = DataElement::new_str(Tag(0x0008, 0x0052), VR::CS, "STUDY");
        assert_eq!(e.length(), Length(6));
        assert_eq!(e.to_str().as_deref(), Some("STUDY"));

        let e = DataElement::new_str(Tag(0x0020, 0x000D), VR::UI, "1.2.3");
        assert_eq!(e.to_str().as_deref(), Some("1.2.3"));
    }

    #[test]
    fn non_flat_values_have_undefined_length() {
        let e = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            SequenceOfFragments::default(),
        );
        assert!(e.length().is_undefined());
        assert!(e.to_str().is_none());
        assert!(e.header().is_encapsulated_pixeldata());
    }
}
