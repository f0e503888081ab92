//! The data set: an ordered, tag-unique collection of data elements.

use crate::dictionary::{DataDictionary, DictionaryEntry};
use crate::element::DataElement;
use crate::header::Tag;
use std::collections::btree_map::{self, BTreeMap};

/// An ordered collection of data elements, unique by tag.
///
/// Elements are always kept in ascending tag order.
/// Inserting an element with a tag already in the set
/// replaces the previous element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    entries: BTreeMap<Tag, DataElement>,
}

impl DataSet {
    /// Create a new empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Insert a data element,
    /// replacing and returning any element with the same tag.
    ///
    /// Only the tag is compared: the previous element's
    /// value representation and payload play no part.
    pub fn put(&mut self, elt: DataElement) -> Option<DataElement> {
        self.entries.insert(elt.tag(), elt)
    }

    pub fn get(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut DataElement> {
        self.entries.get_mut(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Remove and return the element with the given tag.
    pub fn remove(&mut self, tag: Tag) -> Option<DataElement> {
        self.entries.remove(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the elements in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &DataElement> + '_ {
        self.entries.values()
    }

    /// Iterate over the tags in the set, in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Look up an element by its dictionary keyword (e.g. `PatientName`).
    pub fn element_by_name<D>(&self, dict: &D, name: &str) -> Option<&DataElement>
    where
        D: DataDictionary,
    {
        let tag = dict.by_name(name)?.tag();
        self.get(tag)
    }
}

impl Extend<DataElement> for DataSet {
    /// Insert every element in turn, each one replacing
    /// an element of the same tag.
    fn extend<I: IntoIterator<Item = DataElement>>(&mut self, iter: I) {
        for elt in iter {
            self.put(elt);
        }
    }
}

impl FromIterator<DataElement> for DataSet {
    fn from_iter<I: IntoIterator<Item = DataElement>>(iter: I) -> Self {
        let mut ds = DataSet::new();
        ds.extend(iter);
        ds
    }
}

impl IntoIterator for DataSet {
    type Item = DataElement;
    type IntoIter = btree_map::IntoValues<Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = btree_map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::VR;
    use crate::value::ValueKind;

    #[test]
    fn put_replaces_same_tag() {
        let mut ds = DataSet::new();
        let tag = Tag(0x0010, 0x0010);
        assert!(ds.put(DataElement::new_str(tag, VR::PN, "Doe^John")).is_none());
        let old = ds.put(DataElement::new_str(tag, VR::LO, "Roe^Jane"));

        assert_eq!(old.and_then(|e| e.to_str().map(|s| s.into_owned())).as_deref(), Some("Doe^John"));
        assert_eq!(ds.len(), 1);
        let e = ds.get(tag).unwrap();
        assert_eq!(e.vr(), VR::LO);
        assert_eq!(e.to_str().as_deref(), Some("Roe^Jane"));
    }

    #[test]
    fn iteration_follows_tag_order() {
        let ds: DataSet = vec![
            DataElement::new_str(Tag(0x0020, 0x000D), VR::UI, "1.2"),
            DataElement::new_str(Tag(0x0008, 0x0052), VR::CS, "STUDY"),
            DataElement::new_str(Tag(0x0010, 0x0020), VR::LO, "ID"),
        ]
        .into_iter()
        .collect();

        let tags: Vec<_> = ds.tags().collect();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0052), Tag(0x0010, 0x0020), Tag(0x0020, 0x000D)]
        );
    }

    #[test]
    fn remove_and_contains() {
        let mut ds = DataSet::new();
        let tag = Tag(0x0008, 0x0052);
        ds.put(DataElement::empty(tag, VR::CS));
        assert!(ds.contains(tag));
        assert_eq!(ds.remove(tag).map(|e| e.kind()), Some(ValueKind::Bytes));
        assert!(!ds.contains(tag));
        assert!(ds.is_empty());
    }
}
