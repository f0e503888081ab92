//! The run-time attribute dictionary, indexed on first use.
use crate::tags::ENTRIES;
use dcmkit_core::dictionary::{DataDictionary, DictionaryEntryRef};
use dcmkit_core::header::{Tag, VirtualVr};
use dcmkit_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

type EntryRef = &'static DictionaryEntryRef<'static>;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(|| {
    let mut registry = StandardDataDictionaryRegistry {
        by_name: HashMap::with_capacity(ENTRIES.len() + 1),
        by_tag: HashMap::with_capacity(ENTRIES.len()),
    };
    for entry in ENTRIES {
        registry.by_name.insert(entry.alias, entry);
        registry.by_tag.insert(entry.tag, entry);
    }
    // not part of the attribute list, only reachable by name
    registry.by_name.insert(GROUP_LENGTH.alias, &GROUP_LENGTH);
    registry
});

/// Obtain the global index of standard attributes.
///
/// Lookups are usually done through [`StandardDataDictionary`] instead.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The indices behind [`StandardDataDictionary`],
/// by keyword and by tag.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_name: HashMap<&'static str, EntryRef>,
    by_tag: HashMap<Tag, EntryRef>,
}

impl StandardDataDictionaryRegistry {
    /// The number of attributes indexed by tag.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Stands for any (gggg,0000) attribute.
static GROUP_LENGTH: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VirtualVr::Exact(VR::UL),
};

/// Stands for any (gggg,0010-00FF) attribute of an odd group.
static PRIVATE_CREATOR: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VirtualVr::Exact(VR::LO),
};

/// The standard DICOM data dictionary.
///
/// A zero-sized handle to a process-wide index,
/// built once on first access from any thread.
/// Besides the listed attributes,
/// tag lookups recognize group lengths and private creators.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn lookup_tag(tag: Tag) -> Option<EntryRef> {
        if let Some(entry) = StandardDataDictionary::listed_by_tag(tag) {
            return Some(entry);
        }
        match tag {
            Tag(group, 0x0010..=0x00FF) if group % 2 == 1 => Some(&PRIVATE_CREATOR),
            Tag(_, 0x0000) => Some(&GROUP_LENGTH),
            _ => None,
        }
    }

    /// Look up an attribute listed in the dictionary by its tag.
    ///
    /// Unlike [`DataDictionary::by_tag`],
    /// group lengths and private creators are not recognized
    /// unless they are listed attributes.
    pub fn listed_by_tag(tag: Tag) -> Option<EntryRef> {
        registry().by_tag.get(&tag).copied()
    }

    fn lookup_name(name: &str) -> Option<EntryRef> {
        registry().by_name.get(name).copied()
    }

    /// The value representation to decode the attribute with
    /// when the encoding does not state it.
    ///
    /// See [`VirtualVr::resolve`].
    pub fn vr_of(tag: Tag) -> Option<VR> {
        StandardDataDictionary::lookup_tag(tag).map(|e| e.vr.resolve())
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        StandardDataDictionary::lookup_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::lookup_tag(tag)
    }
}

impl<'a> DataDictionary for &'a StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        StandardDataDictionary::lookup_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::lookup_tag(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::{registry, StandardDataDictionary};
    use crate::tags;
    use dcmkit_core::dictionary::{DataDictionary, DictionaryEntryRef};
    use dcmkit_core::header::{Tag, VirtualVr, VR};

    #[test]
    fn lookup_by_keyword_and_tag() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DictionaryEntryRef {
                tag: tags::PATIENT_NAME,
                alias: "PatientName",
                vr: VirtualVr::Exact(VR::PN),
            })
        );
        assert_eq!(
            dict.by_name("QueryRetrieveLevel").map(|e| e.tag),
            Some(tags::QUERY_RETRIEVE_LEVEL)
        );

        let pixel_data = dict.by_tag(tags::PIXEL_DATA).unwrap();
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VirtualVr::ObOw);

        assert_eq!(dict.by_name("patientname"), None);
    }

    #[test]
    fn every_entry_is_indexed_both_ways() {
        let dict = StandardDataDictionary;
        assert_eq!(registry().len(), tags::ENTRIES.len());
        for entry in tags::ENTRIES {
            assert_eq!(dict.by_tag(entry.tag).map(|e| e.alias), Some(entry.alias));
            assert_eq!(dict.by_name(entry.alias).map(|e| e.tag), Some(entry.tag));
        }
    }

    #[test]
    fn dual_vrs_resolve_for_implicit_decoding() {
        assert_eq!(StandardDataDictionary::vr_of(tags::PIXEL_DATA), Some(VR::OB));
        assert_eq!(
            StandardDataDictionary::vr_of(tags::SMALLEST_IMAGE_PIXEL_VALUE),
            Some(VR::US)
        );
        assert_eq!(
            StandardDataDictionary::vr_of(tags::GRAY_LOOKUP_TABLE_DATA),
            Some(VR::OW)
        );
        assert_eq!(StandardDataDictionary::vr_of(Tag(0x0011, 0x1001)), None);
    }

    #[test]
    fn parse_tags_and_keywords() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0020,000d"), Some(tags::STUDY_INSTANCE_UID));
        assert_eq!(dict.parse_tag("0011,1001"), Some(Tag(0x0011, 0x1001)));
        assert_eq!(dict.parse_tag("SeriesInstanceUID"), Some(tags::SERIES_INSTANCE_UID));

        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("0010,0010,0010"), None);
        assert_eq!(dict.parse_tag("NotAnAttribute"), None);
    }

    #[test]
    fn group_length_and_private_creator() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_tag(tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .map(|e| e.alias),
            Some("FileMetaInformationGroupLength"),
        );
        assert_eq!(
            dict.by_tag(Tag(0x0028, 0x0000)).map(|e| e.alias),
            Some("GenericGroupLength"),
        );
        assert_eq!(
            dict.by_name("GenericGroupLength").map(|e| e.vr),
            Some(VirtualVr::Exact(VR::UL))
        );
        assert_eq!(
            dict.by_tag(Tag(0x0029, 0x0010)).map(|e| e.alias),
            Some("PrivateCreator"),
        );
        // even groups have no private creators
        assert_eq!(dict.by_tag(Tag(0x0028, 0x0010)).map(|e| e.alias), Some("Rows"));
        assert_eq!(dict.by_tag(Tag(0x0029, 0x1010)), None);
    }

    #[test]
    fn listed_lookup_skips_generic_entries() {
        assert_eq!(
            StandardDataDictionary::listed_by_tag(tags::PATIENT_NAME).map(|e| e.alias),
            Some("PatientName")
        );
        assert_eq!(
            StandardDataDictionary::listed_by_tag(tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .map(|e| e.alias),
            Some("FileMetaInformationGroupLength")
        );
        assert_eq!(StandardDataDictionary::listed_by_tag(Tag(0x0009, 0x0010)), None);
        assert_eq!(StandardDataDictionary::listed_by_tag(Tag(0x0028, 0x0000)), None);
    }

    #[test]
    fn displays_its_name() {
        assert_eq!(
            StandardDataDictionary.to_string(),
            "Standard DICOM Data Dictionary"
        );
    }
}
