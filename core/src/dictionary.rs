//! This module contains the concept of a DICOM data dictionary.
//!
//! The standard dictionary lives in a separate crate;
//! this module only defines the interface to it.

use crate::header::{Tag, TagParseError, VirtualVr};
use std::fmt::Debug;

/** Type trait for a dictionary of DICOM attributes. Attribute dictionaries provide the
 * means to convert a tag to an alias and vice versa, as well as a form of retrieving
 * additional information about the attribute.
 *
 * The methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by an expression,
    /// which is either a tag in text form or a keyword.
    fn by_expr(&self, expr: &str) -> Option<&Self::Entry> {
        match expr.parse::<Tag>() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(expr),
        }
    }

    /// Resolve an expression into a tag:
    /// a tag in text form is parsed directly,
    /// anything else is looked up as a keyword.
    fn parse_tag(&self, expr: &str) -> Option<Tag> {
        match expr.parse::<Tag>() {
            Ok(tag) => Some(tag),
            Err(TagParseError::MissingTagElement { .. }) => {
                self.by_name(expr).map(DictionaryEntry::tag)
            }
            Err(_) => None,
        }
    }
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;
    /// The value representation,
    /// which may be a dual representation.
    fn vr(&self) -> VirtualVr;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct DictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase
    pub alias: &'a str,
    /// The attribute's value representation
    pub vr: VirtualVr,
}

impl<'a> DictionaryEntry for DictionaryEntryRef<'a> {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
}
