#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmkit, containing the data model
//! of a DICOM data set.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the identity and typing primitives of an attribute:
//!   tags, value representations (including dual representations)
//!   and value lengths.
//! - [`value`] holds attribute payloads:
//!   flat byte values, encapsulated pixel data fragments,
//!   and sequences of nested data sets.
//! - [`element`] defines the data element,
//!   one attribute with exactly one kind of payload.
//! - [`dataset`] defines the data set,
//!   an ordered collection of data elements unique by tag.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.

pub mod dataset;
pub mod dictionary;
pub mod element;
pub mod header;
pub mod value;

pub use dataset::DataSet;
pub use dictionary::{DataDictionary, DictionaryEntry, DictionaryEntryRef};
pub use element::DataElement;
pub use header::{DataElementHeader, Length, Tag, VirtualVr, VR};
pub use value::{ByteValue, Fragment, SequenceOfFragments, Value, ValueKind};

// re-export crates that are part of the public API
pub use smallvec;
