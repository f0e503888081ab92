//! This crate implements the standard DICOM attribute dictionary and constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: contains information about the
//!   DICOM attributes needed for file meta information,
//!   image pixel description and query/retrieve identifiers,
//!   as specified in [DICOM PS3.6].
//!   It will be used by default in most other abstractions available.
//!
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
