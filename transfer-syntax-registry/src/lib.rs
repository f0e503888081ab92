//! This crate contains the DICOM transfer syntax registry
//! and the registry of pixel data coders.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier.
//! The coder registry holds every built-in [`Coder`]
//! and selects the ones able to handle a given transfer syntax.
//!
//! ```
//! use dcmkit_encoding::TransferSyntaxIndex;
//! use dcmkit_transfer_syntax_registry::{get_registry, CoderRegistry};
//!
//! let ts = get_registry().get("1.2.840.10008.1.2.5\0").unwrap();
//! assert_eq!(ts.name(), "RLE Lossless");
//! # #[cfg(feature = "rle")]
//! assert!(CoderRegistry.find(ts).is_some());
//! ```

pub mod adapters;
pub mod entries;

use dcmkit_encoding::coder::Coder;
use dcmkit_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

pub use dcmkit_encoding::coder;

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> = self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a DICOM transfer syntax by its UID.
    ///
    /// A single trailing null character (`\0`),
    /// as found in padded UID values, is ignored.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let uid = uid.as_ref();
        let ts_uid = uid.strip_suffix('\0').unwrap_or(uid);
        self.m.get(ts_uid)
    }

    /// Iterate over all registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// The number of registered transfer syntaxes.
    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    /// Register the given transfer syntax.
    /// Transfer syntaxes are never replaced:
    /// returns `false` if the UID was already registered.
    fn register(&mut self, ts: TransferSyntax) -> bool {
        match self.m.entry(ts.uid()) {
            std::collections::hash_map::Entry::Occupied(_) => {
                warn!("Transfer syntax {} registered twice", ts.uid());
                false
            }
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(ts);
                true
            }
        }
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        TransferSyntaxRegistry::get(self, uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = {
        let mut registry = TransferSyntaxRegistry { m: HashMap::new() };
        for ts in entries::ALL {
            registry.register(ts.clone());
        }
        registry
    };

    static ref CODERS: Vec<Box<dyn Coder>> = initialize_coders();
}

/// Retrieve the default transfer syntax:
/// _Implicit VR Little Endian_.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

fn initialize_coders() -> Vec<Box<dyn Coder>> {
    let mut coders: Vec<Box<dyn Coder>> = vec![
        Box::new(adapters::native::NativeCoder),
        Box::new(adapters::uncompressed::EncapsulatedUncompressedCoder),
    ];
    #[cfg(feature = "rle")]
    coders.push(Box::new(adapters::rle_lossless::RleLosslessCoder));
    #[cfg(feature = "jpeg")]
    coders.push(Box::new(adapters::jpeg::JpegCoder));
    coders
}

/// The global registry of built-in coders.
///
/// Coders are tried in registration order.
/// Selection never falls back to a coder
/// which cannot handle the transfer syntax.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CoderRegistry;

impl CoderRegistry {
    /// Iterate over every registered coder.
    pub fn iter(self) -> impl Iterator<Item = &'static dyn Coder> {
        CODERS.iter().map(|c| c.as_ref())
    }

    /// Iterate over the coders which can handle the given transfer syntax.
    pub fn coders_for(self, ts: &TransferSyntax) -> impl Iterator<Item = &'static dyn Coder> + '_ {
        self.iter().filter(move |c| c.can_code(ts))
    }

    /// Find the first coder which can handle the given transfer syntax.
    pub fn find(self, ts: &TransferSyntax) -> Option<&'static dyn Coder> {
        let coder = self.coders_for(ts).next();
        match coder {
            Some(c) => debug!("Selected coder `{}` for {}", c.name(), ts),
            None => debug!("No coder available for {}", ts),
        }
        coder
    }

    /// Find a coder for the transfer syntax with the given UID.
    pub fn find_by_uid(self, uid: &str) -> Option<&'static dyn Coder> {
        get_registry().get(uid).and_then(|ts| self.find(ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_registered() {
        assert_eq!(get_registry().len(), entries::ALL.len());
        for ts in entries::ALL {
            assert_eq!(get_registry().get(ts.uid()), Some(ts));
        }
    }

    #[test]
    fn registering_twice_is_refused() {
        let mut registry = TransferSyntaxRegistry { m: HashMap::new() };
        assert!(registry.register(entries::RLE_LOSSLESS));
        assert!(!registry.register(entries::RLE_LOSSLESS));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn native_syntaxes_select_native_coder() {
        let coder = CoderRegistry.find(&entries::EXPLICIT_VR_BIG_ENDIAN).unwrap();
        assert_eq!(coder.name(), "native");
    }

    #[test]
    fn stubs_have_no_coder() {
        assert!(CoderRegistry.find(&entries::JPEG_2000_IMAGE_COMPRESSION).is_none());
        assert!(CoderRegistry.find(&entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN).is_none());
    }
}
