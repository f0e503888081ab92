//! Module containing the DICOM Transfer Syntax data structure and related methods.
//!
//! A [`TransferSyntax`] describes how a data set is laid out in bytes:
//! its byte order, whether value representations are explicit,
//! and whether pixel data is encapsulated or the whole data set
//! requires a custom codec.
//!
//! This crate does not host specific transfer syntaxes. Instead, they are
//! listed in the `dcmkit-transfer-syntax-registry` crate,
//! whose global registry implements [`TransferSyntaxIndex`].

use crate::decode::{Decode, ExplicitVRDecoder, ImplicitVRLittleEndianDecoder};
use crate::encode::{Encode, ExplicitVREncoder, ImplicitVRLittleEndianEncoder};
use std::fmt;

pub use byteordered::Endianness;

/// A decoder with its type erased.
pub type DynDecoder = Box<dyn Decode + Send + Sync>;

/// An encoder with its type erased.
pub type DynEncoder = Box<dyn Encode + Send + Sync>;

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements.
    codec: Codec,
}

/// Trait for containers of transfer syntax specifiers.
///
/// Types implementing this trait are held responsible for populating
/// themselves with a set of transfer syntaxes, which can be fully supported,
/// partially supported, or not supported. Usually, only one implementation
/// of this trait is used for the entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of a trailing null characters (`\0`) in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

/// A description of the encoding and decoding requirements
/// of a transfer syntax beyond byte order and VR explicitness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Codec {
    /// No codec is required: data is native and uncompressed.
    None,
    /// Custom encoding and decoding of the entire data set is required, but
    /// not supported. This is the case of
    /// _Deflated Explicit VR Little Endian_, for example.
    Unsupported,
    /// Pixel data is encapsulated into fragments.
    /// The data set can still be read and written,
    /// and the pixel data fetched in its encapsulated form.
    /// Decoding the pixel samples is a job for a coder.
    EncapsulatedPixelData,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Create a new descriptor for an encapsulated transfer syntax
    /// in explicit VR little endian.
    pub const fn new_ele(uid: &'static str, name: &'static str) -> Self {
        TransferSyntax::new(
            uid,
            name,
            Endianness::Little,
            true,
            Codec::EncapsulatedPixelData,
        )
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Check whether value representations are explicit in this syntax.
    pub const fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain this transfer syntax' codec requirements.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// Check whether pixel data is encapsulated in this transfer syntax.
    pub const fn is_encapsulated_pixel_data(&self) -> bool {
        matches!(self.codec, Codec::EncapsulatedPixelData)
    }

    /// Check whether data sets in this transfer syntax
    /// cannot be read or written by this library.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.codec, Codec::Unsupported)
    }

    /// Check whether the data set can be decoded with the
    /// built-in element header decoders.
    pub fn is_fully_supported(&self) -> bool {
        !self.is_unsupported()
    }

    /// Retrieve the element header decoder for this transfer syntax,
    /// or `None` if the data set cannot be decoded.
    pub fn decoder(&self) -> Option<DynDecoder> {
        if self.is_unsupported() {
            return None;
        }
        let decoder: DynDecoder = match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Box::new(ImplicitVRLittleEndianDecoder::with_std_dict()),
            (byte_order, true) => Box::new(ExplicitVRDecoder::new(byte_order)),
            // implicit VR big endian is not a standard transfer syntax
            (Endianness::Big, false) => return None,
        };
        Some(decoder)
    }

    /// Retrieve the element header encoder for this transfer syntax,
    /// or `None` if the data set cannot be encoded.
    pub fn encoder(&self) -> Option<DynEncoder> {
        if self.is_unsupported() {
            return None;
        }
        let encoder: DynEncoder = match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Box::new(ImplicitVRLittleEndianEncoder),
            (byte_order, true) => Box::new(ExplicitVREncoder::new(byte_order)),
            (Endianness::Big, false) => return None,
        };
        Some(encoder)
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPLICIT: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2",
        "Implicit VR Little Endian",
        Endianness::Little,
        false,
        Codec::None,
    );

    const DEFLATED: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.1.99",
        "Deflated Explicit VR Little Endian",
        Endianness::Little,
        true,
        Codec::Unsupported,
    );

    #[test]
    fn codecs_are_provided_for_supported_syntaxes() {
        assert!(IMPLICIT.decoder().is_some());
        assert!(IMPLICIT.encoder().is_some());
        assert!(!IMPLICIT.is_encapsulated_pixel_data());

        assert!(DEFLATED.is_unsupported());
        assert!(DEFLATED.decoder().is_none());
        assert!(DEFLATED.encoder().is_none());
    }

    #[test]
    fn encapsulated_descriptor() {
        let ts = TransferSyntax::new_ele("1.2.840.10008.1.2.5", "RLE Lossless");
        assert!(ts.is_encapsulated_pixel_data());
        assert!(ts.explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Little);
        assert_eq!(ts.to_string(), "RLE Lossless (1.2.840.10008.1.2.5)");
    }
}
