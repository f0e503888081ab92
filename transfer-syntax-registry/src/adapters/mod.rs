//! Built-in coders for the transfer syntaxes in the registry.
//!
//! | Coder | Transfer syntaxes | Feature |
//! |-------|-------------------|---------|
//! | [`NativeCoder`](native::NativeCoder) | implicit and explicit VR, uncompressed | |
//! | [`EncapsulatedUncompressedCoder`](uncompressed::EncapsulatedUncompressedCoder) | encapsulated uncompressed | |
//! | `RleLosslessCoder` | RLE Lossless | `rle` |
//! | `JpegCoder` | JPEG baseline, extended and lossless | `jpeg` |

#[cfg(feature = "jpeg")]
pub mod jpeg;
pub mod native;
#[cfg(feature = "rle")]
pub mod rle_lossless;
pub mod uncompressed;

use dcmkit_core::value::{Fragment, SequenceOfFragments};

/// Concatenate the payloads of every pixel fragment.
pub(crate) fn concat_fragments(seq: &SequenceOfFragments) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.fragments().iter().map(|f| f.len()).sum());
    for fragment in seq.fragments() {
        out.extend_from_slice(fragment.as_bytes());
    }
    out
}

/// Iterate over the payloads of every pixel fragment.
pub(crate) fn fragment_payloads(seq: &SequenceOfFragments) -> impl Iterator<Item = &[u8]> {
    seq.fragments().iter().map(Fragment::as_bytes)
}
