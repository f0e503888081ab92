//! Core module for transfer syntax coders.
//!
//! A [`Coder`] is a capability, not data:
//! it transforms the payload of a data element
//! between the encoded form of a transfer syntax
//! and the native, uncompressed form.
//! Coders are selected per transfer syntax
//! by probing [`Coder::can_code`] before calling [`Coder::code`].
//! No coder is ever picked implicitly.

use crate::transfer_syntax::TransferSyntax;
use dcmkit_core::DataElement;
use snafu::{ensure, Snafu};
use std::fmt::Debug;
use std::io::Write;

/// The possible error conditions when coding a data element.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum CodeError {
    /// A custom error occurred when coding,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The coder was asked to handle a transfer syntax
    /// that it cannot code.
    #[snafu(display("Coder cannot handle transfer syntax {}", uid))]
    Incapable { uid: &'static str },

    /// The coder provides no transform for this operation.
    #[snafu(display("Operation not supported by this coder"))]
    Unsupported,

    /// The input element does not hold encapsulated pixel data.
    NotEncapsulated,

    /// The input element does not hold a flat value.
    NotNative,

    /// The input data is malformed for this coder.
    #[snafu(display("Malformed input: {}", reason))]
    Malformed { reason: String },

    /// Failed to write to the output sink.
    #[snafu(display("Failed to write coded data"))]
    WriteOutput { source: std::io::Error },
}

/// The result of coding a data element.
pub type CodeResult<T, E = CodeError> = Result<T, E>;

/// A transform between the encoded form of a transfer syntax
/// and the native form of a data element.
///
/// Implementers only need to provide [`can_code`](Coder::can_code)
/// and [`internal_code`](Coder::internal_code);
/// without the latter, every transform fails.
pub trait Coder: Debug + Send + Sync {
    /// A human readable name of this coder, for diagnostics.
    fn name(&self) -> &'static str;

    /// Check whether this coder can transform data
    /// in the given transfer syntax.
    ///
    /// This is a pure predicate with no side effects.
    fn can_code(&self, ts: &TransferSyntax) -> bool;

    /// Transform the payload of a data element.
    ///
    /// Fails with [`Incapable`](CodeError::Incapable)
    /// if [`can_code`](Coder::can_code) is false for `ts`,
    /// without looking at the input.
    /// On failure no output element is produced.
    fn code(&self, ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        ensure!(self.can_code(ts), code_error::IncapableSnafu { uid: ts.uid() });
        self.internal_code(ts, input)
    }

    /// The transform itself, called once capability is established.
    ///
    /// The default implementation has no transform and always fails.
    fn internal_code(&self, _ts: &TransferSyntax, _input: &DataElement) -> CodeResult<DataElement> {
        code_error::UnsupportedSnafu.fail()
    }

    /// Streaming hook: transform a raw encoded buffer
    /// and write the result to `out`.
    ///
    /// The default implementation always fails.
    fn code_stream(&self, _data: &[u8], _out: &mut dyn Write) -> CodeResult<()> {
        code_error::UnsupportedSnafu.fail()
    }
}

impl<T: ?Sized> Coder for &T
where
    T: Coder,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn can_code(&self, ts: &TransferSyntax) -> bool {
        (**self).can_code(ts)
    }

    fn code(&self, ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        (**self).code(ts, input)
    }

    fn internal_code(&self, ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        (**self).internal_code(ts, input)
    }

    fn code_stream(&self, data: &[u8], out: &mut dyn Write) -> CodeResult<()> {
        (**self).code_stream(data, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::{Codec, Endianness};
    use dcmkit_core::{ByteValue, Tag, VR};

    /// A coder without any transform.
    #[derive(Debug)]
    struct NullCoder;

    impl Coder for NullCoder {
        fn name(&self) -> &'static str {
            "null"
        }

        fn can_code(&self, ts: &TransferSyntax) -> bool {
            ts.uid() == "1.2.840.10008.1.2"
        }
    }

    const IMPLICIT: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2",
        "Implicit VR Little Endian",
        Endianness::Little,
        false,
        Codec::None,
    );

    const RLE: TransferSyntax = TransferSyntax::new_ele("1.2.840.10008.1.2.5", "RLE Lossless");

    #[test]
    fn incapable_coder_produces_no_output() {
        let input = DataElement::new(Tag(0x7FE0, 0x0010), VR::OB, ByteValue::default());
        assert!(!NullCoder.can_code(&RLE));
        assert!(matches!(
            NullCoder.code(&RLE, &input),
            Err(CodeError::Incapable { uid: "1.2.840.10008.1.2.5" })
        ));
    }

    #[test]
    fn default_transform_fails() {
        let input = DataElement::new(Tag(0x7FE0, 0x0010), VR::OB, ByteValue::default());
        assert!(NullCoder.can_code(&IMPLICIT));
        assert!(matches!(
            NullCoder.code(&IMPLICIT, &input),
            Err(CodeError::Unsupported)
        ));
        let mut out = Vec::new();
        assert!(NullCoder.code_stream(&[1, 2], &mut out).is_err());
        assert!(out.is_empty());
    }
}
