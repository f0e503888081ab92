//! Coder for native (uncompressed) transfer syntaxes.

use dcmkit_core::DataElement;
use dcmkit_encoding::coder::{code_error, CodeResult, Coder};
use dcmkit_encoding::transfer_syntax::{Codec, TransferSyntax};
use snafu::{OptionExt, ResultExt};
use std::io::Write;

/// Coder for the transfer syntaxes with native pixel data
/// (implicit VR little endian, explicit VR little or big endian).
///
/// Native pixel data is already in its canonical form,
/// so the transform is the identity on flat values.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NativeCoder;

impl Coder for NativeCoder {
    fn name(&self) -> &'static str {
        "native"
    }

    fn can_code(&self, ts: &TransferSyntax) -> bool {
        ts.codec() == Codec::None
    }

    fn internal_code(&self, _ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        let value = input.byte_value().context(code_error::NotNativeSnafu)?;
        Ok(DataElement::new(input.tag(), input.vr(), value.clone()))
    }

    fn code_stream(&self, data: &[u8], out: &mut dyn Write) -> CodeResult<()> {
        out.write_all(data).context(code_error::WriteOutputSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::NativeCoder;
    use crate::entries::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN, RLE_LOSSLESS};
    use dcmkit_core::{ByteValue, DataElement, SequenceOfFragments, Tag, VR};
    use dcmkit_encoding::coder::{CodeError, Coder};

    #[test]
    fn identity_on_native_values() {
        let input = DataElement::new(Tag(0x7FE0, 0x0010), VR::OW, ByteValue::new(vec![1, 2, 3, 4], VR::OW));
        assert!(NativeCoder.can_code(&IMPLICIT_VR_LITTLE_ENDIAN));
        let output = NativeCoder.code(&EXPLICIT_VR_LITTLE_ENDIAN, &input).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn rejects_encapsulated() {
        let input = DataElement::new(Tag(0x7FE0, 0x0010), VR::OB, SequenceOfFragments::default());
        assert!(!NativeCoder.can_code(&RLE_LOSSLESS));
        assert!(matches!(
            NativeCoder.code(&RLE_LOSSLESS, &input),
            Err(CodeError::Incapable { .. })
        ));
        assert!(matches!(
            NativeCoder.code(&IMPLICIT_VR_LITTLE_ENDIAN, &input),
            Err(CodeError::NotNative)
        ));
    }
}
