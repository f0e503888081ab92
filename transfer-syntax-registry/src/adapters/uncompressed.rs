//! Support for encapsulated uncompressed pixel data.

use crate::adapters::concat_fragments;
use crate::entries::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN;
use dcmkit_core::{ByteValue, DataElement, VR};
use dcmkit_encoding::coder::{code_error, CodeResult, Coder};
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use snafu::{OptionExt, ResultExt};
use std::io::Write;

/// Coder for [Encapsulated Uncompressed Explicit VR Little Endian][1].
///
/// Each fragment holds one uncompressed frame,
/// so decoding flattens all fragments into a single `OB` value.
///
/// [1]: https://dicom.nema.org/medical/dicom/2023c/output/chtml/part05/sect_A.4.11.html
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EncapsulatedUncompressedCoder;

impl Coder for EncapsulatedUncompressedCoder {
    fn name(&self) -> &'static str {
        "encapsulated uncompressed"
    }

    fn can_code(&self, ts: &TransferSyntax) -> bool {
        ts.uid() == ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN.uid()
    }

    fn internal_code(&self, _ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        // just flatten all fragments into the output value
        let seq = input.fragments().context(code_error::NotEncapsulatedSnafu)?;
        let data = concat_fragments(seq);
        Ok(DataElement::new(input.tag(), VR::OB, ByteValue::new(data, VR::OB)))
    }

    fn code_stream(&self, data: &[u8], out: &mut dyn Write) -> CodeResult<()> {
        out.write_all(data).context(code_error::WriteOutputSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::EncapsulatedUncompressedCoder;
    use crate::entries::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN as TS;
    use dcmkit_core::value::{Fragment, SequenceOfFragments};
    use dcmkit_core::{DataElement, Tag, VR};
    use dcmkit_encoding::coder::Coder;

    #[test]
    fn flattens_fragments_without_offset_table() {
        let input = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            SequenceOfFragments::with_offsets(
                &[0, 12],
                vec![Fragment::new(vec![1; 4]), Fragment::new(vec![2; 4])],
            ),
        );
        let output = EncapsulatedUncompressedCoder.code(&TS, &input).unwrap();
        assert_eq!(output.vr(), VR::OB);
        assert_eq!(
            output.byte_value().map(|v| v.as_bytes()),
            Some(&[1, 1, 1, 1, 2, 2, 2, 2][..])
        );
    }
}
