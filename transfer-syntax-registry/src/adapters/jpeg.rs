//! Support for JPEG image decoding.

use crate::entries::{
    JPEG_BASELINE, JPEG_EXTENDED, JPEG_LOSSLESS_NON_HIERARCHICAL,
    JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
};
use dcmkit_core::value::SequenceOfFragments;
use dcmkit_core::{ByteValue, DataElement, VR};
use dcmkit_encoding::coder::{code_error, CodeError, CodeResult, Coder};
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use jpeg_decoder::{Decoder, PixelFormat};
use snafu::{OptionExt, ResultExt};
use std::io::{Cursor, Write};
use tracing::debug;

/// Start of image marker.
const SOI: [u8; 2] = [0xFF, 0xD8];

/// Coder for the JPEG based transfer syntaxes
/// supported by the JPEG decoder:
/// baseline, extended and lossless process 14.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct JpegCoder;

impl Coder for JpegCoder {
    fn name(&self) -> &'static str {
        "JPEG"
    }

    fn can_code(&self, ts: &TransferSyntax) -> bool {
        [
            JPEG_BASELINE.uid(),
            JPEG_EXTENDED.uid(),
            JPEG_LOSSLESS_NON_HIERARCHICAL.uid(),
            JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION.uid(),
        ]
        .contains(&ts.uid())
    }

    /// Decode every JPEG frame in the encapsulated pixel data
    /// into native, pixel interleaved samples.
    fn internal_code(&self, _ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        let seq = input.fragments().context(code_error::NotEncapsulatedSnafu)?;

        let mut dst = Vec::new();
        let mut wide = false;
        for (i, frame) in split_frames(seq).iter().enumerate() {
            let mut cursor = Cursor::new(&frame[..]);
            wide |= decode_frame(&mut cursor, i, &mut dst)?;
        }
        let vr = if wide { VR::OW } else { VR::OB };
        Ok(DataElement::new(input.tag(), vr, ByteValue::new(dst, vr)))
    }

    /// Decode the JPEG stream in `data`, which may hold several frames.
    fn code_stream(&self, data: &[u8], out: &mut dyn Write) -> CodeResult<()> {
        let mut dst = Vec::new();
        let mut cursor = Cursor::new(data);
        let mut frame = 0;
        loop {
            decode_frame(&mut cursor, frame, &mut dst)?;
            frame += 1;
            let rest = &data[cursor.position() as usize..];
            match next_frame_start(rest) {
                Some(skip) => cursor.set_position(cursor.position() + skip as u64),
                None => {
                    if !rest.is_empty() {
                        debug!("Ignoring {} trailing bytes after frame #{}", rest.len(), frame - 1);
                    }
                    break;
                }
            }
        }
        out.write_all(&dst).context(code_error::WriteOutputSnafu)
    }
}

/// Group the pixel fragments into frames.
///
/// A fragment starting with a start of image marker begins a new frame;
/// any other fragment continues the current one.
fn split_frames(seq: &SequenceOfFragments) -> Vec<Vec<u8>> {
    let mut frames: Vec<Vec<u8>> = Vec::new();
    for fragment in seq.fragments() {
        let bytes = fragment.as_bytes();
        match frames.last_mut() {
            Some(frame) if !bytes.starts_with(&SOI) => frame.extend_from_slice(bytes),
            _ => frames.push(bytes.to_vec()),
        }
    }
    frames
}

/// Find where the next frame starts in what follows a decoded frame.
///
/// Only null padding may sit between two frames.
fn next_frame_start(rest: &[u8]) -> Option<usize> {
    let skip = rest.iter().take_while(|b| **b == 0).count();
    rest[skip..].starts_with(&SOI).then_some(skip)
}

/// Decode the JPEG frame at the cursor,
/// returning whether the samples are 16 bits wide.
fn decode_frame(cursor: &mut Cursor<&[u8]>, frame: usize, dst: &mut Vec<u8>) -> CodeResult<bool> {
    let mut decoder = Decoder::new(cursor);
    let mut decoded = decoder
        .decode()
        .map_err(|e| Box::new(e) as Box<_>)
        .with_whatever_context::<_, _, CodeError>(|_| {
            format!("JPEG decoding failure on frame {}", frame)
        })?;

    let mut wide = false;
    if let Some(info) = decoder.info() {
        debug!(
            "JPEG frame #{}: {}x{} {:?}",
            frame, info.width, info.height, info.pixel_format
        );
        if matches!(info.pixel_format, PixelFormat::L16) {
            // the decoder emits 16-bit samples in big endian
            for sample in decoded.chunks_exact_mut(2) {
                sample.swap(0, 1);
            }
            wide = true;
        }
    }
    dst.extend_from_slice(&decoded);
    Ok(wide)
}

#[cfg(test)]
mod tests {
    use super::{next_frame_start, split_frames, JpegCoder};
    use crate::entries::{
        JPEG_BASELINE, JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION, RLE_LOSSLESS,
    };
    use dcmkit_core::value::{Fragment, SequenceOfFragments};
    use dcmkit_core::{ByteValue, DataElement, Tag, VR};
    use dcmkit_encoding::coder::{CodeError, Coder};

    #[test]
    fn capabilities() {
        assert!(JpegCoder.can_code(&JPEG_BASELINE));
        assert!(JpegCoder.can_code(&JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION));
        assert!(!JpegCoder.can_code(&RLE_LOSSLESS));
    }

    #[test]
    fn native_input_is_rejected() {
        let input = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            ByteValue::new(vec![0; 4], VR::OB),
        );
        assert!(matches!(
            JpegCoder.code(&JPEG_BASELINE, &input),
            Err(CodeError::NotEncapsulated)
        ));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let input = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            SequenceOfFragments::without_offsets(vec![Fragment::new(vec![0x12, 0x34, 0x56, 0x78])]),
        );
        assert!(matches!(
            JpegCoder.code(&JPEG_BASELINE, &input),
            Err(CodeError::Custom { .. })
        ));
        let mut out = Vec::new();
        assert!(JpegCoder.code_stream(&[0xFF, 0xD8, 0x00], &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn fragments_are_grouped_by_start_of_image() {
        let seq = SequenceOfFragments::without_offsets(vec![
            Fragment::new(vec![0xFF, 0xD8, 0x01, 0x02]),
            Fragment::new(vec![0x03, 0xFF, 0xD9, 0x00]),
            Fragment::new(vec![0xFF, 0xD8, 0x04, 0xFF, 0xD9, 0x00]),
        ]);
        assert_eq!(
            split_frames(&seq),
            vec![
                vec![0xFF, 0xD8, 0x01, 0x02, 0x03, 0xFF, 0xD9, 0x00],
                vec![0xFF, 0xD8, 0x04, 0xFF, 0xD9, 0x00],
            ]
        );
    }

    #[test]
    fn frames_resume_only_after_null_padding() {
        assert_eq!(next_frame_start(&[0xFF, 0xD8, 0x12]), Some(0));
        assert_eq!(next_frame_start(&[0x00, 0x00, 0xFF, 0xD8]), Some(2));
        // a marker within trailing bytes is not a frame boundary
        assert_eq!(next_frame_start(&[0x00, 0x12, 0xFF, 0xD8]), None);
        assert_eq!(next_frame_start(&[0x00, 0x00]), None);
        assert_eq!(next_frame_start(&[]), None);
    }
}
