//! Support for RLE Lossless image decoding.
//!
//! See <https://dicom.nema.org/medical/dicom/2023e/output/chtml/part05/chapter_G.html>
//!
//! Each fragment holds one RLE encoded frame:
//! a 64-byte header with the number of segments and their offsets,
//! followed by the PackBits encoded segments.
//! A segment holds one byte plane (most significant first)
//! of one sample plane, so the number of segments
//! fixes both the bytes per sample and the samples per pixel.
//! Decoding re-interleaves the planes into little endian,
//! pixel interleaved samples.
use crate::adapters::fragment_payloads;
use crate::entries::RLE_LOSSLESS;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::{ByteValue, DataElement, VR};
use dcmkit_encoding::coder::{code_error, CodeResult, Coder};
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, OptionExt, ResultExt};
use std::io::Write;
use tracing::debug;

/// Length of the RLE header in bytes.
const HEADER_LEN: usize = 64;

/// Coder for the RLE Lossless transfer syntax (UID `1.2.840.10008.1.2.5`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RleLosslessCoder;

impl Coder for RleLosslessCoder {
    fn name(&self) -> &'static str {
        "RLE lossless"
    }

    fn can_code(&self, ts: &TransferSyntax) -> bool {
        ts.uid() == RLE_LOSSLESS.uid()
    }

    /// Decode every frame and concatenate them into a single native value.
    ///
    /// The output VR is `OB` for 8-bit samples and `OW` otherwise.
    fn internal_code(&self, _ts: &TransferSyntax, input: &DataElement) -> CodeResult<DataElement> {
        let seq = input.fragments().context(code_error::NotEncapsulatedSnafu)?;
        let mut data = Vec::new();
        let mut vr = VR::OB;
        for (i, fragment) in fragment_payloads(seq).enumerate() {
            let layout = decode_frame(fragment, &mut data)?;
            debug!(
                "RLE frame #{}: {} samples per pixel, {} bytes per sample",
                i, layout.samples_per_pixel, layout.bytes_per_sample
            );
            if layout.bytes_per_sample > 1 {
                vr = VR::OW;
            }
        }
        Ok(DataElement::new(input.tag(), vr, ByteValue::new(data, vr)))
    }

    /// Decode a single RLE encoded frame.
    fn code_stream(&self, data: &[u8], out: &mut dyn Write) -> CodeResult<()> {
        let mut frame = Vec::new();
        decode_frame(data, &mut frame)?;
        out.write_all(&frame).context(code_error::WriteOutputSnafu)
    }
}

/// How samples are laid out in a frame,
/// as implied by its number of segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Layout {
    samples_per_pixel: usize,
    bytes_per_sample: usize,
}

impl Layout {
    fn from_segments(segments: usize) -> Option<Self> {
        let (samples_per_pixel, bytes_per_sample) = match segments {
            1 => (1, 1),
            2 => (1, 2),
            3 => (3, 1),
            4 => (1, 4),
            6 => (3, 2),
            12 => (3, 4),
            _ => return None,
        };
        Some(Layout {
            samples_per_pixel,
            bytes_per_sample,
        })
    }
}

/// Read the segment offsets out of the RLE header.
fn read_rle_header(fragment: &[u8]) -> CodeResult<Vec<u32>> {
    ensure!(
        fragment.len() >= HEADER_LEN,
        code_error::MalformedSnafu {
            reason: format!("RLE fragment too short for header ({} bytes)", fragment.len()),
        }
    );
    let segments = LittleEndian::read_u32(&fragment[0..4]) as usize;
    ensure!(
        (1..=15).contains(&segments),
        code_error::MalformedSnafu {
            reason: format!("invalid number of RLE segments: {}", segments),
        }
    );
    Ok((0..segments)
        .map(|i| LittleEndian::read_u32(&fragment[4 + i * 4..8 + i * 4]))
        .collect())
}

/// Decode one RLE encoded frame, appending the native pixel data to `dst`.
fn decode_frame(fragment: &[u8], dst: &mut Vec<u8>) -> CodeResult<Layout> {
    let mut offsets = read_rle_header(fragment)?;
    let layout = Layout::from_segments(offsets.len()).context(code_error::MalformedSnafu {
        reason: format!("unsupported number of RLE segments: {}", offsets.len()),
    })?;
    offsets.push(fragment.len() as u32);

    let mut planes = Vec::with_capacity(offsets.len() - 1);
    for w in offsets.windows(2) {
        let (start, end) = (w[0] as usize, w[1] as usize);
        ensure!(
            start >= HEADER_LEN && start <= end && end <= fragment.len(),
            code_error::MalformedSnafu {
                reason: format!("RLE segment range {}..{} out of bounds", start, end),
            }
        );
        planes.push(unpack_bits(&fragment[start..end]));
    }

    // every segment must decode to the same number of pixels;
    // a trailing pad byte in a segment is tolerated by truncating
    let pixels = planes.iter().map(Vec::len).min().unwrap_or(0);

    // RLE encoded data is ordered like this (for 16-bit, 3 sample):
    //  Segment: 0     | 1     | 2     | 3     | 4     | 5
    //           R MSB | R LSB | G MSB | G LSB | B MSB | B LSB
    // and is rearranged into pixel interleaved little endian:
    //  LSB R MSB R LSB G MSB G LSB B MSB B | ...
    let Layout {
        samples_per_pixel,
        bytes_per_sample,
    } = layout;
    let pixel_size = samples_per_pixel * bytes_per_sample;
    let base = dst.len();
    dst.resize(base + pixels * pixel_size, 0);
    for sample in 0..samples_per_pixel {
        for byte in 0..bytes_per_sample {
            let plane = &planes[sample * bytes_per_sample + (bytes_per_sample - 1 - byte)];
            let offset = sample * bytes_per_sample + byte;
            for (p, value) in plane[..pixels].iter().enumerate() {
                dst[base + p * pixel_size + offset] = *value;
            }
        }
    }
    Ok(layout)
}

/// Decode a PackBits encoded segment.
fn unpack_bits(mut input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 2);
    while let Some((&header, rest)) = input.split_first() {
        input = rest;
        let n = header as i8;
        match n {
            // literal run of n + 1 bytes
            0..=127 => {
                let len = (n as usize + 1).min(input.len());
                out.extend_from_slice(&input[..len]);
                input = &input[len..];
            }
            // no-op
            -128 => {}
            // replicate the next byte 1 - n times
            _ => {
                if let Some((&value, rest)) = input.split_first() {
                    input = rest;
                    let count = (1 - i16::from(n)) as usize;
                    out.extend(std::iter::repeat(value).take(count));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{unpack_bits, RleLosslessCoder};
    use crate::entries::{EXPLICIT_VR_LITTLE_ENDIAN, RLE_LOSSLESS};
    use dcmkit_core::value::{Fragment, SequenceOfFragments};
    use dcmkit_core::{DataElement, Tag, VR};
    use dcmkit_encoding::coder::{CodeError, Coder};

    /// Build an RLE frame from already PackBits encoded segments.
    fn rle_frame(segments: &[&[u8]]) -> Vec<u8> {
        let mut header = vec![0u8; 64];
        header[0..4].copy_from_slice(&(segments.len() as u32).to_le_bytes());
        let mut offset = 64u32;
        let mut body = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            header[4 + i * 4..8 + i * 4].copy_from_slice(&offset.to_le_bytes());
            body.extend_from_slice(segment);
            offset += segment.len() as u32;
        }
        header.extend(body);
        header
    }

    #[test]
    fn packbits() {
        // literal run of 3, then replicate 0xAA 4 times, then no-op
        let encoded = [0x02, 1, 2, 3, 0xFD, 0xAA, 0x80];
        assert_eq!(unpack_bits(&encoded), vec![1, 2, 3, 0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn decode_8bit_grayscale() {
        // 4 pixels: 5 5 5 9
        let frame = rle_frame(&[&[0xFE, 5, 0x00, 9]]);
        let input = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            SequenceOfFragments::without_offsets(vec![Fragment::new(frame)]),
        );
        let output = RleLosslessCoder.code(&RLE_LOSSLESS, &input).unwrap();
        assert_eq!(output.vr(), VR::OB);
        assert_eq!(
            output.byte_value().map(|v| v.as_bytes()),
            Some(&[5, 5, 5, 9][..])
        );
    }

    #[test]
    fn decode_16bit_two_frames() {
        // pixel values 0x0102, 0x0304 then 0xFF00, 0x00FF
        let frame1 = rle_frame(&[&[0x01, 0x01, 0x03], &[0x01, 0x02, 0x04]]);
        let frame2 = rle_frame(&[&[0x01, 0xFF, 0x00], &[0x01, 0x00, 0xFF]]);
        let input = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            SequenceOfFragments::without_offsets(vec![
                Fragment::new(frame1),
                Fragment::new(frame2),
            ]),
        );
        let output = RleLosslessCoder.code(&RLE_LOSSLESS, &input).unwrap();
        assert_eq!(output.vr(), VR::OW);
        assert_eq!(
            output.byte_value().map(|v| v.as_bytes()),
            Some(&[0x02, 0x01, 0x04, 0x03, 0x00, 0xFF, 0xFF, 0x00][..])
        );
    }

    #[test]
    fn decode_rgb_stream() {
        // 2 pixels: (10, 20, 30), (11, 21, 31)
        let frame = rle_frame(&[&[0x01, 10, 11], &[0x01, 20, 21], &[0x01, 30, 31]]);
        let mut out = Vec::new();
        RleLosslessCoder.code_stream(&frame, &mut out).unwrap();
        assert_eq!(out, vec![10, 20, 30, 11, 21, 31]);
    }

    #[test]
    fn malformed_and_incapable() {
        let input = DataElement::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            SequenceOfFragments::without_offsets(vec![Fragment::new(vec![0; 10])]),
        );
        assert!(matches!(
            RleLosslessCoder.code(&RLE_LOSSLESS, &input),
            Err(CodeError::Malformed { .. })
        ));
        assert!(matches!(
            RleLosslessCoder.code(&EXPLICIT_VR_LITTLE_ENDIAN, &input),
            Err(CodeError::Incapable { .. })
        ));
    }
}
