//! DICOM encoding and decoding primitives.
//!
//! This crate provides interfaces and data structures for reading and writing
//! data in accordance to the DICOM standard:
//!
//! - [`decode`] and [`encode`] read and write data element headers,
//!   item headers and delimiters, in either explicit or implicit VR
//!   and in either byte order;
//! - [`transfer_syntax`] hosts the concept of
//!   [transfer syntax specifier], which can be used to produce
//!   the right decoder and encoder at run-time;
//! - [`coder`] defines the capability boundary for transforming
//!   pixel data between an encoded transfer syntax and its native form.
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod coder;
pub mod decode;
pub mod encode;
pub mod transfer_syntax;

pub use byteordered;
pub use coder::{CodeError, Coder};
pub use decode::Decode;
pub use encode::Encode;
pub use transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
