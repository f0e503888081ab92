//! This module contains the identity and typing primitives of a DICOM
//! attribute: the attribute [`Tag`], the value representation ([`VR`]),
//! the context dependent [`VirtualVr`] used by dictionary entries,
//! and the value [`Length`] as declared in element and item headers.

use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are totally ordered by group, then by element,
/// which is also the order of elements in a data set.
/// Both `(u16, u16)` and `[u16; 2]` can be converted to this type.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Render the tag in its comma separated form,
    /// with 4 lowercase hexadecimal digits on each side
    /// (e.g. `7fe0,0010`).
    ///
    /// This is the inverse of parsing a string in that same form.
    pub fn to_comma_string(self) -> String {
        format!("{:04x},{:04x}", self.0, self.1)
    }

    /// Check whether this is the tag of a sequence item,
    /// item delimiter or sequence delimiter.
    #[inline]
    pub fn is_item_or_delimiter(self) -> bool {
        self.0 == 0xFFFE
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// An error returned when parsing an invalid tag expression.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagParseError {
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingTag { backtrace: Backtrace },
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingTagElement { backtrace: Backtrace },
    #[snafu(display("Too many tag components"))]
    TrailingComponents { backtrace: Backtrace },
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`"))]
    InvalidTagGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid tag component `element`"))]
    InvalidTagElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

/// Parse a tag from its comma separated hexadecimal form.
///
/// Both `gggg,eeee` and `(gggg,eeee)` are accepted,
/// with upper or lower case hexadecimal digits.
impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.trim();
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let mut parts = s.split(',');
        let group = parts.next().context(MissingTagSnafu)?.trim();
        let elem = parts.next().context(MissingTagElementSnafu)?.trim();
        ensure!(parts.next().is_none(), TrailingComponentsSnafu);
        ensure!(
            group.len() == 4,
            InvalidGroupLengthSnafu { got: group.len() }
        );
        ensure!(
            elem.len() == 4,
            InvalidElementLengthSnafu { got: elem.len() }
        );
        let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
        let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
        Ok(Tag(group, elem))
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

/// Every value representation with its two-letter code,
/// in declaration order.
const VR_CODES: [(VR, &str); 34] = [
    (VR::AE, "AE"),
    (VR::AS, "AS"),
    (VR::AT, "AT"),
    (VR::CS, "CS"),
    (VR::DA, "DA"),
    (VR::DS, "DS"),
    (VR::DT, "DT"),
    (VR::FL, "FL"),
    (VR::FD, "FD"),
    (VR::IS, "IS"),
    (VR::LO, "LO"),
    (VR::LT, "LT"),
    (VR::OB, "OB"),
    (VR::OD, "OD"),
    (VR::OF, "OF"),
    (VR::OL, "OL"),
    (VR::OV, "OV"),
    (VR::OW, "OW"),
    (VR::PN, "PN"),
    (VR::SH, "SH"),
    (VR::SL, "SL"),
    (VR::SQ, "SQ"),
    (VR::SS, "SS"),
    (VR::ST, "ST"),
    (VR::SV, "SV"),
    (VR::TM, "TM"),
    (VR::UC, "UC"),
    (VR::UI, "UI"),
    (VR::UL, "UL"),
    (VR::UN, "UN"),
    (VR::UR, "UR"),
    (VR::US, "US"),
    (VR::UT, "UT"),
    (VR::UV, "UV"),
];

impl VR {
    /// Look up a value representation by the two upper case letters
    /// found in explicit VR element headers.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        VR_CODES
            .iter()
            .find(|(_, code)| code.as_bytes() == chars)
            .map(|(vr, _)| *vr)
    }

    /// The two-letter code of this VR.
    pub fn to_string(self) -> &'static str {
        VR_CODES[self as usize].1
    }

    /// The two-letter code of this VR, as bytes.
    pub fn to_bytes(self) -> [u8; 2] {
        let code = self.to_string().as_bytes();
        [code[0], code[1]]
    }

    /// Whether values of this representation are character strings.
    pub fn is_text(self) -> bool {
        use VR::*;
        matches!(
            self,
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT
        )
    }

    /// The byte used to pad values of this representation to an even length.
    ///
    /// Character strings are padded with a space,
    /// except for unique identifiers,
    /// which like all binary values are padded with a null byte.
    pub fn pad_byte(self) -> u8 {
        match self {
            VR::UI => b'\0',
            vr if vr.is_text() => b' ',
            _ => b'\0',
        }
    }

    /// Whether an explicit VR element header of this representation
    /// has a 16-bit value length field.
    ///
    /// All other representations have 2 reserved bytes
    /// followed by a 32-bit value length field.
    pub fn has_short_length(self) -> bool {
        // PS3.5 7.1.2
        use VR::*;
        matches!(
            self,
            AE | AS
                | AT
                | CS
                | DA
                | DS
                | DT
                | FL
                | FD
                | IS
                | LO
                | LT
                | PN
                | SH
                | SL
                | SS
                | ST
                | TM
                | UI
                | UL
                | US
        )
    }
}

/// Parse a two-letter VR code, which must be in upper case.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        VR_CODES
            .iter()
            .find(|(_, code)| *code == string)
            .map(|(vr, _)| *vr)
            .ok_or("no such value representation")
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A "virtual" value representation descriptor,
/// which extends the standard enumeration with the dual VRs
/// found in the attribute dictionary.
///
/// A dual VR is ambiguous until resolved against its context.
/// Without further context, [`resolve`](VirtualVr::resolve)
/// applies a fixed mapping and never looks at value data.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VirtualVr {
    /// The value representation is exactly known.
    Exact(VR),
    /// Either [`US`](VR::US) or [`SS`](VR::SS),
    /// depending on the pixel representation.
    UsSs,
    /// Either [`US`](VR::US), [`SS`](VR::SS) or [`OW`](VR::OW).
    UsSsOw,
    /// Either [`OB`](VR::OB) or [`OW`](VR::OW).
    ObOw,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// Whether this representation is ambiguous without context.
    pub fn is_dual(self) -> bool {
        !matches!(self, VirtualVr::Exact(_))
    }

    /// Return the underlying value representation
    /// if it is known without context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// Resolve to a concrete value representation.
    ///
    /// - `US_SS` resolves to [`US`](VR::US)
    /// - `US_SS_OW` resolves to [`OW`](VR::OW)
    /// - `OB_OW` resolves to [`OB`](VR::OB)
    pub fn resolve(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::UsSs => VR::US,
            VirtualVr::UsSsOw => VR::OW,
            VirtualVr::ObOw => VR::OB,
        }
    }
}

impl fmt::Display for VirtualVr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VirtualVr::Exact(vr) => vr.fmt(f),
            VirtualVr::UsSs => f.write_str("US or SS"),
            VirtualVr::UsSsOw => f.write_str("US or SS or OW"),
            VirtualVr::ObOw => f.write_str("OB or OW"),
        }
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// Two undefined lengths are not equal,
/// and comparing against an undefined length yields no ordering.
///
/// ```
/// # use dcmkit_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert!(Length(16) < Length(64));
/// assert!(!(Length::UNDEFINED < Length(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

/// The item tag, which also frames each encapsulated pixel data fragment.
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// The item delimitation tag.
pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
/// The sequence delimitation tag,
/// which also terminates an encapsulated pixel data stream.
pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

/// Data type for describing a sequence item header.
///
/// Headers are equal when they would be encoded the same way,
/// so two items of undefined length are equal headers.
#[derive(Debug, Clone, Copy)]
pub enum SequenceItemHeader {
    /// An item, with its length in bytes (can be undefined).
    Item {
        /// the length of the item in bytes
        len: Length,
    },
    /// An item delimiter.
    ItemDelimiter,
    /// A sequence delimiter.
    /// The sequence ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error is raised if the given properties do not relate to an
    /// item, an item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(
        tag: T,
        len: Length,
    ) -> Result<SequenceItemHeader, SequenceItemHeaderError> {
        match tag.into() {
            ITEM => Ok(SequenceItemHeader::Item { len }),
            ITEM_DELIMITER | SEQUENCE_DELIMITER if len.0 != 0 => {
                UnexpectedDelimiterLengthSnafu { len }.fail()
            }
            ITEM_DELIMITER => Ok(SequenceItemHeader::ItemDelimiter),
            SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }

    /// The tag of this header.
    pub fn tag(&self) -> Tag {
        match self {
            SequenceItemHeader::Item { .. } => ITEM,
            SequenceItemHeader::ItemDelimiter => ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => SEQUENCE_DELIMITER,
        }
    }

    /// The length declared by this header (zero for delimiters).
    pub fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            _ => Length(0),
        }
    }
}

impl PartialEq for SequenceItemHeader {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SequenceItemHeader::Item { len: l1 }, SequenceItemHeader::Item { len: l2 }) => {
                l1.0 == l2.0
            }
            (SequenceItemHeader::ItemDelimiter, SequenceItemHeader::ItemDelimiter)
            | (SequenceItemHeader::SequenceDelimiter, SequenceItemHeader::SequenceDelimiter) => true,
            _ => false,
        }
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
///
/// As with [`SequenceItemHeader`],
/// lengths are compared by their raw value.
#[derive(Debug, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Check whether this is the header of an encapsulated pixel data element.
    pub fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag == Tag(0x7FE0, 0x0010) && self.len.is_undefined()
    }

    /// Check whether the header announces a sequence of items:
    /// either its VR is SQ, or the length is undefined
    /// on an element other than pixel data.
    pub fn is_sequence(&self) -> bool {
        self.vr == VR::SQ || (self.len.is_undefined() && !self.is_encapsulated_pixeldata())
    }
}

impl PartialEq for DataElementHeader {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.vr == other.vr && self.len.0 == other.len.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn headers_with_undefined_length_are_equal() {
        let item = SequenceItemHeader::Item {
            len: Length::UNDEFINED,
        };
        assert_eq!(item, SequenceItemHeader::new(ITEM, Length::UNDEFINED).unwrap());
        assert_ne!(item, SequenceItemHeader::Item { len: Length(0) });
        assert_ne!(
            SequenceItemHeader::Item { len: Length(0) },
            SequenceItemHeader::ItemDelimiter
        );
        assert_eq!(
            SequenceItemHeader::new(SEQUENCE_DELIMITER, Length(0)).unwrap(),
            SequenceItemHeader::SequenceDelimiter
        );

        let header = DataElementHeader::new(Tag(0x0008, 0x1110), VR::SQ, Length::UNDEFINED);
        assert_eq!(
            header,
            DataElementHeader::new(Tag(0x0008, 0x1110), VR::SQ, Length(UNDEFINED_LEN))
        );
        assert_ne!(
            header,
            DataElementHeader::new(Tag(0x0008, 0x1110), VR::SQ, Length(8))
        );
        // undefined lengths themselves stay incomparable
        assert_ne!(header.len, Length::UNDEFINED);
    }

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_ordering_is_group_then_element() {
        assert!(Tag(0x0008, 0x0052) < Tag(0x0010, 0x0010));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
        assert!(Tag(0x7FE0, 0x0010) > Tag(0x0028, 0xFFFF));
    }

    #[rstest]
    #[case("0008,0052")]
    #[case("7fe0,0010")]
    #[case("0000,0000")]
    #[case("ffff,ffff")]
    #[case("0020,000d")]
    fn tag_comma_string_round_trip(#[case] s: &str) {
        let tag: Tag = s.parse().unwrap();
        assert_eq!(tag.to_comma_string(), s);
    }

    #[test]
    fn parse_tag_variants() {
        assert_eq!("(7FE0,0010)".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert_eq!("7Fe0,0010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert!(matches!(
            "7fe0".parse::<Tag>(),
            Err(TagParseError::MissingTagElement { .. })
        ));
        assert!(matches!(
            "7fe,0010".parse::<Tag>(),
            Err(TagParseError::InvalidGroupLength { got: 3, .. })
        ));
        assert!(matches!(
            "7fe0,00zz".parse::<Tag>(),
            Err(TagParseError::InvalidTagElement { .. })
        ));
        assert!(matches!(
            "7fe0,0010,0000".parse::<Tag>(),
            Err(TagParseError::TrailingComponents { .. })
        ));
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x0020, 0x000D).to_string(), "(0020,000D)");
    }

    #[test]
    fn dual_vr_resolution() {
        assert_eq!(VirtualVr::UsSs.resolve(), VR::US);
        assert_eq!(VirtualVr::UsSsOw.resolve(), VR::OW);
        assert_eq!(VirtualVr::ObOw.resolve(), VR::OB);
        assert_eq!(VirtualVr::Exact(VR::PN).resolve(), VR::PN);
        assert!(VirtualVr::ObOw.is_dual());
        assert!(!VirtualVr::from(VR::CS).is_dual());
    }

    #[test]
    fn vr_binary_codes() {
        assert_eq!(VR::from_binary(*b"OB"), Some(VR::OB));
        assert_eq!(VR::from_binary(*b"ZZ"), None);
        assert_eq!(VR::SQ.to_bytes(), *b"SQ");
        assert_eq!("UV".parse::<VR>(), Ok(VR::UV));
        assert!("ob".parse::<VR>().is_err());

        for (i, (vr, code)) in super::VR_CODES.iter().enumerate() {
            assert_eq!(*vr as usize, i);
            assert_eq!(vr.to_string(), *code);
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(*vr));
        }
    }

    #[test]
    fn pad_bytes() {
        assert_eq!(VR::PN.pad_byte(), b' ');
        assert_eq!(VR::CS.pad_byte(), b' ');
        assert_eq!(VR::UI.pad_byte(), b'\0');
        assert_eq!(VR::OB.pad_byte(), b'\0');
    }

    #[test]
    fn item_headers() {
        assert_eq!(
            SequenceItemHeader::new(ITEM, Length(16)).unwrap(),
            SequenceItemHeader::Item { len: Length(16) }
        );
        assert_eq!(
            SequenceItemHeader::new(SEQUENCE_DELIMITER, Length(0)).unwrap(),
            SequenceItemHeader::SequenceDelimiter
        );
        assert!(SequenceItemHeader::new(ITEM_DELIMITER, Length(2)).is_err());
        assert!(SequenceItemHeader::new(Tag(0x0010, 0x0010), Length(2)).is_err());
    }
}
