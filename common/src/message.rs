//! Inbound dictionary codec.
//!
//! The phone sends key/value dictionaries in the AppMessage layout:
//!
//! ```text
//! u8 count
//! count x { u32 key (LE) | u8 type | u16 length (LE) | length bytes }
//! ```
//!
//! Types: 0 byte array, 1 C string, 2 unsigned int, 3 signed int. Integer
//! values are little-endian and 1, 2 or 4 bytes wide.
//!
//! [`Dictionary`] borrows the received buffer and validates it once in
//! [`Dictionary::parse`]; lookups afterwards cannot fail on framing.
//! [`DictionaryBuilder`] writes the same layout, used by the simulator's fake
//! phone and by tests.

use core::fmt;

use heapless::Vec;

use crate::config::{KEY_ICON, KEY_TEMPERATURE};

/// Bytes of a tuple header: key, type, length.
const TUPLE_HEADER_LEN: usize = 4 + 1 + 2;

const TYPE_BYTES: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

// =============================================================================
// Errors
// =============================================================================

/// Why a dictionary could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictError {
    /// Buffer ended inside a header or value.
    Truncated,
    /// Unknown tuple type byte.
    UnknownType(u8),
    /// Integer tuple whose length is not 1, 2 or 4.
    BadIntWidth(u16),
    /// Bytes left over after the last tuple.
    TrailingBytes,
    /// Builder ran out of room.
    Overflow,
}

impl DictError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truncated => "truncated",
            Self::UnknownType(_) => "unknown type",
            Self::BadIntWidth(_) => "bad int width",
            Self::TrailingBytes => "trailing bytes",
            Self::Overflow => "overflow",
        }
    }
}

impl fmt::Display for DictError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tuples
// =============================================================================

/// Decoded tuple value, borrowing from the dictionary buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TupleValue<'a> {
    Bytes(&'a [u8]),
    CString(&'a str),
    UInt(u32),
    Int(i32),
}

/// One key/value pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuple<'a> {
    pub key: u32,
    pub value: TupleValue<'a>,
}

impl<'a> Tuple<'a> {
    /// Temperature reading carried by this tuple.
    ///
    /// Integers are taken as `i32` (unsigned values wrap like a C cast).
    /// A string holding a decimal number yields its integer part, so
    /// `"72.6"` gives 72. Anything else is not a temperature.
    pub fn as_temperature(&self) -> Option<i32> {
        match self.value {
            TupleValue::Int(v) => Some(v),
            TupleValue::UInt(v) => Some(v as i32),
            TupleValue::CString(s) => parse_integer_part(s),
            TupleValue::Bytes(_) => None,
        }
    }

    /// String payload, if this is a C string tuple.
    pub const fn as_str(&self) -> Option<&'a str> {
        match self.value {
            TupleValue::CString(s) => Some(s),
            _ => None,
        }
    }
}

/// Integer part of a decimal like `"-12.5"`. Needs at least one digit
/// before the optional fraction; overflow is rejected.
fn parse_integer_part(s: &str) -> Option<i32> {
    let s = s.trim();
    let whole = match s.split_once('.') {
        Some((whole, frac)) if frac.bytes().all(|b| b.is_ascii_digit()) => whole,
        Some(_) => return None,
        None => s,
    };
    let (negative, digits) = match whole.as_bytes().first() {
        Some(b'-') => (true, &whole[1..]),
        Some(b'+') => (false, &whole[1..]),
        _ => (false, whole),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

// =============================================================================
// Dictionary
// =============================================================================

/// A validated dictionary over a borrowed buffer.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary<'a> {
    count: u8,
    bytes: &'a [u8],
}

impl<'a> Dictionary<'a> {
    /// Validate `bytes` as a complete dictionary.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DictError> {
        let (&count, body) = bytes.split_first().ok_or(DictError::Truncated)?;

        let mut rest = body;
        for _ in 0..count {
            let (_, tail) = read_tuple(rest)?;
            rest = tail;
        }
        if !rest.is_empty() {
            return Err(DictError::TrailingBytes);
        }
        Ok(Self { count, bytes })
    }

    /// The encoded dictionary, count byte included.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] { self.bytes }

    /// Number of tuples.
    #[inline]
    pub const fn len(&self) -> usize { self.count as usize }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Tuples in wire order.
    pub fn iter(&self) -> TupleIter<'a> {
        TupleIter {
            rest: self.bytes.get(1..).unwrap_or_default(),
            remaining: self.count,
        }
    }

    /// First tuple with `key`.
    pub fn find(
        &self,
        key: u32,
    ) -> Option<Tuple<'a>> {
        self.iter().find(|t| t.key == key)
    }
}

/// Iterator over a parsed dictionary.
pub struct TupleIter<'a> {
    rest: &'a [u8],
    remaining: u8,
}

impl<'a> Iterator for TupleIter<'a> {
    type Item = Tuple<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // Already validated by `parse`
        let (tuple, rest) = read_tuple(self.rest).ok()?;
        self.rest = rest;
        self.remaining -= 1;
        Some(tuple)
    }
}

fn read_tuple(bytes: &[u8]) -> Result<(Tuple<'_>, &[u8]), DictError> {
    if bytes.len() < TUPLE_HEADER_LEN {
        return Err(DictError::Truncated);
    }
    let key = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let kind = bytes[4];
    let len = u16::from_le_bytes([bytes[5], bytes[6]]);

    let rest = &bytes[TUPLE_HEADER_LEN..];
    if rest.len() < len as usize {
        return Err(DictError::Truncated);
    }
    let (data, rest) = rest.split_at(len as usize);

    let value = match kind {
        TYPE_BYTES => TupleValue::Bytes(data),
        TYPE_CSTRING => TupleValue::CString(c_str(data)),
        TYPE_UINT => TupleValue::UInt(read_uint(data).ok_or(DictError::BadIntWidth(len))?),
        TYPE_INT => TupleValue::Int(read_int(data).ok_or(DictError::BadIntWidth(len))?),
        other => return Err(DictError::UnknownType(other)),
    };
    Ok((Tuple { key, value }, rest))
}

/// Text up to the first NUL, cut back to the last valid UTF-8 character.
fn c_str(data: &[u8]) -> &str {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let data = &data[..end];
    match core::str::from_utf8(data) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&data[..e.valid_up_to()]).unwrap_or_default(),
    }
}

fn read_uint(data: &[u8]) -> Option<u32> {
    match *data {
        [a] => Some(u32::from(a)),
        [a, b] => Some(u32::from(u16::from_le_bytes([a, b]))),
        [a, b, c, d] => Some(u32::from_le_bytes([a, b, c, d])),
        _ => None,
    }
}

fn read_int(data: &[u8]) -> Option<i32> {
    match *data {
        [a] => Some(i32::from(a as i8)),
        [a, b] => Some(i32::from(i16::from_le_bytes([a, b]))),
        [a, b, c, d] => Some(i32::from_le_bytes([a, b, c, d])),
        _ => None,
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Writes a dictionary into a fixed buffer of `N` bytes.
pub struct DictionaryBuilder<const N: usize> {
    buf: Vec<u8, N>,
    count: u8,
}

impl<const N: usize> DictionaryBuilder<N> {
    pub fn new() -> Self {
        let mut buf = Vec::new();
        // Count placeholder, patched on every write
        buf.push(0).ok();
        Self { buf, count: 0 }
    }

    pub fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) -> Result<&mut Self, DictError> {
        self.write_tuple(key, TYPE_INT, &value.to_le_bytes())
    }

    /// Write `value` with its NUL terminator.
    pub fn write_cstring(
        &mut self,
        key: u32,
        value: &str,
    ) -> Result<&mut Self, DictError> {
        let len = value.len() + 1;
        self.write_header(key, TYPE_CSTRING, len)?;
        self.buf.extend_from_slice(value.as_bytes()).map_err(|_| DictError::Overflow)?;
        self.buf.push(0).map_err(|_| DictError::Overflow)?;
        Ok(self)
    }

    fn write_tuple(
        &mut self,
        key: u32,
        kind: u8,
        data: &[u8],
    ) -> Result<&mut Self, DictError> {
        self.write_header(key, kind, data.len())?;
        self.buf.extend_from_slice(data).map_err(|_| DictError::Overflow)?;
        Ok(self)
    }

    fn write_header(
        &mut self,
        key: u32,
        kind: u8,
        len: usize,
    ) -> Result<(), DictError> {
        let len = u16::try_from(len).map_err(|_| DictError::Overflow)?;
        if self.count == u8::MAX || self.buf.len() + TUPLE_HEADER_LEN + len as usize > N {
            return Err(DictError::Overflow);
        }
        self.buf.extend_from_slice(&key.to_le_bytes()).map_err(|_| DictError::Overflow)?;
        self.buf.push(kind).map_err(|_| DictError::Overflow)?;
        self.buf.extend_from_slice(&len.to_le_bytes()).map_err(|_| DictError::Overflow)?;
        self.count += 1;
        self.buf[0] = self.count;
        Ok(())
    }

    /// Encoded dictionary.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.buf }
}

impl<const N: usize> Default for DictionaryBuilder<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Weather Report
// =============================================================================

/// The two fields the face needs from an inbound dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherReport<'a> {
    pub temperature: i32,
    pub icon_category: &'a str,
}

impl<'a> WeatherReport<'a> {
    /// Both fields, or `None` if either is missing or unusable.
    pub fn from_dictionary(dict: &Dictionary<'a>) -> Option<Self> {
        let temperature = dict.find(KEY_TEMPERATURE)?.as_temperature()?;
        let icon_category = dict.find(KEY_ICON)?.as_str()?;
        Some(Self {
            temperature,
            icon_category,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INBOX_SIZE;

    fn weather(
        temp: i32,
        icon: &str,
    ) -> DictionaryBuilder<INBOX_SIZE> {
        let mut b = DictionaryBuilder::new();
        b.write_int(KEY_TEMPERATURE, temp).unwrap();
        b.write_cstring(KEY_ICON, icon).unwrap();
        b
    }

    #[test]
    fn test_parses_builder_output() {
        let b = weather(72, "rain");
        let dict = Dictionary::parse(b.as_bytes()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.find(0).unwrap().value, TupleValue::Int(72));
        assert_eq!(dict.find(1).unwrap().value, TupleValue::CString("rain"));
        assert!(dict.find(7).is_none());
        assert_eq!(dict.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_wire_layout() {
        let mut b: DictionaryBuilder<32> = DictionaryBuilder::new();
        b.write_int(0, -2).unwrap();
        assert_eq!(b.as_bytes(), &[1, 0, 0, 0, 0, 3, 4, 0, 0xFE, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_narrow_integers() {
        // uint8 200, int16 -300
        let bytes = [
            2, //
            5, 0, 0, 0, 2, 1, 0, 200, //
            6, 0, 0, 0, 3, 2, 0, 0xD4, 0xFE,
        ];
        let dict = Dictionary::parse(&bytes).unwrap();
        assert_eq!(dict.find(5).unwrap().value, TupleValue::UInt(200));
        assert_eq!(dict.find(6).unwrap().value, TupleValue::Int(-300));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(Dictionary::parse(&[]).unwrap_err(), DictError::Truncated);
        assert_eq!(Dictionary::parse(&[1, 0, 0]).unwrap_err(), DictError::Truncated);
        assert_eq!(
            Dictionary::parse(&[1, 0, 0, 0, 0, 9, 0, 0]).unwrap_err(),
            DictError::UnknownType(9)
        );
        assert_eq!(
            Dictionary::parse(&[1, 0, 0, 0, 0, 3, 3, 0, 1, 2, 3]).unwrap_err(),
            DictError::BadIntWidth(3)
        );
        assert_eq!(Dictionary::parse(&[0, 1]).unwrap_err(), DictError::TrailingBytes);
        // Value length runs past the end
        assert_eq!(
            Dictionary::parse(&[1, 0, 0, 0, 0, 1, 10, 0, b'a']).unwrap_err(),
            DictError::Truncated
        );
    }

    #[test]
    fn test_cstring_stops_at_nul_and_bad_utf8() {
        let bytes = [1, 1, 0, 0, 0, 1, 6, 0, b'f', b'o', b'g', 0, b'x', b'y'];
        let dict = Dictionary::parse(&bytes).unwrap();
        assert_eq!(dict.find(1).unwrap().as_str(), Some("fog"));

        let bytes = [1, 1, 0, 0, 0, 1, 3, 0, b'o', b'k', 0xFF];
        let dict = Dictionary::parse(&bytes).unwrap();
        assert_eq!(dict.find(1).unwrap().as_str(), Some("ok"));
    }

    #[test]
    fn test_temperature_coercion() {
        let t = |value| Tuple { key: 0, value };
        assert_eq!(t(TupleValue::Int(-5)).as_temperature(), Some(-5));
        assert_eq!(t(TupleValue::UInt(72)).as_temperature(), Some(72));
        assert_eq!(t(TupleValue::CString("72.6")).as_temperature(), Some(72));
        assert_eq!(t(TupleValue::CString("-3.9")).as_temperature(), Some(-3));
        assert_eq!(t(TupleValue::CString("18")).as_temperature(), Some(18));
        assert_eq!(t(TupleValue::CString("warm")).as_temperature(), None);
        assert_eq!(t(TupleValue::CString("")).as_temperature(), None);
        assert_eq!(t(TupleValue::CString(".5")).as_temperature(), None);
        assert_eq!(t(TupleValue::CString("99999999999")).as_temperature(), None);
        assert_eq!(t(TupleValue::Bytes(&[1])).as_temperature(), None);
    }

    #[test]
    fn test_report_needs_both_fields() {
        let b = weather(72, "rain");
        let dict = Dictionary::parse(b.as_bytes()).unwrap();
        assert_eq!(
            WeatherReport::from_dictionary(&dict),
            Some(WeatherReport {
                temperature: 72,
                icon_category: "rain",
            })
        );

        let mut only_temp: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        only_temp.write_int(KEY_TEMPERATURE, 72).unwrap();
        let dict = Dictionary::parse(only_temp.as_bytes()).unwrap();
        assert_eq!(WeatherReport::from_dictionary(&dict), None);

        // Icon sent as an integer is unusable
        let mut wrong: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        wrong.write_int(KEY_TEMPERATURE, 1).unwrap();
        wrong.write_int(KEY_ICON, 3).unwrap();
        let dict = Dictionary::parse(wrong.as_bytes()).unwrap();
        assert_eq!(WeatherReport::from_dictionary(&dict), None);
    }

    #[test]
    fn test_builder_overflow() {
        let mut b: DictionaryBuilder<12> = DictionaryBuilder::new();
        assert!(b.write_int(0, 1).is_ok());
        assert_eq!(b.write_int(1, 1).err(), Some(DictError::Overflow));
        // Failed write leaves the buffer intact
        assert_eq!(Dictionary::parse(b.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DictError::Truncated.to_string(), "truncated");
        assert_eq!(DictError::UnknownType(7).as_str(), "unknown type");
    }
}
