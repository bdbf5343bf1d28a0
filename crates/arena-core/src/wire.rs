//! Binary wire encoding shared with the game server
//!
//! All numbers are little-endian. Strings, vectors and maps carry an `i32`
//! length prefix, options a `bool` presence flag, and enums an `i32` tag
//! equal to the variant's declaration index followed by its fields.

use crate::error::{ArenaError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::io::{self, Read, Write};

/// Largest length prefix accepted when decoding (64MB)
pub const MAX_LENGTH: usize = 64 * 1024 * 1024;

/// Upper bound on capacity reserved up front from an untrusted length
const PREALLOC_LIMIT: usize = 1024;

/// A value with a binary encoding on the game stream
pub trait Wire: Sized {
    /// Write the full encoding of `self`
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()>;

    /// Read one value
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self>;
}

/// Write an enum discriminant
pub fn write_tag<W: Write + ?Sized>(writer: &mut W, tag: i32) -> io::Result<()> {
    tag.write_to(writer)
}

/// Read an enum discriminant
pub fn read_tag<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
    i32::read_from(reader)
}

/// Write a length prefix
pub fn write_len<W: Write + ?Sized>(writer: &mut W, len: usize) -> io::Result<()> {
    let len = i32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Length {} does not fit the wire format", len),
        )
    })?;
    len.write_to(writer)
}

/// Read and validate a length prefix
pub fn read_len<R: Read + ?Sized>(reader: &mut R) -> Result<usize> {
    let len = i32::read_from(reader)?;
    if len < 0 || len as usize > MAX_LENGTH {
        return Err(ArenaError::InvalidLength(len as i64));
    }
    Ok(len as usize)
}

impl Wire for bool {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&[*self as u8])
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        match byte[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ArenaError::InvalidBool(other)),
        }
    }
}

macro_rules! impl_wire_le {
    ($($ty:ty),*) => {
        $(
            impl Wire for $ty {
                fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
                    writer.write_all(&self.to_le_bytes())
                }

                fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    reader.read_exact(&mut bytes)?;
                    Ok(<$ty>::from_le_bytes(bytes))
                }
            }
        )*
    };
}

impl_wire_le!(i32, i64, f32, f64);

impl Wire for String {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write_len(writer, self.len())?;
        writer.write_all(self.as_bytes())
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_len(reader)?;
        let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        let read = reader.take(len as u64).read_to_end(&mut bytes)?;
        if read < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("String truncated: expected {} bytes, got {}", len, read),
            )
            .into());
        }
        Ok(String::from_utf8(bytes)?)
    }
}

impl<T: Wire> Wire for Option<T> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Some(value) => {
                true.write_to(writer)?;
                value.write_to(writer)
            }
            None => false.write_to(writer),
        }
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        if bool::read_from(reader)? {
            Ok(Some(T::read_from(reader)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Wire> Wire for Vec<T> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write_len(writer, self.len())?;
        for item in self {
            item.write_to(writer)?;
        }
        Ok(())
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_len(reader)?;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            items.push(T::read_from(reader)?);
        }
        Ok(items)
    }
}

impl<K: Wire + Eq + Hash, V: Wire> Wire for HashMap<K, V> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write_len(writer, self.len())?;
        for (key, value) in self {
            key.write_to(writer)?;
            value.write_to(writer)?;
        }
        Ok(())
    }

    fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_len(reader)?;
        let mut map = HashMap::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            let key = K::read_from(reader)?;
            let value = V::read_from(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Encode a value into a fresh buffer
///
/// Fails only when a length does not fit the `i32` prefix.
pub fn to_bytes<T: Wire>(value: &T) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    value.write_to(&mut buf)?;
    Ok(buf)
}

/// Decode a value from a byte slice, ignoring trailing bytes
pub fn from_bytes<T: Wire>(mut bytes: &[u8]) -> Result<T> {
    T::read_from(&mut bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_layout() {
        let bytes = to_bytes(&"hey".to_string()).unwrap();
        assert_eq!(bytes, vec![3, 0, 0, 0, b'h', b'e', b'y']);
    }

    #[test]
    fn test_option_layout() {
        assert_eq!(to_bytes(&None::<i32>).unwrap(), vec![0]);
        assert_eq!(to_bytes(&Some(-1i32)).unwrap(), vec![1, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_vec_of_floats() {
        let bytes = to_bytes(&vec![1.5f32, -2.0]).unwrap();
        assert_eq!(&bytes[..4], &[2, 0, 0, 0]);
        let decoded: Vec<f32> = from_bytes(&bytes).unwrap();
        assert_eq!(decoded, vec![1.5, -2.0]);
    }

    #[test]
    fn test_map_decodes_pairs() {
        let mut bytes = Vec::new();
        write_len(&mut bytes, 2).unwrap();
        7i32.write_to(&mut bytes).unwrap();
        "seven".to_string().write_to(&mut bytes).unwrap();
        9i32.write_to(&mut bytes).unwrap();
        "nine".to_string().write_to(&mut bytes).unwrap();

        let map: HashMap<i32, String> = from_bytes(&bytes).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&7], "seven");
        assert_eq!(map[&9], "nine");
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let err = from_bytes::<bool>(&[2]).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidBool(2)));
    }

    #[test]
    fn test_negative_length_rejected() {
        let bytes = (-1i32).to_le_bytes();
        let err = from_bytes::<String>(&bytes).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidLength(-1)));
    }

    #[test]
    fn test_oversized_length_rejected() {
        let bytes = (MAX_LENGTH as i32 + 1).to_le_bytes();
        let err = from_bytes::<Vec<i64>>(&bytes).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidLength(_)));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = from_bytes::<String>(&[2, 0, 0, 0, 0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidUtf8(_)));
    }

    #[test]
    fn test_truncated_string_is_io_error() {
        let mut bytes = (MAX_LENGTH as i32).to_le_bytes().to_vec();
        bytes.extend_from_slice(b"short");
        let err = from_bytes::<String>(&bytes).unwrap_err();
        match err {
            ArenaError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_length_over_i32_rejected_on_write() {
        let mut buf = Vec::new();
        let err = write_len(&mut buf, i32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.is_empty());
    }

    /// Claims a length the prefix cannot carry
    struct Oversized;

    impl Wire for Oversized {
        fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
            write_len(writer, i32::MAX as usize + 1)
        }

        fn read_from<R: Read + ?Sized>(_reader: &mut R) -> Result<Self> {
            Ok(Oversized)
        }
    }

    #[test]
    fn test_to_bytes_reports_length_overflow() {
        let err = to_bytes(&Oversized).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_truncated_input_is_io_error() {
        let err = from_bytes::<i64>(&[1, 2, 3]).unwrap_err();
        assert!(err.is_io());
    }
}
