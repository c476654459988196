//! Consensus-critical serialization.
//!
//! Coinbase outputs are serialized in the Bitcoin transaction output format,
//! so block templates and output comparisons agree with the rest of the network.

use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

/// Consensus-critical serialization for Lotus.
///
/// This trait is intended for use only in consensus-critical contexts. In other
/// contexts, such as configuration files, use Serde.
pub trait LotusSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical format.
    ///
    /// Serialization must be infallible up to errors in the underlying writer.
    fn lotus_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Helper function to construct a vec to serialize the current struct into
    fn lotus_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.lotus_serialize(&mut data)?;
        Ok(data)
    }
}

/// Extends [`io::Write`] with methods for writing Bitcoin types.
pub trait WriteLotusExt: io::Write {
    /// Writes a `u64` using the Bitcoin `CompactSize` encoding.
    ///
    /// Values below `0xfd` take one byte. Larger values are written as a
    /// marker byte followed by a little-endian `u16`, `u32` or `u64`.
    #[inline]
    fn write_compactsize(&mut self, n: u64) -> io::Result<()> {
        match n {
            0x00..=0xfc => self.write_u8(n as u8),
            0x00fd..=0xffff => {
                self.write_u8(0xfd)?;
                self.write_u16::<LittleEndian>(n as u16)
            }
            0x0001_0000..=0xffff_ffff => {
                self.write_u8(0xfe)?;
                self.write_u32::<LittleEndian>(n as u32)
            }
            _ => {
                self.write_u8(0xff)?;
                self.write_u64::<LittleEndian>(n)
            }
        }
    }
}

/// Mark all types implementing `Write` as implementing the extension.
impl<W: io::Write + ?Sized> WriteLotusExt for W {}

#[cfg(test)]
mod tests {
    use super::*;

    fn compactsize(n: u64) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.write_compactsize(n).expect("writing to a vec never fails");
        bytes
    }

    #[test]
    fn compactsize_boundaries() {
        lotus_test::init();

        assert_eq!(compactsize(0), [0x00]);
        assert_eq!(compactsize(0xfc), [0xfc]);
        assert_eq!(compactsize(0xfd), [0xfd, 0xfd, 0x00]);
        assert_eq!(compactsize(0xffff), [0xfd, 0xff, 0xff]);
        assert_eq!(compactsize(0x1_0000), [0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(
            compactsize(0x1_0000_0000),
            [0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
    }
}
