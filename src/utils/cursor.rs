use std::io::BufRead;
use std::io::Cursor;

use crate::{Error, Result};

pub trait EasyRead {
    fn read_until_checked(&mut self, byte: u8) -> Result<Vec<u8>>;
}

impl<T: AsRef<[u8]>> EasyRead for Cursor<T> {
    /// This function is just an abstraction to simplify other functions since this process is used
    /// a lot when decoding objects.
    ///
    /// It already handles the errors (not reading until the expected byte or not reading at all)
    /// and reports them as a corrupt object, so it can just be handled with the `?` operator.
    fn read_until_checked(&mut self, byte: u8) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        BufRead::read_until(self, byte, &mut buf)?;
        if buf.pop() != Some(byte) {
            return Err(Error::CorruptObject(format!(
                "expected byte {:#04x} before input ended",
                byte
            )));
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::EasyRead;
    use crate::Error;

    #[test]
    fn test_read_until_checked() {
        let mut cursor = Cursor::new(b"blob 6\0hello\n");
        assert_eq!(cursor.read_until_checked(b' ').unwrap(), b"blob");
        assert_eq!(cursor.read_until_checked(b'\0').unwrap(), b"6");
    }

    #[test]
    fn test_read_until_checked_missing_byte() {
        let mut cursor = Cursor::new(b"no null byte here");
        assert!(matches!(
            cursor.read_until_checked(b'\0'),
            Err(Error::CorruptObject(_))
        ));
    }
}
