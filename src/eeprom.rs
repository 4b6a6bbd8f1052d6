//! Bounds-checked access to a small word-addressed EEPROM, such as the 2KiB block built into
//! many Cortex-M4 parts, for keeping settings like contrast across power cycles.

use core::convert::TryFrom;
use core::fmt;

/// Capacity of the store in 32-bit words.
pub const EEPROM_WORDS: u32 = 512;

/// The raw EEPROM backend. Addresses are byte offsets of 32-bit aligned words; the caller has
/// already checked that the access lies inside the store.
pub trait WordStorage {
    type Error;

    fn program(&mut self, byte_address: u32, words: &[u32]) -> Result<(), Self::Error>;
    fn read(&mut self, byte_address: u32, words: &mut [u32]) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EepromError<E> {
    /// The first word address lies past the end of the store. Nothing was accessed.
    InvalidAddress,
    /// The access starts inside the store but runs past its end. Nothing was accessed.
    InvalidLength,
    /// The backend failed.
    Storage(E),
}

impl<E: fmt::Debug> fmt::Display for EepromError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EepromError::InvalidAddress => f.write_str("EEPROM word address out of range"),
            EepromError::InvalidLength => f.write_str("EEPROM access runs past the end"),
            EepromError::Storage(e) => write!(f, "EEPROM storage error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for EepromError<E> {}

/// A word store of `EEPROM_WORDS` words on top of a `WordStorage` backend.
pub struct Eeprom<S> {
    storage: S,
}

impl<S> Eeprom<S>
where
    S: WordStorage,
{
    pub fn new(storage: S) -> Self {
        Eeprom { storage }
    }

    /// Program `words` into the store starting at `word_address`.
    pub fn write(&mut self, word_address: u32, words: &[u32]) -> Result<(), EepromError<S::Error>> {
        check(word_address, words.len())?;
        self.storage
            .program(word_address << 2, words)
            .map_err(EepromError::Storage)
    }

    /// Fill `words` from the store starting at `word_address`.
    pub fn read(
        &mut self,
        word_address: u32,
        words: &mut [u32],
    ) -> Result<(), EepromError<S::Error>> {
        check(word_address, words.len())?;
        self.storage
            .read(word_address << 2, words)
            .map_err(EepromError::Storage)
    }

    /// Give back the backend.
    pub fn release(self) -> S {
        self.storage
    }
}

fn check<E>(word_address: u32, len: usize) -> Result<(), EepromError<E>> {
    if word_address >= EEPROM_WORDS {
        trace!("EEPROM access rejected: address {}", word_address);
        return Err(EepromError::InvalidAddress);
    }
    let end = u32::try_from(len)
        .ok()
        .and_then(|len| word_address.checked_add(len));
    match end {
        Some(end) if end <= EEPROM_WORDS => Ok(()),
        _ => {
            trace!("EEPROM access rejected: {} words at {}", len, word_address);
            Err(EepromError::InvalidLength)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct MemoryStorage {
        bytes: Vec<u8>,
        accesses: Vec<(u32, usize)>,
    }

    impl MemoryStorage {
        fn new() -> Self {
            MemoryStorage {
                bytes: vec![0xFF; EEPROM_WORDS as usize * 4],
                accesses: Vec::new(),
            }
        }
    }

    impl WordStorage for MemoryStorage {
        type Error = Infallible;

        fn program(&mut self, byte_address: u32, words: &[u32]) -> Result<(), Self::Error> {
            self.accesses.push((byte_address, words.len()));
            for (i, word) in words.iter().enumerate() {
                let at = byte_address as usize + i * 4;
                self.bytes[at..at + 4].copy_from_slice(&word.to_le_bytes());
            }
            Ok(())
        }

        fn read(&mut self, byte_address: u32, words: &mut [u32]) -> Result<(), Self::Error> {
            self.accesses.push((byte_address, words.len()));
            for (i, word) in words.iter_mut().enumerate() {
                let at = byte_address as usize + i * 4;
                let mut le = [0; 4];
                le.copy_from_slice(&self.bytes[at..at + 4]);
                *word = u32::from_le_bytes(le);
            }
            Ok(())
        }
    }

    struct FailingStorage;

    impl WordStorage for FailingStorage {
        type Error = &'static str;

        fn program(&mut self, _: u32, _: &[u32]) -> Result<(), Self::Error> {
            Err("program failed")
        }

        fn read(&mut self, _: u32, _: &mut [u32]) -> Result<(), Self::Error> {
            Err("read failed")
        }
    }

    #[test]
    fn write_then_read() {
        let mut eeprom = Eeprom::new(MemoryStorage::new());
        eeprom.write(10, &[0xDEAD_BEEF, 42]).unwrap();
        let mut words = [0; 3];
        eeprom.read(9, &mut words).unwrap();
        assert_eq!(words, [0xFFFF_FFFF, 0xDEAD_BEEF, 42]);
        assert_eq!(eeprom.release().accesses, vec![(40, 2), (36, 3)]);
    }

    #[test]
    fn last_word() {
        let mut eeprom = Eeprom::new(MemoryStorage::new());
        eeprom.write(511, &[7]).unwrap();
        let mut word = [0];
        eeprom.read(511, &mut word).unwrap();
        assert_eq!(word, [7]);
        eeprom.write(0, &[0; 512]).unwrap();
    }

    #[test]
    fn bounds() {
        let mut eeprom = Eeprom::new(MemoryStorage::new());
        assert_eq!(eeprom.write(512, &[1]), Err(EepromError::InvalidAddress));
        assert_eq!(eeprom.write(u32::MAX, &[]), Err(EepromError::InvalidAddress));
        assert_eq!(eeprom.write(511, &[1, 2]), Err(EepromError::InvalidLength));
        assert_eq!(eeprom.read(0, &mut [0; 513]), Err(EepromError::InvalidLength));
        assert!(eeprom.release().accesses.is_empty());
    }

    #[test]
    fn storage_errors_propagate() {
        let mut eeprom = Eeprom::new(FailingStorage);
        assert_eq!(eeprom.write(0, &[1]), Err(EepromError::Storage("program failed")));
        assert_eq!(eeprom.read(0, &mut [0]), Err(EepromError::Storage("read failed")));
    }
}
