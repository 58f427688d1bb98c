//! Access to the files behind a program.

use std::path::Path;

use crate::error::SupportError;

/// CRC-32 checksums of a ROM and its companion configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RomChecksums {
    pub rom: u32,
    pub config: Option<u32>,
}

pub trait StorageAccess {
    fn exists(&self, location: &Path) -> bool;

    /// Checksum the ROM at `rom` and, when given, the configuration file at
    /// `config`.
    fn checksums(&self, rom: &Path, config: Option<&Path>) -> Result<RomChecksums, SupportError>;
}

/// [`StorageAccess`] over the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemStorage;

impl FileSystemStorage {
    fn checksum_file(path: &Path) -> Result<u32, SupportError> {
        let bytes = std::fs::read(path)?;
        Ok(crc32fast::hash(&bytes))
    }
}

impl StorageAccess for FileSystemStorage {
    fn exists(&self, location: &Path) -> bool {
        location.is_file()
    }

    fn checksums(&self, rom: &Path, config: Option<&Path>) -> Result<RomChecksums, SupportError> {
        let rom = Self::checksum_file(rom)?;
        let config = config.map(Self::checksum_file).transpose()?;
        Ok(RomChecksums { rom, config })
    }
}
