//! Support-file validation.
//!
//! A program keeps a ROM, an optional companion configuration file and a few
//! secondary files (manual, box art, overlays). [`ProgramSupportFiles`]
//! records where they live and the last [`SupportFileState`] seen for each
//! kind. Validating the ROM walks three steps:
//!
//! 1. Presence. An absent ROM is `Missing`, or `MissingWithAlternateFound`
//!    when one of the alternate locations holds a copy.
//! 2. Modification. When enabled and a checksum is expected, the ROM (and the
//!    configuration file, if it has an expected checksum) is re-read and
//!    compared. A read failure counts as modified.
//! 3. Peripherals. A ROM that is unchanged (or has no opinion yet) and needs
//!    specific hardware is refined into one of the `RequiredPeripheral*`
//!    states. When the caller knows nothing about attached hardware, the
//!    previous peripheral state is kept.
//!
//! The resulting state is always recorded.

mod peripheral;
mod state;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::SupportError,
    settings::ValidationSettings,
    storage::{RomChecksums, StorageAccess},
};

pub use peripheral::{Peripheral, PeripheralContext, ProgramRom, RomDescriptor, TargetPeripheral};
pub use state::{SupportFileKind, SupportFileState};

/// Locations and validation states of the files that make up one program.
#[derive(Debug, Clone, Default)]
pub struct ProgramSupportFiles {
    rom_location: Option<PathBuf>,
    alternate_rom_locations: Vec<PathBuf>,
    config_location: Option<PathBuf>,
    expected_config_checksum: Option<u32>,
    other_locations: HashMap<SupportFileKind, PathBuf>,
    states: HashMap<SupportFileKind, SupportFileState>,
}

impl ProgramSupportFiles {
    pub fn new(rom_location: impl Into<PathBuf>) -> Self {
        Self {
            rom_location: Some(rom_location.into()),
            ..Self::default()
        }
    }

    /// Attach a companion configuration file and, optionally, the checksum
    /// it is expected to have.
    pub fn with_config(mut self, location: impl Into<PathBuf>, checksum: Option<u32>) -> Self {
        self.config_location = Some(location.into());
        self.expected_config_checksum = checksum;
        self
    }

    /// Record the checksum the configuration file is expected to have, for
    /// example once it has been imported. Without a configuration location
    /// the ROM then validates as modified.
    pub fn set_expected_config_checksum(&mut self, checksum: Option<u32>) {
        self.expected_config_checksum = checksum;
    }

    pub fn add_alternate_rom_location(&mut self, location: impl Into<PathBuf>) {
        self.alternate_rom_locations.push(location.into());
    }

    pub fn alternate_rom_locations(&self) -> &[PathBuf] {
        &self.alternate_rom_locations
    }

    pub fn set_location(&mut self, kind: SupportFileKind, location: impl Into<PathBuf>) {
        let location = location.into();
        match kind {
            SupportFileKind::Rom => self.rom_location = Some(location),
            SupportFileKind::Config => self.config_location = Some(location),
            _ => {
                self.other_locations.insert(kind, location);
            }
        }
    }

    pub fn location(&self, kind: SupportFileKind) -> Result<&Path, SupportError> {
        let location = match kind {
            SupportFileKind::Rom => self.rom_location.as_deref(),
            SupportFileKind::Config => self.config_location.as_deref(),
            _ => self.other_locations.get(&kind).map(PathBuf::as_path),
        };
        location.ok_or(SupportError::LocationNotSet(kind))
    }

    /// Last recorded state for `kind`.
    pub fn state(&self, kind: SupportFileKind) -> SupportFileState {
        self.states.get(&kind).copied().unwrap_or_default()
    }

    pub fn set_state(&mut self, kind: SupportFileKind, state: SupportFileState) {
        self.states.insert(kind, state);
    }

    /// First alternate ROM location that currently exists.
    pub fn find_alternate<S: StorageAccess>(&self, storage: &S) -> Option<&Path> {
        self.alternate_rom_locations
            .iter()
            .map(PathBuf::as_path)
            .find(|location| storage.exists(location))
    }

    /// Checksum the ROM and, when given, the configuration file at `config`.
    pub fn refresh_checksums<S: StorageAccess>(
        &self,
        storage: &S,
        config: Option<&Path>,
    ) -> Result<RomChecksums, SupportError> {
        let rom = self.location(SupportFileKind::Rom)?;
        storage.checksums(rom, config)
    }

    /// Validate the file of `kind`, record the outcome and return it.
    ///
    /// `expected_checksum` is the ROM checksum recorded when the program was
    /// added. Kinds other than the ROM only get a presence check.
    pub fn validate<S: StorageAccess>(
        &mut self,
        kind: SupportFileKind,
        expected_checksum: Option<u32>,
        rom: &dyn ProgramRom,
        storage: &S,
        peripherals: PeripheralContext<'_>,
        settings: &ValidationSettings,
    ) -> SupportFileState {
        let previous = self.state(kind);
        let next = match kind {
            SupportFileKind::Rom => {
                self.validate_rom(previous, expected_checksum, rom, storage, peripherals, settings)
            }
            _ => self.validate_presence(kind, storage),
        };

        if next != previous {
            debug!(%kind, ?previous, ?next, "support file state changed");
        }
        self.states.insert(kind, next);
        next
    }

    fn validate_rom<S: StorageAccess>(
        &self,
        previous: SupportFileState,
        expected_checksum: Option<u32>,
        rom: &dyn ProgramRom,
        storage: &S,
        peripherals: PeripheralContext<'_>,
        settings: &ValidationSettings,
    ) -> SupportFileState {
        let present = self
            .rom_location
            .as_deref()
            .is_some_and(|location| storage.exists(location));
        if !present {
            return if self.find_alternate(storage).is_some() {
                SupportFileState::MissingWithAlternateFound
            } else {
                SupportFileState::Missing
            };
        }

        // Peripheral states are re-derived below, and a file that came back
        // has no state worth keeping.
        let start = if previous.is_missing() || previous.is_peripheral_derived() {
            SupportFileState::None
        } else {
            previous
        };
        let state = match expected_checksum {
            Some(expected) if settings.check_modification => {
                self.check_unchanged(expected, storage, settings)
            }
            _ => start,
        };

        let refinable = matches!(
            state,
            SupportFileState::PresentAndUnchanged | SupportFileState::None
        );
        if refinable && rom.requires_specific_peripheral() {
            let target = rom.target_peripheral().unwrap_or(TargetPeripheral::Any);
            refine_for_peripheral(&target, rom, peripherals, previous)
        } else {
            state
        }
    }

    fn check_unchanged<S: StorageAccess>(
        &self,
        expected: u32,
        storage: &S,
        settings: &ValidationSettings,
    ) -> SupportFileState {
        let expected_config = self
            .expected_config_checksum
            .filter(|_| settings.verify_config_checksum);
        let config_location = expected_config.and(self.config_location.as_deref());

        match self.refresh_checksums(storage, config_location) {
            Ok(checksums) => {
                let rom_matches = checksums.rom == expected;
                let config_matches =
                    expected_config.is_none_or(|config| checksums.config == Some(config));
                if rom_matches && config_matches {
                    SupportFileState::PresentAndUnchanged
                } else {
                    SupportFileState::PresentButModified
                }
            }
            Err(err) => {
                warn!(%err, "could not refresh ROM checksum; treating as modified");
                SupportFileState::PresentButModified
            }
        }
    }

    fn validate_presence<S: StorageAccess>(
        &self,
        kind: SupportFileKind,
        storage: &S,
    ) -> SupportFileState {
        match self.location(kind) {
            Ok(location) if storage.exists(location) => SupportFileState::PresentAndUnchanged,
            Ok(_) => SupportFileState::Missing,
            Err(_) => SupportFileState::None,
        }
    }
}

fn refine_for_peripheral(
    target: &TargetPeripheral,
    rom: &dyn ProgramRom,
    peripherals: PeripheralContext<'_>,
    previous: SupportFileState,
) -> SupportFileState {
    let from_history = || {
        if any_accepts(target, peripherals.history, rom) {
            SupportFileState::RequiredPeripheralNotAttached
        } else {
            SupportFileState::RequiredPeripheralUnknown
        }
    };

    match peripherals.attached {
        Some(attached) if !attached.is_empty() => {
            if any_accepts(target, attached, rom) {
                SupportFileState::RequiredPeripheralAvailable
            } else {
                SupportFileState::RequiredPeripheralIncompatible
            }
        }
        Some(_) => from_history(),
        None if previous.is_peripheral_derived() => previous,
        None => from_history(),
    }
}

fn any_accepts(
    target: &TargetPeripheral,
    peripherals: &[&dyn Peripheral],
    rom: &dyn ProgramRom,
) -> bool {
    peripherals
        .iter()
        .any(|peripheral| target.accepts(*peripheral, rom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RomChecksums;
    use std::{cell::Cell, collections::HashSet};

    #[derive(Default)]
    struct MockStorage {
        present: HashSet<PathBuf>,
        checksums: RomChecksums,
        fail: bool,
        reads: Cell<usize>,
    }

    impl MockStorage {
        fn with(paths: &[&str], rom: u32) -> Self {
            Self {
                present: paths.iter().map(PathBuf::from).collect(),
                checksums: RomChecksums { rom, config: None },
                ..Self::default()
            }
        }
    }

    impl StorageAccess for MockStorage {
        fn exists(&self, location: &Path) -> bool {
            self.present.contains(location)
        }

        fn checksums(
            &self,
            _rom: &Path,
            config: Option<&Path>,
        ) -> Result<RomChecksums, SupportError> {
            self.reads.set(self.reads.get() + 1);
            if self.fail {
                return Err(std::io::Error::other("device unplugged").into());
            }
            Ok(RomChecksums {
                rom: self.checksums.rom,
                config: config.and(self.checksums.config),
            })
        }
    }

    fn plain_rom() -> RomDescriptor {
        RomDescriptor::default()
    }

    fn validate_rom(
        files: &mut ProgramSupportFiles,
        storage: &MockStorage,
        expected: Option<u32>,
    ) -> SupportFileState {
        files.validate(
            SupportFileKind::Rom,
            expected,
            &plain_rom(),
            storage,
            PeripheralContext::default(),
            &ValidationSettings::default(),
        )
    }

    #[test]
    fn missing_without_alternate() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        files.add_alternate_rom_location("/backup/game.bin");
        let storage = MockStorage::with(&[], 0);
        assert_eq!(
            validate_rom(&mut files, &storage, Some(1)),
            SupportFileState::Missing
        );
        assert_eq!(storage.reads.get(), 0);
    }

    #[test]
    fn unchanged_and_modified() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        let storage = MockStorage::with(&["/roms/game.bin"], 0xCAFE);

        assert_eq!(
            validate_rom(&mut files, &storage, Some(0xCAFE)),
            SupportFileState::PresentAndUnchanged
        );
        assert_eq!(
            validate_rom(&mut files, &storage, Some(0xBEEF)),
            SupportFileState::PresentButModified
        );
        assert_eq!(
            files.state(SupportFileKind::Rom),
            SupportFileState::PresentButModified
        );
    }

    #[test]
    fn read_failure_is_modified() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        let storage = MockStorage {
            fail: true,
            ..MockStorage::with(&["/roms/game.bin"], 0)
        };
        assert_eq!(
            validate_rom(&mut files, &storage, Some(0)),
            SupportFileState::PresentButModified
        );
    }

    #[test]
    fn config_checksum_participates_when_enabled() {
        let mut files =
            ProgramSupportFiles::new("/roms/game.bin").with_config("/roms/game.cfg", Some(7));
        let storage = MockStorage {
            checksums: RomChecksums {
                rom: 1,
                config: Some(8),
            },
            ..MockStorage::with(&["/roms/game.bin", "/roms/game.cfg"], 1)
        };

        assert_eq!(
            validate_rom(&mut files, &storage, Some(1)),
            SupportFileState::PresentButModified
        );

        let lenient = ValidationSettings {
            verify_config_checksum: false,
            ..ValidationSettings::default()
        };
        let state = files.validate(
            SupportFileKind::Rom,
            Some(1),
            &plain_rom(),
            &storage,
            PeripheralContext::default(),
            &lenient,
        );
        assert_eq!(state, SupportFileState::PresentAndUnchanged);
    }

    #[test]
    fn expected_config_without_location_is_modified() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        files.set_expected_config_checksum(Some(7));
        let storage = MockStorage {
            checksums: RomChecksums {
                rom: 1,
                config: Some(7),
            },
            ..MockStorage::with(&["/roms/game.bin"], 1)
        };

        assert_eq!(
            validate_rom(&mut files, &storage, Some(1)),
            SupportFileState::PresentButModified
        );

        files.set_expected_config_checksum(None);
        assert_eq!(
            validate_rom(&mut files, &storage, Some(1)),
            SupportFileState::PresentAndUnchanged
        );
    }

    #[test]
    fn presence_only_keeps_previous_state() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        files.set_state(SupportFileKind::Rom, SupportFileState::New);
        let storage = MockStorage::with(&["/roms/game.bin"], 0);

        let state = files.validate(
            SupportFileKind::Rom,
            Some(1),
            &plain_rom(),
            &storage,
            PeripheralContext::default(),
            &ValidationSettings::presence_only(),
        );
        assert_eq!(state, SupportFileState::New);
        assert_eq!(storage.reads.get(), 0);
    }

    #[test]
    fn returning_file_restarts_from_none() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        files.set_state(SupportFileKind::Rom, SupportFileState::Missing);
        let storage = MockStorage::with(&["/roms/game.bin"], 0);

        assert_eq!(
            validate_rom(&mut files, &storage, None),
            SupportFileState::None
        );
    }

    #[test]
    fn secondary_kinds_only_check_presence() {
        let mut files = ProgramSupportFiles::new("/roms/game.bin");
        files.set_location(SupportFileKind::ManualText, "/roms/game.txt");
        files.set_location(SupportFileKind::BoxArt, "/roms/box.png");
        let storage = MockStorage::with(&["/roms/game.txt"], 0);

        let mut check = |kind| {
            files.validate(
                kind,
                None,
                &plain_rom(),
                &storage,
                PeripheralContext::default(),
                &ValidationSettings::default(),
            )
        };
        assert_eq!(
            check(SupportFileKind::ManualText),
            SupportFileState::PresentAndUnchanged
        );
        assert_eq!(check(SupportFileKind::BoxArt), SupportFileState::Missing);
        assert_eq!(check(SupportFileKind::Overlay), SupportFileState::None);
    }

    #[test]
    fn unset_location_is_an_error() {
        let files = ProgramSupportFiles::default();
        assert!(matches!(
            files.location(SupportFileKind::Rom),
            Err(SupportError::LocationNotSet(SupportFileKind::Rom))
        ));
        let storage = MockStorage::with(&[], 0);
        assert!(files.refresh_checksums(&storage, None).is_err());
    }
}
