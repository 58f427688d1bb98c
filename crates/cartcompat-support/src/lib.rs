//! Support-file validation for cartridge programs.
//!
//! Decides whether a program's stored ROM is usable right now, given its
//! recorded checksum, its feature declaration and the peripherals attached
//! now or in the past.

pub mod error;
pub mod settings;
pub mod storage;
pub mod validate;

pub use error::SupportError;
pub use settings::ValidationSettings;
pub use storage::{FileSystemStorage, RomChecksums, StorageAccess};
pub use validate::{
    Peripheral, PeripheralContext, ProgramRom, ProgramSupportFiles, RomDescriptor,
    SupportFileKind, SupportFileState, TargetPeripheral,
};
