use strum::{Display, EnumIter};

/// Outcome of validating one support file of a program.
///
/// One state is kept per (program, file kind) pair and survives between
/// validation calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportFileState {
    /// Never validated, or nothing to report.
    #[default]
    None,
    /// Newly added and not validated yet.
    New,
    /// The file is not at its recorded location.
    Missing,
    /// The file is not at its recorded location, but one of its alternates is.
    MissingWithAlternateFound,
    PresentAndUnchanged,
    /// Present, but the contents no longer match the recorded checksum, or
    /// the checksum could not be recomputed.
    PresentButModified,
    /// The program needs specific hardware and a compatible unit is attached.
    RequiredPeripheralAvailable,
    /// The program needs specific hardware and none of the attached units
    /// can run it.
    RequiredPeripheralIncompatible,
    /// The program needs specific hardware that is not attached right now,
    /// but a compatible unit has been attached before.
    RequiredPeripheralNotAttached,
    /// The program needs specific hardware and nothing is known about it.
    RequiredPeripheralUnknown,
}

impl SupportFileState {
    /// States produced by the peripheral refinement step.
    pub fn is_peripheral_derived(self) -> bool {
        matches!(
            self,
            Self::RequiredPeripheralAvailable
                | Self::RequiredPeripheralIncompatible
                | Self::RequiredPeripheralNotAttached
                | Self::RequiredPeripheralUnknown
        )
    }

    /// Whether the file can be used right now.
    ///
    /// `RequiredPeripheralUnknown` and `RequiredPeripheralIncompatible` are
    /// not runnable, but they are not errors either; the recorded state must
    /// be kept.
    pub fn is_runnable(self) -> bool {
        matches!(
            self,
            Self::None
                | Self::New
                | Self::PresentAndUnchanged
                | Self::RequiredPeripheralAvailable
        )
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing | Self::MissingWithAlternateFound)
    }
}

/// The kinds of file a program keeps alongside its ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SupportFileKind {
    Rom,
    /// Companion configuration file describing the ROM's memory map.
    Config,
    ManualText,
    ManualCover,
    BoxArt,
    Label,
    Overlay,
    SaveData,
}
