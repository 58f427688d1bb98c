/// Knobs for [`ProgramSupportFiles::validate`](crate::ProgramSupportFiles::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSettings {
    /// Recompute the ROM checksum and compare it with the expected one.
    /// When off, a present ROM keeps its previous state.
    pub check_modification: bool,
    /// Also compare the companion configuration file checksum, when one is
    /// expected.
    pub verify_config_checksum: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            check_modification: true,
            verify_config_checksum: true,
        }
    }
}

impl ValidationSettings {
    /// Presence checks only; no file contents are read.
    pub fn presence_only() -> Self {
        Self {
            check_modification: false,
            ..Self::default()
        }
    }
}
