use cartcompat_core::{CompatibilityLevel, FeatureCategory, FeatureDeclaration};

/// A piece of hardware a program can run on, such as a flash cartridge.
pub trait Peripheral {
    /// Identifier of this particular unit.
    fn unique_id(&self) -> &str;

    /// Whether this unit can run `rom`.
    fn is_compatible(&self, rom: &dyn ProgramRom) -> bool;
}

/// Which peripheral a program has been bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPeripheral {
    /// Any compatible unit will do.
    Any,
    /// Only the unit with this identifier.
    Unique(String),
}

impl TargetPeripheral {
    /// Whether `peripheral` satisfies this target for `rom`.
    pub fn accepts(&self, peripheral: &dyn Peripheral, rom: &dyn ProgramRom) -> bool {
        let id_matches = match self {
            Self::Any => true,
            Self::Unique(id) => peripheral.unique_id() == id,
        };
        id_matches && peripheral.is_compatible(rom)
    }
}

/// The view of a program's ROM that validation needs.
pub trait ProgramRom {
    fn features(&self) -> &FeatureDeclaration;

    /// The peripheral this ROM must run on, if it needs one at all.
    fn target_peripheral(&self) -> Option<TargetPeripheral>;

    fn requires_specific_peripheral(&self) -> bool {
        self.target_peripheral().is_some()
    }
}

/// A ROM described by its merged features and an optional binding to one
/// peripheral unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RomDescriptor {
    pub features: FeatureDeclaration,
    pub target_id: Option<String>,
}

impl RomDescriptor {
    pub fn new(features: FeatureDeclaration) -> Self {
        Self {
            features,
            target_id: None,
        }
    }

    pub fn bound_to(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }
}

impl ProgramRom for RomDescriptor {
    fn features(&self) -> &FeatureDeclaration {
        &self.features
    }

    fn target_peripheral(&self) -> Option<TargetPeripheral> {
        match &self.target_id {
            Some(id) => Some(TargetPeripheral::Unique(id.clone())),
            None if self.features.level(FeatureCategory::LtoFlash)
                == CompatibilityLevel::Requires =>
            {
                Some(TargetPeripheral::Any)
            }
            None => None,
        }
    }
}

/// Peripheral information handed to one validation call.
#[derive(Clone, Copy, Default)]
pub struct PeripheralContext<'a> {
    /// Units attached right now. `None` means nothing is known, which is not
    /// the same as an empty list.
    pub attached: Option<&'a [&'a dyn Peripheral]>,
    /// Every unit that has ever been attached.
    pub history: &'a [&'a dyn Peripheral],
}

impl<'a> PeripheralContext<'a> {
    pub fn unknown(history: &'a [&'a dyn Peripheral]) -> Self {
        Self {
            attached: None,
            history,
        }
    }

    pub fn attached(attached: &'a [&'a dyn Peripheral], history: &'a [&'a dyn Peripheral]) -> Self {
        Self {
            attached: Some(attached),
            history,
        }
    }
}
