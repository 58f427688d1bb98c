use bitflags::bitflags;

use crate::category::FeatureCategory;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EcsFeatures: u32 {
        const COMPATIBILITY        = 0b11;
        /// Music Synthesizer keyboard.
        const SYNTHESIZER          = 1 << 2;
        const TAPE                 = 1 << 3;
        const PRINTER              = 1 << 4;
        const SERIAL_PORT_ENHANCED = 1 << 5;
        const SERIAL_PORT_REQUIRED = 1 << 6;
    }
}

category_features!(EcsFeatures, FeatureCategory::Ecs);
