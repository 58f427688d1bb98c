//! Per-category layout table.
//!
//! Every codec and the merge engine consult [`LAYOUT`] instead of carrying
//! their own per-category offsets. Row `n` describes the category whose id
//! is `n`.

use crate::{
    category::{CompatibilityLevel, FeatureCategory},
    features::{
        Bee3Features, CuttleCart3Features, EcsFeatures, GeneralFeatures, HiveFeatures,
        IntellicartFeatures, JlpFeatures, KeyboardComponentFeatures, LtoFlashFeatures,
    },
    hardware::EXTENDED_PERIPHERAL_BITS,
    incompatibility::IncompatibilityFlags,
};
use strum::EnumCount;

const LEVEL_ONLY: u32 = 0b11;
const TOLERATES: u32 = CompatibilityLevel::Tolerates.bits();
const ENHANCES: u32 = CompatibilityLevel::Enhances.bits();

/// How the merge engine post-processes the OR of two non-default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Keep the OR, then demote `Requires` to `Enhances`.
    VideoStandard,
    /// Keep the OR untouched.
    Union,
    /// Keep the OR, unless one side tolerated and the other enhanced.
    CorrectHazard,
}

/// Where a category lands in the packed hardware flag block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareSlot {
    /// Bit offset of the two level bits.
    pub level_offset: u32,
    /// Bit offset of the 10-bit flash sector count, for JLP and LTO Flash!.
    pub sector_offset: Option<u32>,
    /// Fixed bits always set alongside this category.
    pub extra_bits: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryLayout {
    pub category: FeatureCategory,
    /// Value of the "unrecognized ROM" declaration; the merge engine treats it as silence.
    pub default_value: u32,
    /// Bits a setter keeps.
    pub valid_mask: u32,
    pub merge: MergeRule,
    /// Condensed bit set when the level is `Incompatible`.
    pub incompatible_flag: Option<IncompatibilityFlags>,
    /// Condensed bit set when the level is `Enhances` (console revisions only).
    pub altered_flag: Option<IncompatibilityFlags>,
    pub hardware: Option<HardwareSlot>,
}

impl CategoryLayout {
    const fn level_only(category: FeatureCategory) -> Self {
        Self {
            category,
            default_value: TOLERATES,
            valid_mask: LEVEL_ONLY,
            merge: MergeRule::CorrectHazard,
            incompatible_flag: None,
            altered_flag: None,
            hardware: None,
        }
    }

    const fn defaults_to(mut self, value: u32) -> Self {
        self.default_value = value;
        self
    }

    const fn masked(mut self, mask: u32) -> Self {
        self.valid_mask = mask;
        self
    }

    const fn merged_by(mut self, merge: MergeRule) -> Self {
        self.merge = merge;
        self
    }

    const fn incompatible(mut self, flag: IncompatibilityFlags) -> Self {
        self.incompatible_flag = Some(flag);
        self
    }

    const fn altered(mut self, flag: IncompatibilityFlags) -> Self {
        self.altered_flag = Some(flag);
        self
    }

    const fn hardware(mut self, level_offset: u32) -> Self {
        self.hardware = Some(HardwareSlot {
            level_offset,
            sector_offset: None,
            extra_bits: 0,
        });
        self
    }

    const fn hardware_with_sectors(mut self, level_offset: u32, sector_offset: u32) -> Self {
        self.hardware = Some(HardwareSlot {
            level_offset,
            sector_offset: Some(sector_offset),
            extra_bits: 0,
        });
        self
    }

    const fn hardware_with_extra(mut self, level_offset: u32, extra_bits: u64) -> Self {
        self.hardware = Some(HardwareSlot {
            level_offset,
            sector_offset: None,
            extra_bits,
        });
        self
    }
}

use FeatureCategory as C;
use IncompatibilityFlags as F;

pub static LAYOUT: [CategoryLayout; FeatureCategory::COUNT] = [
    CategoryLayout::level_only(C::Ntsc)
        .defaults_to(ENHANCES)
        .merged_by(MergeRule::VideoStandard)
        .incompatible(F::NTSC),
    CategoryLayout::level_only(C::Pal)
        .defaults_to(ENHANCES)
        .merged_by(MergeRule::VideoStandard)
        .incompatible(F::PAL),
    CategoryLayout::level_only(C::General)
        .defaults_to(GeneralFeatures::UNRECOGNIZED_ROM.bits())
        .masked(GeneralFeatures::all().bits())
        .merged_by(MergeRule::Union),
    CategoryLayout::level_only(C::KeyboardComponent)
        .masked(KeyboardComponentFeatures::all().bits())
        .incompatible(F::KEYBOARD_COMPONENT)
        .hardware(6),
    CategoryLayout::level_only(C::SuperVideoArcade)
        .merged_by(MergeRule::Union)
        .incompatible(F::SUPER_VIDEO_ARCADE)
        .altered(F::SUPER_VIDEO_ARCADE_ALTERED),
    CategoryLayout::level_only(C::Intellivoice)
        .incompatible(F::INTELLIVOICE)
        .hardware(0),
    CategoryLayout::level_only(C::IntellivisionII)
        .incompatible(F::INTELLIVISION_II)
        .altered(F::INTELLIVISION_II_ALTERED)
        .hardware(4),
    CategoryLayout::level_only(C::Ecs)
        .masked(EcsFeatures::all().bits())
        .incompatible(F::ECS)
        .hardware(2),
    CategoryLayout::level_only(C::Tutorvision)
        .incompatible(F::TUTORVISION)
        .hardware_with_extra(8, EXTENDED_PERIPHERAL_BITS),
    CategoryLayout::level_only(C::Intellicart)
        .masked(IntellicartFeatures::all().bits())
        .incompatible(F::INTELLICART),
    CategoryLayout::level_only(C::CuttleCart3)
        .masked(CuttleCart3Features::all().bits())
        .incompatible(F::CUTTLE_CART_3),
    CategoryLayout::level_only(C::Jlp)
        .masked(JlpFeatures::all().bits())
        .incompatible(F::JLP)
        .hardware_with_sectors(14, 22),
    CategoryLayout::level_only(C::LtoFlash)
        .masked(LtoFlashFeatures::all().bits())
        .incompatible(F::LTO_FLASH)
        .hardware_with_sectors(32, 40),
    CategoryLayout::level_only(C::Bee3)
        .masked(Bee3Features::all().bits())
        .incompatible(F::BEE3),
    CategoryLayout::level_only(C::Hive)
        .masked(HiveFeatures::all().bits())
        .incompatible(F::HIVE),
];

/// Layout row for `category`.
pub fn layout(category: FeatureCategory) -> &'static CategoryLayout {
    &LAYOUT[category.index()]
}
