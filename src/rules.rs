//! Per-dimension compatibility rule tables.
//!
//! Each dimension is an ordered table of (predicate, effect) rows walked in
//! sequence; the first matching row wins and later rows are not evaluated.
//! Row order is load-bearing: the generation markers are short substrings
//! ("1" matches inside "11"), so priority is encoded by position, not by
//! marker precision.

use crate::verdict::CompatibilityLevel;

/// Brand tokens the CPU tables key on. Comparison is exact-case: a
/// submitted brand of "intel" selects no table.
pub const INTEL_BRAND: &str = "Intel";
pub const AMD_BRAND: &str = "AMD";

/// Verdict state before any rule fires.
pub const DEFAULT_LEVEL: CompatibilityLevel = CompatibilityLevel::Limited;
pub const DEFAULT_VERSIONS: &[&str] = &["macOS Monterey", "macOS Big Sur"];
pub const DEFAULT_SUMMARY: &str =
    "Based on rule-based analysis, your hardware may work with some configuration.";

/// Appended after every evaluation, in this order, regardless of which
/// rules matched.
pub const GENERAL_TIPS: &[&str] = &[
    "Follow a detailed guide for your specific hardware combination",
    "Use OpenCore as your bootloader for the best compatibility",
];

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

/// One row of a CPU table. `series` gates the row (any-of), `generations`
/// selects it (any-of); an empty marker list always passes.
pub struct CpuRule {
    pub series: &'static [&'static str],
    pub generations: &'static [&'static str],
    pub level: CompatibilityLevel,
    /// Overwrites the recommended versions when set; `None` keeps whatever
    /// is already in the verdict.
    pub versions: Option<&'static [&'static str]>,
    pub issue: Option<&'static str>,
    pub summary: &'static str,
}

impl CpuRule {
    pub fn matches(&self, model: &str) -> bool {
        (self.series.is_empty() || contains_any(model, self.series))
            && (self.generations.is_empty() || contains_any(model, self.generations))
    }
}

pub const INTEL_RULES: &[CpuRule] = &[
    CpuRule {
        series: &["i5", "i7", "i9"],
        generations: &["10", "11", "12", "8", "9"],
        level: CompatibilityLevel::Good,
        versions: Some(&["macOS Sonoma", "macOS Ventura", "macOS Monterey"]),
        issue: None,
        summary: "Your Intel CPU is well-supported in Hackintosh builds.",
    },
    CpuRule {
        series: &["i5", "i7", "i9"],
        generations: &["6", "7"],
        level: CompatibilityLevel::Good,
        versions: Some(&["macOS Monterey", "macOS Big Sur", "macOS Catalina"]),
        issue: None,
        summary: "Your Intel CPU is supported, but newer macOS versions may have limitations.",
    },
    CpuRule {
        series: &["i5", "i7", "i9"],
        generations: &["3", "4", "5"],
        level: CompatibilityLevel::Limited,
        versions: Some(&["macOS Catalina", "macOS Mojave", "macOS High Sierra"]),
        issue: Some("Older Intel CPUs have limited compatibility with newer macOS versions"),
        summary: "Your CPU is aging but can still work with older macOS versions.",
    },
];

// The unconditional final row catches every non-Ryzen model; Ryzen models
// are consumed by the first two rows before it is reached.
pub const AMD_RULES: &[CpuRule] = &[
    CpuRule {
        series: &["ryzen"],
        generations: &["5", "7", "9"],
        level: CompatibilityLevel::Good,
        versions: Some(&["macOS Sonoma", "macOS Ventura", "macOS Monterey"]),
        issue: Some("Some applications that use Apple's Hypervisor framework may not work correctly"),
        summary: "Your Ryzen CPU is well-supported, but some virtualization features may not work.",
    },
    CpuRule {
        series: &["ryzen"],
        generations: &[],
        level: CompatibilityLevel::Limited,
        versions: None,
        issue: Some("Older AMD CPUs require special patches"),
        summary: "Your AMD CPU will need specific patches for compatibility.",
    },
    CpuRule {
        series: &[],
        generations: &[],
        level: CompatibilityLevel::Poor,
        versions: None,
        issue: Some("Pre-Ryzen AMD CPUs have very limited macOS support"),
        summary: "Your AMD CPU may not be suitable for a Hackintosh build.",
    },
];

/// CPU table for a submitted brand string, if any.
pub fn cpu_rules_for_brand(brand: &str) -> Option<&'static [CpuRule]> {
    match brand {
        INTEL_BRAND => Some(INTEL_RULES),
        AMD_BRAND => Some(AMD_RULES),
        _ => None,
    }
}

/// How a GPU rule touches the compatibility level written by earlier passes.
#[derive(Debug, Clone, Copy)]
pub enum LevelAction {
    /// Overwrite unconditionally, whatever the CPU pass concluded.
    Force(CompatibilityLevel),
    /// Raise `from` to `to`; any other current level is left untouched.
    Raise {
        from: CompatibilityLevel,
        to: CompatibilityLevel,
    },
}

/// One row of the GPU table. `markers` gates the row, `qualifiers` is a
/// secondary any-of test (empty always passes).
pub struct GpuRule {
    pub markers: &'static [&'static str],
    pub qualifiers: &'static [&'static str],
    pub action: LevelAction,
    pub issue: Option<&'static str>,
    pub tip: Option<&'static str>,
    pub summary: Option<&'static str>,
}

impl GpuRule {
    pub fn matches(&self, graphics_card: &str) -> bool {
        contains_any(graphics_card, self.markers)
            && (self.qualifiers.is_empty() || contains_any(graphics_card, self.qualifiers))
    }
}

// Radeon before NVIDIA: a description matching both takes the Radeon row.
pub const GPU_RULES: &[GpuRule] = &[
    GpuRule {
        markers: &["rx 5", "rx 6", "rx 580", "rx 570", "rx 560", "rx 550"],
        qualifiers: &[],
        action: LevelAction::Raise {
            from: CompatibilityLevel::Poor,
            to: CompatibilityLevel::Limited,
        },
        issue: None,
        tip: Some("AMD Radeon cards offer native support in macOS"),
        summary: None,
    },
    GpuRule {
        markers: &["nvidia"],
        qualifiers: &["gtx 10", "rtx"],
        action: LevelAction::Force(CompatibilityLevel::Poor),
        issue: Some("Modern NVIDIA GPUs are not supported in recent macOS versions"),
        tip: Some("Consider replacing your NVIDIA GPU with an AMD card for better compatibility"),
        summary: Some("Your NVIDIA GPU is not compatible with recent macOS versions."),
    },
    GpuRule {
        markers: &["nvidia"],
        qualifiers: &[],
        action: LevelAction::Force(CompatibilityLevel::Limited),
        issue: Some("Older NVIDIA GPUs require additional drivers and are limited to macOS High Sierra"),
        tip: Some("Install NVIDIA web drivers for older macOS versions"),
        summary: None,
    },
];

/// One row of the motherboard table. Tip-only; the board never moves the
/// compatibility level.
pub struct BoardRule {
    pub markers: &'static [&'static str],
    pub tip: &'static str,
}

impl BoardRule {
    pub fn matches(&self, motherboard: &str) -> bool {
        contains_any(motherboard, self.markers)
    }
}

pub const BOARD_RULES: &[BoardRule] = &[
    BoardRule {
        markers: &["z390", "z490", "z590", "b450", "b550", "x570"],
        tip: "Your motherboard is commonly used in Hackintosh builds",
    },
    BoardRule {
        markers: &["h110", "h310", "b360"],
        tip: "Your motherboard should work but may need specific BIOS settings",
    },
];
