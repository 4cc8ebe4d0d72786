use crate::hardware::HardwareSpec;
use crate::normalize::NormalizedSpec;
use crate::rules::{
    cpu_rules_for_brand, LevelAction, BOARD_RULES, DEFAULT_LEVEL, DEFAULT_SUMMARY,
    DEFAULT_VERSIONS, GENERAL_TIPS, GPU_RULES,
};
use crate::verdict::Verdict;

/// Deterministic, rule-table-driven compatibility evaluator.
///
/// Evaluation is a pure function of the four input strings: seed the
/// default verdict, run the CPU, GPU and motherboard tables in that fixed
/// order, then append the general tips. Later passes may overwrite the
/// level and summary written by earlier ones; the GPU pass has final
/// authority over the CPU pass.
pub struct RuleBasedEvaluator;

impl RuleBasedEvaluator {
    pub fn new() -> Self {
        RuleBasedEvaluator
    }

    pub fn evaluate(&self, spec: &HardwareSpec) -> Verdict {
        let text = NormalizedSpec::from_spec(spec);

        let mut verdict = Verdict {
            compatibility: DEFAULT_LEVEL,
            issues: Vec::new(),
            recommended_versions: DEFAULT_VERSIONS.iter().map(|v| v.to_string()).collect(),
            tips: Vec::new(),
            summary: DEFAULT_SUMMARY.to_string(),
        };

        self.apply_cpu_rules(&spec.cpu_brand, &text, &mut verdict);
        self.apply_gpu_rules(&text, &mut verdict);
        self.apply_board_rules(&text, &mut verdict);

        verdict
            .tips
            .extend(GENERAL_TIPS.iter().map(|tip| tip.to_string()));

        verdict
    }

    fn apply_cpu_rules(&self, brand: &str, text: &NormalizedSpec, verdict: &mut Verdict) {
        let Some(rules) = cpu_rules_for_brand(brand) else {
            log::debug!("no CPU rule table for brand {brand:?}, keeping defaults");
            return;
        };

        let Some(rule) = rules.iter().find(|rule| rule.matches(&text.cpu_model)) else {
            log::debug!("no {brand} CPU rule matched {:?}", text.cpu_model);
            return;
        };

        log::debug!("CPU rule matched for {brand}: {}", rule.summary);
        verdict.compatibility = rule.level;
        if let Some(versions) = rule.versions {
            verdict.recommended_versions = versions.iter().map(|v| v.to_string()).collect();
        }
        if let Some(issue) = rule.issue {
            verdict.issues.push(issue.to_string());
        }
        verdict.summary = rule.summary.to_string();
    }

    fn apply_gpu_rules(&self, text: &NormalizedSpec, verdict: &mut Verdict) {
        let Some(rule) = GPU_RULES
            .iter()
            .find(|rule| rule.matches(&text.graphics_card))
        else {
            log::debug!("no GPU rule matched {:?}", text.graphics_card);
            return;
        };

        match rule.action {
            LevelAction::Force(level) => {
                log::debug!("GPU rule forces level {level}");
                verdict.compatibility = level;
            }
            LevelAction::Raise { from, to } => {
                if verdict.compatibility == from {
                    log::debug!("GPU rule raises level {from} to {to}");
                    verdict.compatibility = to;
                }
            }
        }
        if let Some(issue) = rule.issue {
            verdict.issues.push(issue.to_string());
        }
        if let Some(tip) = rule.tip {
            verdict.tips.push(tip.to_string());
        }
        if let Some(summary) = rule.summary {
            verdict.summary = summary.to_string();
        }
    }

    fn apply_board_rules(&self, text: &NormalizedSpec, verdict: &mut Verdict) {
        if let Some(rule) = BOARD_RULES
            .iter()
            .find(|rule| rule.matches(&text.motherboard))
        {
            verdict.tips.push(rule.tip.to_string());
        }
    }
}

impl Default for RuleBasedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::CompatibilityLevel;

    fn evaluate(brand: &str, model: &str, board: &str, gpu: &str) -> Verdict {
        RuleBasedEvaluator::new().evaluate(&HardwareSpec::new(brand, model, board, gpu))
    }

    fn assert_general_tips_last(verdict: &Verdict) {
        let len = verdict.tips.len();
        assert!(len >= 2);
        assert_eq!(verdict.tips[len - 2], GENERAL_TIPS[0]);
        assert_eq!(verdict.tips[len - 1], GENERAL_TIPS[1]);
    }

    #[test]
    fn test_unmatched_input_yields_default_verdict() {
        let verdict = evaluate("VIA", "nano x2", "some board", "some gpu");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Limited);
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Monterey", "macOS Big Sur"]
        );
        assert!(verdict.issues.is_empty());
        assert_eq!(verdict.summary, DEFAULT_SUMMARY);
        assert_general_tips_last(&verdict);
    }

    #[test]
    fn test_empty_input_yields_default_verdict() {
        let verdict = evaluate("", "", "", "");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Limited);
        assert!(!verdict.recommended_versions.is_empty());
        assert_eq!(verdict.tips.len(), 2);
        assert_general_tips_last(&verdict);
    }

    #[test]
    fn test_modern_intel_core_build() {
        let verdict = evaluate("Intel", "i7-12700K", "Z690 Aorus Elite", "RX 6800 XT");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Good);
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Sonoma", "macOS Ventura", "macOS Monterey"]
        );
        assert!(verdict.summary.contains("well-supported"));
        assert_eq!(
            verdict.tips[0],
            "AMD Radeon cards offer native support in macOS"
        );
        assert_general_tips_last(&verdict);
    }

    #[test]
    fn test_sixth_gen_intel_gets_older_versions() {
        let verdict = evaluate("Intel", "i7-6700K", "generic", "generic");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Good);
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Monterey", "macOS Big Sur", "macOS Catalina"]
        );
    }

    #[test]
    fn test_digit_markers_match_anywhere_in_the_model() {
        // "3570" carries a "7", which satisfies the 6/7 row before the
        // 3/4/5 row is ever consulted. Coarse, and preserved.
        let verdict = evaluate("Intel", "i5-3570", "generic", "generic");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Good);
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Monterey", "macOS Big Sur", "macOS Catalina"]
        );
    }

    #[test]
    fn test_aging_intel_core_is_limited_with_issue() {
        let verdict = evaluate("Intel", "i5-4440", "generic", "generic");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Limited);
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Catalina", "macOS Mojave", "macOS High Sierra"]
        );
        assert_eq!(
            verdict.issues,
            vec!["Older Intel CPUs have limited compatibility with newer macOS versions"]
        );
    }

    #[test]
    fn test_non_core_intel_keeps_defaults() {
        let verdict = evaluate("Intel", "Xeon E3-1230 v2", "generic", "generic");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Limited);
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Monterey", "macOS Big Sur"]
        );
        assert_eq!(verdict.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn test_ryzen_build_flags_virtualization() {
        let verdict = evaluate("AMD", "Ryzen 5 3600", "B450 Tomahawk", "RX 570");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Good);
        assert_eq!(
            verdict.issues,
            vec!["Some applications that use Apple's Hypervisor framework may not work correctly"]
        );
        assert!(verdict.summary.contains("virtualization"));
    }

    #[test]
    fn test_pre_ryzen_amd_is_poor() {
        let verdict = evaluate("AMD", "FX-8350", "generic", "generic");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Poor);
        assert_eq!(
            verdict.issues,
            vec!["Pre-Ryzen AMD CPUs have very limited macOS support"]
        );
        // No CPU rule overwrote the versions, so the default seed stands.
        assert_eq!(
            verdict.recommended_versions,
            vec!["macOS Monterey", "macOS Big Sur"]
        );
    }

    #[test]
    fn test_case_insensitive_model_matching() {
        let upper = evaluate("Intel", "Intel Core i7-12700K", "Z490", "RX 580");
        let lower = evaluate("Intel", "intel core i7-12700k", "z490", "rx 580");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_brand_comparison_is_exact_case() {
        let exact = evaluate("Intel", "i9-10900K", "generic", "generic");
        assert_eq!(exact.compatibility, CompatibilityLevel::Good);

        let lowercase = evaluate("intel", "i9-10900K", "generic", "generic");
        assert_eq!(lowercase.compatibility, CompatibilityLevel::Limited);
        assert_eq!(lowercase.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn test_modern_nvidia_overrides_good_cpu() {
        let verdict = evaluate("Intel", "i9-12900k", "z490", "RTX 4090");
        // "RTX 4090" alone lacks the "nvidia" marker; spell the vendor out.
        assert_eq!(verdict.compatibility, CompatibilityLevel::Good);

        let verdict = evaluate("Intel", "i9-12900k", "z490", "NVIDIA RTX 4090");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Poor);
        assert_eq!(
            verdict.summary,
            "Your NVIDIA GPU is not compatible with recent macOS versions."
        );
        assert!(verdict
            .issues
            .contains(&"Modern NVIDIA GPUs are not supported in recent macOS versions".to_string()));
    }

    #[test]
    fn test_legacy_nvidia_forces_limited() {
        let verdict = evaluate("Intel", "i7-8700K", "z390", "NVIDIA GTX 980");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Limited);
        assert!(verdict
            .tips
            .contains(&"Install NVIDIA web drivers for older macOS versions".to_string()));
        // The legacy row leaves the CPU summary in place.
        assert!(verdict.summary.contains("well-supported"));
    }

    #[test]
    fn test_radeon_raises_poor_to_limited() {
        let verdict = evaluate("AMD", "FX-8350", "generic", "RX 580");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Limited);
    }

    #[test]
    fn test_radeon_never_downgrades() {
        let verdict = evaluate("Intel", "i9-10900K", "generic", "RX 580");
        assert_eq!(verdict.compatibility, CompatibilityLevel::Good);
    }

    #[test]
    fn test_board_tip_precedes_general_tips() {
        let verdict = evaluate("Intel", "i7-9700K", "Z390 Aorus Pro", "RX 580");
        assert_eq!(
            verdict.tips,
            vec![
                "AMD Radeon cards offer native support in macOS",
                "Your motherboard is commonly used in Hackintosh builds",
                GENERAL_TIPS[0],
                GENERAL_TIPS[1],
            ]
        );
    }

    #[test]
    fn test_budget_board_tip() {
        let verdict = evaluate("Intel", "i5-9400F", "H310M DS2", "RX 570");
        assert!(verdict
            .tips
            .contains(&"Your motherboard should work but may need specific BIOS settings".to_string()));
    }

    #[test]
    fn test_determinism() {
        let engine = RuleBasedEvaluator::new();
        let spec = HardwareSpec::new("AMD", "Ryzen 9 5950X", "X570 Taichi", "RX 6900 XT");
        let first = engine.evaluate(&spec);
        for _ in 0..10 {
            assert_eq!(engine.evaluate(&spec), first);
        }
    }

    #[test]
    fn test_structural_invariants_hold_for_assorted_inputs() {
        let cases = [
            ("Intel", "i9-13900K", "Z790", "NVIDIA RTX 4080"),
            ("AMD", "Ryzen 7 2700X", "B450", "NVIDIA GTX 760"),
            ("AMD", "Athlon 64", "AM2 board", "Radeon HD 4850"),
            ("PowerPC", "G5", "Apple", "GeForce 6600"),
            ("", "", "", ""),
        ];
        let engine = RuleBasedEvaluator::new();
        for (brand, model, board, gpu) in cases {
            let verdict = engine.evaluate(&HardwareSpec::new(brand, model, board, gpu));
            assert!(
                !verdict.recommended_versions.is_empty(),
                "no versions for {brand}/{model}"
            );
            assert_general_tips_last(&verdict);
            assert!(!verdict.summary.is_empty());
        }
    }
}
