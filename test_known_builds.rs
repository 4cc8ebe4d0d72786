use hackcheck::evaluator::RuleBasedEvaluator;
use hackcheck::hardware::HardwareSpec;
use hackcheck::verdict::CompatibilityLevel;

fn main() {
    env_logger::init();

    println!("Testing well-known community builds against the rule tables...");

    let cases = vec![
        (
            "Coffee Lake daily driver",
            HardwareSpec::new("Intel", "i7-9700K", "Z390 Aorus Pro", "RX 580"),
            CompatibilityLevel::Good,
        ),
        (
            "Alder Lake with modern NVIDIA",
            HardwareSpec::new("Intel", "i9-12900K", "Z690 Aorus Elite", "NVIDIA RTX 3080"),
            CompatibilityLevel::Poor,
        ),
        (
            "Ryzen with Radeon",
            HardwareSpec::new("AMD", "Ryzen 5 3600", "B450 Tomahawk", "RX 570"),
            CompatibilityLevel::Good,
        ),
        (
            "Pre-Ryzen rescued by Radeon",
            HardwareSpec::new("AMD", "FX-8350", "970 Gaming", "RX 580"),
            CompatibilityLevel::Limited,
        ),
        (
            "Skylake with legacy NVIDIA",
            HardwareSpec::new("Intel", "i5-6600K", "H110M-S2", "NVIDIA GTX 960"),
            CompatibilityLevel::Limited,
        ),
        (
            "Lowercase brand matches no table",
            HardwareSpec::new("intel", "i9-10900K", "Z490", "RX 5700 XT"),
            CompatibilityLevel::Limited,
        ),
    ];

    let evaluator = RuleBasedEvaluator::new();
    let mut failures = 0;

    for (label, spec, expected) in cases {
        let verdict = evaluator.evaluate(&spec);
        let status = if verdict.compatibility == expected {
            "✅"
        } else {
            failures += 1;
            "❌"
        };
        println!(
            "{} {} → {} (expected: {})",
            status, label, verdict.compatibility, expected
        );
        println!("   {}", verdict.summary);
    }

    println!();
    if failures == 0 {
        println!("✅ All known builds evaluated as expected");
    } else {
        println!("❌ {failures} build(s) diverged from the expected verdict");
        std::process::exit(1);
    }
}
