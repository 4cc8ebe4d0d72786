use crate::verdict::Verdict;

/// Terminal rendering of a verdict. Pure presentation: every string comes
/// from the verdict itself.
pub fn print_verdict(verdict: &Verdict) {
    println!("Compatibility: {}", verdict.compatibility);
    println!("{}", verdict.summary);

    println!();
    println!("Recommended macOS versions:");
    for version in &verdict.recommended_versions {
        println!("  - {version}");
    }

    if !verdict.issues.is_empty() {
        println!();
        println!("Potential issues:");
        for issue in &verdict.issues {
            println!("  - {issue}");
        }
    }

    if !verdict.tips.is_empty() {
        println!();
        println!("Configuration tips:");
        for tip in &verdict.tips {
            println!("  - {tip}");
        }
    }
}

pub fn verdict_json(verdict: &Verdict) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(verdict)?)
}
