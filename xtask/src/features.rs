use std::process::Command;

use anyhow::{Context, Result};

/// Each entry is the argument list appended to `cargo check -p rostering-infra`.
const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default (sqlite)
    &["--no-default-features"],
    &["--no-default-features", "--features", "sqlite"],
];

/// Check that all supported feature combinations compile successfully.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} rostering-infra feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, extra_args) in FEATURE_COMBINATIONS.iter().enumerate() {
        let display_label =
            if extra_args.is_empty() { "default".to_string() } else { extra_args.join(" ") };

        println!(
            "\n[{}/{}] cargo check -p rostering-infra --all-targets {}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            extra_args.join(" ")
        );

        let status = Command::new("cargo")
            .args(["check", "-p", "rostering-infra", "--all-targets"])
            .args(extra_args.iter())
            .status()
            .with_context(|| format!("Failed to run cargo check for '{display_label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{display_label}' failed to compile");
        }

        println!("✅ Features '{display_label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}
