// ABOUTME: Output formatting helpers for the calorie-craft CLI
// ABOUTME: Consistent display of targets, profile summaries, and submission receipts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_craft::models::{NutritionTargets, Profile, ProfileReceipt};
use calorie_craft::onboarding::{profile_summary, target_lines};

/// Display the wizard banner
pub fn display_banner() {
    println!("Calorie Craft");
    println!("{}", "=".repeat(60));
    println!("Tell Us About Yourself");
    println!("We need some information to create your personalized meal plan");
}

/// Display daily targets
pub fn display_targets(targets: &NutritionTargets) {
    println!("\nDaily Nutrition Targets");
    println!("{}", "=".repeat(40));
    for line in target_lines(targets) {
        println!("   {line}");
    }
}

/// Display a completed dry run
pub fn display_completed(profile: &Profile, targets: &NutritionTargets) {
    display_targets(targets);
    println!("\nProfile Summary");
    println!("{}", "=".repeat(40));
    for line in profile_summary(profile) {
        println!("   {line}");
    }
    println!("\nDry run: profile was not submitted.");
}

/// Display the acknowledgement from the profile service
pub fn display_receipt(receipt: &ProfileReceipt) {
    println!("\nProfile Created");
    println!("{}", "=".repeat(40));
    println!("   Profile ID: {}", receipt.profile_id);
    println!(
        "   Received: {}",
        receipt.received_at.format("%Y-%m-%d %H:%M UTC")
    );
    display_targets(&receipt.targets);
}
