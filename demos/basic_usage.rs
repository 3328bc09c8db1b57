//! Basic Usage Example for Water Quality Index
//!
//! This example demonstrates the core functionality of the water-quality-index
//! library: scoring partial readings, inspecting sub-indices and mapping a WQI
//! value onto its category and display colors.
//!
//! Run with: cargo run --example basic_usage

use water_quality_index::{
    Parameter, PartialWaterParameters, WqiAssessment, assess, calculate_wqi, wqi_category,
    wqi_color, wqi_text_color,
};

fn main() {
    env_logger::init();

    println!("💧 Water Quality Index - Basic Usage Example\n");

    // Example 1: Defaults only
    println!("📏 Example 1: Default Readings");
    println!("==============================");

    let wqi = calculate_wqi(&PartialWaterParameters::new());
    println!("WQI with every parameter at its default: {wqi} ({})", wqi_category(wqi));

    println!();

    // Example 2: Partial readings from a field kit
    println!("🧪 Example 2: Partial Readings");
    println!("==============================");

    let field_kit = PartialWaterParameters::new()
        .with_dissolved_oxygen(7.2)
        .with_ph(7.8);
    print_assessment(&assess(&field_kit));

    println!();

    // Example 3: A heavily polluted sample
    println!("☣️  Example 3: Polluted Sample");
    println!("=============================");

    let polluted = PartialWaterParameters::new()
        .with_dissolved_oxygen(2.1)
        .with_bod(18.0)
        .with_coliform(40_000.0)
        .with_turbidity(65.0)
        .with_phosphates(4.5);
    print_assessment(&assess(&polluted));

    println!();

    // Example 4: Category bands
    println!("🎨 Example 4: Category Bands");
    println!("============================");

    for wqi in [97.0, 85.5, 72.0, 50.0, 30.0] {
        println!(
            "  WQI {wqi:>5.1} -> {:<9} background {} text {}",
            wqi_category(wqi).label(),
            wqi_color(wqi),
            wqi_text_color(wqi)
        );
    }
}

/// Pretty print an assessment with its sub-indices
fn print_assessment(result: &WqiAssessment) {
    println!(
        "✅ WQI {} ({}, {})",
        result.wqi,
        result.category,
        result.category.color_token()
    );
    println!("   📊 Sub-indices:");
    for (parameter, score) in result.sub_indices.iter() {
        println!(
            "     {:<26} {:>9.2} {:<9} -> {score:>6.1} (weight {:.2})",
            parameter.name(),
            result.parameters.get(parameter),
            parameter.unit(),
            parameter.weight()
        );
    }

    let limiting: Parameter = result.limiting_parameter();
    println!("   ⚠️  Limiting parameter: {}", limiting.name());
}
