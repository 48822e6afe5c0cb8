//! # Taglio CLI Application
//!
//! Terminal-based interface for reinforced-concrete shear verification.
//!
//! Prompts for the section data with common defaults, runs the chosen
//! capacity model and prints a hand-check friendly report followed by the
//! JSON payload for LLM/API use.

use std::io::{self, BufRead, Write};

use shear_core::calculations::shear::{calculate, ShearInput, TransverseReinforcement};
use shear_core::calculations::ShearMethod;
use shear_core::factors::PartialFactors;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Taglio CLI - Reinforced-Concrete Shear Verification (NTC 2018)");
    println!("==============================================================");
    println!();

    let web_width_cm = prompt_f64("Web width bw (cm) [23.0]: ", 23.0);
    let effective_depth_cm = prompt_f64("Effective depth d (cm) [90.0]: ", 90.0);
    let concrete_fck_mpa = prompt_f64("Concrete fck (MPa) [35.0]: ", 35.0);
    let steel_fyk_mpa = prompt_f64("Stirrup steel fyk (MPa) [430.0]: ", 430.0);
    let diameter_mm = prompt_f64("Stirrup diameter (mm) [8.0]: ", 8.0);
    let legs = prompt_u32("Stirrup legs [2]: ", 2);
    let stirrup_spacing_cm = prompt_f64("Stirrup spacing s (cm) [20.0]: ", 20.0);
    let strut_angle_deg = prompt_f64("Strut inclination theta (deg) [45.0]: ", 45.0);
    let stirrup_angle_deg = prompt_f64("Stirrup inclination alpha (deg) [90.0]: ", 90.0);
    let design_shear_kn = prompt_f64("Design shear VSd (kN) [100.0]: ", 100.0);

    let method = if prompt_f64("Method [1 = variable strut, 2 = simplified] [1]: ", 1.0) == 2.0 {
        ShearMethod::Simplified
    } else {
        ShearMethod::VariableStrut
    };

    println!();
    println!("Verifying section...");
    println!();

    let input = ShearInput {
        label: "CLI".to_string(),
        web_width_cm,
        effective_depth_cm,
        concrete_fck_mpa,
        steel_fyk_mpa,
        reinforcement: TransverseReinforcement::stirrups(diameter_mm, legs),
        stirrup_spacing_cm,
        strut_angle_deg,
        stirrup_angle_deg,
        design_shear_kn,
        factors: PartialFactors::default(),
    };

    match calculate(&input, method) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  SHEAR VERIFICATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Web:      {:.1} x {:.1} cm (bw x d)", input.web_width_cm, input.effective_depth_cm);
            println!("  Concrete: fck = {:.1} MPa (fcd = {:.2} MPa)", input.concrete_fck_mpa, result.fcd_mpa);
            println!("  Steel:    fyk = {:.1} MPa (fyd = {:.2} MPa)", input.steel_fyk_mpa, result.fyd_mpa);
            println!("  Stirrups: φ{:.0}, {} legs @ {:.1} cm (Asw = {:.2} cm²/m)",
                diameter_mm,
                legs,
                input.stirrup_spacing_cm,
                result.asw_cm2_per_m
            );
            println!("  Angles:   θ = {:.1}°, α = {:.1}°", input.strut_angle_deg, input.stirrup_angle_deg);
            println!("  Method:   {}", method.display_name());
            println!();
            println!("Capacities:");
            println!("  VRd,c = {:.2} kN  (concrete strut)", result.strut_capacity_kn);
            println!("  VRd,s = {:.2} kN  (stirrups)", result.stirrup_capacity_kn);
            println!("  VRd   = {:.2} kN  (governs: {})",
                result.governing_capacity_kn,
                result.governing_condition()
            );
            println!();
            println!("Truss:");
            println!("  ω_sw   = {:.3}", result.reinforcement_ratio);
            println!("  θ_calc = {:.3} rad ({:.1}°)",
                result.required_strut_angle_rad,
                result.required_strut_angle_deg()
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {} (VSd = {:.2} kN vs VRd = {:.2} kN, utilization {:.2})",
                if result.passes() { "PASS" } else { "FAIL" },
                result.demand_kn,
                result.governing_capacity_kn,
                result.utilization
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
