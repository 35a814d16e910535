//! Command-line interface for paint_palette
//!
//! Basic CLI tool for trying palette extraction and mixing recipes

use paint_palette::{extract_palette, solve_recipe, ColorError, Material};
use serde::Serialize;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("cli");

    let Some(command) = args.get(1) else {
        print_help(program);
        process::exit(1);
    };

    match command.as_str() {
        "palette" => run_palette(program, &args[2..]),
        "recipe" => run_recipe(program, &args[2..]),
        "--help" | "-h" => {
            print_help(program);
            process::exit(0);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information");
            process::exit(1);
        }
    }
}

fn run_palette(program: &str, args: &[String]) {
    let mut image_path_arg = None;
    let mut max_colors = 6;
    let mut material = Material::Other;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--material" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("Error: --material needs a value");
                    process::exit(1);
                };
                material = parse_material(name);
                i += 1;
            }
            arg if image_path_arg.is_none() => image_path_arg = Some(arg.to_string()),
            arg => match arg.parse() {
                Ok(n) => max_colors = n,
                Err(_) => {
                    eprintln!("Error: '{}' is not a color count", arg);
                    process::exit(1);
                }
            },
        }
        i += 1;
    }

    let Some(image_path) = image_path_arg else {
        print_help(program);
        process::exit(1);
    };

    match extract_palette(Path::new(&image_path), max_colors, material) {
        Ok(response) => {
            print_json(&response);
            eprintln!();
            eprintln!("Palette Summary ({:?}):", response.extraction_method);
            for color in &response.palette.colors {
                eprintln!("  {} {:<6} {:>5.1}%", color.hex, color.color_name, color.frequency * 100.0);
            }
            eprintln!(
                "  Temperature: {:?}, Complexity: {}",
                response.palette.temperature, response.palette.complexity
            );
        }
        Err(error) => fail("Extraction", error),
    }
}

fn run_recipe(program: &str, args: &[String]) {
    let Some(target) = args.first() else {
        print_help(program);
        process::exit(1);
    };

    match solve_recipe(target) {
        Ok(response) => {
            print_json(&response);
            eprintln!();
            for recipe in &response.recipes {
                eprintln!(
                    "  [{}] {} (ΔE {:.1})",
                    recipe.name, recipe.estimated_result_hex, recipe.estimated_error.value
                );
                eprintln!("      {}", recipe.sentence_ja);
            }
        }
        Err(error) => fail("Recipe", error),
    }
}

fn parse_material(name: &str) -> Material {
    match serde_json::from_value(serde_json::Value::String(name.to_lowercase())) {
        Ok(material) => material,
        Err(_) => {
            eprintln!("Warning: unknown material '{}', using 'other'", name);
            Material::Other
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

fn fail(stage: &str, error: ColorError) -> ! {
    eprintln!("{} failed: {}", stage, error);
    if error.is_recoverable() {
        eprintln!("Suggestion: {}", error.user_message());
    }
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <COMMAND> [ARGS]", program_name);
    eprintln!();
    eprintln!("Extract color palettes and paint mixing recipes.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  palette <image> [max_colors] [--material NAME]");
    eprintln!("                   Extract 3-12 colors (default 6) as JSON");
    eprintln!("  recipe <#RRGGBB> Mixing recipes for a target color as JSON");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} palette photo.jpg 8 --material watercolor", program_name);
    eprintln!("  {} recipe '#FF6B6B'", program_name);
}
