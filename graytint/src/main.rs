#[macro_use]
extern crate log;

mod formats;

use std::env;
use std::fs;
use std::process::exit;

use env_logger::Env;

use graytint_core::models::{parse_color, ImageWriter};
use graytint_core::transforms::tint_image;
use png_support::writer::PNGWriter;

use formats::ImageFormat;

const DEFAULT_LOGGING_LEVEL: &str = "info";
const DEFAULT_OUTPUT_PATH: &str = "output.png";
const DEFAULT_TINT: &str = "#ffffffff";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    let input_path = match argument_value(&args, "input") {
        Some(v) => v,
        None => {
            println!("Invalid input file: please specify one with --input, for example: graytint --input=photo.png --tint=#336699ff");
            exit(1);
        }
    };
    let output_path = argument_value(&args, "output").unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    let tint_string = argument_value(&args, "tint").unwrap_or_else(|| DEFAULT_TINT.to_string());

    let data = match fs::read(&input_path) {
        Ok(v) => v,
        Err(err) => {
            println!("An error has occurred while opening file {}: {}", input_path, err);
            exit(1);
        }
    };

    let format = match ImageFormat::detect(&data) {
        Some(v) => v,
        None => {
            println!("An error has occurred while reading file {}: not a png, jpeg or webp image", input_path);
            exit(1);
        }
    };
    info!("source format is {}", format.format_name());

    let source = match format.reader().read(&data) {
        Ok(v) => v,
        Err(err) => {
            println!("An error has occurred while reading file {} of type {}: {}", input_path, format.format_name(), err);
            exit(1);
        }
    };
    info!("done reading {}x{} image", source.width, source.height);

    let tint = match parse_color(&tint_string) {
        Ok(v) => v,
        Err(err) => {
            println!("An error has occurred while parsing color {}: {}", tint_string, err);
            exit(1);
        }
    };

    let result = tint_image(&source, &tint);

    let encoded = match PNGWriter::new().write(&result) {
        Ok(v) => v,
        Err(err) => {
            println!("An error has occurred while encoding result as png: {}", err);
            exit(1);
        }
    };

    match fs::write(&output_path, &encoded) {
        Ok(_) => info!("Result saved to {}", output_path),
        Err(err) => {
            println!("An error has occurred while writing to file {}: {}", output_path, err);
            exit(1);
        }
    }
}

/// Accepts both `--name=value` and `--name value`.
fn argument_value(args: &[String], argument_name: &str) -> Option<String> {
    let with_equals = format!("--{}=", argument_name);
    let flag = format!("--{}", argument_name);

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix(&with_equals) {
            return Some(value.to_string());
        }
        if *arg == flag {
            return iter.next().map(|v| v.to_string());
        }
    }

    None
}
