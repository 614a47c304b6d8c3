use std::env;
use std::fs;
use std::process;

use nashville::{compile_views, demo_meta, ChartRecord, RenderOptions, SongMeta, DEMO_CHART};

fn usage() -> ! {
    eprintln!("Usage: nashville <input.nns> [output.html]");
    eprintln!("       nashville --demo [output.html]");
    eprintln!("       nashville --one-column <input.nns> [output.html]");
    eprintln!();
    eprintln!("Input files may start with a ----fenced metadata block");
    eprintln!("(title, key, tempo, time, songwriter, charted-by).");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut two_column = true;
    let mut demo = false;
    let mut paths: Vec<&String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--one-column" => two_column = false,
            "--demo" => demo = true,
            "--help" | "-h" => usage(),
            _ => paths.push(arg),
        }
    }

    let (meta, chart) = if demo {
        (demo_meta(), DEMO_CHART.to_string())
    } else {
        let Some(input_path) = paths.first() else {
            usage();
        };
        let source = match fs::read_to_string(input_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", input_path, e);
                process::exit(1);
            }
        };
        if source.starts_with("---") {
            match ChartRecord::decode(&source) {
                Ok(record) => (record.meta, record.chart),
                Err(e) => {
                    eprintln!("Error decoding '{}': {}", input_path, e);
                    process::exit(1);
                }
            }
        } else {
            (SongMeta::default(), source)
        }
    };

    let options = RenderOptions {
        two_column,
        ..RenderOptions::default()
    };
    let views = compile_views(&chart, &meta, &options);

    let output_path = if demo { paths.first() } else { paths.get(1) };
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &views.preview) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote chart HTML to {}", path);
        }
        None => {
            println!("{}", views.preview);
        }
    }
}
