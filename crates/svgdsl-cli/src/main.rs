use clap::{Parser, Subcommand};
use std::path::Path;
use svgdsl_render::{preview, render_with, sample, RenderOptions};

#[derive(Parser)]
#[command(name = "svgdsl")]
#[command(about = "svgdsl — build SVG documents in Rust and render them to markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rendered sample document
    Sample {
        /// Indent one element per line
        #[arg(long)]
        pretty: bool,

        /// Keep the space in `<g ></g>` for elements without attributes
        #[arg(long)]
        legacy_spacing: bool,

        /// Validate the document before printing; exit 1 on problems
        #[arg(long)]
        check: bool,

        /// Include the trailing diagonal line
        #[arg(long)]
        with_line: bool,
    },

    /// Write an HTML page previewing the sample document
    Preview {
        /// Output .html file
        path: String,

        /// Indent one element per line
        #[arg(long)]
        pretty: bool,
    },

    /// Convert a pixel count to millimeters (90 dpi)
    PxToMm {
        /// Number of pixels
        pixels: u64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sample {
            pretty,
            legacy_spacing,
            check,
            with_line,
        } => {
            let options = RenderOptions {
                empty_attribute_space: legacy_spacing,
                pretty,
            };
            cmd_sample(&options, check, with_line);
        }
        Command::Preview { path, pretty } => {
            let options = RenderOptions {
                pretty,
                ..RenderOptions::default()
            };
            cmd_preview(&path, &options);
        }
        Command::PxToMm { pixels } => {
            println!("{}", svgdsl_model::pixel_to_millimeter(pixels));
        }
    }
}

fn cmd_sample(options: &RenderOptions, check: bool, with_line: bool) {
    let doc = if with_line {
        sample::document_with_line()
    } else {
        sample::document()
    };

    if check {
        if let Err(e) = svgdsl_model::validate(&doc) {
            eprintln!("Validation failed:\n{e}");
            std::process::exit(1);
        }
        log::debug!("sample document passed validation");
    }

    let markup = render_with(&doc, options);
    if options.pretty {
        print!("{markup}");
    } else {
        println!("{markup}");
    }
}

fn cmd_preview(path: &str, options: &RenderOptions) {
    let markup = render_with(&sample::document(), options);

    let title = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("preview");
    let html = preview::page(title, &markup);

    if let Err(e) = std::fs::write(path, &html) {
        eprintln!("Error writing {path}: {e}");
        std::process::exit(1);
    }

    log::debug!("wrote {} bytes to {path}", html.len());
    eprintln!("Wrote: {path}");
}
