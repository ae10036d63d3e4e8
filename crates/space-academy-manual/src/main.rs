#![forbid(unsafe_code)]

//! Space Academy AI Training Manual binary entry point.

use std::process;
use std::time::Duration;

use academy_runtime::{Program, ProgramConfig};
use space_academy_manual::app::{self, ManualModel};
use space_academy_manual::cli;
use space_academy_manual::logging;
use space_academy_manual::registry::ContentRegistry;
use space_academy_manual::theme::Glyphs;

fn main() {
    let opts = cli::Opts::parse();

    if let Some(path) = &opts.log_file
        && let Err(e) = logging::init(path)
    {
        eprintln!("Failed to open log file {}: {e}", path.display());
        process::exit(1);
    }

    let registry = ContentRegistry::global();
    if opts.list {
        for (i, entry) in registry.iter().enumerate() {
            println!("{}  {:<13} {}", i + 1, entry.id.key(), entry.title);
        }
        return;
    }

    let glyphs = if opts.ascii {
        Glyphs::Ascii
    } else {
        Glyphs::Unicode
    };
    let exit_after = (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms));
    let model = ManualModel::new(registry)
        .with_section(opts.section.unwrap_or(registry.default_section()))
        .with_columns(opts.columns)
        .with_glyphs(glyphs)
        .with_mouse_capture(opts.mouse)
        .with_exit_after(exit_after);

    if opts.dump {
        println!("{}", app::dump(model, opts.width, opts.height));
        return;
    }

    let config = ProgramConfig {
        mouse: opts.mouse,
        ..ProgramConfig::default()
    };
    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            process::exit(1);
        }
    }
}
