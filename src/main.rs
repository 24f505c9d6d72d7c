mod cli;
mod errors;
mod fs_tree;
mod script;
mod util;
mod walk;

use clap::Parser;
use cli::{Args, VERSION};
use errors::AppError;
use script::ScriptEmitter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let input = Path::new(&args.input);
    let metadata = fs::metadata(input).map_err(|e| AppError::InputDir {
        path: input.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(input.to_path_buf()));
    }

    let emitter = ScriptEmitter::new(VERSION);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| AppError::OutputFile {
                path: path.into(),
                source: e,
            })?;
            let mut out = BufWriter::new(file);
            emitter.emit(input, &mut out, args.tree)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            emitter.emit(input, &mut out, args.tree)?;
            out.flush()?;
        }
    }

    Ok(())
}
