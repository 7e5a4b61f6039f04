use std::{env, fs, process::ExitCode};

use csslit::{RewriteOptions, Rewriter};

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: csslit <file>");
        return ExitCode::FAILURE;
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("csslit: cannot read {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    // The CLI rewrites whatever file it is given
    let options = RewriteOptions {
        include: Vec::new(),
        ..Default::default()
    };
    let rewriter = match Rewriter::new(options) {
        Ok(rewriter) => rewriter,
        Err(err) => {
            eprintln!("csslit: invalid glob pattern: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut errors = Vec::new();
    let result = rewriter.rewrite(&source, &path, &mut errors);

    for error in &errors {
        eprintln!("csslit: {}: {}", path, error);
    }

    match result {
        Some(result) => {
            print!("{}", result.code);
            ExitCode::SUCCESS
        }
        None if errors.is_empty() => {
            eprintln!("csslit: {}: unchanged", path);
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
