/*!
## Terminal Front End

Loads a script, runs it to completion and performs the I/O the runtime
asks for.

*/

extern crate ansi_term;
extern crate ctrlc;
use crate::mach::{file_name, Event, Listing, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use chrono::Local;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct Options {
    pub script: PathBuf,
    pub out_dir: PathBuf,
    pub check: bool,
}

/// Returns the process exit status.
pub fn main(options: Options) -> i32 {
    let source = match std::fs::read(&options.script) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(error) => {
            eprintln!("?{}: {}", options.script.display(), error);
            return 2;
        }
    };
    let listing = Listing::load(&source);
    if options.check {
        for error in listing.errors() {
            show_error(error);
        }
        return if listing.errors().is_empty() { 0 } else { 1 };
    }
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("CTRL-C HANDLER: {}", error);
    }
    let stem = match options.script.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => "basic".to_string(),
    };
    let mut runtime = Runtime::default();
    runtime.set_listing(&listing);
    match main_loop(&mut runtime, &options.out_dir, &stem, interrupted) {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

/// Returns true when any error was shown.
fn main_loop(
    runtime: &mut Runtime,
    out_dir: &Path,
    stem: &str,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<bool> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut had_errors = false;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                stdout.write_all(s.as_bytes())?;
            }
            Event::Input(prompt) => {
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                answer(runtime, &mut stdin.lock())?;
            }
            Event::Errors(errors) => {
                stdout.flush()?;
                for error in errors.iter() {
                    show_error(error);
                }
                had_errors = true;
            }
            Event::Drawing(document) => {
                let path = out_dir.join(file_name(stem, &Local::now().naive_local()));
                match save(&path, &document) {
                    Ok(()) => debug!("WROTE {}", path.display()),
                    Err(error) => runtime.fail(error),
                }
            }
            Event::End => {
                stdout.write_all(b"END\n")?;
            }
        }
    }
    stdout.flush()?;
    Ok(had_errors)
}

/// Reads one line for a pending `INPUT`. End of input stops the program.
fn answer<R: BufRead>(runtime: &mut Runtime, reader: &mut R) -> std::io::Result<()> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        runtime.fail(error!(Break; "END OF INPUT"));
    } else {
        runtime.enter(&line);
    }
    Ok(())
}

fn show_error(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
}

fn save(path: &Path, document: &str) -> Result<(), Error> {
    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(error) => {
            return Err(error!(CantCreateFile; &format!("{}: {}", path.display(), error)))
        }
    };
    if let Err(error) = file.write_all(document.as_bytes()) {
        return Err(error!(CantCreateFile; &format!("{}: {}", path.display(), error)));
    }
    Ok(())
}
