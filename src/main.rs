// src/main.rs

use clap::Parser;
use log::{LevelFilter, error, info};
use qtoolkit::Interpreter;
use std::fs;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const PROMPT: &str = "myqasm> ";

#[derive(Parser, Debug)]
#[command(name = "myqasm", version, about = "Interpreter for the MYQASM quantum assembly language.", long_about = None)]
struct Cli {
    /// Script to run. Reads instructions interactively from stdin when omitted.
    script: Option<PathBuf>,
    /// Seed for measurement sampling, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut qasm = match cli.seed {
        Some(seed) => Interpreter::with_seed(seed),
        None => Interpreter::new(),
    };

    match cli.script {
        Some(path) => run_file(&mut qasm, &path),
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            match repl(&mut qasm, stdin.lock(), &mut io::stdout(), interactive) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("stdin: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_file(qasm: &mut Interpreter, path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    info!("running {}", path.display());

    match run_source(qasm, &source, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs a whole script, printing each measurement as it is sampled.
fn run_source<W: Write>(qasm: &mut Interpreter, source: &str, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mut written = Ok(());
    let outcome = qasm.run_script_with(source, |bits| {
        if written.is_ok() {
            written = writeln!(out, "{}", format_bits(&bits));
        }
    });
    written?;
    Ok(outcome?)
}

/// Reads instructions from `input` until EOF or `:quit`. Errors are reported
/// and the session continues. The prompt is only shown when `interactive`.
fn repl<R: BufRead, W: Write>(qasm: &mut Interpreter, input: R, out: &mut W, interactive: bool) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            if interactive {
                writeln!(out)?;
            }
            return Ok(());
        };
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            _ if line.starts_with('#') => continue,
            ":quit" => return Ok(()),
            ":registers" => print_registers(qasm, out)?,
            ":gates" => print_gates(qasm, out)?,
            _ => match qasm.execute(line) {
                Ok(Some(bits)) => writeln!(out, "{}", format_bits(&bits))?,
                Ok(None) => {}
                Err(e) => eprintln!("error: {}", e),
            },
        }
    }
}

fn print_registers<W: Write>(qasm: &Interpreter, out: &mut W) -> io::Result<()> {
    let mut names: Vec<_> = qasm.registers().keys().collect();
    names.sort();
    for name in names {
        let state = &qasm.registers()[name];
        writeln!(out, "{} ({} qubits): {}", name, state.qubit_count(), state)?;
    }
    Ok(())
}

fn print_gates<W: Write>(qasm: &Interpreter, out: &mut W) -> io::Result<()> {
    let mut names: Vec<_> = qasm.user_defined_gates().keys().collect();
    names.sort();
    for name in names {
        let gate = &qasm.user_defined_gates()[name];
        writeln!(out, "{} ({}x{}):\n{}", name, gate.rows(), gate.cols(), gate)?;
    }
    Ok(())
}

fn format_bits(bits: &[u8]) -> String {
    bits.iter().map(|b| char::from(b'0' + b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str, interactive: bool) -> String {
        let mut qasm = Interpreter::with_seed(0);
        let mut out = Vec::new();
        repl(&mut qasm, input.as_bytes(), &mut out, interactive).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn piped_session_prints_only_results() {
        let output = session("INITIALIZE R 2 [10]\nMEASURE R\nAPPLY H R\nMEASURE R\n", false);
        assert_eq!(output, "10\n10\n");
    }

    #[test]
    fn interactive_session_prompts_for_each_line() {
        let output = session("INITIALIZE R 1\n:quit\nMEASURE R\n", true);
        assert_eq!(output, format!("{PROMPT}{PROMPT}"));
    }

    #[test]
    fn store_listings_are_sorted() {
        let output = session("INITIALIZE B 1\nINITIALIZE A 1\n:registers\n", false);
        let names: Vec<_> = output.lines().map(|l| l.split(' ').next().unwrap()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn script_prints_measurements_until_first_error() {
        let mut qasm = Interpreter::with_seed(0);
        let mut out = Vec::new();
        let source = "# demo\nINITIALIZE R 2 [11]\n\nMEASURE R\nMEASURE S\nMEASURE R\n";
        let err = run_source(&mut qasm, source, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "line 5: register `S` does not exist");
        assert_eq!(String::from_utf8(out).unwrap(), "11\n");
    }
}
