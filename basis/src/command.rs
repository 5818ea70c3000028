use crate::terminal::Stylus;
use crate::{constants::*, utils::*};
use anyhow::{bail, Error};
use basis_prop::{
    semantics::equivalent,
    syntax::{Prop, Theory},
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE, FORMULA, VERIFY},
    transform::Basis,
};
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "reduce", about = "Reduce the input formulae to restricted bases")]
    Reduce {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file, one formula per line"
        )]
        input: Option<PathBuf>,
        #[structopt(
            short = "b",
            long = "basis",
            number_of_values = 1,
            help = "Basis to reduce to: not-and-or, not-and, nand, implies-not or implies-false \
                    (default: all)"
        )]
        basis: Vec<Basis>,
        #[structopt(
            long = "verify",
            help = "Check every reduction against its input by truth table."
        )]
        verify: bool,
    },
    #[structopt(name = "table", about = "Print the truth tables of the input formulae")]
    Table {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file, one formula per line"
        )]
        input: Option<PathBuf>,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Reduce {
                input,
                basis,
                verify,
            } => {
                let theory = read_theory(input)?;
                let bases = if basis.is_empty() {
                    Basis::ALL.to_vec()
                } else {
                    basis
                };

                stylus.set(STYLE_INFO);
                println!("Reducing formulae:");

                stylus.set(STYLE_FORMULA);
                theory.formulae().iter().for_each(|f| println!("{}", f));

                println!();
                println!();

                let mut failures = 0;
                for (index, formula) in theory.formulae().iter().enumerate() {
                    failures += reduce(index + 1, formula, &bases, verify, stylus)?;
                }

                stylus.set(STYLE_INFO);
                if verify {
                    println!(
                        "{} of {} reductions are equivalent to their input.",
                        theory.formulae().len() * bases.len() - failures,
                        theory.formulae().len() * bases.len()
                    );
                    println!();
                }

                if failures > 0 {
                    bail!("{} reductions are not equivalent to their input", failures);
                }
                Ok(())
            }
            ProcessCommand::Table { input } => {
                let theory = read_theory(input)?;
                for (index, formula) in theory.formulae().iter().enumerate() {
                    stylus.set(STYLE_INFO);
                    println!("{}.\n", index + 1);
                    print_truth_table(formula, stylus)?;
                    println!();
                }
                Ok(())
            }
        }
    }
}

fn read_theory(input: Option<PathBuf>) -> Result<Theory<Prop>, Error> {
    if let Some(input) = input {
        read_theory_from_file(&input)
    } else {
        read_theory_from_stdin()
    }
}

// Prints the reductions of `formula` and returns the number of those that fail to verify.
fn reduce(
    index: usize,
    formula: &Prop,
    bases: &[Basis],
    verify: bool,
    stylus: &Stylus,
) -> Result<usize, Error> {
    info!(event = FORMULA, index = index as u64, formula = ?formula);

    stylus.set(STYLE_INFO);
    println!("{}. {}\n", index, formula);

    let width = bases.iter().map(|b| b.name().len()).max().unwrap_or(0);
    let mut failures = 0;
    for basis in bases {
        let reduced = basis.reduce(formula);

        stylus.set(STYLE_BASIS);
        print!("{:<width$}  ", basis.name(), width = width);
        stylus.set(STYLE_REDUCED);
        print!("{}", reduced);

        if verify {
            let verified = equivalent(formula, &reduced).map_err(|e| {
                Error::new(e).context(format!("failed to verify the reduction of formula {}", index))
            })?;
            info!(
                event = VERIFY,
                basis = %basis,
                formula = ?reduced,
                equivalent = verified,
            );
            if !verified {
                failures += 1;
                stylus.set(STYLE_FAIL);
                print!("  [not equivalent]");
            }
        }
        println!();
    }

    stylus.set(STYLE_INFO);
    println!("\n{}", SEPARATOR);
    Ok(failures)
}

#[derive(StructOpt)]
#[structopt(
    name = "basis",
    about = "A tool for rewriting propositional formulae over restricted bases of operators"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self
            .log
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("failed to create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
