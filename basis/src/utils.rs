use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::Error;
use basis_prop::{
    semantics::truth_table,
    syntax::{Formula, Prop, Theory},
};
use itertools::Itertools;
use std::{
    fs,
    io::{stdin, Read},
    path::Path,
};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_FORMULA, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_BASIS,
            Style::new().foreground(110).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_REDUCED, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_FAIL,
            Style::new()
                .foreground(term::color::BRIGHT_RED)
                .attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn read_theory_from_file(filename: &Path) -> Result<Theory<Prop>, Error> {
    let mut f = fs::File::open(filename)
        .map_err(|e| Error::new(e).context("failed to find the input file"))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;

    contents
        .parse()
        .map_err(|e| Error::new(e).context("failed to parse the input formulae"))
}

pub(crate) fn read_theory_from_stdin() -> Result<Theory<Prop>, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    let theory = s
        .parse()
        .map_err(|e| Error::new(e).context("failed to parse the input formulae"))?;
    Ok(theory)
}

pub(crate) fn print_truth_table(formula: &Prop, stylus: &Stylus) -> Result<(), Error> {
    let table = truth_table(formula)
        .map_err(|e| Error::new(e).context("failed to compute the truth table"))?;
    let vars = formula.variables().into_iter().map(|v| v.to_string()).collect_vec();
    let widths = vars.iter().map(|v| v.chars().count()).collect_vec();

    stylus.set(STYLE_INFO);
    println!("{} │ {}", vars.iter().join(" "), formula);
    println!(
        "{}─┼─{}",
        widths.iter().map(|w| "─".repeat(*w)).join("─"),
        "─".repeat(formula.to_string().chars().count())
    );

    stylus.set(STYLE_FORMULA);
    for (model, value) in table {
        let row = model
            .values()
            .zip(widths.iter())
            .map(|(v, w)| format!("{:<width$}", truth_value(*v), width = *w))
            .join(" ");
        println!("{} │ {}", row, truth_value(value));
    }
    Ok(())
}

fn truth_value(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}
