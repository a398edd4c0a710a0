use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::math::fmt;
use crate::session::{self, Outcome};

const RULE: &str = "------------------------------------------";

fn heading(out: &mut impl Write, text: &str) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        Print("\n"),
    )?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput("input closed before a value was entered".to_owned()));
    }
    Ok(line)
}

// keeps asking until the parser accepts, only io failures and eof get out
fn prompt<T>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    question: &str,
    parse: impl Fn(&str) -> Result<T>,
) -> Result<T> {
    loop {
        queue!(out, Print(question))?;
        out.flush()?;
        let line = read_line(input)?;
        match parse(line.as_str()) {
            Ok(value) => return Ok(value),
            Err(err @ (Error::InvalidInput(_) | Error::NegativeBase(_))) => {
                queue!(
                    out,
                    SetForegroundColor(Color::Red),
                    Print(format!("error: {err}\n")),
                    ResetColor,
                )?;
            }
            Err(err) => return Err(err),
        }
    }
}

pub fn prompt_degree(input: &mut impl BufRead, out: &mut impl Write) -> Result<u32> {
    prompt(input, out, "degree of the polynomial (n, integer >= 0): ", session::parse_degree)
}

pub fn prompt_base(input: &mut impl BufRead, out: &mut impl Write) -> Result<u64> {
    prompt(input, out, "value of x to evaluate f(x) at: ", session::parse_base)
}

pub fn print_banner(out: &mut impl Write) -> Result<()> {
    heading(out, "Polynomial generator (x+1)^n")?;
    queue!(out, Print("==============================\n"))?;
    Ok(())
}

pub fn print_outcome(out: &mut impl Write, outcome: &Outcome, config: &Config) -> Result<()> {
    let (n, x) = (outcome.n, outcome.x);
    queue!(out, Print(format!("coefficients (row {n} of Pascal's triangle): {}\n", outcome.row_display)))?;

    if config.show_polynomial {
        heading(out, "\npolynomial:")?;
        queue!(out, Print(format!("{}\n", outcome.polynomial_display)))?;
    }

    let evaluation = &outcome.evaluation;
    if config.show_trace {
        heading(out, &format!("\nf({x}) step by step:"))?;
        queue!(out, Print(format!("{RULE}\n")))?;
        for (i, term) in evaluation.terms.iter().enumerate() {
            queue!(out, Print(format!("   {}\n", fmt::render_term(i, term, x))))?;
        }
        queue!(out, Print(format!("{RULE}\n")))?;
    }

    queue!(
        out,
        Print(format!("total = {}\n\n", evaluation.sum)),
        Print(format!("check: {}\n", fmt::render_check(evaluation, n, x))),
    )?;
    let (color, verdict) = if evaluation.identity_holds {
        (Color::Green, "(the results match)")
    } else {
        (Color::Red, "(the results do NOT match)")
    };
    queue!(out, SetForegroundColor(color), Print(verdict), ResetColor, Print("\n"))?;
    out.flush()?;
    Ok(())
}
