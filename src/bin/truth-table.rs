//! Interactive truth table printer.
//!
//! Reads one formula per line and prints its truth table. An empty line or
//! end of input stops the loop. A formula that fails to parse is reported and
//! skipped; the next line is processed as usual.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use truth_table::dot::DotConfig;
use truth_table::formula::parse;
use truth_table::truth_table::RenderConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Truth tables for propositional formulas")]
struct Cli {
    /// Formulas to process instead of reading standard input
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,

    /// Separator written after every cell
    #[arg(short, long, default_value = " ")]
    delimiter: String,

    /// Print the formula tree in DOT format instead of the table
    #[arg(long)]
    dot: bool,

    /// Print whether the formula is a tautology, contradiction or contingency
    #[arg(short, long)]
    summary: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

fn process(line: &str, args: &Cli, out: &mut impl Write) -> color_eyre::Result<()> {
    let formula = parse(line)?;
    info!("formula = {}", formula);

    if args.dot {
        write!(out, "{}", formula.to_dot_with_config(&DotConfig::default())?)?;
        return Ok(());
    }

    let table = formula.truth_table()?;
    let config = RenderConfig {
        delimiter: args.delimiter.clone(),
        ..RenderConfig::default()
    };
    write!(out, "{}", table.render(&config))?;
    if args.summary {
        writeln!(out, "{}", table.classify())?;
    }
    Ok(())
}

/// Process one formula, writing a single error line to `err` if it fails.
fn report(input: &str, args: &Cli, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    if let Err(e) = process(input, args, out) {
        writeln!(err, "error: {:?}: {}", input, e)?;
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    TermLogger::init(args.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    if !args.formulas.is_empty() {
        for formula in args.formulas.iter() {
            report(formula, &args, &mut out, &mut err)?;
        }
        return Ok(());
    }

    writeln!(out, "Please enter an expression, one per line (an empty line quits).")?;
    writeln!(out, "! stands for not, & for and, | for or, -> for implies and <-> for iff.")?;
    writeln!(out, "Use lowercase letters as variables. Parentheses can be used as well.")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        report(&line, &args, &mut out, &mut err)?;
        out.flush()?;
    }

    Ok(())
}
