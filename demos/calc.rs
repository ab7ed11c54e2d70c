//! Interactive Boolean calculator.
//!
//! Run with: `cargo run --example calc -- "a & b > c" --table --cnf --dnf --zhegalkin`
//!
//! Without any of the form flags the formula is evaluated once; values for variables
//! not given with `--assign` are asked on the terminal.

use std::collections::HashMap;
use std::io;

use boolcalc::eval::PromptSource;
use boolcalc::types::Var;
use boolcalc::Expression;
use clap::Parser;
use color_eyre::eyre::eyre;

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Boolean formula calculator: truth tables, CNF, DNF and Zhegalkin polynomials")]
struct Args {
    /// Formula, e.g. "a & ~b V c"
    formula: String,

    /// Fixed variable values, e.g. `--assign a=1`
    #[arg(short, long, value_parser = parse_assignment)]
    assign: Vec<(Var, bool)>,

    /// Print the truth table
    #[arg(short, long)]
    table: bool,

    /// Print the conjunctive normal form
    #[arg(long)]
    cnf: bool,

    /// Print the disjunctive normal form
    #[arg(long)]
    dnf: bool,

    /// Print the Zhegalkin polynomial
    #[arg(short, long)]
    zhegalkin: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn parse_assignment(s: &str) -> Result<(Var, bool), String> {
    let (name, value) = s.split_once('=').ok_or("expected <var>=<0|1>")?;
    let mut chars = name.trim().chars();
    let var = match (chars.next(), chars.next()) {
        (Some(c), None) => Var::try_new(c).ok_or(format!("invalid variable {:?}", c))?,
        _ => return Err(format!("invalid variable {:?}", name)),
    };
    match value.trim() {
        "1" | "true" => Ok((var, true)),
        "0" | "false" => Ok((var, false)),
        other => Err(format!("invalid value {:?}", other)),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let f = Expression::parse(&args.formula).map_err(|e| eyre!("{}: {}", args.formula, e))?;
    println!("f = {}", f);

    let forms = args.table || args.cnf || args.dnf || args.zhegalkin;
    if args.table {
        println!();
        print!("{}", f.truth_table()?);
        println!();
    }
    if args.cnf {
        println!("CNF: {}", f.cnf()?);
    }
    if args.dnf {
        println!("DNF: {}", f.dnf()?);
    }
    if args.zhegalkin {
        println!("Zhegalkin: {}", f.zhegalkin()?);
    }

    if !forms {
        let mut env: HashMap<Var, bool> = args.assign.into_iter().collect();
        let stdin = io::stdin();
        let mut source = PromptSource::new(stdin.lock(), io::stdout());
        let value = f.evaluate(&mut env, &mut source)?;
        println!("f = {}", u8::from(value));
    }

    Ok(())
}
