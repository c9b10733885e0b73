use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use clap_stdin::FileOrStdin;
use minilang::{
    analyzer::SemanticVisitor,
    interpreter::{Interpreter, InterpreterConfig, DEFAULT_MAX_STEPS},
    printer,
};
use tracing::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Annotated,
    Dot,
}

#[derive(Parser, Debug)]
#[command(name = "minilang", about = "Compile a Mini-Lang program to TAC and run it")]
struct Cli {
    /// Source file, or `-` for stdin
    source: FileOrStdin,

    /// Instructions executed before the program is reported as an infinite loop
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Line fed to the next `input` statement (repeatable)
    #[arg(long = "input", value_name = "VALUE")]
    inputs: Vec<String>,

    /// Extra views to print before the TAC listing (repeatable)
    #[arg(long, value_enum)]
    emit: Vec<Emit>,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let Cli {
        source,
        max_steps,
        inputs,
        emit,
        verbose,
    } = Cli::parse();
    init_logging(verbose);

    let source = source.contents().context("Failed to read source")?;

    let tokens = minilang::tokenize(&source);
    if emit.contains(&Emit::Tokens) {
        println!("--- Tokens ---");
        for t in &tokens {
            println!("{}:{} {:?} {}", t.line, t.column, t.kind, t.lexeme);
        }
    }

    let mut program = match minilang::parse(tokens) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    if emit.contains(&Emit::Ast) {
        println!("--- AST ---\n{}", printer::ast_tree(&program));
    }
    if emit.contains(&Emit::Dot) {
        println!("{}", printer::to_dot(&program));
    }

    let errors = minilang::analyze(&mut program);
    if emit.contains(&Emit::Annotated) {
        println!("--- Annotated AST ---\n{}", printer::annotated_tree(&program));
    }
    if !errors.is_empty() {
        eprintln!("Semantic errors found, compilation stopped:");
        for e in &errors {
            eprintln!("  {e}");
        }
        eprintln!("Compilation failed with {} error(s)", errors.len());
        return Ok(ExitCode::FAILURE);
    }

    let program = match SemanticVisitor::check(program) {
        Ok(program) => program,
        Err(errors) => anyhow::bail!("analysis was not repeatable: {} error(s)", errors.len()),
    };
    let instructions = minilang::generate(&program);
    println!("--- TAC ---");
    for (i, instr) in instructions.iter().enumerate() {
        println!("{:03}: {instr}", i + 1);
    }

    println!("--- Output ---");
    let execution = Interpreter::new(InterpreterConfig { max_steps })
        .with_input(inputs)
        .execute(&instructions);
    for line in &execution.output {
        println!("{line}");
    }

    if execution.had_execution_errors() {
        eprintln!("Execution finished with errors");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
