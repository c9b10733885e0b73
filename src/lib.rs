pub mod analyzer;
pub mod codegen;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;

use analyzer::{AnalyzedProgram, SemanticError, SemanticVisitor};
use codegen::{Codegen, Instr};
use error::CompileError;
use interpreter::{Execution, Interpreter, InterpreterConfig};
use lexer::{Lexer, Token};
use parser::{Parser, Program, SyntaxError};

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::tokenize(source)
}

pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Annotates `program` and returns every diagnostic; empty means accepted.
pub fn analyze(program: &mut Program) -> Vec<SemanticError> {
    SemanticVisitor::new().visit_program(program)
}

pub fn generate(program: &AnalyzedProgram) -> Vec<Instr> {
    Codegen::new().generate(program)
}

pub fn execute(instrs: &[Instr]) -> Execution {
    Interpreter::default().execute(instrs)
}

#[derive(Clone, Debug)]
pub struct Compilation {
    pub program: AnalyzedProgram,
    pub instructions: Vec<Instr>,
}

/// Source to TAC. Stops before code generation on any diagnostic.
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let program = parse(tokenize(source))?;
    let program = SemanticVisitor::check(program)?;
    let instructions = generate(&program);

    Ok(Compilation {
        program,
        instructions,
    })
}

pub fn run(source: &str, config: InterpreterConfig) -> Result<Execution, CompileError> {
    let compilation = compile(source)?;
    Ok(Interpreter::new(config).execute(&compilation.instructions))
}
