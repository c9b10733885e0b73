use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace, warn};

use crate::codegen::{Instr, Operand};

use super::Value;

pub const DEFAULT_MAX_STEPS: usize = 1000;

pub const INFINITE_LOOP_MESSAGE: &str = "Error: infinite loop detected";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Instructions executed before the run is declared non-terminating.
    pub max_steps: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Output of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Execution {
    pub output: Vec<String>,
    pub had_errors: bool,
}

impl Execution {
    pub fn had_execution_errors(&self) -> bool {
        self.had_errors
    }
}

#[derive(Debug, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
    memory: HashMap<String, Value>,
    labels: HashMap<String, usize>,
    input: VecDeque<String>,
    output: Vec<String>,
    had_errors: bool,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Lines consumed, in order, by `input` instructions.
    pub fn with_input<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn memory(&self) -> &HashMap<String, Value> {
        &self.memory
    }

    pub fn had_execution_errors(&self) -> bool {
        self.had_errors
    }

    /// Runs `instrs` from the first instruction with fresh memory.
    pub fn execute(&mut self, instrs: &[Instr]) -> Execution {
        self.memory.clear();
        self.output.clear();
        self.had_errors = false;
        self.index_labels(instrs);

        let mut pc = 0;
        let mut steps = 0;
        while pc < instrs.len() {
            if steps >= self.config.max_steps {
                warn!(steps, pc, "step limit reached, aborting execution");
                self.output.push(INFINITE_LOOP_MESSAGE.to_string());
                self.had_errors = true;
                break;
            }
            steps += 1;
            trace!(pc, instr = %instrs[pc], "step");
            pc = self.step(&instrs[pc], pc);
        }
        debug!(steps, lines = self.output.len(), "execution finished");

        Execution {
            output: self.output.clone(),
            had_errors: self.had_errors,
        }
    }

    fn index_labels(&mut self, instrs: &[Instr]) {
        self.labels = instrs
            .iter()
            .enumerate()
            .filter_map(|(i, instr)| match instr {
                Instr::Label(name) => Some((name.clone(), i)),
                _ => None,
            })
            .collect();
    }

    /// Unknown labels fall through.
    fn jump(&self, label: &str, pc: usize) -> usize {
        self.labels.get(label).copied().unwrap_or(pc + 1)
    }

    fn resolve(&self, operand: &Operand) -> Value {
        match operand {
            Operand::Name(name) => self.memory.get(name).cloned().unwrap_or_default(),
            Operand::Int(value) => Value::Int(*value),
            Operand::Float(value) => Value::Float(*value),
            Operand::Str(s) => Value::Str(s.clone()),
        }
    }

    /// Executes one instruction and returns the next program counter.
    fn step(&mut self, instr: &Instr, pc: usize) -> usize {
        match instr {
            Instr::Label(_) => pc + 1,
            Instr::Goto(label) => self.jump(label, pc),
            Instr::IfEqGoto { cond, value, label } => {
                let cond = self.resolve(cond);
                if cond.compare(&Value::Int(*value)) == Some(std::cmp::Ordering::Equal) {
                    self.jump(label, pc)
                } else {
                    pc + 1
                }
            }
            Instr::Copy { dst, src } => {
                let value = self.resolve(src);
                self.memory.insert(dst.clone(), value);
                pc + 1
            }
            Instr::BinOp { dst, op, lhs, rhs } => {
                let value = Value::binary(*op, &self.resolve(lhs), &self.resolve(rhs));
                self.memory.insert(dst.clone(), value);
                pc + 1
            }
            Instr::Print(operand) => {
                let value = self.resolve(operand);
                self.output.push(value.to_string());
                pc + 1
            }
            Instr::Input(name) => {
                if let Some(line) = self.input.pop_front() {
                    self.memory.insert(name.clone(), Value::from_input(&line));
                }
                pc + 1
            }
        }
    }
}
