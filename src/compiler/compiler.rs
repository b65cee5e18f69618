//! Main compiler module.
//!
//! This module contains the Compiler structure, the instruction set of the
//! target stack machine, and the `compile` entry point.

use std::{collections::HashMap, fmt::Display};

use log::debug;

use crate::ast::{expressions::RelOp, statements::Statement};

/// One instruction of the target stack machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    PushInt(i32),
    PushFloat(f32),
    PushBool(bool),
    /// Pushes the variable in the given slot
    Load(usize),
    /// Pops into the variable in the given slot
    Store(usize),
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Inv,
    Or,
    And,
    Rel(RelOp),
    Print,
    Dup,
    Pop,
    Goto(usize),
    IfFalse(usize),
    IfTrue(usize),
    Label(usize),
}

fn rel_mnemonic(op: RelOp) -> &'static str {
    match op {
        RelOp::Lt => "lt",
        RelOp::Le => "le",
        RelOp::Gt => "gt",
        RelOp::Ge => "ge",
        RelOp::Eq => "eq",
        RelOp::Neq => "neq",
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Label(label) => write!(f, "L{}:", label),
            Instruction::PushInt(value) => write!(f, "\tpush {}", value),
            Instruction::PushFloat(value) => write!(f, "\tpush {:?}", value),
            Instruction::PushBool(value) => write!(f, "\tpush {}", value),
            Instruction::Load(slot) => write!(f, "\tload {}", slot),
            Instruction::Store(slot) => write!(f, "\tstore {}", slot),
            Instruction::Add => write!(f, "\tadd"),
            Instruction::Sub => write!(f, "\tsub"),
            Instruction::Mul => write!(f, "\tmul"),
            Instruction::Div => write!(f, "\tdiv"),
            Instruction::Neg => write!(f, "\tneg"),
            Instruction::Inv => write!(f, "\tinv"),
            Instruction::Or => write!(f, "\tor"),
            Instruction::And => write!(f, "\tand"),
            Instruction::Rel(op) => write!(f, "\t{}", rel_mnemonic(*op)),
            Instruction::Print => write!(f, "\tprint"),
            Instruction::Dup => write!(f, "\tdup"),
            Instruction::Pop => write!(f, "\tpop"),
            Instruction::Goto(label) => write!(f, "\tgoto L{}", label),
            Instruction::IfFalse(label) => write!(f, "\tiffalse L{}", label),
            Instruction::IfTrue(label) => write!(f, "\tiftrue L{}", label),
        }
    }
}

/// The compiler state for one tree.
///
/// Variables are numbered in order of first appearance, labels in order of
/// allocation.
#[derive(Debug, Default)]
pub struct Compiler {
    /// The instruction stream emitted so far
    pub instructions: Vec<Instruction>,
    /// Map of variable names to their slot numbers
    pub var_map: HashMap<String, usize>,
    /// The next label number to hand out
    next_label: usize,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler::default()
    }

    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn new_label(&mut self) -> usize {
        let label = self.next_label;
        self.next_label += 1;
        label
    }

    /// The slot of `name`, allocating the next one on first use.
    pub fn var_slot(&mut self, name: &str) -> usize {
        if let Some(slot) = self.var_map.get(name) {
            return *slot;
        }

        let slot = self.var_map.len();
        self.var_map.insert(name.to_string(), slot);
        slot
    }

    /// The instruction stream, one line per instruction.
    pub fn listing(&self) -> Vec<String> {
        self.instructions
            .iter()
            .map(|instruction| instruction.to_string())
            .collect()
    }
}

/// Implemented by nodes that can be compiled on their own.
pub trait EmitInstructions {
    fn emit_instructions(&self, compiler: &mut Compiler);
}

/// Generates the instruction stream for a parsed statement.
pub fn compile(statement: &Statement) -> Compiler {
    let mut compiler = Compiler::new();
    statement.emit_instructions(&mut compiler);

    debug!(
        "emitted {} instructions over {} variables",
        compiler.instructions.len(),
        compiler.var_map.len()
    );

    compiler
}
