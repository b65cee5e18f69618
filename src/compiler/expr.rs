use crate::ast::expressions::{
    BinaryOp, BoolPrimary, BoolTerm, Chain, Expr, Primary, Term, E,
};

use super::compiler::{Compiler, Instruction};

fn binary_instruction(op: BinaryOp) -> Instruction {
    match op {
        BinaryOp::Or => Instruction::Or,
        BinaryOp::And => Instruction::And,
        BinaryOp::Add => Instruction::Add,
        BinaryOp::Sub => Instruction::Sub,
        BinaryOp::Mul => Instruction::Mul,
        BinaryOp::Div => Instruction::Div,
    }
}

/// Each operator is emitted after its right operand, which folds the chain
/// from the left.
fn gen_chain<T>(compiler: &mut Compiler, chain: &Chain<T>, gen_operand: fn(&mut Compiler, &T)) {
    for item in chain.iter() {
        gen_operand(compiler, &item.operand);
        if let Some(op) = item.operator {
            compiler.emit(binary_instruction(op));
        }
    }
}

/// Generates the instructions that leave the value of `expression` on the
/// stack.
pub fn gen_expression(compiler: &mut Compiler, expression: &Expr) {
    gen_chain(compiler, &expression.0, gen_bool_term);
}

fn gen_bool_term(compiler: &mut Compiler, bool_term: &BoolTerm) {
    gen_chain(compiler, &bool_term.0, gen_bool_primary);
}

fn gen_bool_primary(compiler: &mut Compiler, bool_primary: &BoolPrimary) {
    match bool_primary {
        BoolPrimary::Single(e) => gen_e(compiler, e),
        BoolPrimary::Rel { left, op, right } => {
            gen_e(compiler, left);
            gen_e(compiler, right);
            compiler.emit(Instruction::Rel(*op));
        }
    }
}

fn gen_e(compiler: &mut Compiler, e: &E) {
    gen_chain(compiler, &e.0, gen_term);
}

fn gen_term(compiler: &mut Compiler, term: &Term) {
    gen_chain(compiler, &term.0, gen_primary);
}

fn gen_primary(compiler: &mut Compiler, primary: &Primary) {
    match primary {
        Primary::Id(id) => {
            let slot = compiler.var_slot(id);
            compiler.emit(Instruction::Load(slot));
        }
        Primary::Int(value) => compiler.emit(Instruction::PushInt(*value)),
        Primary::Float(value) => compiler.emit(Instruction::PushFloat(*value)),
        Primary::Bool(value) => compiler.emit(Instruction::PushBool(*value)),
        Primary::Parenthesized(expr) => gen_expression(compiler, expr),
        Primary::Neg(operand) => {
            gen_primary(compiler, operand);
            compiler.emit(Instruction::Neg);
        }
        Primary::Inv(operand) => {
            gen_primary(compiler, operand);
            compiler.emit(Instruction::Inv);
        }
    }
}
