use crate::ast::{
    expressions::RelOp,
    statements::{Assign, Case, SList, Statement},
};

use super::{
    compiler::{Compiler, EmitInstructions, Instruction},
    expr::gen_expression,
};

pub fn gen_statement(compiler: &mut Compiler, statement: &Statement) {
    match statement {
        Statement::Assignment(assignment) => {
            gen_expression(compiler, &assignment.expr);
            let slot = compiler.var_slot(&assignment.id);
            compiler.emit(Instruction::Store(slot));
        }
        Statement::Cond(cond) => {
            let else_label = compiler.new_label();
            gen_expression(compiler, &cond.condition);
            compiler.emit(Instruction::IfFalse(else_label));
            gen_statement(compiler, &cond.then_branch);

            match &cond.else_branch {
                Some(else_branch) => {
                    let end_label = compiler.new_label();
                    compiler.emit(Instruction::Goto(end_label));
                    compiler.emit(Instruction::Label(else_label));
                    gen_statement(compiler, else_branch);
                    compiler.emit(Instruction::Label(end_label));
                }
                None => compiler.emit(Instruction::Label(else_label)),
            }
        }
        Statement::Switch(switch) => {
            // The scrutinee stays on the stack until a case is taken
            let end_label = compiler.new_label();
            gen_expression(compiler, &switch.scrutinee);

            for case in switch.cases.iter() {
                match case {
                    Case::Labeled { label, body } => {
                        let next_label = compiler.new_label();
                        compiler.emit(Instruction::Dup);
                        compiler.emit(Instruction::PushInt(*label));
                        compiler.emit(Instruction::Rel(RelOp::Eq));
                        compiler.emit(Instruction::IfFalse(next_label));
                        compiler.emit(Instruction::Pop);
                        gen_s_list(compiler, body);
                        compiler.emit(Instruction::Goto(end_label));
                        compiler.emit(Instruction::Label(next_label));
                    }
                    Case::Default { body } => {
                        compiler.emit(Instruction::Pop);
                        gen_s_list(compiler, body);
                        compiler.emit(Instruction::Goto(end_label));
                    }
                }
            }

            compiler.emit(Instruction::Pop);
            compiler.emit(Instruction::Label(end_label));
        }
        Statement::While(while_loop) => {
            let test_label = compiler.new_label();
            let end_label = compiler.new_label();

            compiler.emit(Instruction::Label(test_label));
            gen_expression(compiler, &while_loop.condition);
            compiler.emit(Instruction::IfFalse(end_label));
            gen_statement(compiler, &while_loop.body);
            compiler.emit(Instruction::Goto(test_label));
            compiler.emit(Instruction::Label(end_label));
        }
        Statement::Do(do_loop) => {
            let body_label = compiler.new_label();

            compiler.emit(Instruction::Label(body_label));
            gen_statement(compiler, &do_loop.body);
            gen_expression(compiler, &do_loop.condition);
            compiler.emit(Instruction::IfTrue(body_label));
        }
        Statement::For(for_loop) => {
            let test_label = compiler.new_label();
            let end_label = compiler.new_label();

            gen_assign(compiler, &for_loop.init);
            compiler.emit(Instruction::Label(test_label));
            gen_expression(compiler, &for_loop.condition);
            compiler.emit(Instruction::IfFalse(end_label));
            gen_statement(compiler, &for_loop.body);
            gen_assign(compiler, &for_loop.update);
            compiler.emit(Instruction::Goto(test_label));
            compiler.emit(Instruction::Label(end_label));
        }
        Statement::Print(print) => {
            gen_expression(compiler, &print.expr);
            compiler.emit(Instruction::Print);
        }
        Statement::Block(block) => gen_s_list(compiler, &block.body),
    }
}

fn gen_assign(compiler: &mut Compiler, assign: &Assign) {
    gen_expression(compiler, &assign.expr);
    let slot = compiler.var_slot(&assign.id);
    compiler.emit(Instruction::Store(slot));
}

fn gen_s_list(compiler: &mut Compiler, s_list: &SList) {
    for statement in s_list.iter() {
        gen_statement(compiler, statement);
    }
}

impl EmitInstructions for Statement {
    fn emit_instructions(&self, compiler: &mut Compiler) {
        gen_statement(compiler, self);
    }
}
