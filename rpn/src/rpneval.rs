#![deny(warnings)]

use crate::tokenizer::{RpnToken, RpnTokenizer};
use lifo::Stack;

#[derive(Debug, PartialEq)]
pub enum EvalErr {
    // final pop found no result (eg: empty expression)
    EmptyStack,
    // operator at this offset was short of operands
    MalformedExpr(usize),
    DivisionByZero(usize),
}

pub struct RpnEvaluator;

impl RpnEvaluator {
    pub fn eval_str(expr: &str) -> Result<i64, EvalErr> {
        Self::eval(RpnTokenizer::new(expr.chars()))
    }

    pub fn eval(tokens: impl Iterator<Item = (usize, RpnToken)>) -> Result<i64, EvalErr> {
        let mut operands = Stack::new();

        for (pos, token) in tokens {
            match token {
                RpnToken::Operand(num) => operands.push(num),
                RpnToken::BOp(op) => {
                    // right operand sits on top of the stack
                    let r = operands.pop().map_err(|_| EvalErr::MalformedExpr(pos))?;
                    let l = operands.pop().map_err(|_| EvalErr::MalformedExpr(pos))?;
                    match op {
                        '+' => operands.push(l + r),
                        '-' => operands.push(l - r),
                        '*' => operands.push(l * r),
                        '/' if r == 0 => return Err(EvalErr::DivisionByZero(pos)),
                        '/' => operands.push(l / r), // truncates toward zero
                        _ => unreachable!(),
                    }
                }
            }
        }
        operands.pop().map_err(|_| EvalErr::EmptyStack)
    }
}
