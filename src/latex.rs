use crate::tree::{BinaryOp::*, Node, Node::*, Tree};
use std::fmt::Write;

enum Token {
    Text(&'static str),
    NodeIndex(usize),
}

use Token::*;

impl Tree {
    /// Produce the latex expression for the tree.
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        // Explicit stack, so deep trees can't overflow the call stack.
        let mut stack = vec![NodeIndex(self.root_index())];
        while let Some(token) = stack.pop() {
            let index = match token {
                Text(text) => {
                    out.push_str(text);
                    continue;
                }
                NodeIndex(index) => index,
            };
            match self.node(index) {
                Constant(val) => {
                    // Writing to a String can't fail.
                    let _ = write!(out, "{}", val);
                }
                Variable(name) => out.push_str(name),
                Binary(op, lhs, rhs) => {
                    let (lnode, rnode) = (self.node(*lhs), self.node(*rhs));
                    let (lwrap, rwrap) = match op {
                        Add => (false, false),
                        Subtract => (false, parens_sub(rnode)),
                        Multiply => (parens_mul(lnode), parens_mul(rnode)),
                        // The fraction bar groups both operands.
                        Divide => (false, false),
                    };
                    let (open, mid, close) = match op {
                        Add => ("{", "} + {", "}"),
                        Subtract => ("{", "} - {", "}"),
                        Multiply => ("{", "}\\cdot{", "}"),
                        Divide => ("\\dfrac{", "}{", "}"),
                    };
                    // Last in first out.
                    stack.push(Text(close));
                    push_operand(&mut stack, NodeIndex(*rhs), rwrap);
                    stack.push(Text(mid));
                    push_operand(&mut stack, NodeIndex(*lhs), lwrap);
                    out.push_str(open);
                }
            }
        }
        out
    }
}

/// Push the tokens of an operand onto the stack, wrapped in parentheses if
/// `wrap` is true.
fn push_operand(stack: &mut Vec<Token>, operand: Token, wrap: bool) {
    if wrap {
        stack.push(Text("\\right)"));
        stack.push(operand);
        stack.push(Text("\\left("));
    } else {
        stack.push(operand);
    }
}

/// Whether the right operand of a subtraction needs parentheses.
fn parens_sub(node: &Node) -> bool {
    matches!(node, Binary(Add, ..) | Binary(Subtract, ..))
}

/// Whether an operand of a multiplication needs parentheses.
fn parens_mul(node: &Node) -> bool {
    match node {
        Binary(Add, ..) | Binary(Subtract, ..) => true,
        Constant(val) => *val < 0.,
        Binary(..) | Variable(_) => false,
    }
}
