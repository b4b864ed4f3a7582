use crate::{
    tree::{Node, Node::*, Tree},
    walk::DepthWalker,
};

impl std::fmt::Display for Tree {
    /// Fully parenthesized infix notation, e.g. `((2.3*x)+y)`. Every binary
    /// operation is wrapped in its own pair of parentheses, leaves are not.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Token {
            Text(&'static str),
            NodeIndex(usize),
        }
        use Token::*;
        // Explicit stack instead of recursion, so deep trees can't overflow
        // the call stack.
        let mut stack = vec![NodeIndex(self.root_index())];
        while let Some(token) = stack.pop() {
            match token {
                Text(text) => f.write_str(text)?,
                NodeIndex(index) => match self.node(index) {
                    Constant(value) => write!(f, "{}", value)?,
                    Variable(name) => f.write_str(name)?,
                    Binary(op, lhs, rhs) => {
                        f.write_str("(")?;
                        // Last in first out.
                        stack.push(Text(")"));
                        stack.push(NodeIndex(*rhs));
                        stack.push(Text(op.symbol()));
                        stack.push(NodeIndex(*lhs));
                    }
                },
            }
        }
        Ok(())
    }
}

impl Tree {
    /// Render the tree in fully parenthesized infix notation.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Draw the structure of the tree, one node per line, with the index of
    /// each node in the tree. Nodes with more than one parent are drawn under
    /// every parent.
    pub fn diagram(&self) -> String {
        use std::fmt::Write;
        enum Token {
            Branch,
            Pass,
            Turn,
            Gap,
            Newline,
            NodeIndex(usize),
        }
        use Token::*;
        // Walk the tree and collect tokens.
        let tokens = {
            // First pass of collecting tokens with no branching.
            let mut tokens = {
                let mut tokens: Vec<Token> = Vec::with_capacity(self.len()); // Likely need more memory.
                let mut walker = DepthWalker::new();
                walker.init_from_tree(self);
                let mut node_depths: Box<[usize]> = vec![0; self.len()].into_boxed_slice();
                for (index, parent) in walker.walk(self.nodes(), false) {
                    node_depths[index] = match parent {
                        Some(pi) => node_depths[pi] + 1,
                        None => 0,
                    };
                    let depth = node_depths[index];
                    if depth > 0 {
                        for _ in 0..(depth - 1) {
                            tokens.push(Gap);
                        }
                        tokens.push(Turn);
                    }
                    tokens.push(NodeIndex(index));
                    tokens.push(Newline);
                }
                tokens
            };
            // Insert branching tokens where necessary.
            let mut line_start: usize = 0;
            for i in 0..tokens.len() {
                match tokens[i] {
                    Branch | Pass | Gap | NodeIndex(_) => {} // Do nothing.
                    Newline => line_start = i,
                    Turn => {
                        let offset = i - line_start;
                        for li in (0..line_start).rev() {
                            if let Newline = tokens[li] {
                                let ti = li + offset;
                                tokens[ti] = match &tokens[ti] {
                                    Branch | Pass | NodeIndex(_) | Newline => break,
                                    Turn => Branch,
                                    Gap => Pass,
                                }
                            }
                        }
                    }
                }
            }
            tokens
        };
        // Write all the tokens out. Writing to a String can't fail.
        let mut out = String::new();
        for token in tokens.iter() {
            let _ = match token {
                Branch => write!(out, " ├── "),
                Pass => write!(out, " │   "),
                Turn => write!(out, " └── "),
                Gap => write!(out, "     "),
                Newline => writeln!(out),
                NodeIndex(index) => write!(out, "[{}] {}", *index, self.node(*index)),
            };
        }
        out
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant(value) => write!(f, "Constant({})", value),
            Variable(name) => write!(f, "Variable({})", name),
            Binary(op, lhs, rhs) => write!(f, "{:?}({}, {})", op, lhs, rhs),
        }
    }
}
