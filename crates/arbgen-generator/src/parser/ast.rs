//! AST for ICU message syntax.
//!
//! These types are public so that tooling (linters, coverage reports) can
//! walk parsed messages without going through code generation.

/// A node of a parsed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A (sub-)message: an ordered run of child nodes.
    Message(Vec<Node>),
    /// Literal text, already unescaped.
    Text(String),
    /// A plain placeholder reference: `{name}`.
    Placeholder(String),
    /// `{variable, plural, =0{...} one{...} other{...}}`
    Plural {
        variable: String,
        branches: Vec<Branch>,
    },
    /// `{variable, select, male{...} other{...}}`
    Select {
        variable: String,
        branches: Vec<Branch>,
    },
    /// `{variable, date, yMd}` or `{variable, time, Hm}`
    Argument {
        variable: String,
        kind: ArgumentKind,
        format: Option<String>,
    },
}

/// One case arm of a plural or select expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub label: BranchLabel,
    /// The branch's sub-message.
    pub children: Vec<Node>,
}

/// The case label of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BranchLabel {
    /// `=N` exact-value match (plural only).
    Exact(i64),
    /// A plural category or select case label.
    Keyword(String),
}

impl BranchLabel {
    pub fn is_other(&self) -> bool {
        matches!(self, BranchLabel::Keyword(word) if word == "other")
    }
}

impl std::fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchLabel::Exact(value) => write!(f, "={value}"),
            BranchLabel::Keyword(word) => f.write_str(word),
        }
    }
}

/// Kind of a date/time argument expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Date,
    Time,
}

impl Node {
    /// Children of a `Message` node; empty for every other kind.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Message(children) => children,
            _ => &[],
        }
    }

    /// Visit this node and every descendant in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        match self {
            Node::Message(children) => {
                for child in children {
                    child.walk(visit);
                }
            }
            Node::Plural { branches, .. } | Node::Select { branches, .. } => {
                for branch in branches {
                    for child in &branch.children {
                        child.walk(visit);
                    }
                }
            }
            Node::Text(_) | Node::Placeholder(_) | Node::Argument { .. } => {}
        }
    }

    /// Names referenced anywhere in this node, in first-use order, deduplicated.
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        self.walk(&mut |node| {
            let name = match node {
                Node::Placeholder(name) => name.as_str(),
                Node::Plural { variable, .. }
                | Node::Select { variable, .. }
                | Node::Argument { variable, .. } => variable.as_str(),
                Node::Message(_) | Node::Text(_) => return,
            };
            if !names.contains(&name) {
                names.push(name);
            }
        });
        names
    }

    /// True if the message contains anything besides literal text.
    pub fn has_expressions(&self) -> bool {
        let mut found = false;
        self.walk(&mut |node| {
            if !matches!(node, Node::Message(_) | Node::Text(_)) {
                found = true;
            }
        });
        found
    }
}
