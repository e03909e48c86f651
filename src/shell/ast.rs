/// The fixed set of command forms a line can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    // "exit"
    Exit,
    // "cd <dir>"
    ChangeDirectory,
    // "path <dir>*"
    SetPath,
    // "ls -la"
    Program,
    // "ls -la > out.txt"
    Redirect,
    // "if true == 0 then echo hi fi"
    Conditional,
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equals,    // ==
    NotEquals, // !=
}

impl Comparison {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "==" => Some(Comparison::Equals),
            "!=" => Some(Comparison::NotEquals),
            _ => None,
        }
    }

    pub fn holds(self, status: i32, operand: i32) -> bool {
        match self {
            Comparison::Equals => status == operand,
            Comparison::NotEquals => status != operand,
        }
    }
}

/// `<command> (==|!=) <int>`: the command's exit status is compared against the literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub command: Vec<String>,
    pub op: Comparison,
    pub operand: i32,
}

/// `<command> > <target>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSpec {
    pub command: Vec<String>,
    pub target: String,
}
