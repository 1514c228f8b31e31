/// Script text parser.
///
/// Format:
///
/// ```text
/// // comment
/// material rock
/// {
///     parent base_rock
///     pass
///     {
///         diffuse_map "rock diffuse.png"
///         texture_unit normalMap { direct_texture rock_n.png }
///     }
/// }
/// ```
///
/// - One statement per line: `name value...`, the value being the rest of the
///   line with one pair of surrounding double quotes removed.
/// - `{` opens the block of the previous statement, `}` closes it.
/// - `//` starts a comment, except inside quotes.

use crate::error::{Error, Result};
use super::script_node::ScriptNode;

/// All root nodes parsed from one script file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    path: String,
    roots: Vec<ScriptNode>,
}

impl ScriptFile {
    /// Wrap already-built roots (no parsing)
    pub fn new(path: impl Into<String>, roots: Vec<ScriptNode>) -> Self {
        Self { path: path.into(), roots }
    }

    /// Parse script text; `path` is only used in error messages and logs
    pub fn parse(path: impl Into<String>, source: &str) -> Result<Self> {
        let path = path.into();
        let roots = ScriptParser::new(&path).parse(source)?;
        Ok(Self { path, roots })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Root nodes in file order
    pub fn roots(&self) -> &[ScriptNode] {
        &self.roots
    }
}

struct ScriptParser<'a> {
    file: &'a str,
    line: usize,
    /// Open blocks; index 0 is a sentinel collecting the root nodes
    stack: Vec<ScriptNode>,
    statement: String,
}

impl<'a> ScriptParser<'a> {
    fn new(file: &'a str) -> Self {
        Self {
            file,
            line: 1,
            stack: vec![ScriptNode::default()],
            statement: String::new(),
        }
    }

    fn parse(mut self, source: &str) -> Result<Vec<ScriptNode>> {
        let mut in_quotes = false;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    self.statement.push(c);
                }
                '\n' => {
                    if in_quotes {
                        return Err(self.error("unterminated string"));
                    }
                    self.flush_statement();
                    self.line += 1;
                }
                '/' if !in_quotes && chars.peek() == Some(&'/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                '{' if !in_quotes => {
                    self.flush_statement();
                    self.open_block()?;
                }
                '}' if !in_quotes => {
                    self.flush_statement();
                    self.close_block()?;
                }
                _ => self.statement.push(c),
            }
        }

        if in_quotes {
            return Err(self.error("unterminated string"));
        }
        self.flush_statement();

        if self.stack.len() > 1 {
            let name = self.stack.last().map(|n| n.name().to_string()).unwrap_or_default();
            return Err(self.error(&format!("unclosed block '{}'", name)));
        }

        Ok(self.stack.pop()
            .map(|mut root| std::mem::take(root.children_mut()))
            .unwrap_or_default())
    }

    fn flush_statement(&mut self) {
        let text = self.statement.trim();
        if text.is_empty() {
            self.statement.clear();
            return;
        }

        let (name, value) = match text.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, unquote(rest.trim())),
            None => (text, ""),
        };
        let node = ScriptNode::new(name, value);
        self.statement.clear();

        if let Some(top) = self.stack.last_mut() {
            top.add_child(node);
        }
    }

    fn open_block(&mut self) -> Result<()> {
        let owner = self.stack.last_mut().and_then(|top| top.children_mut().pop());
        match owner {
            Some(node) => {
                self.stack.push(node);
                Ok(())
            }
            None => Err(self.error("'{' without a preceding statement")),
        }
    }

    fn close_block(&mut self) -> Result<()> {
        if self.stack.len() <= 1 {
            return Err(self.error("unmatched '}'"));
        }
        if let Some(node) = self.stack.pop() {
            if let Some(top) = self.stack.last_mut() {
                top.add_child(node);
            }
        }
        Ok(())
    }

    fn error(&self, message: &str) -> Error {
        Error::ScriptParse {
            file: self.file.to_string(),
            line: self.line,
            message: message.to_string(),
        }
    }
}

/// Strip one pair of surrounding quotes (`"a b"` -> `a b`)
fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && value.starts_with('"')
        && value.ends_with('"')
        && value.matches('"').count() == 2
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
#[path = "script_parser_tests.rs"]
mod tests;
