//! Placeholder templates.
//!
//! A template is literal text with `{var}` or `{var|filter|filter}`
//! placeholders. `{{` and `}}` stand for literal braces.
//!
//! Filters:
//! - `capitalize` - uppercase the first character
//! - `snake` - PascalCase to snake_case
//! - `upper` / `lower` - whole-string case

use std::fmt;
use std::str::FromStr;

use crate::codegen::{capitalize, pascal_to_snake};
use crate::error::{RegenError, Result};

/// A value transformation applied inside a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Capitalize,
    Snake,
    Upper,
    Lower,
}

impl Filter {
    fn apply(self, value: &str) -> String {
        match self {
            Filter::Capitalize => capitalize(value),
            Filter::Snake => pascal_to_snake(value),
            Filter::Upper => value.to_uppercase(),
            Filter::Lower => value.to_lowercase(),
        }
    }
}

impl FromStr for Filter {
    type Err = RegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "capitalize" => Ok(Filter::Capitalize),
            "snake" => Ok(Filter::Snake),
            "upper" => Ok(Filter::Upper),
            "lower" => Ok(Filter::Lower),
            _ => Err(RegenError::Template {
                message: format!("Unknown filter: {}", s),
                help: Some("Available filters: capitalize, snake, upper, lower".to_string()),
            }),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::Capitalize => "capitalize",
            Filter::Snake => "snake",
            Filter::Upper => "upper",
            Filter::Lower => "lower",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Placeholder { var: String, filters: Vec<Filter> },
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse a template string.
    pub fn parse(input: &str) -> Result<Self> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut inner = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        inner.push(c);
                    }
                    if !closed {
                        return Err(RegenError::Template {
                            message: format!("Unterminated placeholder in: {}", input),
                            help: Some("Close the placeholder with '}' or write '{{' for a literal brace".to_string()),
                        });
                    }

                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(parse_placeholder(&inner)?);
                }
                '}' => {
                    return Err(RegenError::Template {
                        message: format!("Unmatched '}}' in: {}", input),
                        help: Some("Write '}}' for a literal brace".to_string()),
                    });
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// Variable names referenced by this template, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Placeholder { var, .. } => Some(var.as_str()),
            Piece::Literal(_) => None,
        })
    }

    /// Render with the given variable bindings.
    pub fn render(&self, bindings: &[(&str, &str)]) -> Result<String> {
        let mut out = String::new();

        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Placeholder { var, filters } => {
                    let value = bindings
                        .iter()
                        .find(|(name, _)| *name == var.as_str())
                        .map(|(_, value)| *value)
                        .ok_or_else(|| RegenError::Template {
                            message: format!("Unknown variable: {}", var),
                            help: Some(format!(
                                "Bound variables here: {}",
                                bindings.iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ")
                            )),
                        })?;

                    let value = filters
                        .iter()
                        .fold(value.to_string(), |acc, filter| filter.apply(&acc));
                    out.push_str(&value);
                }
            }
        }

        Ok(out)
    }
}

fn parse_placeholder(inner: &str) -> Result<Piece> {
    let mut parts = inner.split('|').map(str::trim);
    let var = parts.next().unwrap_or("");

    if var.is_empty() {
        return Err(RegenError::template("Empty placeholder"));
    }

    let filters = parts.map(Filter::from_str).collect::<Result<Vec<_>>>()?;

    Ok(Piece::Placeholder {
        var: var.to_string(),
        filters,
    })
}
