//! Template facade: placeholder substitution chained into the resolvers.

use std::fmt;

use crate::condition::{resolve_condition, CONDITIONS};
use crate::error::ResolveError;
use crate::math::{resolve_math, OPERATORS};
use crate::types::Resolved;

/// A reusable template: `$N` placeholders plus optional arithmetic and
/// condition passes over the substituted text.
///
/// # Examples
///
/// ```
/// use string_expression::{Resolved, Template};
///
/// let gate = Template::new("$1>8");
/// assert_eq!(gate.apply(&[9]).unwrap(), Resolved::Bool(true));
/// assert_eq!(gate.apply(&[7]).unwrap(), Resolved::Bool(false));
///
/// let plain = Template::new("$1").conditions(false);
/// assert_eq!(
///     plain.apply(&["hello world"]).unwrap(),
///     Resolved::Text("hello world".to_string())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    conditions: bool,
    maths: bool,
}

/// Builds a [`Template`] with both resolution passes enabled.
pub fn resolve(template: &str) -> Template {
    Template::new(template)
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Template {
            text: text.into(),
            conditions: true,
            maths: true,
        }
    }

    /// Enables or disables the condition pass.
    pub fn conditions(mut self, enabled: bool) -> Self {
        self.conditions = enabled;
        self
    }

    /// Enables or disables the arithmetic pass.
    pub fn maths(mut self, enabled: bool) -> Self {
        self.maths = enabled;
        self
    }

    /// Substitutes `$1`, `$2`, … with `args`, then resolves the result.
    ///
    /// The arithmetic pass runs first, when any of its operators appears in
    /// the substituted text; the condition pass then runs over the (possibly
    /// arithmetic-reduced) string form, when any comparison token appears.
    /// With no matching operators the substituted text comes back verbatim.
    pub fn apply<D: fmt::Display>(&self, args: &[D]) -> Result<Resolved, ResolveError> {
        let mut text = self.text.clone();
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("${}", i + 1), &arg.to_string());
        }

        let mut current = Resolved::Text(text);
        if self.maths {
            let rendered = current.to_string();
            if OPERATORS.iter().any(|&op| rendered.contains(op)) {
                current = resolve_math(&rendered)?;
            }
        }
        if self.conditions {
            let rendered = current.to_string();
            if CONDITIONS.iter().any(|op| rendered.contains(op)) {
                current = match resolve_condition(&rendered)? {
                    Some(b) => Resolved::Bool(b),
                    None => Resolved::Null,
                };
            }
        }
        Ok(current)
    }
}
