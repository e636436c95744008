//! String-embedded expression interpreter.
//!
//! # Overview
//!
//! Evaluates conditions (`==`, `!=`, `>=`, `<=`, `>`, `<`, `&&`, `||`) and
//! arithmetic (`+ - * / ^`) embedded in plain strings, with parenthesized
//! grouping resolved by recursive substitution. Operands are coerced to
//! typed values (integer, bigint, float, boolean, null, undefined, JSON
//! structure, or text) before they are compared.
//!
//! Operator choice is by substring containment over a fixed priority list,
//! not by position or precedence: the first listed operator found anywhere
//! in the expression splits it in two.
//!
//! # Example
//!
//! ```
//! use string_expression::{resolve_condition, resolve_math, Resolved, Template};
//!
//! assert_eq!(resolve_condition("(1==2)&&(1!=3||1==0)").unwrap(), Some(true));
//! assert_eq!(resolve_math("((1+2)*2)+((4/2)-1)").unwrap(), Resolved::Number(7.0));
//!
//! let gate = Template::new("$1>8");
//! assert_eq!(gate.apply(&[9]).unwrap(), Resolved::Bool(true));
//! ```

pub mod brackets;
pub mod coerce;
pub mod condition;
pub mod error;
pub mod math;
pub mod path;
pub mod template;
pub mod types;

// Re-export the core public API
pub use brackets::{brackets_balanced, split_groups};
pub use coerce::{coerced_equal, compare, deep_equal, parse_data, parse_value};
pub use condition::{resolve_condition, CONDITIONS};
pub use error::{ResolveError, MAX_NESTING};
pub use math::{resolve_math, OPERATORS};
pub use path::resolve_obj_value;
pub use template::{resolve, Template};
pub use types::{Coerced, Parsed, Resolved};
