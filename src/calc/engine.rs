//! Calculator Engine - accumulator and pending-operation state machine
//!
//! One [`Calculator`] per screen lifetime. Every operation is a pure,
//! immediate transition: key event in, new state plus derived view
//! strings out. The running expression is recomputed after each
//! transition rather than cached incrementally.
//!
//! Semantics:
//!
//! - Chained evaluation is strictly left to right with no operator
//!   precedence: `2 + 3 × 4 =` computes `(2 + 3) × 4 = 20`.
//! - Re-selecting an operator before any digit of the second operand
//!   replaces the pending operator without computing.
//! - Division by zero is not guarded; non-finite results flow through
//!   normal formatting.
//!
//! # API
//!
//! - `input_digit` / `input_decimal` - operand entry
//! - `set_operator` - choose or replace the pending operator
//! - `equals` - compute the pending binary operation
//! - `square_root` / `percent` / `toggle_sign` - unary keys
//! - `clear` - reset to the initial state
//!
//! # Example
//!
//! ```
//! use parlor::calc::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(2);
//! calc.set_operator(Operator::Add);
//! calc.input_digit(3);
//! calc.equals();
//! assert_eq!(calc.display(), "5");
//! ```

use log::trace;

use super::format::{format_number, format_result};

// =============================================================================
// OPERATOR
// =============================================================================

/// A binary operator pending its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Display symbol used in expressions and on the key grid.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
            Self::Pow => "^",
        }
    }

    /// Apply the operator with IEEE-754 double semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

// =============================================================================
// CALCULATOR
// =============================================================================

/// Calculator session state.
///
/// Invariants: `operator` is `None` iff `first_operand` is `None`;
/// `awaiting_operand` implies an operator is pending; entry mode is
/// exactly one of plain entry, awaiting-operand, or finalized.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    full_expression: String,
    history: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    awaiting_operand: bool,
    finalized: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in its initial state (display `"0"`).
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            full_expression: String::new(),
            history: String::new(),
            first_operand: None,
            operator: None,
            awaiting_operand: false,
            finalized: false,
        }
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// Current display value (canonical, ungrouped).
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Running expression (`"12 + 7"`), empty after equals/clear.
    pub fn full_expression(&self) -> &str {
        &self.full_expression
    }

    /// Last completed expression with its result (`"12 + 7 = 19"`).
    pub fn history(&self) -> &str {
        &self.history
    }

    /// The operator to highlight on the key grid: pending and already
    /// holding at least one digit of its second operand.
    pub fn active_operator(&self) -> Option<Operator> {
        if self.awaiting_operand {
            None
        } else {
            self.operator
        }
    }

    /// True when nothing has been entered (the clear key reads `AC`).
    pub fn is_cleared(&self) -> bool {
        self.first_operand.is_none() && self.display == "0"
    }

    /// The line shown above the main display: completed history when
    /// present, otherwise the running expression (blank right after a
    /// finalized result).
    pub fn context_line(&self) -> &str {
        if !self.history.is_empty() {
            &self.history
        } else if self.finalized {
            ""
        } else {
            &self.full_expression
        }
    }

    // -------------------------------------------------------------------------
    // Operand entry
    // -------------------------------------------------------------------------

    /// Enter a digit (0-9).
    ///
    /// After a finalized result this starts a fresh expression. While
    /// awaiting the second operand it replaces the display. Otherwise it
    /// appends, replacing a lone leading `"0"`.
    pub fn input_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        if self.finalized {
            self.display = digit.to_string();
            self.full_expression = self.display.clone();
            self.history.clear();
            self.finalized = false;
            return;
        }

        if self.awaiting_operand {
            self.display = digit.to_string();
            self.full_expression.push_str(&self.display);
            self.awaiting_operand = false;
            return;
        }

        if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push((b'0' + digit) as char);
        }
        self.rebuild_expression();
    }

    /// Insert a decimal point; a no-op if the display already has one.
    pub fn input_decimal(&mut self) {
        if self.finalized {
            self.display = "0.".to_string();
            self.full_expression = "0.".to_string();
            self.history.clear();
            self.finalized = false;
            return;
        }

        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.full_expression.push_str("0.");
            self.awaiting_operand = false;
            return;
        }

        if !self.display.contains('.') {
            self.display.push('.');
            self.rebuild_expression();
        }
    }

    // -------------------------------------------------------------------------
    // Operators
    // -------------------------------------------------------------------------

    /// Choose the pending operator.
    ///
    /// With a pending operator whose second operand has already been
    /// entered, the binary result is computed eagerly and seeds the next
    /// operation (left-to-right chaining). While still awaiting the
    /// second operand, the pending operator is replaced in place.
    pub fn set_operator(&mut self, op: Operator) {
        if self.finalized {
            self.first_operand = Some(self.value());
            self.operator = Some(op);
            self.full_expression = format!("{} {} ", self.display, op.symbol());
            self.awaiting_operand = true;
            self.finalized = false;
            self.history.clear();
            return;
        }

        let input = self.value();

        match (self.first_operand, self.operator) {
            (None, _) => {
                self.first_operand = Some(input);
                self.operator = Some(op);
                self.full_expression = format!("{} {} ", self.display, op.symbol());
                self.awaiting_operand = true;
            }
            (Some(_), Some(_)) if self.awaiting_operand => {
                // Operator switch: drop the trailing "<op> " and re-append.
                self.full_expression.pop();
                self.full_expression.pop();
                self.full_expression.push_str(op.symbol());
                self.full_expression.push(' ');
                self.operator = Some(op);
            }
            (Some(first), Some(pending)) => {
                let result = pending.apply(first, input);
                let text = format_result(result);
                trace!("chain: {} {} {} = {}", first, pending.symbol(), input, text);
                self.history = format!("{} = {}", self.full_expression, text);
                self.display = text.clone();
                self.full_expression = format!("{} {} ", text, op.symbol());
                self.first_operand = Some(result);
                self.operator = Some(op);
                self.awaiting_operand = true;
            }
            (Some(_), None) => unreachable!("operand without operator"),
        }
    }

    /// Compute the pending binary operation and finalize.
    ///
    /// A no-op without a pending operator or while still awaiting the
    /// second operand (guards `5 =` and `5 + =`).
    pub fn equals(&mut self) {
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };
        if self.awaiting_operand {
            return;
        }

        let result = op.apply(first, self.value());
        let text = format_result(result);
        trace!("equals: {} = {}", self.full_expression, text);
        self.history = format!("{} = {}", self.full_expression, text);
        self.display = text;
        self.full_expression.clear();
        self.first_operand = None;
        self.operator = None;
        self.finalized = true;
    }

    // -------------------------------------------------------------------------
    // Unary keys
    // -------------------------------------------------------------------------

    /// Square root of the display value; always terminates the current
    /// expression chain. Negative input yields NaN.
    pub fn square_root(&mut self) {
        let result = self.value().sqrt();
        let text = format_result(result);
        self.history = format!("√({}) = {}", self.display, text);
        self.display = text;
        self.full_expression.clear();
        self.first_operand = None;
        self.operator = None;
        self.awaiting_operand = false;
        self.finalized = true;
    }

    /// Negate the display value in place; never finalizes.
    pub fn toggle_sign(&mut self) {
        let negated = -self.value();
        self.display = format_number(negated);

        match (self.first_operand, self.operator) {
            (Some(first), Some(op)) if !self.awaiting_operand => {
                self.full_expression =
                    format!("{} {} {}", format_number(first), op.symbol(), self.display);
            }
            (None, None) => {
                self.full_expression = self.display.clone();
            }
            _ => {}
        }
    }

    /// Percent key, two modes.
    ///
    /// With a pending operator: for add/subtract the display becomes a
    /// percentage of the first operand (`first × display ÷ 100`); for
    /// multiply/divide/power it becomes a bare decimal (`display ÷ 100`).
    /// The expression updates but nothing finalizes. Standalone: the
    /// display divides by 100, records `"<display>% = <result>"`, and
    /// finalizes.
    pub fn percent(&mut self) {
        if let (Some(first), Some(op)) = (self.first_operand, self.operator) {
            let value = self.value();
            let percent = match op {
                Operator::Add | Operator::Sub => first * value / 100.0,
                Operator::Mul | Operator::Div | Operator::Pow => value / 100.0,
            };
            self.display = format_number(percent);
            self.full_expression =
                format!("{} {} {}", format_number(first), op.symbol(), self.display);
        } else {
            let result = self.value() / 100.0;
            let text = format_number(result);
            self.history = format!("{}% = {}", self.display, text);
            self.display = text;
            self.full_expression.clear();
            self.finalized = true;
        }
    }

    /// Reset all state to initial.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Numeric value of the current display.
    fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Recompute the running expression from operands and operator.
    fn rebuild_expression(&mut self) {
        self.full_expression = match (self.first_operand, self.operator) {
            (Some(first), Some(op)) => {
                format!("{} {} {}", format_number(first), op.symbol(), self.display)
            }
            _ => self.display.clone(),
        };
    }
}

// =============================================================================
// TESTS
// =============================================================================
