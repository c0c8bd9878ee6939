//! Non-interactive token runs
//!
//! `keycalc run 12 + 3.5 =` parses every token before touching the engine,
//! so a typo fails the whole run instead of leaving it half applied.
//! Numeric tokens longer than one character expand to one action per
//! character.

use keycalc::{Action, Display, Engine};
use serde::Serialize;

use crate::error::CliResult;

/// One applied action and the display it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Source text of the action
    pub token: String,
    /// Parsed action
    pub action: Action,
    /// Display after the action
    pub display: Display,
}

/// Outcome of a token run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    /// Every applied action, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    /// Final display
    #[serde(flatten)]
    pub display: Display,
    /// Final memory register
    pub memory: f64,
}

fn is_numeral(token: &str) -> bool {
    token.chars().count() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Splits tokens into `(source, action)` pairs
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> CliResult<Vec<(String, Action)>> {
    let mut parsed = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        if is_numeral(token) {
            for c in token.chars() {
                let source = c.to_string();
                let action = source.parse()?;
                parsed.push((source, action));
            }
        } else {
            parsed.push((token.to_string(), token.parse()?));
        }
    }
    Ok(parsed)
}

/// Runs tokens through a fresh engine
///
/// With `record_steps` the transcript keeps the display after every
/// action.
pub fn run_tokens<S: AsRef<str>>(tokens: &[S], record_steps: bool) -> CliResult<Transcript> {
    let actions = parse_tokens(tokens)?;
    tracing::info!(count = actions.len(), "running actions");

    let mut engine = Engine::new();
    let mut steps = Vec::new();
    for (token, action) in actions {
        let display = engine.apply(action);
        if record_steps {
            steps.push(Step {
                token,
                action,
                display,
            });
        }
    }

    Ok(Transcript {
        steps,
        display: engine.display(),
        memory: engine.memory(),
    })
}

impl Transcript {
    /// Plain text: the steps table (if recorded), then the expression
    /// line and the operand
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let width = self
            .steps
            .iter()
            .map(|s| s.display.expression.chars().count())
            .max()
            .unwrap_or(0);
        for step in &self.steps {
            out.push_str(&format!(
                "{:<4} {:<width$} | {}\n",
                step.token, step.display.expression, step.display.current
            ));
        }
        if !self.steps.is_empty() {
            out.push('\n');
        }
        if !self.display.expression.is_empty() {
            out.push_str(&self.display.expression);
            out.push('\n');
        }
        out.push_str(&self.display.current);
        out.push('\n');
        out
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
