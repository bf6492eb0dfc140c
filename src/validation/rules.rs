//! Declarative validation rules.
//!
//! Rules are data, not closures: a schema is a list of rules whose error
//! messages already carry the formatted bound they were built with. A value
//! is checked against each rule in order and the first failure wins.

use rust_decimal::Decimal;

use crate::autosave::RecordField;
use crate::error::EngineError;

/// A single field's validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// The field that failed.
    pub field: RecordField,
    /// The rule's message, bound already formatted in.
    pub message: String,
}

impl From<FieldError> for EngineError {
    fn from(err: FieldError) -> Self {
        EngineError::ValidationFailed {
            field: err.field.name().to_string(),
            message: err.message,
        }
    }
}

/// A rule over a monetary amount.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountRule {
    /// The amount must not be negative.
    NonNegative {
        /// Message shown on failure.
        message: String,
    },
    /// The amount must be at least the bound.
    Min {
        /// Inclusive lower bound.
        bound: Decimal,
        /// Message shown on failure; embeds the formatted bound.
        message: String,
    },
    /// The amount must not exceed the bound.
    Max {
        /// Inclusive upper bound.
        bound: Decimal,
        /// Message shown on failure; embeds the formatted bound.
        message: String,
    },
}

impl AmountRule {
    fn check(&self, value: Decimal) -> Result<(), &str> {
        match self {
            AmountRule::NonNegative { message } => {
                if value < Decimal::ZERO {
                    return Err(message);
                }
            }
            AmountRule::Min { bound, message } => {
                if value < *bound {
                    return Err(message);
                }
            }
            AmountRule::Max { bound, message } => {
                if value > *bound {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

/// An ordered rule set for one monetary field.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountSchema {
    field: RecordField,
    rules: Vec<AmountRule>,
}

impl AmountSchema {
    /// Starts an empty schema for the given field.
    pub fn new(field: RecordField) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Returns the field this schema validates.
    pub fn field(&self) -> RecordField {
        self.field
    }

    /// Adds a non-negative rule.
    pub fn non_negative(mut self, message: impl Into<String>) -> Self {
        self.rules.push(AmountRule::NonNegative {
            message: message.into(),
        });
        self
    }

    /// Adds an inclusive minimum rule.
    pub fn min(mut self, bound: Decimal, message: impl Into<String>) -> Self {
        self.rules.push(AmountRule::Min {
            bound,
            message: message.into(),
        });
        self
    }

    /// Adds an inclusive maximum rule.
    pub fn max(mut self, bound: Decimal, message: impl Into<String>) -> Self {
        self.rules.push(AmountRule::Max {
            bound,
            message: message.into(),
        });
        self
    }

    /// Checks a value against each rule in order; first failure wins.
    pub fn validate(&self, value: Decimal) -> Result<(), FieldError> {
        for rule in &self.rules {
            if let Err(message) = rule.check(value) {
                return Err(FieldError {
                    field: self.field,
                    message: message.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A rule over a text field.
#[derive(Debug, Clone, PartialEq)]
pub enum TextRule {
    /// The trimmed value must not be empty.
    NonEmpty {
        /// Message shown on failure.
        message: String,
    },
    /// The value must look like an email address.
    Email {
        /// Message shown on failure.
        message: String,
    },
}

impl TextRule {
    fn check(&self, value: &str) -> Result<(), &str> {
        match self {
            TextRule::NonEmpty { message } => {
                if value.trim().is_empty() {
                    return Err(message);
                }
            }
            TextRule::Email { message } => {
                let trimmed = value.trim();
                let valid = trimmed
                    .split_once('@')
                    .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'));
                if !valid {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

/// An ordered rule set for one text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSchema {
    field: RecordField,
    rules: Vec<TextRule>,
}

impl TextSchema {
    /// Starts an empty schema for the given field.
    pub fn new(field: RecordField) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Returns the field this schema validates.
    pub fn field(&self) -> RecordField {
        self.field
    }

    /// Adds a non-empty rule.
    pub fn non_empty(mut self, message: impl Into<String>) -> Self {
        self.rules.push(TextRule::NonEmpty {
            message: message.into(),
        });
        self
    }

    /// Adds an email-shape rule.
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(TextRule::Email {
            message: message.into(),
        });
        self
    }

    /// Checks a value against each rule in order; first failure wins.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        for rule in &self.rules {
            if let Err(message) = rule.check(value) {
                return Err(FieldError {
                    field: self.field,
                    message: message.to_string(),
                });
            }
        }
        Ok(())
    }
}
