use core::fmt::{self, Write};

use log::{debug, trace};

use crate::values::error::FormatError;
use crate::values::format::rule::FormatRule;
use crate::values::traits::NumericValue;
use crate::values::types::{NumericType, Representation, TEXT_CAPACITY, Text};

static FALLBACK: [FormatRule; NumericType::COUNT] = [
    FormatRule::fallback(NumericType::U8),
    FormatRule::fallback(NumericType::I8),
    FormatRule::fallback(NumericType::U16),
    FormatRule::fallback(NumericType::I16),
    FormatRule::fallback(NumericType::U32),
    FormatRule::fallback(NumericType::I32),
    FormatRule::fallback(NumericType::U64),
    FormatRule::fallback(NumericType::I64),
    FormatRule::fallback(NumericType::F32),
    FormatRule::fallback(NumericType::F64),
];

/// Primary and alternate rules of one representation, indexed by numeric type.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    representation: Representation,
    primary: [Option<FormatRule>; NumericType::COUNT],
    alternate: [Option<FormatRule>; NumericType::COUNT],
}

impl FormatRegistry {
    pub const fn new(representation: Representation) -> Self {
        Self {
            representation,
            primary: [None; NumericType::COUNT],
            alternate: [None; NumericType::COUNT],
        }
    }

    /// Adds a rule without validation, for the built-in sets.
    pub(crate) const fn with_rule(mut self, rule: FormatRule, alternate: bool) -> Self {
        let index = rule.numeric_type().index();
        if alternate {
            self.alternate[index] = Some(rule);
        } else {
            self.primary[index] = Some(rule);
        }
        self
    }

    /// Validates and stores `rule`, replacing any rule for the same type and slot.
    pub fn register(&mut self, rule: FormatRule, alternate: bool) -> Result<(), FormatError> {
        if rule.representation() != self.representation {
            return Err(FormatError::RepresentationMismatch {
                expected: self.representation,
                found: rule.representation(),
            });
        }
        rule.validate()?;
        let length = rule.max_length();
        if length > TEXT_CAPACITY {
            return Err(FormatError::CapacityExceeded {
                length,
                capacity: TEXT_CAPACITY,
            });
        }

        debug!(
            "register {} {} rule for {} (max length {})",
            if alternate { "alternate" } else { "primary" },
            self.representation,
            rule.numeric_type(),
            length
        );
        let index = rule.numeric_type().index();
        let slot = if alternate {
            &mut self.alternate[index]
        } else {
            &mut self.primary[index]
        };
        *slot = Some(rule);
        Ok(())
    }

    #[inline]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    /// Registered rule, if any.
    pub fn get_format(&self, ty: NumericType, alternate: bool) -> Option<&FormatRule> {
        let slot = if alternate {
            &self.alternate[ty.index()]
        } else {
            &self.primary[ty.index()]
        };
        slot.as_ref()
    }

    pub fn has_format(&self, ty: NumericType, alternate: bool) -> bool {
        self.get_format(ty, alternate).is_some()
    }

    /// Alternate falls back to primary, primary to the built-in decimal rule.
    pub fn get_format_or_fallback(&self, ty: NumericType, alternate: bool) -> &FormatRule {
        if alternate {
            if let Some(rule) = self.get_format(ty, true) {
                return rule;
            }
            trace!("no alternate {} rule for {}, using primary", self.representation, ty);
        }
        self.get_format(ty, false).unwrap_or(&FALLBACK[ty.index()])
    }

    /// Writes `value` with the resolved rule.
    pub fn format_value(&self, value: NumericValue, alternate: bool, out: &mut dyn Write) -> fmt::Result {
        self.get_format_or_fallback(value.numeric_type(), alternate)
            .write(value, out)
    }

    /// Renders `value`, switching to the decimal fallback if the rule overflows.
    pub fn render(&self, value: NumericValue, alternate: bool) -> Text {
        let mut text = Text::new();
        if self.format_value(value, alternate, &mut text).is_err() {
            trace!("{} rule for {} overflowed, using fallback", self.representation, value.numeric_type());
            text.clear();
            // fallback output is at most 24 chars
            let _ = FALLBACK[value.numeric_type().index()].write(value, &mut text);
        }
        text
    }

    /// Renders the already split parts of a composite value.
    pub fn format_parts(
        &self,
        ty: NumericType,
        alternate: bool,
        parts: &[u16],
    ) -> Result<Text, FormatError> {
        let mut text = Text::new();
        self.get_format_or_fallback(ty, alternate)
            .write_parts(parts, &mut text)?;
        Ok(text)
    }
}
