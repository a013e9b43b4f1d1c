//! Message catalog keyed by a fixed enumeration. The argument order encoded
//! in each template is part of the contract: field name first, then the
//! original message (or a date value for range errors).

/// Identifies one user-facing message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    ValueIsRequired,
    ValueIsNotDate,
    DateGreaterThan,
    ValueIsNotANumber,
    ErrorWhileGettingPropertyValue,
    ErrorWhileSettingPropertyValue,
    AccountOverdrawnBy,
    AvailableAmountDownTo,
}

/// Supplies localized message templates.
pub trait TextProvider {
    fn template(&self, key: Text) -> &str;

    /// Renders `key`, substituting positional `{0}`, `{1}`, ... arguments.
    fn resolve(&self, key: Text, args: &[&str]) -> String {
        let mut message = self.template(key).to_string();
        for (index, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), arg);
        }
        message
    }
}

/// Built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTexts;

impl TextProvider for DefaultTexts {
    fn template(&self, key: Text) -> &str {
        match key {
            Text::ValueIsRequired => "value is required",
            Text::ValueIsNotDate => "value is not a date",
            Text::DateGreaterThan => "date greater than {0}",
            Text::ValueIsNotANumber => "value is not a number",
            Text::ErrorWhileGettingPropertyValue => {
                "error while getting property value: {0}: {1}"
            }
            Text::ErrorWhileSettingPropertyValue => {
                "error while setting property value: {0}: {1}"
            }
            Text::AccountOverdrawnBy => "account {0} is overdrawn by {1}",
            Text::AvailableAmountDownTo => "available amount on account {0} is down to {1}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_substitutes_arguments_in_declared_order() {
        let message = DefaultTexts.resolve(
            Text::ErrorWhileSettingPropertyValue,
            &["StatusDato", "boom"],
        );
        assert_eq!(message, "error while setting property value: StatusDato: boom");
    }

    #[test]
    fn resolve_without_arguments_returns_template_verbatim() {
        assert_eq!(
            DefaultTexts.resolve(Text::ValueIsRequired, &[]),
            "value is required"
        );
    }
}
