use validator::Validate;

use crate::interceptors::{AppError, AppResult};

/// Validate loaded settings, folding every field error into one message.
///
/// Fields are reported in name order so the message is stable.
pub fn validate_settings<T: Validate>(settings: &T) -> AppResult<()> {
    settings.validate().map_err(|e| {
        let field_errors = e.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let errors = fields
            .into_iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(m) => m.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::ValidationError(errors)
    })
}
