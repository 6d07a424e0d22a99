//! Validation of caller-supplied symptom text.

/// Maximum number of symptoms accepted in one request
pub const MAX_SYMPTOMS: usize = 100;

/// Maximum length of a single symptom, in characters
pub const MAX_SYMPTOM_LENGTH: usize = 200;

/// Input validation error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Too many symptoms: {count} given, maximum is {MAX_SYMPTOMS}")]
    TooManySymptoms { count: usize },
    #[error("Symptom too long: '{preview}...' exceeds {MAX_SYMPTOM_LENGTH} characters")]
    SymptomTooLong { preview: String },
}

/// Split free text into symptom entries.
///
/// Entries are separated by newlines or commas, trimmed, and empty entries are
/// dropped, so the matcher never sees an empty symptom string.
///
/// # Examples
///
/// ```
/// use symptom_cluster::utils::validation::parse_symptom_list;
///
/// let symptoms = parse_symptom_list("fatigue, headache\n\n  nausea ").unwrap();
/// assert_eq!(symptoms, vec!["fatigue", "headache", "nausea"]);
/// ```
///
/// # Errors
///
/// Returns `ValidationError::TooManySymptoms` or
/// `ValidationError::SymptomTooLong` when the input exceeds the limits.
pub fn parse_symptom_list(text: &str) -> Result<Vec<String>, ValidationError> {
    let entries: Vec<String> = text
        .split(|c: char| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    validate_symptoms(&entries)?;
    Ok(entries)
}

/// Drop blank entries and trim the rest, then check the limits.
///
/// # Errors
///
/// Returns a `ValidationError` when the cleaned list exceeds the limits.
pub fn clean_symptoms<I, S>(symptoms: I) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: Vec<String> = symptoms
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    validate_symptoms(&entries)?;
    Ok(entries)
}

/// Check the count and per-entry length limits
///
/// # Errors
///
/// Returns the first limit that is exceeded.
pub fn validate_symptoms(symptoms: &[String]) -> Result<(), ValidationError> {
    if symptoms.len() > MAX_SYMPTOMS {
        return Err(ValidationError::TooManySymptoms {
            count: symptoms.len(),
        });
    }

    if let Some(long) = symptoms
        .iter()
        .find(|s| s.chars().count() > MAX_SYMPTOM_LENGTH)
    {
        return Err(ValidationError::SymptomTooLong {
            preview: long.chars().take(20).collect(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symptom_list() {
        let parsed = parse_symptom_list("Fatigue\nsleep disturbance, headaches\n").unwrap();
        assert_eq!(parsed, vec!["Fatigue", "sleep disturbance", "headaches"]);
    }

    #[test]
    fn test_parse_drops_blank_entries() {
        assert!(parse_symptom_list(" , \n\n,").unwrap().is_empty());
        assert!(parse_symptom_list("").unwrap().is_empty());
    }

    #[test]
    fn test_clean_symptoms() {
        let cleaned = clean_symptoms(["  nausea ", "", "aura"]).unwrap();
        assert_eq!(cleaned, vec!["nausea", "aura"]);
    }

    #[test]
    fn test_too_many_symptoms() {
        let text = vec!["x"; MAX_SYMPTOMS + 1].join("\n");
        assert_eq!(
            parse_symptom_list(&text),
            Err(ValidationError::TooManySymptoms {
                count: MAX_SYMPTOMS + 1
            })
        );
        assert!(parse_symptom_list(&vec!["x"; MAX_SYMPTOMS].join("\n")).is_ok());
    }

    #[test]
    fn test_symptom_too_long() {
        let long = "a".repeat(MAX_SYMPTOM_LENGTH + 1);
        let err = clean_symptoms([long]).unwrap_err();
        assert!(matches!(err, ValidationError::SymptomTooLong { ref preview } if preview.len() == 20));

        assert!(clean_symptoms(["é".repeat(MAX_SYMPTOM_LENGTH)]).is_ok());
    }
}
