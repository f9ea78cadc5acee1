use serde_json::Value;
use thiserror::Error;

/// Name of the field holding the DNA rows (matched case-insensitively)
pub const DNA_FIELD: &str = "dna";

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Request body has no \"{DNA_FIELD}\" field")]
    MissingDna,

    #[error("\"{DNA_FIELD}\" must be an array of strings or null")]
    InvalidDna,
}

/// Decode a `{"dna": [...]}` document into DNA rows.
///
/// Returns `Ok(None)` when the field is present but `null`, so the
/// validator can report the missing sequence itself.
///
/// # Examples
///
/// ```
/// use mutant_finder::parsing::request::parse_dna_request;
///
/// let rows = parse_dna_request(r#"{"DNA": ["ACTG", "TGCA"]}"#).unwrap();
/// assert_eq!(rows, Some(vec!["ACTG".to_string(), "TGCA".to_string()]));
///
/// assert_eq!(parse_dna_request(r#"{"dna": null}"#).unwrap(), None);
/// assert!(parse_dna_request(r#"{"rows": []}"#).is_err());
/// ```
///
/// # Errors
///
/// Returns a `RequestError` if the body is not a JSON object, has no DNA
/// field, or the field is neither `null` nor an array of strings.
pub fn parse_dna_request(body: &str) -> Result<Option<Vec<String>>, RequestError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(fields) = value else {
        return Err(RequestError::NotAnObject);
    };

    let dna = fields
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(DNA_FIELD))
        .map(|(_, value)| value)
        .ok_or(RequestError::MissingDna)?;

    match dna {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(row) => Ok(row.clone()),
                _ => Err(RequestError::InvalidDna),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(RequestError::InvalidDna),
    }
}
