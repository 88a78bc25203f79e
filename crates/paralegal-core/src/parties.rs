use serde::Serialize;

/// Token separating applicant from respondent in the party-names field.
pub const PARTY_SEPARATOR: &str = "vs";

/// Respondent label used when no separator is present.
pub const DEFAULT_RESPONDENT: &str = "RESPONDENT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parties {
    pub applicant: String,
    pub respondent: String,
    /// Whether the input contained the separator.
    pub separated: bool,
}

/// Split "Applicant vs Respondent" into its two labels.
///
/// The applicant is the trimmed text before the first `vs`; the respondent is
/// the trimmed text from there up to the next `vs` (or the end). The match is
/// a plain substring match, so `vs` inside a name also splits. Without a
/// separator the whole input is the applicant, untrimmed.
pub fn split_parties(input: &str) -> Parties {
    let mut parts = input.split(PARTY_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(applicant), Some(respondent)) => Parties {
            applicant: applicant.trim().to_string(),
            respondent: respondent.trim().to_string(),
            separated: true,
        },
        _ => Parties {
            applicant: input.to_string(),
            respondent: DEFAULT_RESPONDENT.to_string(),
            separated: false,
        },
    }
}
