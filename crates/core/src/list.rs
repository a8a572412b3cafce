//! Parsing of model-formatted hospital name lists

use crate::error::HospitalError;

/// Parse a model reply that should be nothing but a list of quoted names.
///
/// Single quotes are rewritten to double quotes before the reply is read as a
/// JSON array of strings. Nothing else is repaired: prose, code fences and
/// non-string elements are all rejected.
pub fn parse_name_list(reply: &str) -> Result<Vec<String>, HospitalError> {
    let normalized = reply.trim().replace('\'', "\"");
    serde_json::from_str::<Vec<String>>(&normalized)
        .map_err(|e| HospitalError::UnparseableList(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_list_is_returned_unchanged() {
        let names = parse_name_list(r#"["Apollo Hospital", "Fortis Hospital"]"#).unwrap();
        assert_eq!(names, ["Apollo Hospital", "Fortis Hospital"]);
    }

    #[test]
    fn single_quotes_are_accepted() {
        let names = parse_name_list("['Jupiter Hospital', 'Bethany Hospital']").unwrap();
        assert_eq!(names, ["Jupiter Hospital", "Bethany Hospital"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let names = parse_name_list("\n  [\"Kaushalya Hospital\"]  \n").unwrap();
        assert_eq!(names, ["Kaushalya Hospital"]);
    }

    #[test]
    fn empty_list_parses() {
        assert!(parse_name_list("[]").unwrap().is_empty());
    }

    #[test]
    fn prose_is_rejected() {
        let err = parse_name_list("Here are some hospitals near you: Apollo and Fortis.");
        assert!(matches!(err, Err(HospitalError::UnparseableList(_))));
    }

    #[test]
    fn empty_reply_is_rejected() {
        assert!(parse_name_list("").is_err());
        assert!(parse_name_list("   ").is_err());
    }

    #[test]
    fn code_fences_are_rejected() {
        assert!(parse_name_list("```json\n[\"Apollo Hospital\"]\n```").is_err());
    }

    #[test]
    fn non_string_elements_are_rejected() {
        assert!(parse_name_list(r#"["Apollo Hospital", 42]"#).is_err());
        assert!(parse_name_list(r#"[["Apollo Hospital"]]"#).is_err());
        assert!(parse_name_list(r#"{"hospitals": ["Apollo Hospital"]}"#).is_err());
    }

    #[test]
    fn apostrophes_inside_names_break_the_list() {
        // Quote substitution turns the apostrophe into a stray double quote.
        assert!(parse_name_list(r#"["St. Mary's Hospital"]"#).is_err());
    }
}
