//! Envelope export to JSON.
//!
//! Thin wrappers over serde; encoding failures surface as
//! [`crate::types::Error::Serialization`].

/// Encode an envelope to JSON bytes.
pub fn to_json(result: &super::RestResult) -> crate::types::Result<Vec<u8>> {
    Ok(serde_json::to_vec(result)?)
}

/// Encode an envelope to a JSON string.
pub fn to_json_string(result: &super::RestResult) -> crate::types::Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use crate::RestResult;

    #[test]
    fn exported_json_matches_serde() {
        let result = RestResult::error("Test Error");

        let bytes = super::to_json(&result).unwrap();
        let string = super::to_json_string(&result).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), string);
        assert!(string.contains(r#""status":"ERROR""#));
    }
}
