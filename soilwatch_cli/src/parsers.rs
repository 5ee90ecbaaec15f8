use soilwatch_core::range_token::RangeToken;

/// Unlike the HTTP endpoint, the CLI rejects unknown tokens.
pub fn parse_range_token(input: &str) -> Result<RangeToken, String> {
    RangeToken::ALL
        .into_iter()
        .find(|token| token.as_str() == input.trim())
        .ok_or_else(|| {
            let expected: Vec<&str> = RangeToken::ALL.iter().map(RangeToken::as_str).collect();
            format!("Invalid range, expected one of {}", expected.join(", "))
        })
}
