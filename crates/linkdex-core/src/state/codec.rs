use crate::error::{LinkdexError, Result};

/// Percent-encodes everything outside the URL unreserved set.
pub fn encode_filter(filter: &str) -> String {
    urlencoding::encode(filter).into_owned()
}

pub fn decode_filter(encoded: &str) -> Result<String> {
    urlencoding::decode(encoded)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| LinkdexError::MalformedFilter(format!("{encoded}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_round_trip() {
        for filter in [
            "",
            "elm",
            "functional programming",
            "a+b=c & d?e#f/g%h",
            "Ørjan 東京 🚀",
            "100%",
            "  padded  ",
        ] {
            assert_eq!(decode_filter(&encode_filter(filter)).expect("decode"), filter);
        }
    }

    #[test]
    fn encoded_form_has_no_reserved_characters() {
        let encoded = encode_filter("a b&c/d?e#f");
        assert!(!encoded.contains([' ', '&', '/', '?', '#']));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        assert!(matches!(
            decode_filter("%FF%FE"),
            Err(LinkdexError::MalformedFilter(_))
        ));
    }
}
