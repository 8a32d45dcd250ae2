/// Characters kept from the start of an abbreviated address
const PREFIX_CHARS: usize = 6;
/// Characters kept from the end of an abbreviated address
const SUFFIX_CHARS: usize = 4;

/// Shorten a wallet address for display, e.g. `0x9f2c...9e0f`.
/// Addresses too short to abbreviate are returned unchanged.
pub fn abbreviate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= PREFIX_CHARS + SUFFIX_CHARS {
        return address.to_string();
    }

    let prefix: String = chars[..PREFIX_CHARS].iter().collect();
    let suffix: String = chars[chars.len() - SUFFIX_CHARS..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_long_address() {
        assert_eq!(
            abbreviate_address("0x9f2c4e7b1a3d5f6e8c0b2a4d6f8e1c3b5a7d9e0f"),
            "0x9f2c...9e0f"
        );
    }

    #[test]
    fn test_short_address_unchanged() {
        assert_eq!(abbreviate_address("0x12345678"), "0x12345678");
        assert_eq!(abbreviate_address(""), "");
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(abbreviate_address("αβγδεζηθικλμ"), "αβγδεζ...ικλμ");
    }
}
