//! Formatting helpers for dashboard values

/// Format a percentage with an explicit sign: `+247%`, `-5%`, `0%`.
///
/// Whole numbers drop the decimal part; others keep one decimal.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    if value.fract() == 0.0 {
        format!("{sign}{value:.0}%")
    } else {
        format!("{sign}{value:.1}%")
    }
}

/// Shorten a wallet address to `0x4A8F...B2C9`.
///
/// Addresses too short to shorten are returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(247.0), "+247%");
        assert_eq!(format_signed_percent(-5.0), "-5%");
        assert_eq!(format_signed_percent(0.0), "0%");
        assert_eq!(format_signed_percent(2.5), "+2.5%");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x4A8F1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6fB2C9"),
            "0x4A8F...B2C9"
        );
        assert_eq!(short_address("0x1234"), "0x1234");
    }
}
