//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate a hex chain address: `0x` prefix followed by 40 hex characters.
pub fn validate_address(value: &str) -> Result<(), String> {
    let stripped = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"));
    match stripped {
        Some(hex) if hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()) => Ok(()),
        _ => Err(format!("'{}' is not a valid chain address", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address() {
        assert!(validate_address("0x6b175474e89094c44da98b954eedeac495271d0f").is_ok());
        assert!(validate_address("0x6B175474E89094C44DA98B954EEDEAC495271D0F").is_ok());
        assert!(validate_address("6b175474e89094c44da98b954eedeac495271d0f").is_err());
        assert!(validate_address("0x123").is_err());
        assert!(validate_address("0xzz175474e89094c44da98b954eedeac495271d0f").is_err());
    }
}
