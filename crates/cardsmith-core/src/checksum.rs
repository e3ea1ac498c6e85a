/// Returns `true` when `digits` satisfies the mod-10 (Luhn) checksum.
///
/// Inputs shorter than two characters, or containing anything other than
/// ASCII digits, are reported as invalid.
pub fn is_valid_checksum(digits: &str) -> bool {
    let Some(values) = digit_values(digits) else {
        return false;
    };
    let Some((check, payload)) = values.split_last() else {
        return false;
    };
    if payload.is_empty() {
        return false;
    }
    (weighted_sum(payload) + u32::from(*check)) % 10 == 0
}

/// Digit that completes `payload` into a checksum-valid string.
///
/// Returns `None` when `payload` contains non-digit characters.
pub fn check_digit(payload: &str) -> Option<u8> {
    let values = digit_values(payload)?;
    let remainder = (weighted_sum(&values) % 10) as u8;
    Some((10 - remainder) % 10)
}

/// Sum of the payload digits (check digit excluded), doubling every digit
/// at an even position counted from the right.
fn weighted_sum(payload: &[u8]) -> u32 {
    payload
        .iter()
        .rev()
        .enumerate()
        .map(|(index, digit)| {
            let digit = u32::from(*digit);
            if index % 2 == 0 {
                let doubled = digit * 2;
                if digit >= 5 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

fn digit_values(input: &str) -> Option<Vec<u8>> {
    input
        .bytes()
        .map(|byte| byte.is_ascii_digit().then(|| byte - b'0'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_completes_payload() {
        assert_eq!(check_digit("453201511283036"), Some(6));
        assert_eq!(check_digit("411111111111111"), Some(1));
        assert_eq!(check_digit("45x"), None);
    }

    #[test]
    fn doubled_nine_counts_as_nine() {
        // 9 doubled is 18, whose digit sum is 9: "91" sums to 10.
        assert!(is_valid_checksum("91"));
        assert!(!is_valid_checksum("90"));
    }
}
