use validator::ValidateEmail;

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

/// `YYYY-MM-DD`, and the digits must name a real calendar date.
pub fn is_valid_fecha(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    digits_ok && chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// `HH:MM` or `HH:MM:SS`; hour 0-23 with one or two digits, minutes and
/// seconds always two digits in 00-59.
pub fn is_valid_hora(value: &str) -> bool {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return false;
    }

    let hour = parts[0];
    let hour_ok = (1..=2).contains(&hour.len())
        && hour.bytes().all(|b| b.is_ascii_digit())
        && hour.parse::<u8>().map(|h| h <= 23).unwrap_or(false);

    hour_ok && parts[1..].iter().all(|part| is_sexagesimal(part))
}

fn is_sexagesimal(part: &str) -> bool {
    part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) && part.as_bytes()[0] <= b'5'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fecha_requires_padded_pattern() {
        assert!(is_valid_fecha("2024-01-02"));
        assert!(!is_valid_fecha("2024-1-2"));
        assert!(!is_valid_fecha("01-02-2024"));
        assert!(!is_valid_fecha(""));
    }

    #[test]
    fn fecha_rejects_impossible_dates() {
        assert!(!is_valid_fecha("2024-13-01"));
        assert!(!is_valid_fecha("2024-02-30"));
        assert!(is_valid_fecha("2024-02-29"));
    }

    #[test]
    fn hora_accepts_short_hours_and_optional_seconds() {
        assert!(is_valid_hora("7:30"));
        assert!(is_valid_hora("07:30"));
        assert!(is_valid_hora("23:59:59"));
        assert!(!is_valid_hora("24:00"));
        assert!(!is_valid_hora("12:60"));
        assert!(!is_valid_hora("12:30:60"));
        assert!(!is_valid_hora("12"));
        assert!(!is_valid_hora("12:3"));
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("persona@example.com"));
        assert!(!is_valid_email("persona@"));
        assert!(!is_valid_email("no-es-correo"));
    }
}
