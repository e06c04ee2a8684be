use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 电话号码校验：必须为 10 位数字
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number must be exactly 10 digits");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 成绩校验：0 <= x <= 10，边界值合法
pub fn validate_score(score: f64) -> Result<(), &'static str> {
    if !(0.0..=10.0).contains(&score) {
        return Err("Score must be between 0 and 10");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        assert!(validate_phone("0933033801").is_ok());
        assert!(validate_phone("0000000000").is_ok());
    }

    #[test]
    fn test_phone_wrong_length() {
        assert!(validate_phone("093303380").is_err());
        assert!(validate_phone("09330338011").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_phone_non_digit() {
        assert!(validate_phone("09330a3801").is_err());
        assert!(validate_phone("+933033801").is_err());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("theanhtran13012004@gmail.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(10.0).is_ok());
        assert!(validate_score(7.5).is_ok());
        assert!(validate_score(-0.1).is_err());
        assert!(validate_score(10.1).is_err());
    }
}
