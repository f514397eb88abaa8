/// Current UTC time as Unix seconds
pub fn now_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_seconds_is_seconds() {
        let secs = now_seconds();
        assert!(secs > 1_700_000_000);
        assert!(secs < 100_000_000_000);
    }
}
