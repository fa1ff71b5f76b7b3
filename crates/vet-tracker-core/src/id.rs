//! Record identifier generation.

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a session-unique record ID.
///
/// The ID is a random base-36 fragment followed by the current Unix time in
/// milliseconds. IDs minted in different milliseconds always differ; within
/// the same millisecond the random fragment makes a clash unlikely. Not
/// suitable as a secret or as a globally unique key.
pub fn generate_id() -> String {
    let random = to_base36(uuid::Uuid::new_v4().as_u128());
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{}{}", random, millis)
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits and lowercase letters are pushed
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_id_ends_with_timestamp() {
        let before = chrono::Utc::now().timestamp_millis();
        let id = generate_id();
        let after = chrono::Utc::now().timestamp_millis();

        let stamp_len = before.to_string().len();
        let (random, stamp) = id.split_at(id.len() - stamp_len);
        let stamp: i64 = stamp.parse().unwrap();

        assert!(stamp >= before && stamp <= after);
        assert!(!random.is_empty());
        assert!(random
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_differ_across_milliseconds() {
        let first = generate_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = generate_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_ids_unique_in_burst() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
