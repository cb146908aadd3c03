/// Seed source used when no viewer profile is available
///
/// Anonymous browsing still gets a stable order per process, just not a
/// per-user one.
pub const ANONYMOUS_SEED_SOURCE: &str = "anonymous";

/// Derive a 32-bit seed from a user-identifying string
///
/// Rolling hash: for each character, `hash = (hash * 31 - hash) + code`,
/// wrapped to 32 bits at every step, with the absolute value of the final
/// signed result taken at the end. Characters are hashed as UTF-16 code
/// units because the identifying strings (emails) originate from the
/// mobile client, and the same string must produce the same seed on both
/// sides bit for bit.
pub fn seed_from_str(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash
            .wrapping_mul(31)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_seeds() {
        // Pinned values; a change here breaks every per-user ordering
        assert_eq!(seed_from_str(""), 0);
        assert_eq!(seed_from_str("a"), 97);
        assert_eq!(seed_from_str("anonymous"), 1_481_600_013);
        assert_eq!(seed_from_str("u@example.com"), 529_984_603);
    }

    #[test]
    fn test_same_input_same_seed() {
        let email = "alice@example.com";
        assert_eq!(seed_from_str(email), seed_from_str(email));
    }

    #[test]
    fn test_distinct_emails_distinct_seeds() {
        assert_ne!(
            seed_from_str("alice@example.com"),
            seed_from_str("bob@example.com")
        );
    }

    #[test]
    fn test_non_ascii_input_hashes_as_utf16_units() {
        // Wraps through the full 32-bit range without panicking
        let seed = seed_from_str("émilie.何@example.jp");
        assert_eq!(seed, seed_from_str("émilie.何@example.jp"));
    }

    #[test]
    fn test_anonymous_constant_is_stable() {
        assert_eq!(ANONYMOUS_SEED_SOURCE, "anonymous");
    }
}
