use std::sync::OnceLock;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Evaluate mask candidates on the rayon pool (`QR_PARALLEL_MASKS`, default on)
pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static PARALLEL_MIN_VERSION: OnceLock<u8> = OnceLock::new();

/// Smallest version whose mask search goes parallel (`QR_PARALLEL_MIN_VERSION`, default 10)
pub(crate) fn parallel_min_version() -> u8 {
    *PARALLEL_MIN_VERSION
        .get_or_init(|| parse_env_u8("QR_PARALLEL_MIN_VERSION", 10).clamp(1, 40))
}

/// Whether a symbol of `version` should run its mask search in parallel
pub(crate) fn use_parallel_search(version: u8) -> bool {
    parallel_masks() && version >= parallel_min_version()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert!(parse_env_bool_u8("QR_TEST_UNSET_BOOL_KNOB", true));
        assert_eq!(parse_env_u8("QR_TEST_UNSET_U8_KNOB", 10), 10);
    }

    #[test]
    fn test_min_version_in_range() {
        assert!((1..=40).contains(&parallel_min_version()));
    }
}
