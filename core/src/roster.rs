/// Parse a comma-separated list of jersey numbers, dropping anything that
/// isn't a non-negative integer. Order and duplicates are preserved.
pub fn parse_numbers(raw: &str) -> Vec<u32> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<u32>().ok())
        .collect()
}
