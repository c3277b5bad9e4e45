use super::types::Region;

/// Address substrings mapped to regions, checked in order; first match wins.
///
/// Order matters. `광주` alone would also match 경기도 광주시, so only the
/// metropolitan form is listed, and 경기도 is checked before it anyway.
/// Long provincial names precede their short forms only for readability:
/// each pattern is tested against the whole address independently.
pub const REGION_PATTERNS: &[(&str, Region)] = &[
    ("서울", Region::Seoul),
    ("경기도", Region::Gyeonggi),
    ("인천", Region::Incheon),
    ("부산", Region::Busan),
    ("대구", Region::Daegu),
    ("대전", Region::Daejeon),
    ("광주광역시", Region::Gwangju),
    ("울산", Region::Ulsan),
    ("세종", Region::Sejong),
    ("강원", Region::Gangwon),
    ("충청남도", Region::Chungnam),
    ("충남", Region::Chungnam),
    ("충청북도", Region::Chungbuk),
    ("충북", Region::Chungbuk),
    ("경상남도", Region::Gyeongnam),
    ("경남", Region::Gyeongnam),
    ("경상북도", Region::Gyeongbuk),
    ("경북", Region::Gyeongbuk),
    ("전라남도", Region::Jeonnam),
    ("전남", Region::Jeonnam),
    ("전라북도", Region::Jeonbuk),
    ("전북", Region::Jeonbuk),
    ("제주", Region::Jeju),
];

/// Patterns that resolve to the given region, in table order
pub fn patterns_for(region: Region) -> Vec<&'static str> {
    REGION_PATTERNS
        .iter()
        .filter(|(_, r)| *r == region)
        .map(|(p, _)| *p)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_region_has_a_pattern() {
        for region in Region::ALL.iter().filter(|r| **r != Region::Other) {
            assert!(
                !patterns_for(*region).is_empty(),
                "no pattern for {}",
                region
            );
        }
        assert!(patterns_for(Region::Other).is_empty());
    }

    #[test]
    fn test_gyeonggi_precedes_gwangju() {
        let pos = |p: &str| REGION_PATTERNS.iter().position(|(q, _)| *q == p).unwrap();
        assert!(pos("경기도") < pos("광주광역시"));
    }
}
