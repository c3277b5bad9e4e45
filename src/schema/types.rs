use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Hole count assumed when a source does not say
pub const DEFAULT_HOLES: u32 = 18;

/// First-level administrative region, serialized with its short Korean label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "서울")]
    Seoul,
    #[serde(rename = "경기")]
    Gyeonggi,
    #[serde(rename = "인천")]
    Incheon,
    #[serde(rename = "부산")]
    Busan,
    #[serde(rename = "대구")]
    Daegu,
    #[serde(rename = "대전")]
    Daejeon,
    #[serde(rename = "광주")]
    Gwangju,
    #[serde(rename = "울산")]
    Ulsan,
    #[serde(rename = "세종")]
    Sejong,
    #[serde(rename = "강원")]
    Gangwon,
    #[serde(rename = "충남")]
    Chungnam,
    #[serde(rename = "충북")]
    Chungbuk,
    #[serde(rename = "경남")]
    Gyeongnam,
    #[serde(rename = "경북")]
    Gyeongbuk,
    #[serde(rename = "전남")]
    Jeonnam,
    #[serde(rename = "전북")]
    Jeonbuk,
    #[serde(rename = "제주")]
    Jeju,
    /// Sentinel for addresses that match no region pattern
    #[serde(rename = "기타")]
    Other,
}

impl Region {
    pub const ALL: &'static [Region] = &[
        Region::Seoul,
        Region::Gyeonggi,
        Region::Incheon,
        Region::Busan,
        Region::Daegu,
        Region::Daejeon,
        Region::Gwangju,
        Region::Ulsan,
        Region::Sejong,
        Region::Gangwon,
        Region::Chungnam,
        Region::Chungbuk,
        Region::Gyeongnam,
        Region::Gyeongbuk,
        Region::Jeonnam,
        Region::Jeonbuk,
        Region::Jeju,
        Region::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Seoul => "서울",
            Region::Gyeonggi => "경기",
            Region::Incheon => "인천",
            Region::Busan => "부산",
            Region::Daegu => "대구",
            Region::Daejeon => "대전",
            Region::Gwangju => "광주",
            Region::Ulsan => "울산",
            Region::Sejong => "세종",
            Region::Gangwon => "강원",
            Region::Chungnam => "충남",
            Region::Chungbuk => "충북",
            Region::Gyeongnam => "경남",
            Region::Gyeongbuk => "경북",
            Region::Jeonnam => "전남",
            Region::Jeonbuk => "전북",
            Region::Jeju => "제주",
            Region::Other => "기타",
        }
    }

    /// Look up a region by its short label
    pub fn from_label(label: &str) -> Option<Region> {
        Region::ALL.iter().copied().find(|r| r.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Course operating model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CourseType {
    #[serde(rename = "회원제")]
    Membership,
    #[default]
    #[serde(rename = "퍼블릭")]
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "하")]
    Low,
    #[default]
    #[serde(rename = "중")]
    Medium,
    #[serde(rename = "상")]
    High,
}

/// One entry of the canonical catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub region: Region,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_holes")]
    pub holes: u32,
    #[serde(rename = "type", default)]
    pub course_type: CourseType,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub longitude: Option<f64>,
    /// Fields this tool does not know about, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_holes() -> u32 {
    DEFAULT_HOLES
}

/// Coordinates show up as numbers, numeric strings, empty strings or null
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_coordinate(&s),
        _ => None,
    })
}

/// Parse a free-text coordinate; blank or malformed input yields `None`
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
