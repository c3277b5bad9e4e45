//! Built-in baseline catalog and reachability checks for the directory sites
//! it was compiled from.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::path::Path;
use std::time::Duration;

use crate::schema::{baseline_catalog, Course, Region};
use crate::writer::save_courses;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
const BROWSER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const KGBA_URL: &str = "http://www.kgba.co.kr/member/list.php";
const SMARTSCORE_URL: &str = "https://www.smartscore.kr/golf/club/list";

/// Region query values used by the smartscore listing
const SMARTSCORE_REGIONS: &[(Region, &str)] = &[
    (Region::Seoul, "seoul"),
    (Region::Gyeonggi, "gyeonggi"),
    (Region::Incheon, "incheon"),
    (Region::Gangwon, "gangwon"),
    (Region::Chungbuk, "chungbuk"),
    (Region::Chungnam, "chungnam"),
    (Region::Daejeon, "daejeon"),
    (Region::Sejong, "sejong"),
    (Region::Jeonbuk, "jeonbuk"),
    (Region::Jeonnam, "jeonnam"),
    (Region::Gwangju, "gwangju"),
    (Region::Gyeongbuk, "gyeongbuk"),
    (Region::Gyeongnam, "gyeongnam"),
    (Region::Daegu, "daegu"),
    (Region::Ulsan, "ulsan"),
    (Region::Busan, "busan"),
    (Region::Jeju, "jeju"),
];

/// A directory page worth checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reached { status: u16, length: usize },
    Failed(String),
}

pub fn probe_targets() -> Vec<ProbeTarget> {
    let mut targets = vec![ProbeTarget {
        label: "KGBA members".to_string(),
        url: KGBA_URL.to_string(),
    }];
    targets.extend(SMARTSCORE_REGIONS.iter().map(|(region, code)| ProbeTarget {
        label: format!("smartscore {}", region),
        url: format!("{}?region={}", SMARTSCORE_URL, code),
    }));
    targets
}

pub struct SourceProbe {
    client: Client,
}

impl SourceProbe {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7"),
        );

        let client = Client::builder()
            .user_agent(BROWSER_AGENT)
            .default_headers(headers)
            .timeout(PROBE_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a page and report its status and body length; nothing is parsed
    pub fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        let response = match self.client.get(&target.url).send() {
            Ok(response) => response,
            Err(err) => return ProbeOutcome::Failed(err.to_string()),
        };
        let status = response.status().as_u16();
        match response.text() {
            Ok(body) => ProbeOutcome::Reached {
                status,
                length: body.chars().count(),
            },
            Err(err) => ProbeOutcome::Failed(err.to_string()),
        }
    }

    pub fn probe_all(&self) -> Vec<(ProbeTarget, ProbeOutcome)> {
        probe_targets()
            .into_iter()
            .map(|target| {
                let outcome = self.probe(&target);
                match &outcome {
                    ProbeOutcome::Reached { status, length } => {
                        tracing::info!(source = %target.label, status, length, "probe")
                    }
                    ProbeOutcome::Failed(reason) => {
                        tracing::warn!(source = %target.label, %reason, "probe failed")
                    }
                }
                (target, outcome)
            })
            .collect()
    }
}

/// Write the baseline catalog to `output`, returning what was written
pub fn write_baseline(output: &Path) -> Result<Vec<Course>> {
    let courses = baseline_catalog();
    save_courses(output, &courses)
        .with_context(|| format!("Failed to write baseline catalog to {:?}", output))?;
    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::load_courses;
    use tempfile::TempDir;

    #[test]
    fn test_probe_targets_cover_every_region() {
        let targets = probe_targets();
        assert_eq!(targets.len(), 1 + 17);
        assert_eq!(targets[0].url, KGBA_URL);
        assert!(targets
            .iter()
            .any(|t| t.url == "https://www.smartscore.kr/golf/club/list?region=jeju"));
        assert!(targets.iter().all(|t| !t.label.contains("기타")));
    }

    #[test]
    fn test_write_baseline_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("golfCourses.json");

        let written = write_baseline(&path).unwrap();
        let loaded = load_courses(&path).unwrap();

        assert_eq!(loaded.len(), written.len());
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded.last().map(|c| c.id), Some(written.len() as u32));
    }
}
