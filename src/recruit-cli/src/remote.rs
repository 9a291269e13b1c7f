//! HTTP data server client
//!
//! The server evaluates one tag subset per request:
//!
//! ```text
//! GET {server}/static/gacha/calculate?recruitment=11,9
//! {"recruitment": [{"label": ["Top Operator", "Melee"], "operators": [...]}]}
//! ```

use anyhow::{bail, Result};
use recruit::{GachaTag, Operator, OperatorRecord, Roster, SourceError, SubsetSource, Tag};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CalculateResponse {
    #[serde(default)]
    recruitment: Vec<CalculatedSubset>,
}

#[derive(Debug, Deserialize)]
struct CalculatedSubset {
    #[serde(default)]
    label: Vec<String>,
    #[serde(default)]
    operators: Vec<OperatorRecord>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    tags: Vec<GachaTag>,
}

/// Query string value for a subset: comma-joined tag ids
fn recruitment_param(subset: &[Tag]) -> String {
    subset
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Operators in every returned entry; records that cannot be typed are skipped
fn parse_calculate(body: &str) -> Result<Vec<Operator>, SourceError> {
    let response: CalculateResponse =
        serde_json::from_str(body).map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

    let records = response.recruitment.into_iter().flat_map(|entry| {
        tracing::debug!("[{}]: {} operator(s)", entry.label.join(", "), entry.operators.len());
        entry.operators
    });
    Ok(Roster::from_records(records).into_operators())
}

/// Subset source backed by the data server's calculate endpoint
#[derive(Clone)]
pub struct HttpSubsetSource {
    server: String,
    agent: ureq::Agent,
}

impl HttpSubsetSource {
    pub fn new(server: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            server: server.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Tag table served at `/static/gacha/tags`
    pub fn fetch_tags(&self) -> Result<Vec<GachaTag>> {
        let url = format!("{}/static/gacha/tags", self.server);

        match self.agent.get(&url).call() {
            Ok(resp) => {
                let result: TagsResponse = resp.into_json()?;
                Ok(result.tags)
            }
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                bail!("Server returned {}: {}", code, body);
            }
            Err(e) => {
                bail!("Request failed: {}", e);
            }
        }
    }
}

impl SubsetSource for HttpSubsetSource {
    fn fetch(&self, subset: &[Tag]) -> Result<Vec<Operator>, SourceError> {
        let url = format!("{}/static/gacha/calculate", self.server);
        let recruitment = recruitment_param(subset);
        tracing::debug!("GET {}?recruitment={}", url, recruitment);

        match self.agent.get(&url).query("recruitment", &recruitment).call() {
            Ok(resp) => {
                let body = resp
                    .into_string()
                    .map_err(|e| SourceError::Transport(e.to_string()))?;
                parse_calculate(&body)
            }
            Err(ureq::Error::Status(code, _)) => Err(SourceError::Status(code)),
            Err(e) => Err(SourceError::Transport(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit::{ids, Rarity};

    #[test]
    fn test_recruitment_param() {
        let subset = vec![
            Tag::new(ids::TOP_OPERATOR, "Top Operator"),
            Tag::new(ids::MELEE, "Melee"),
        ];
        assert_eq!(recruitment_param(&subset), "11,9");
    }

    #[test]
    fn test_parse_calculate() {
        let body = r#"{
            "recruitment": [{
                "label": ["Top Operator", "Melee"],
                "operators": [
                    {"id": "char_172_svrash", "name": "SilverAsh", "rarity": "TIER_6", "profession": "WARRIOR", "position": "MELEE", "tag_list": ["DPS", "Support"]},
                    {"id": "char_103_angel", "name": "Exusiai", "rarity": "TIER_6", "profession": "SNIPER", "position": "RANGED", "tagList": ["DPS"]},
                    {"id": "token_10001", "name": "Drone", "rarity": "TIER_1", "profession": "TOKEN", "position": "RANGED"}
                ]
            }]
        }"#;
        let operators = parse_calculate(body).unwrap();
        assert_eq!(operators.len(), 2);
        assert_eq!(operators[0].rarity, Rarity::TOP);
        assert_eq!(operators[0].tag_list, vec!["DPS".to_string(), "Support".to_string()]);
    }

    #[test]
    fn test_parse_calculate_error_payload_is_empty() {
        let body = r#"{"error": "No valid tags found", "recruitment": []}"#;
        assert!(parse_calculate(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_calculate_malformed() {
        let err = parse_calculate("<html>502</html>").unwrap_err();
        assert!(matches!(err, SourceError::InvalidResponse(_)));
    }

    #[test]
    fn test_server_trailing_slash() {
        let source = HttpSubsetSource::new("http://localhost:3000/");
        assert_eq!(source.server(), "http://localhost:3000");
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Nothing listens once the listener is dropped
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let source = HttpSubsetSource::new(&format!("http://127.0.0.1:{}", port));
        let err = source.fetch(&[Tag::new(ids::GUARD, "Guard")]).unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }
}
