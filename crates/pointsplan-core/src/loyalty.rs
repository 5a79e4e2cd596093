// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use crate::client::join_url;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use chrono::NaiveDateTime;
use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque program id. Signed-in users get database integers, anonymous
/// sessions get strings like `temp_3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramId {
    Numeric(i64),
    Session(String),
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramId::Numeric(n) => write!(f, "{}", n),
            ProgramId::Session(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ProgramId {
    fn from(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(n) => ProgramId::Numeric(n),
            Err(_) => ProgramId::Session(s.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    Airline,
    Hotel,
    CreditCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    pub id: ProgramId,
    pub program_name: String,
    pub points_balance: i64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProgram {
    pub program_type: ProgramType,
    pub program_name: String,
    pub points_balance: i64,
}

impl NewProgram {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.program_name.trim().is_empty() {
            errors.push("Please select a program".to_string());
        }
        if let Err(e) = validate_balance(self.points_balance) {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_balance(points: i64) -> Result<(), String> {
    if points < 0 {
        return Err("Please enter a valid points balance".to_string());
    }
    Ok(())
}

/// `{status, message}` envelope shared by the `/points` routes.
#[derive(Debug, Deserialize)]
struct ApiReply {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    id: Option<ProgramId>,
    #[serde(default)]
    programs: Option<Vec<LoyaltyProgram>>,
}

impl ApiReply {
    fn into_result(self) -> Result<Self, PlannerError> {
        if self.status == "success" {
            Ok(self)
        } else {
            Err(PlannerError::Upstream(self.message.or(self.error)))
        }
    }
}

/// Blocking client for the loyalty-program routes. The server owns storage.
pub struct LoyaltyClient {
    http: Client,
    base_url: String,
}

impl LoyaltyClient {
    pub fn new(config: &PlannerConfig) -> Result<Self, PlannerError> {
        let http = Client::builder().timeout(config.short_timeout()).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn list(&self) -> Result<Vec<LoyaltyProgram>, PlannerError> {
        let url = join_url(&self.base_url, "points/list");
        debug!("Listing loyalty programs — url={}", url);
        let reply = Self::decode(self.http.get(&url).send()?)?;
        Ok(reply.programs.unwrap_or_default())
    }

    /// Returns the id the server assigned.
    pub fn add(&self, program: &NewProgram) -> Result<ProgramId, PlannerError> {
        program.validate().map_err(PlannerError::InvalidRequest)?;
        info!(
            "Adding loyalty program — name={} type={:?}",
            program.program_name, program.program_type
        );
        let reply = self.post("points/add", program)?;
        reply
            .id
            .ok_or_else(|| PlannerError::MalformedResponse("missing program id".to_string()))
    }

    pub fn update(&self, id: &ProgramId, points_balance: i64) -> Result<(), PlannerError> {
        validate_balance(points_balance).map_err(|e| PlannerError::InvalidRequest(vec![e]))?;
        info!("Updating loyalty program — id={} points={}", id, points_balance);
        self.post(
            "points/update",
            &serde_json::json!({ "id": id, "points_balance": points_balance }),
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &ProgramId) -> Result<(), PlannerError> {
        info!("Deleting loyalty program — id={}", id);
        self.post("points/delete", &serde_json::json!({ "id": id }))?;
        Ok(())
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiReply, PlannerError> {
        let url = join_url(&self.base_url, path);
        Self::decode(self.http.post(&url).json(body).send()?)
    }

    fn decode(response: reqwest::blocking::Response) -> Result<ApiReply, PlannerError> {
        let status = response.status();
        let body = response.text()?;
        match serde_json::from_str::<ApiReply>(&body) {
            Ok(reply) => reply.into_result(),
            Err(_) if !status.is_success() => Err(PlannerError::Upstream(None)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_ids_from_both_backends() {
        let programs: Vec<LoyaltyProgram> = serde_json::from_str(
            r#"[
                {"id": 12, "program_name": "World of Hyatt", "points_balance": 85000,
                 "created_at": "2025-03-01T10:00:00.250000"},
                {"id": "temp_1", "program_name": "Chase Ultimate Rewards", "points_balance": 200000}
            ]"#,
        )
        .unwrap();
        assert_eq!(programs[0].id, ProgramId::Numeric(12));
        assert!(programs[0].created_at.is_some());
        assert_eq!(programs[1].id, ProgramId::Session("temp_1".to_string()));
        assert_eq!(programs[1].id.to_string(), "temp_1");
    }

    #[test]
    fn test_id_from_cli_text() {
        assert_eq!(ProgramId::from("42"), ProgramId::Numeric(42));
        assert_eq!(ProgramId::from("temp_7"), ProgramId::Session("temp_7".into()));
    }

    #[test]
    fn test_new_program_validation() {
        let program = NewProgram {
            program_type: ProgramType::Hotel,
            program_name: " ".to_string(),
            points_balance: -5,
        };
        assert_eq!(program.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn test_program_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProgramType::CreditCard).unwrap(),
            "\"creditcard\""
        );
        assert_eq!(serde_json::to_string(&ProgramType::Airline).unwrap(), "\"airline\"");
    }

    #[test]
    fn test_error_reply() {
        let reply: ApiReply =
            serde_json::from_str(r#"{"status": "error", "message": "Program not found"}"#).unwrap();
        let err = reply.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Program not found");
    }

    #[test]
    fn test_negative_update_rejected_before_sending() {
        let client = LoyaltyClient::new(&PlannerConfig::default()).unwrap();
        let err = client.update(&ProgramId::Numeric(1), -1).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidRequest(_)));
    }
}
