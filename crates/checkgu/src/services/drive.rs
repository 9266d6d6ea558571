//! Simulated Google Drive connection.
//!
//! Nothing leaves the process: connecting hands out a mock token for the
//! configured account and exports produce deterministic mock URLs.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::DriveConfig;
use crate::error::DriveError;
use crate::model::LessonPlanRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    pub connected: bool,
    pub user_email: String,
    pub connected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    pub id: String,
    pub name: String,
    pub url: String,
    pub exported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFolder {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub modified_time: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Connection {
    user_email: String,
    access_token: String,
    connected_at: Option<DateTime<Utc>>,
}

impl Connection {
    fn is_connected(&self) -> bool {
        self.connected_at.is_some()
    }
}

pub struct DriveClient {
    config: DriveConfig,
    connection: Mutex<Connection>,
}

impl DriveClient {
    pub fn new(config: DriveConfig) -> Self {
        Self {
            config,
            connection: Mutex::new(Connection::default()),
        }
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }
    }

    pub async fn status(&self) -> ConnectionStatus {
        self.simulate_latency().await;
        let conn = self.connection.lock().await;
        ConnectionStatus {
            connected: conn.is_connected(),
            user_email: conn.user_email.clone(),
            connected_at: conn.connected_at,
        }
    }

    /// Completes the mock authorization for the configured account.
    pub async fn connect(&self) -> ConnectionStatus {
        self.simulate_latency().await;
        let mut conn = self.connection.lock().await;
        let now = Utc::now();
        *conn = Connection {
            user_email: self.config.account_email.clone(),
            access_token: format!("mock_access_token_{}", uuid::Uuid::new_v4().simple()),
            connected_at: Some(now),
        };
        info!("Connected to Google Drive (mock)");
        ConnectionStatus {
            connected: true,
            user_email: conn.user_email.clone(),
            connected_at: Some(now),
        }
    }

    pub async fn disconnect(&self) {
        self.simulate_latency().await;
        *self.connection.lock().await = Connection::default();
        info!("Disconnected from Google Drive (mock)");
    }

    /// The access token of the current session, if connected.
    pub async fn access_token(&self) -> Option<String> {
        let conn = self.connection.lock().await;
        conn.is_connected().then(|| conn.access_token.clone())
    }

    async fn require_connection(&self) -> Result<(), DriveError> {
        if self.connection.lock().await.is_connected() {
            Ok(())
        } else {
            Err(DriveError::NotConnected)
        }
    }

    pub async fn export_file(&self, plan: &LessonPlanRecord) -> Result<ExportedFile, DriveError> {
        self.simulate_latency().await;
        self.require_connection().await?;
        if plan.file_name.trim().is_empty() {
            return Err(DriveError::EmptyFileName);
        }

        let file = ExportedFile {
            id: format!("mock_drive_file_{}", uuid::Uuid::new_v4().simple()),
            name: plan.file_name.clone(),
            url: format!("https://drive.google.com/file/d/mock_id_{}/view", plan.id),
            exported_at: Utc::now(),
        };
        debug!(record_id = plan.id, "Exported lesson plan to Drive (mock)");
        Ok(file)
    }

    pub async fn create_folder(&self, name: &str) -> Result<DriveFolder, DriveError> {
        self.simulate_latency().await;
        self.require_connection().await?;
        if name.trim().is_empty() {
            return Err(DriveError::EmptyFolderName);
        }

        let id = format!("mock_folder_{}", uuid::Uuid::new_v4().simple());
        Ok(DriveFolder {
            url: format!("https://drive.google.com/drive/folders/{}", id),
            id,
            name: name.trim().to_string(),
        })
    }

    pub async fn list_files(&self) -> Result<Vec<DriveFile>, DriveError> {
        self.simulate_latency().await;
        self.require_connection().await?;

        let now = Utc::now();
        Ok(vec![
            DriveFile {
                id: "mock_file_1".to_string(),
                name: "Lesson Plan - Mathematics.docx".to_string(),
                modified_time: now - chrono::Duration::days(1),
            },
            DriveFile {
                id: "mock_file_2".to_string(),
                name: "Science Lesson Template.docx".to_string(),
                modified_time: now - chrono::Duration::days(2),
            },
        ])
    }
}
