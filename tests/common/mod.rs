#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

pub fn ticketdesk_binary() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/ticketdesk")
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/ticketdesk")
    }
}

/// Helper struct to run ticketdesk commands in an isolated temp directory
pub struct DeskTest {
    pub temp_dir: TempDir,
    api_url: Option<String>,
}

impl DeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        DeskTest {
            temp_dir,
            api_url: None,
        }
    }

    /// Point every command at this backend through the environment
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(ticketdesk_binary());
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TICKETDESK_ROOT", self.temp_dir.path().join(".ticketdesk"))
            .env("NO_COLOR", "1")
            .env_remove("TICKETDESK_LOG");
        match &self.api_url {
            Some(url) => command.env("TICKETDESK_API_URL", url),
            None => command.env_remove("TICKETDESK_API_URL"),
        };
        command
            .output()
            .expect("Failed to execute ticketdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".ticketdesk");
        fs::create_dir_all(&dir).expect("Failed to create .ticketdesk directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join(".ticketdesk").join("config.yaml")).ok()
    }
}

/// A ticket as the backend serializes it
pub fn ticket_json(id: u64, category: &str, status: &str) -> Value {
    json!({
        "id": id,
        "ticketId": format!("TCK-{id}"),
        "senderEmail": format!("user{id}@example.com"),
        "message": format!("Problem report number {id}"),
        "category": category,
        "confidence": 0.87,
        "status": status,
        "createdAt": "2024-05-01T10:20:30",
    })
}

/// A paginated listing body
pub fn page_json(tickets: Vec<Value>, total_pages: u32, total_elements: u64) -> Value {
    json!({
        "content": tickets,
        "totalPages": total_pages,
        "totalElements": total_elements,
    })
}
