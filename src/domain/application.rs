// Copyright (c) 2025 - Cowboy AI, Inc.
//! Marathon application descriptors
//!
//! Only the fields needed to place an application's tasks onto agents are
//! modelled; everything else in the Marathon payload is ignored.

use serde::{Deserialize, Serialize};

/// A running task and the agent it is scheduled on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Marathon task id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Mesos agent id the task runs on
    #[serde(rename = "slaveId")]
    pub agent_id: String,

    /// Agent hostname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl TaskRecord {
    /// Create a task record placed on the given agent
    pub fn on_agent(agent_id: impl Into<String>) -> Self {
        Self {
            id: None,
            agent_id: agent_id.into(),
            host: None,
        }
    }
}

/// Application id plus the tasks it launched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Absolute application id, e.g. `/group/app`
    pub id: String,

    /// Tasks currently launched; absent in payloads without `embed=app.tasks`
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl AppDescriptor {
    /// Create an application descriptor
    pub fn new(id: impl Into<String>, tasks: Vec<TaskRecord>) -> Self {
        Self {
            id: id.into(),
            tasks,
        }
    }

    /// Agent ids of all tasks, in task order
    pub fn agent_ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|task| task.agent_id.as_str())
    }
}
