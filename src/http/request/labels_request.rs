use serde::Serialize;

pub const WIP_LABEL: &str = "wip";

/// Labels to add to an issue, sent as a bare JSON array.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct LabelsRequest(Vec<String>);

impl LabelsRequest {
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }
}
