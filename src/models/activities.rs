use serde::{Deserialize, Serialize};

// One extracurricular offering. The activity name is the key in the store,
// not a field here, so the struct serializes exactly as the API exposes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}
