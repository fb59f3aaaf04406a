use serde::{Deserialize, Serialize};

use crate::domain::form::FormValues;

/// Mode switch triggers: mount an empty form, mount a pre-filled form, or unmount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModeMsg {
    EnterAdd,
    EnterEdit(FormValues),
    Reset,
}
