use serde::{Deserialize, Serialize};

pub mod form;
pub mod mode;
pub mod system;

use form::FormMsg;
use mode::ModeMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Mode switch (Add / Edit / Reset)
    Mode(ModeMsg),

    // Operations on the mounted form
    Form(FormMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system) => system.is_frequent(),
            Msg::Mode(_) => false,
            Msg::Form(form) => form.is_frequent(),
        }
    }
}
