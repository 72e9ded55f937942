//! Declared-state records for each manageable sub-resource kind, plus the
//! wire-side structs they decode from and encode to.

mod device;
mod identity;
mod input;
mod switch;

pub use device::DeviceInfo;
pub(crate) use device::SysConfig;
pub use identity::IdentityConfig;
pub use input::{InputConfig, InputType};
pub use switch::{InMode, InitialState, SwitchConfig};
