pub use emergence_core::{BehaviorLogic, ForceContext, ForceModel};
pub mod behavior {
    pub use emergence_core::behavior::*;
}
pub mod config {
    pub use emergence_core::config::*;
}
pub mod error {
    pub use emergence_core::error::*;
}
pub mod interaction {
    pub use emergence_core::interaction::*;
}
pub mod lifecycle {
    pub use emergence_core::lifecycle::*;
}
pub mod metrics {
    pub use emergence_core::metrics::*;
}
pub mod noise {
    pub use emergence_core::noise::*;
}
pub mod shockwave {
    pub use emergence_core::shockwave::*;
}
pub mod spatial_hash {
    pub use emergence_core::spatial_hash::*;
}
pub mod system {
    pub use emergence_core::system::*;
}
pub mod data {
    pub use emergence_data::*;
}
