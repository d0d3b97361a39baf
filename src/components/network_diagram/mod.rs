mod accessible;
mod component;
mod edge;
mod interaction;
mod layout;
mod node;
mod render;
mod stats;
mod style;
pub(crate) mod tree;
mod types;

pub use accessible::DeviceOutline;
pub use component::{ConnectionLegend, DeviceStats, NetworkDiagram};
pub use types::NetworkItem;
