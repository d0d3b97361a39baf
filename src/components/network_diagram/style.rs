use super::types::{ConnectionType, DeviceType};

/// Visual category for a device box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceStyle {
	pub border: &'static str,
	pub label: &'static str,
	pub plural: &'static str,
	/// Whether the type is counted in the stats strip.
	pub stats: bool,
}

/// Stroke for edges whose target uses this connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeStyle {
	pub stroke: &'static str,
	pub dash: Option<&'static str>,
	pub label: &'static str,
}

pub const EDGE_WIDTH: f64 = 2.0;
pub const EDGE_INTERACTION_WIDTH: f64 = 20.0;
pub const EDGE_IDLE_OPACITY: f64 = 0.5;
pub const EDGE_ACTIVE_OPACITY: f64 = 1.0;

impl DeviceType {
	pub fn style(self) -> DeviceStyle {
		let (border, label, plural, stats) = match self {
			DeviceType::Switch => ("#3b82f6", "Network Switch", "Network Switches", true),
			DeviceType::Converter => ("#64748b", "Media Converter", "Media Converters", false),
			DeviceType::AccessPoint => ("#22c55e", "Access Point", "Access Points", true),
			DeviceType::Camera => ("#ef4444", "Camera", "Cameras", true),
			DeviceType::Microphone => ("#f59e0b", "Microphone", "Microphones", true),
			DeviceType::Speaker => ("#eab308", "Speaker", "Speakers", true),
			DeviceType::Interface => ("#a855f7", "Interface", "Interfaces", false),
			DeviceType::Server => ("#0ea5e9", "Server", "Servers", true),
			DeviceType::ControlUnit => ("#ec4899", "Control Unit", "Control Units", false),
		};
		DeviceStyle {
			border,
			label,
			plural,
			stats,
		}
	}
}

impl ConnectionType {
	pub fn style(self) -> EdgeStyle {
		let (stroke, dash, label) = match self {
			ConnectionType::Ethernet => ("#3b82f6", None, "Ethernet"),
			ConnectionType::Fiber => ("#f97316", Some("8 4"), "Fiber"),
			ConnectionType::Wifi => ("#22c55e", Some("2 4"), "Wi-Fi"),
			ConnectionType::Cloud => ("#a855f7", Some("12 6"), "Cloud"),
			ConnectionType::Coax => ("#78716c", None, "Coax"),
		};
		EdgeStyle {
			stroke,
			dash,
			label,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn connection_strokes_are_distinguishable() {
		let strokes: HashSet<_> = ConnectionType::ALL
			.iter()
			.map(|c| (c.style().stroke, c.style().dash))
			.collect();
		assert_eq!(strokes.len(), ConnectionType::ALL.len());
	}

	#[test]
	fn fiber_is_dashed() {
		let style = ConnectionType::Fiber.style();
		assert_eq!(style.label, "Fiber");
		assert!(style.dash.is_some());
	}
}
