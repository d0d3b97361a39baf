use serde::Deserialize;

/// Kind of hardware a device box represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceType {
	Switch,
	Converter,
	AccessPoint,
	Camera,
	Microphone,
	Speaker,
	Interface,
	Server,
	#[serde(rename = "controlunit")]
	ControlUnit,
}

impl DeviceType {
	/// Declaration order, used wherever output must be stable.
	pub const ALL: [DeviceType; 9] = [
		DeviceType::Switch,
		DeviceType::Converter,
		DeviceType::AccessPoint,
		DeviceType::Camera,
		DeviceType::Microphone,
		DeviceType::Speaker,
		DeviceType::Interface,
		DeviceType::Server,
		DeviceType::ControlUnit,
	];

	/// Key as written in the device tree, also used in node ids.
	pub fn key(self) -> &'static str {
		match self {
			DeviceType::Switch => "switch",
			DeviceType::Converter => "converter",
			DeviceType::AccessPoint => "accessPoint",
			DeviceType::Camera => "camera",
			DeviceType::Microphone => "microphone",
			DeviceType::Speaker => "speaker",
			DeviceType::Interface => "interface",
			DeviceType::Server => "server",
			DeviceType::ControlUnit => "controlunit",
		}
	}
}

/// Physical or logical medium linking a device to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
	Ethernet,
	Fiber,
	Wifi,
	Cloud,
	Coax,
}

impl ConnectionType {
	pub const ALL: [ConnectionType; 5] = [
		ConnectionType::Ethernet,
		ConnectionType::Fiber,
		ConnectionType::Wifi,
		ConnectionType::Cloud,
		ConnectionType::Coax,
	];
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkConnection {
	#[serde(rename = "type")]
	pub kind: ConnectionType,
}

/// A device in the tree. Root-level devices have no connection of their own.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkItem {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: DeviceType,
	pub model: String,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub links: Vec<NestedNetworkItem>,
}

/// A device hanging off a parent, plus how it is attached to that parent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NestedNetworkItem {
	#[serde(flatten)]
	pub item: NetworkItem,
	pub connection: NetworkConnection,
}

/// The per-device payload carried by graph nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Device {
	pub name: String,
	pub kind: DeviceType,
	pub model: String,
	pub url: Option<String>,
	/// How this device links to its parent; `None` for roots.
	pub connection: Option<ConnectionType>,
}

impl Device {
	pub fn from_item(item: &NetworkItem, connection: Option<ConnectionType>) -> Self {
		Self {
			name: item.name.clone(),
			kind: item.kind,
			model: item.model.clone(),
			url: item.url.clone(),
			connection,
		}
	}
}

/// Layout-ready node produced by the tree builder.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub device: Device,
	pub children: Vec<GraphNode>,
}

/// Parent to child link. Styled by the target's connection type.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
}

/// A node after the layout pass assigned its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub id: String,
	pub label: String,
	pub device: Device,
	pub depth: usize,
	pub x: f64,
	pub y: f64,
}
