//! Turns the nested device tree into layout-ready graph nodes.

use std::collections::HashSet;

use super::types::{ConnectionType, Device, GraphNode, NetworkItem};
use crate::error::TopologyError;

/// Lowercase, hyphen-separated form of `text` with only ASCII alphanumerics.
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	for c in text.chars() {
		if c.is_ascii_alphanumeric() {
			slug.push(c.to_ascii_lowercase());
		} else if !slug.is_empty() && !slug.ends_with('-') {
			slug.push('-');
		}
	}
	if slug.ends_with('-') {
		slug.pop();
	}
	slug
}

/// Node id for a device: slug of its name and type key.
pub fn node_id(item: &NetworkItem) -> String {
	slugify(&format!("{} {}", item.name, item.kind.key()))
}

/// Builds one graph node per device, children in input order.
pub fn build_graph_nodes(items: &[NetworkItem]) -> Vec<GraphNode> {
	items.iter().map(|item| build_node(item, None)).collect()
}

fn build_node(item: &NetworkItem, connection: Option<ConnectionType>) -> GraphNode {
	GraphNode {
		id: node_id(item),
		label: item.name.clone(),
		device: Device::from_item(item, connection),
		children: item
			.links
			.iter()
			.map(|link| build_node(&link.item, Some(link.connection.kind)))
			.collect(),
	}
}

/// Total number of devices, nested ones included.
pub fn count_devices(items: &[NetworkItem]) -> usize {
	fn count(item: &NetworkItem) -> usize {
		1 + item.links.iter().map(|link| count(&link.item)).sum::<usize>()
	}

	items.iter().map(count).sum()
}

/// Rejects trees where two devices would share a node id.
pub fn ensure_unique_ids(items: &[NetworkItem]) -> Result<(), TopologyError> {
	fn visit(item: &NetworkItem, seen: &mut HashSet<String>) -> Result<(), TopologyError> {
		let id = node_id(item);
		if !seen.insert(id.clone()) {
			return Err(TopologyError::DuplicateId { id });
		}
		item.links.iter().try_for_each(|link| visit(&link.item, seen))
	}

	let mut seen = HashSet::new();
	items.iter().try_for_each(|item| visit(item, &mut seen))
}

/// Depth-first, pre-order walk over built nodes.
pub fn walk<'a>(
	nodes: &'a [GraphNode],
	f: &mut impl FnMut(&'a GraphNode, usize, Option<&'a GraphNode>),
) {
	fn go<'a>(
		node: &'a GraphNode,
		depth: usize,
		parent: Option<&'a GraphNode>,
		f: &mut impl FnMut(&'a GraphNode, usize, Option<&'a GraphNode>),
	) {
		f(node, depth, parent);
		for child in &node.children {
			go(child, depth + 1, Some(node), f);
		}
	}

	for node in nodes {
		go(node, 0, None, f);
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	use crate::components::network_diagram::types::{
		ConnectionType, DeviceType, NestedNetworkItem, NetworkConnection, NetworkItem,
	};

	pub fn item(name: &str, kind: DeviceType) -> NetworkItem {
		NetworkItem {
			name: name.into(),
			kind,
			model: format!("{name} model"),
			url: None,
			links: Vec::new(),
		}
	}

	pub fn nested(item: NetworkItem, connection: ConnectionType) -> NestedNetworkItem {
		NestedNetworkItem {
			item,
			connection: NetworkConnection { kind: connection },
		}
	}

	pub fn with_links(mut parent: NetworkItem, links: Vec<NestedNetworkItem>) -> NetworkItem {
		parent.links = links;
		parent
	}

	/// core switch -> (fiber) barn switch -> (ethernet) 2 cameras, core -> (wifi) AP
	pub fn sample() -> Vec<NetworkItem> {
		let barn = with_links(
			item("Barn Switch", DeviceType::Switch),
			vec![
				nested(item("Barn Cam", DeviceType::Camera), ConnectionType::Ethernet),
				nested(item("Hay Cam", DeviceType::Camera), ConnectionType::Ethernet),
			],
		);
		vec![
			with_links(
				item("Core", DeviceType::Switch),
				vec![
					nested(barn, ConnectionType::Fiber),
					nested(item("Pasture AP", DeviceType::AccessPoint), ConnectionType::Wifi),
				],
			),
			item("Studio Server", DeviceType::Server),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::fixtures::*;
	use super::*;
	use crate::components::network_diagram::types::DeviceType;

	#[test]
	fn slugify_collapses_separators() {
		assert_eq!(slugify("  Barn  Cam #2 "), "barn-cam-2");
		assert_eq!(slugify("Pasture AP accessPoint"), "pasture-ap-accesspoint");
		assert_eq!(slugify("---"), "");
	}

	#[test]
	fn node_count_matches_device_count() {
		let items = sample();
		let mut built = 0;
		walk(&build_graph_nodes(&items), &mut |_, _, _| built += 1);
		assert_eq!(count_devices(&items), 6);
		assert_eq!(built, 6);
	}

	#[test]
	fn produced_ids_are_unique() {
		let mut ids = HashSet::new();
		walk(&build_graph_nodes(&sample()), &mut |node, _, _| {
			assert!(ids.insert(node.id.clone()), "duplicate id {}", node.id);
		});
	}

	#[test]
	fn preserves_order_and_connections() {
		let nodes = build_graph_nodes(&sample());
		assert_eq!(nodes[0].id, "core-switch");
		assert_eq!(nodes[1].id, "studio-server-server");
		assert!(nodes[0].device.connection.is_none());

		let barn = &nodes[0].children[0];
		assert_eq!(barn.device.connection, Some(ConnectionType::Fiber));
		let names: Vec<_> = barn.children.iter().map(|c| c.label.as_str()).collect();
		assert_eq!(names, ["Barn Cam", "Hay Cam"]);
		assert!(nodes[1].children.is_empty());
	}

	#[test]
	fn same_name_different_type_is_allowed() {
		let items = vec![with_links(
			item("Stage", DeviceType::Switch),
			vec![nested(item("Stage", DeviceType::Speaker), ConnectionType::Coax)],
		)];
		assert_eq!(ensure_unique_ids(&items), Ok(()));
	}

	#[test]
	fn duplicate_ids_are_rejected_at_any_depth() {
		let items = vec![
			with_links(
				item("Core", DeviceType::Switch),
				vec![nested(item("Cam", DeviceType::Camera), ConnectionType::Ethernet)],
			),
			with_links(
				item("Edge", DeviceType::Switch),
				vec![nested(item("cam", DeviceType::Camera), ConnectionType::Wifi)],
			),
		];
		assert_eq!(
			ensure_unique_ids(&items),
			Err(TopologyError::DuplicateId {
				id: "cam-camera".into()
			})
		);
	}

	#[test]
	fn empty_tree_builds_nothing() {
		assert!(build_graph_nodes(&[]).is_empty());
		assert_eq!(count_devices(&[]), 0);
	}
}
