//! Pure geometry and lookups shared by the node and edge views.

use super::layout::{NODE_HEIGHT, NODE_WIDTH};
use super::style::EdgeStyle;
use super::types::{ConnectionType, Device, GraphEdge, PositionedNode};
use crate::error::TopologyError;

const CURVATURE: f64 = 0.25;

/// Which connection points a node needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Handles {
	/// Some edge starts here (outgoing, right side).
	pub source: bool,
	/// Some edge ends here (incoming, left side).
	pub target: bool,
}

/// Scans `edges` until both a source and a target edge have been seen.
pub fn handles_for(id: &str, edges: &[GraphEdge]) -> Handles {
	let mut handles = Handles::default();
	for edge in edges {
		handles.source |= edge.source == id;
		handles.target |= edge.target == id;
		if handles.source && handles.target {
			break;
		}
	}
	handles
}

/// Attributes of the anchor wrapping a device that has a `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
	pub href: String,
	pub target: &'static str,
	pub rel: &'static str,
}

pub fn external_link(device: &Device) -> Option<ExternalLink> {
	device.url.as_ref().map(|url| ExternalLink {
		href: url.clone(),
		target: "_blank",
		rel: "noopener noreferrer",
	})
}

/// Finds both ends of `edge`, stopping as soon as both are found.
pub fn resolve_endpoints<'a>(
	nodes: &'a [PositionedNode],
	edge: &GraphEdge,
) -> Result<(&'a PositionedNode, &'a PositionedNode), TopologyError> {
	let (mut source, mut target) = (None, None);
	for node in nodes {
		if source.is_none() && node.id == edge.source {
			source = Some(node);
		}
		if target.is_none() && node.id == edge.target {
			target = Some(node);
		}
		if source.is_some() && target.is_some() {
			break;
		}
	}

	let missing = |id: &str| TopologyError::MissingEndpoint {
		edge: edge.id.clone(),
		id: id.to_string(),
	};
	Ok((
		source.ok_or_else(|| missing(&edge.source))?,
		target.ok_or_else(|| missing(&edge.target))?,
	))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Outgoing connection point on the right edge of a box.
pub fn source_anchor(node: &PositionedNode) -> Point {
	Point {
		x: node.x + NODE_WIDTH,
		y: node.y + NODE_HEIGHT / 2.0,
	}
}

/// Incoming connection point on the left edge of a box.
pub fn target_anchor(node: &PositionedNode) -> Point {
	Point {
		x: node.x,
		y: node.y + NODE_HEIGHT / 2.0,
	}
}

fn control_offset(distance: f64) -> f64 {
	if distance >= 0.0 {
		0.5 * distance
	} else {
		CURVATURE * 25.0 * (-distance).sqrt()
	}
}

/// SVG path data and the curve midpoint for a horizontal bezier.
pub fn bezier_path(source: Point, target: Point) -> (String, Point) {
	let source_cx = source.x + control_offset(target.x - source.x);
	let target_cx = target.x - control_offset(target.x - source.x);

	let mid = Point {
		x: source.x * 0.125 + source_cx * 0.375 + target_cx * 0.375 + target.x * 0.125,
		y: source.y * 0.5 + target.y * 0.5,
	};
	let path = format!(
		"M{},{} C{},{} {},{} {},{}",
		source.x, source.y, source_cx, source.y, target_cx, target.y, target.x, target.y
	);
	(path, mid)
}

/// Everything the edge and its label need for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedEdge {
	pub id: String,
	pub path: String,
	pub label_at: Point,
	pub connection: ConnectionType,
}

impl RoutedEdge {
	pub fn style(&self) -> EdgeStyle {
		self.connection.style()
	}
}

/// Resolves `edge` against `nodes` and computes its curve. The target's
/// connection decides the styling, since it describes the child's uplink.
pub fn route_edge(
	nodes: &[PositionedNode],
	edge: &GraphEdge,
) -> Result<RoutedEdge, TopologyError> {
	let (source, target) = resolve_endpoints(nodes, edge)?;
	let connection = target
		.device
		.connection
		.ok_or_else(|| TopologyError::MissingConnection {
			id: target.id.clone(),
		})?;
	let (path, label_at) = bezier_path(source_anchor(source), target_anchor(target));
	Ok(RoutedEdge {
		id: edge.id.clone(),
		path,
		label_at,
		connection,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_diagram::layout::layout;
	use crate::components::network_diagram::tree::{build_graph_nodes, fixtures::sample};
	use crate::components::network_diagram::types::DeviceType;

	fn edge(source: &str, target: &str) -> GraphEdge {
		GraphEdge {
			id: format!("{source}->{target}"),
			source: source.into(),
			target: target.into(),
		}
	}

	fn device(url: Option<&str>) -> Device {
		Device {
			name: "Gate Cam".into(),
			kind: DeviceType::Camera,
			model: "G4".into(),
			url: url.map(Into::into),
			connection: None,
		}
	}

	#[test]
	fn handles_reflect_edge_roles() {
		let edges = [edge("a", "b"), edge("b", "c")];
		assert_eq!(
			handles_for("a", &edges),
			Handles {
				source: true,
				target: false
			}
		);
		assert_eq!(
			handles_for("b", &edges),
			Handles {
				source: true,
				target: true
			}
		);
		assert_eq!(
			handles_for("c", &edges),
			Handles {
				source: false,
				target: true
			}
		);
		assert_eq!(handles_for("z", &edges), Handles::default());
	}

	#[test]
	fn device_without_url_is_not_a_link() {
		assert_eq!(external_link(&device(None)), None);
	}

	#[test]
	fn device_with_url_links_safely() {
		let link = external_link(&device(Some("https://example.com/cam"))).unwrap();
		assert_eq!(link.href, "https://example.com/cam");
		assert_eq!(link.target, "_blank");
		assert_eq!(link.rel, "noopener noreferrer");
	}

	#[test]
	fn missing_endpoint_is_an_error() {
		let l = layout(&build_graph_nodes(&sample()));
		let err = resolve_endpoints(&l.nodes, &edge("core-switch", "ghost-camera")).unwrap_err();
		assert_eq!(
			err,
			TopologyError::MissingEndpoint {
				edge: "core-switch->ghost-camera".into(),
				id: "ghost-camera".into()
			}
		);
		assert!(route_edge(&l.nodes, &edge("nope", "core-switch")).is_err());
		assert_eq!(
			route_edge(&l.nodes, &edge("barn-switch-switch", "core-switch")),
			Err(TopologyError::MissingConnection {
				id: "core-switch".into()
			})
		);
	}

	#[test]
	fn target_connection_styles_the_edge() {
		let l = layout(&build_graph_nodes(&sample()));
		let routed = route_edge(&l.nodes, &l.edges[0]).unwrap();
		assert_eq!(routed.connection, ConnectionType::Fiber);
		assert_eq!(routed.style().label, "Fiber");
		assert_eq!(routed.style(), ConnectionType::Fiber.style());
	}

	#[test]
	fn bezier_midpoint_lies_between_anchors() {
		let (path, mid) = bezier_path(Point { x: 200.0, y: 32.0 }, Point { x: 280.0, y: 120.0 });
		assert_eq!(path, "M200,32 C240,32 240,120 280,120");
		assert_eq!(mid, Point { x: 240.0, y: 76.0 });
	}

	#[test]
	fn backwards_bezier_bends_outward() {
		let (path, _) = bezier_path(Point { x: 100.0, y: 0.0 }, Point { x: 0.0, y: 0.0 });
		assert_eq!(path, "M100,0 C162.5,0 -62.5,0 0,0");
	}
}
