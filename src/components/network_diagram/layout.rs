use std::collections::HashMap;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::tree;
use super::types::{GraphEdge, GraphNode, PositionedNode};

pub const NODE_WIDTH: f64 = 200.0;
pub const NODE_HEIGHT: f64 = 64.0;
pub const LAYER_GAP: f64 = 280.0;
pub const ROW_GAP: f64 = 88.0;

const RELAX_STEPS: usize = 60;
const RELAX_DT: f32 = 0.016;

/// Positioned nodes in pre-order plus the parent to child edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	pub nodes: Vec<PositionedNode>,
	pub edges: Vec<GraphEdge>,
	pub width: f64,
	pub height: f64,
}

/// Lays the tree out left to right: one column per depth, leaves on
/// consecutive rows, parents centred on their children. A short force
/// relaxation evens out vertical spacing without reordering rows.
pub fn layout(roots: &[GraphNode]) -> Layout {
	let mut nodes = Vec::new();
	let mut next_row = 0.0;
	for root in roots {
		seed(root, 0, &mut next_row, &mut nodes);
	}

	let mut edges = Vec::new();
	tree::walk(roots, &mut |node, _, parent| {
		if let Some(parent) = parent {
			edges.push(GraphEdge {
				id: format!("{}->{}", parent.id, node.id),
				source: parent.id.clone(),
				target: node.id.clone(),
			});
		}
	});

	relax(&mut nodes, &edges);
	separate_rows(&mut nodes);

	let (width, height) = nodes.iter().fold((0.0_f64, 0.0_f64), |(w, h), n| {
		(w.max(n.x + NODE_WIDTH), h.max(n.y + NODE_HEIGHT))
	});
	debug!("laid out {} nodes and {} edges", nodes.len(), edges.len());

	Layout {
		nodes,
		edges,
		width,
		height,
	}
}

fn seed(
	node: &GraphNode,
	depth: usize,
	next_row: &mut f64,
	out: &mut Vec<PositionedNode>,
) -> f64 {
	let idx = out.len();
	out.push(PositionedNode {
		id: node.id.clone(),
		label: node.label.clone(),
		device: node.device.clone(),
		depth,
		x: depth as f64 * LAYER_GAP,
		y: 0.0,
	});

	let y = if node.children.is_empty() {
		let y = *next_row;
		*next_row += ROW_GAP;
		y
	} else {
		let ys: Vec<f64> = node
			.children
			.iter()
			.map(|child| seed(child, depth + 1, next_row, out))
			.collect();
		(ys[0] + ys[ys.len() - 1]) / 2.0
	};
	out[idx].y = y;
	y
}

fn relax(nodes: &mut [PositionedNode], edges: &[GraphEdge]) {
	let mut graph: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let mut id_to_idx: HashMap<&str, DefaultNodeIdx> = HashMap::new();
	for (i, node) in nodes.iter().enumerate() {
		let idx = graph.add_node(NodeData {
			x: node.x as f32,
			y: node.y as f32,
			mass: 10.0,
			is_anchor: node.depth == 0,
			user_data: i,
		});
		id_to_idx.insert(node.id.as_str(), idx);
	}
	for edge in edges {
		if let (Some(&src), Some(&tgt)) = (
			id_to_idx.get(edge.source.as_str()),
			id_to_idx.get(edge.target.as_str()),
		) {
			graph.add_edge(src, tgt, EdgeData::default());
		}
	}

	for _ in 0..RELAX_STEPS {
		graph.update(RELAX_DT);
	}

	let mut relaxed = vec![0.0; nodes.len()];
	graph.visit_nodes(|node| {
		relaxed[node.data.user_data] = node.y() as f64;
	});
	for (node, y) in nodes.iter_mut().zip(relaxed) {
		let shift = (y - node.y).clamp(-ROW_GAP / 2.0, ROW_GAP / 2.0);
		if shift.is_finite() {
			node.y += shift;
		}
	}
}

/// Keeps at least `ROW_GAP` between rows of the same column, in seed order,
/// then moves the whole diagram so it starts at the origin.
fn separate_rows(nodes: &mut [PositionedNode]) {
	let mut last_in_column: HashMap<usize, f64> = HashMap::new();
	for node in nodes.iter_mut() {
		if let Some(&prev) = last_in_column.get(&node.depth) {
			node.y = node.y.max(prev + ROW_GAP);
		}
		last_in_column.insert(node.depth, node.y);
	}

	let top = nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);
	if top.is_finite() {
		for node in nodes.iter_mut() {
			node.y -= top;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_diagram::tree::{build_graph_nodes, fixtures::sample};

	fn sample_layout() -> Layout {
		layout(&build_graph_nodes(&sample()))
	}

	#[test]
	fn empty_tree_has_empty_layout() {
		assert_eq!(layout(&[]), Layout::default());
	}

	#[test]
	fn one_edge_per_child() {
		let l = sample_layout();
		assert_eq!(l.nodes.len(), 6);
		assert_eq!(l.edges.len(), 4);
		let edge = &l.edges[0];
		assert_eq!(edge.source, "core-switch");
		assert_eq!(edge.target, "barn-switch-switch");
		assert_eq!(edge.id, "core-switch->barn-switch-switch");
	}

	#[test]
	fn columns_follow_depth() {
		for node in sample_layout().nodes {
			assert_eq!(node.x, node.depth as f64 * LAYER_GAP);
		}
	}

	#[test]
	fn rows_keep_order_and_gap() {
		let l = sample_layout();
		for depth in 0..3 {
			let ys: Vec<f64> = l
				.nodes
				.iter()
				.filter(|n| n.depth == depth)
				.map(|n| n.y)
				.collect();
			for pair in ys.windows(2) {
				assert!(pair[1] - pair[0] >= ROW_GAP - 1e-9, "{ys:?}");
			}
		}
	}

	#[test]
	fn fits_inside_bounds() {
		let l = sample_layout();
		assert!(l.nodes.iter().all(|n| n.x >= 0.0 && n.y >= 0.0));
		assert!(l.nodes.iter().all(|n| n.x + NODE_WIDTH <= l.width));
		assert!(l.nodes.iter().all(|n| n.y + NODE_HEIGHT <= l.height));
		assert!(l.nodes.iter().any(|n| n.y == 0.0));
	}

	#[test]
	fn is_deterministic() {
		assert_eq!(sample_layout(), sample_layout());
	}
}
