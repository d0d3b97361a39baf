use leptos::prelude::*;

use super::edge::{ConnectionEdge, EdgeLabel};
use super::interaction::EdgeInteraction;
use super::layout::layout;
use super::node::DeviceNode;
use super::render::{RoutedEdge, handles_for, route_edge};
use super::stats::TypeCounts;
use super::style::EDGE_WIDTH;
use super::tree::build_graph_nodes;
use super::types::{ConnectionType, NetworkItem};
use crate::error::TopologyError;

/// Device boxes over an SVG edge layer, with edge labels stacked on top.
/// Rebuilt from `data` on every change; a malformed edge fails the whole pass.
#[component]
pub fn NetworkDiagram(#[prop(into)] data: Signal<Vec<NetworkItem>>) -> impl IntoView {
	move || data.with(|items| render_diagram(items))
}

fn render_diagram(items: &[NetworkItem]) -> Result<AnyView, TopologyError> {
	let layout = layout(&build_graph_nodes(items));
	let routed = layout
		.edges
		.iter()
		.map(|edge| route_edge(&layout.nodes, edge))
		.collect::<Result<Vec<RoutedEdge>, _>>()?;
	let edges: Vec<(RoutedEdge, RwSignal<EdgeInteraction>)> = routed
		.into_iter()
		.map(|edge| (edge, RwSignal::new(EdgeInteraction::default())))
		.collect();

	let nodes = layout
		.nodes
		.iter()
		.map(|node| {
			let handles = handles_for(&node.id, &layout.edges);
			view! { <DeviceNode node=node.clone() handles=handles /> }
		})
		.collect_view();
	let paths = edges
		.iter()
		.map(|(edge, state)| view! { <ConnectionEdge edge=edge.clone() state=*state /> })
		.collect_view();
	let labels = edges
		.into_iter()
		.map(|(edge, state)| view! { <EdgeLabel edge=edge state=state /> })
		.collect_view();

	Ok(view! {
		<div
			class="network-diagram"
			style=format!("width: {}px; height: {}px;", layout.width, layout.height)
		>
			<svg class="network-edges" width=layout.width height=layout.height>
				{paths}
			</svg>
			<div class="network-nodes">{nodes}</div>
			<div class="network-labels">{labels}</div>
		</div>
	}
	.into_any())
}

/// One swatch per connection type, stroked like the edges.
#[component]
pub fn ConnectionLegend() -> impl IntoView {
	view! {
		<ul class="connection-legend">
			{ConnectionType::ALL
				.into_iter()
				.map(|connection| {
					let style = connection.style();
					view! {
						<li>
							<svg width="32" height="8" aria-hidden="true">
								<line
									x1="0"
									y1="4"
									x2="32"
									y2="4"
									stroke=style.stroke
									stroke-width=EDGE_WIDTH
									stroke-dasharray=style.dash
								/>
							</svg>
							{style.label}
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}

/// Summary strip, e.g. "3 Cameras, 1 Network Switch".
#[component]
pub fn DeviceStats(#[prop(into)] data: Signal<Vec<NetworkItem>>) -> impl IntoView {
	let counts = move || data.with(|items| TypeCounts::from_items(items));

	view! {
		<Show when=move || !counts().is_empty()>
			<p class="device-stats">{move || counts().summary()}</p>
		</Show>
	}
}
