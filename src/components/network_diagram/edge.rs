use leptos::prelude::*;
use log::warn;

use super::interaction::{EdgeInteraction, EdgeSubscription};
use super::render::RoutedEdge;
use super::style::{EDGE_ACTIVE_OPACITY, EDGE_IDLE_OPACITY, EDGE_INTERACTION_WIDTH, EDGE_WIDTH};

/// Curve between two devices. Hover and focus listeners sit on the group
/// around the path and live exactly as long as the path element does.
#[component]
pub fn ConnectionEdge(edge: RoutedEdge, state: RwSignal<EdgeInteraction>) -> impl IntoView {
	let style = edge.style();
	let path_ref = NodeRef::<leptos::svg::Path>::new();
	let subscription = StoredValue::new_local(None::<EdgeSubscription>);

	let edge_id = edge.id.clone();
	Effect::new(move |_| {
		let Some(path) = path_ref.get() else {
			return;
		};
		// Release the previous anchor's listeners before wiring the new one.
		subscription.update_value(|s| drop(s.take()));
		let Some(container) = path.parent_element() else {
			warn!("edge {edge_id} has no container, hover labels disabled");
			return;
		};
		subscription.set_value(Some(EdgeSubscription::attach(&edge_id, container, state)));
	});
	on_cleanup(move || {
		subscription.try_update_value(|s| drop(s.take()));
	});

	let opacity = move || {
		if state.with(|s| s.is_active()) {
			EDGE_ACTIVE_OPACITY
		} else {
			EDGE_IDLE_OPACITY
		}
	};

	view! {
		<g class="connection-edge" aria-label=style.label>
			<path
				node_ref=path_ref
				d=edge.path.clone()
				fill="none"
				stroke=style.stroke
				stroke-width=EDGE_WIDTH
				stroke-dasharray=style.dash
				stroke-opacity=opacity
			/>
			<path
				class="connection-edge-hit"
				d=edge.path
				fill="none"
				stroke="transparent"
				stroke-width=EDGE_INTERACTION_WIDTH
			/>
		</g>
	}
}

/// Floating connection name, drawn in the layer above the device boxes.
#[component]
pub fn EdgeLabel(edge: RoutedEdge, state: RwSignal<EdgeInteraction>) -> impl IntoView {
	let style = edge.style();
	let position = format!(
		"left: {}px; top: {}px; border-color: {};",
		edge.label_at.x, edge.label_at.y, style.stroke
	);

	view! {
		<Show when=move || state.with(|s| s.is_active())>
			<div class="connection-label" style=position.clone()>
				{style.label}
			</div>
		</Show>
	}
}
