use leptos::prelude::*;

use super::layout::{NODE_HEIGHT, NODE_WIDTH};
use super::render::{Handles, external_link};
use super::types::PositionedNode;

#[component]
pub fn DeviceNode(node: PositionedNode, handles: Handles) -> impl IntoView {
	let style = node.device.kind.style();
	let link = external_link(&node.device);
	let box_style = format!(
		"left: {}px; top: {}px; width: {}px; height: {}px; border-color: {};",
		node.x, node.y, NODE_WIDTH, NODE_HEIGHT, style.border
	);
	let glyph = link.is_some().then_some(" ↗");

	let body = view! {
		{handles.target.then(|| view! { <span class="device-handle device-handle-target" /> })}
		<span class="device-type" style:color=style.border>{style.label}</span>
		<span class="device-name">{node.label.clone()}</span>
		<span class="device-model" title=node.device.model.clone()>
			{node.device.model.clone()}
			{glyph}
		</span>
		{handles.source.then(|| view! { <span class="device-handle device-handle-source" /> })}
	};

	match link {
		Some(link) => view! {
			<a
				class="device-node device-node-link"
				id=node.id
				style=box_style
				href=link.href
				target=link.target
				rel=link.rel
				title=format!("Open {} in a new tab", node.device.name)
			>
				{body}
			</a>
		}
		.into_any(),
		None => view! {
			<div class="device-node" id=node.id style=box_style>
				{body}
			</div>
		}
		.into_any(),
	}
}
