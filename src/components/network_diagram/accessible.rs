use leptos::prelude::*;

use super::types::{ConnectionType, NetworkItem};

/// One line of the screen-reader outline.
pub fn describe(item: &NetworkItem, connection: Option<ConnectionType>) -> String {
	let mut text = format!("{}: {} ({})", item.kind.style().label, item.name, item.model);
	if let Some(connection) = connection {
		text.push_str(", connected via ");
		text.push_str(connection.style().label);
	}
	text
}

/// Text-only mirror of the diagram, hidden visually.
#[component]
pub fn DeviceOutline(items: Vec<NetworkItem>) -> impl IntoView {
	view! {
		<ul class="sr-only">
			{items.iter().map(|item| outline_entry(item, None)).collect_view()}
		</ul>
	}
}

fn outline_entry(item: &NetworkItem, connection: Option<ConnectionType>) -> AnyView {
	let children = (!item.links.is_empty()).then(|| {
		view! {
			<ul>
				{item
					.links
					.iter()
					.map(|link| outline_entry(&link.item, Some(link.connection.kind)))
					.collect_view()}
			</ul>
		}
	});

	view! {
		<li>
			{describe(item, connection)}
			{children}
		</li>
	}
	.into_any()
}
