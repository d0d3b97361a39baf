use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::network_diagram::{
	ConnectionLegend, DeviceOutline, DeviceStats, NetworkDiagram,
};
use crate::config;

/// Diagram page: stats, legend, the graph itself and its text outline.
#[component]
pub fn Network() -> impl IntoView {
	view! {
		<Title text="Network" />
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{move || {
				config::network()
					.map(|items| {
						let data = Signal::stored(items.to_vec());
						view! {
							<main class="page network-page">
								<h1>"Network"</h1>
								<DeviceStats data=data />
								<ConnectionLegend />
								<div class="network-scroll">
									<NetworkDiagram data=data />
								</div>
								<DeviceOutline items=items.to_vec() />
							</main>
						}
					})
			}}
		</ErrorBoundary>
	}
}
