use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::network_diagram::DeviceStats;
use crate::config;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let data = Signal::derive(move || config::network().map(<[_]>::to_vec).unwrap_or_default());

	view! {
		<Title text="Home" />
		<main class="page">
			<h1>"Behind the Streams"</h1>
			<p>
				"Every camera, microphone and speaker on the live streams hangs off one network. "
				<A href="/network">"See how it all connects."</A>
			</p>
			<DeviceStats data=data />
		</main>
	}
}
