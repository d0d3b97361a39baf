use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Title text="Not Found" />
		<main class="page">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<A href="/">"Back home"</A>
		</main>
	}
}
