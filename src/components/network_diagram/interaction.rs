//! Hover and focus tracking for edges.
//!
//! An SVG path cannot take keyboard focus by itself, so listeners live on the
//! path's parent group. Attaching them yields an [`EdgeSubscription`] that
//! removes the listeners, and any focusability it granted, when dropped.

use gloo_events::EventListener;
use leptos::prelude::*;
use log::{trace, warn};
use wasm_bindgen::JsValue;
use web_sys::Element;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeState {
	#[default]
	Idle,
	Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEvent {
	PointerEnter,
	PointerLeave,
	FocusIn,
	FocusOut,
}

impl EdgeEvent {
	pub const ALL: [EdgeEvent; 4] = [
		EdgeEvent::PointerEnter,
		EdgeEvent::PointerLeave,
		EdgeEvent::FocusIn,
		EdgeEvent::FocusOut,
	];

	pub fn dom_name(self) -> &'static str {
		match self {
			EdgeEvent::PointerEnter => "mouseenter",
			EdgeEvent::PointerLeave => "mouseleave",
			EdgeEvent::FocusIn => "focusin",
			EdgeEvent::FocusOut => "focusout",
		}
	}
}

/// Hover and focus are tracked separately; either one makes the edge active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeInteraction {
	hovered: bool,
	focused: bool,
}

impl EdgeInteraction {
	pub fn apply(&mut self, event: EdgeEvent) -> EdgeState {
		match event {
			EdgeEvent::PointerEnter => self.hovered = true,
			EdgeEvent::PointerLeave => self.hovered = false,
			EdgeEvent::FocusIn => self.focused = true,
			EdgeEvent::FocusOut => self.focused = false,
		}
		self.state()
	}

	pub fn state(&self) -> EdgeState {
		if self.hovered || self.focused {
			EdgeState::Active
		} else {
			EdgeState::Idle
		}
	}

	pub fn is_active(&self) -> bool {
		self.state() == EdgeState::Active
	}
}

/// Something that can be made keyboard focusable for a while.
pub trait FocusHost {
	fn is_focusable(&self) -> bool;
	fn make_focusable(&self);
	fn clear_focusable(&self);
}

fn report(op: &str, result: Result<(), JsValue>) {
	if let Err(err) = result {
		warn!("{op} failed: {err:?}");
	}
}

impl FocusHost for Element {
	fn is_focusable(&self) -> bool {
		self.has_attribute("tabindex")
	}

	fn make_focusable(&self) {
		report("set tabindex", self.set_attribute("tabindex", "0"));
	}

	fn clear_focusable(&self) {
		report("remove tabindex", self.remove_attribute("tabindex"));
	}
}

/// Grants focusability only if the host lacked it, and reverts only what it
/// granted.
pub struct FocusGrant<H: FocusHost> {
	host: H,
	granted: bool,
}

impl<H: FocusHost> FocusGrant<H> {
	pub fn acquire(host: H) -> Self {
		let granted = !host.is_focusable();
		if granted {
			host.make_focusable();
		}
		Self { host, granted }
	}

	pub fn granted(&self) -> bool {
		self.granted
	}
}

impl<H: FocusHost> Drop for FocusGrant<H> {
	fn drop(&mut self) {
		if self.granted {
			self.host.clear_focusable();
		}
	}
}

/// Live listeners for one edge anchor. Dropping it detaches everything.
pub struct EdgeSubscription {
	edge: String,
	_listeners: Vec<EventListener>,
	_focus: FocusGrant<Element>,
}

impl EdgeSubscription {
	pub fn attach(edge: &str, container: Element, state: RwSignal<EdgeInteraction>) -> Self {
		let listeners = EdgeEvent::ALL
			.into_iter()
			.map(|event| {
				EventListener::new(&container, event.dom_name(), move |_| {
					state.try_update(|s| s.apply(event));
				})
			})
			.collect();
		let focus = FocusGrant::acquire(container);
		trace!("edge {edge}: listeners attached, tabindex granted: {}", focus.granted());
		Self {
			edge: edge.to_string(),
			_listeners: listeners,
			_focus: focus,
		}
	}
}

impl Drop for EdgeSubscription {
	fn drop(&mut self) {
		trace!("edge {}: listeners detached", self.edge);
	}
}
