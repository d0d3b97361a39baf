//! The device tree bundled with the site.

use std::sync::LazyLock;

use log::{error, info};

use crate::components::network_diagram::NetworkItem;
use crate::components::network_diagram::tree::{count_devices, ensure_unique_ids};
use crate::error::TopologyError;

const NETWORK_JSON: &str = include_str!("../data/network.json");

static NETWORK: LazyLock<Result<Vec<NetworkItem>, TopologyError>> = LazyLock::new(|| {
	let loaded = parse_network(NETWORK_JSON);
	match &loaded {
		Ok(items) => info!("loaded network tree with {} devices", count_devices(items)),
		Err(err) => error!("rejected network tree: {err}"),
	}
	loaded
});

/// Parses and validates a device tree.
pub fn parse_network(json: &str) -> Result<Vec<NetworkItem>, TopologyError> {
	let items: Vec<NetworkItem> = serde_json::from_str(json)?;
	ensure_unique_ids(&items)?;
	Ok(items)
}

/// The validated bundled tree, parsed on first use.
pub fn network() -> Result<&'static [NetworkItem], TopologyError> {
	NETWORK.as_deref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_tree_is_valid() {
		let items = network().unwrap();
		assert!(!items.is_empty());
		assert!(count_devices(items) > items.len());
	}

	#[test]
	fn reports_parse_position() {
		let err = parse_network("[{\"name\": \"Core\"").unwrap_err();
		assert!(matches!(err, TopologyError::Parse { line: 1, .. }), "{err:?}");
	}

	#[test]
	fn rejects_duplicates() {
		let json = r#"[
			{ "name": "Core", "type": "switch", "model": "A" },
			{ "name": "core", "type": "switch", "model": "B" }
		]"#;
		assert_eq!(
			parse_network(json),
			Err(TopologyError::DuplicateId {
				id: "core-switch".into()
			})
		);
	}
}
