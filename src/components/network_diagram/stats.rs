use std::collections::HashMap;

use super::types::{DeviceType, NetworkItem};

/// Per-type device totals for the summary strip, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeCounts(Vec<(DeviceType, usize)>);

impl TypeCounts {
	pub fn from_items(items: &[NetworkItem]) -> Self {
		let mut counts = HashMap::new();
		for item in items {
			tally(item, &mut counts);
		}
		Self(
			DeviceType::ALL
				.into_iter()
				.filter(|kind| kind.style().stats)
				.filter_map(|kind| counts.get(&kind).map(|&n| (kind, n)))
				.filter(|&(_, n)| n > 0)
				.collect(),
		)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (DeviceType, usize)> + '_ {
		self.0.iter().copied()
	}

	/// "3 Cameras, 1 Network Switch" style summary.
	pub fn summary(&self) -> String {
		self.iter()
			.map(|(kind, n)| format_count(kind, n))
			.collect::<Vec<_>>()
			.join(", ")
	}
}

fn tally(item: &NetworkItem, counts: &mut HashMap<DeviceType, usize>) {
	*counts.entry(item.kind).or_default() += 1;
	for link in &item.links {
		tally(&link.item, counts);
	}
}

pub fn format_count(kind: DeviceType, n: usize) -> String {
	let style = kind.style();
	format!("{} {}", n, if n == 1 { style.label } else { style.plural })
}
