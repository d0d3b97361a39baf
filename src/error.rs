use thiserror::Error;

/// Everything that can go wrong between the bundled device tree and the
/// rendered diagram. All variants point at bad data, none are transient.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TopologyError {
	#[error("network configuration is invalid at {line}:{column}: {message}")]
	Parse {
		line: usize,
		column: usize,
		message: String,
	},
	#[error("two devices share the node id `{id}`")]
	DuplicateId { id: String },
	#[error("edge `{edge}` refers to unknown node `{id}`")]
	MissingEndpoint { edge: String, id: String },
	#[error("device `{id}` is the target of an edge but has no connection")]
	MissingConnection { id: String },
}

impl From<serde_json::Error> for TopologyError {
	fn from(err: serde_json::Error) -> Self {
		TopologyError::Parse {
			line: err.line(),
			column: err.column(),
			message: err.to_string(),
		}
	}
}
