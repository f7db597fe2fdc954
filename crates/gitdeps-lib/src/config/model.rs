use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Hash-keyed download descriptors
    #[default]
    Flatten,
    /// The whole parsed tree, for inspection
    Passthrough,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub output: OutputConfig,
    pub passthrough: PassthroughConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub mode: OutputMode,
    /// Indent flattened output. Passthrough output is always indented.
    pub pretty: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct PassthroughConfig {
    pub attribute_key: String,
    pub text_key: String,
}

impl Default for PassthroughConfig {
    fn default() -> Self {
        Self {
            attribute_key: "$".to_string(),
            text_key: "_".to_string(),
        }
    }
}
