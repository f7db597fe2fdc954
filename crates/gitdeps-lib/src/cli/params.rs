use crate::config::PassthroughConfig;
use crate::output::JsonStyle;
use crate::urls::UrlFormat;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FlattenParams {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub style: JsonStyle,
}

#[derive(Debug, Clone)]
pub struct PassthroughParams {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub keys: PassthroughConfig,
}

#[derive(Debug, Clone)]
pub struct PrintUrlsParams {
    pub input_path: PathBuf,
    pub format: UrlFormat,
    pub prefixes: Vec<String>,
}
