// Sort configuration as it arrives from JavaScript

use serde::{Deserialize, Serialize};

use crate::config::{ComparatorKind, SortConfig};
use crate::error::DirsortError;

/// `{ comparator?, kinds? }` object accepted by the bindings
///
/// The comparator is a preset name ("natural", "case-sensitive", "lexical")
/// resolved through `ComparatorKind::from_str`, so aliases work here too.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct JsSortConfig {
    #[serde(default)]
    pub comparator: Option<String>,
    #[serde(default)]
    pub kinds: bool,
}

impl TryFrom<JsSortConfig> for SortConfig {
    type Error = DirsortError;

    fn try_from(js_config: JsSortConfig) -> Result<Self, Self::Error> {
        let comparator = match js_config.comparator {
            Some(name) => name.parse::<ComparatorKind>()?,
            None => ComparatorKind::default(),
        };
        Ok(SortConfig::new(comparator, js_config.kinds))
    }
}
