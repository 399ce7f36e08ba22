use serde::{Deserialize, Serialize};

/// Dimensions of the progress bar drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSpecs {
    pub width: u32,
    pub height: u32,
}

impl Default for ProgressSpecs {
    fn default() -> Self {
        ProgressSpecs {
            width: 200,
            height: 20,
        }
    }
}

/// Partial override of [`ProgressSpecs`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ProgressOverrides {
    pub fn merge_over(&self, base: ProgressSpecs) -> ProgressSpecs {
        ProgressSpecs {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
        }
    }
}

impl From<ProgressSpecs> for ProgressOverrides {
    fn from(specs: ProgressSpecs) -> Self {
        ProgressOverrides {
            width: Some(specs.width),
            height: Some(specs.height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub progress: Option<ProgressOverrides>,
}

impl RenderOptions {
    /// Progress bar dimensions with overrides applied to the defaults
    pub fn progress_specs(&self) -> ProgressSpecs {
        self.progress
            .unwrap_or_default()
            .merge_over(ProgressSpecs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            RenderOptions::default().progress_specs(),
            ProgressSpecs {
                width: 200,
                height: 20
            }
        );
    }

    #[test]
    fn test_partial_override() {
        let options = RenderOptions {
            progress: Some(ProgressOverrides {
                width: Some(300),
                height: None,
            }),
        };
        assert_eq!(
            options.progress_specs(),
            ProgressSpecs {
                width: 300,
                height: 20
            }
        );
    }
}
