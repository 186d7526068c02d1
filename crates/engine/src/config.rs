use derive_builder::Builder;
use list_tidy_domain::ProcessingOptions;
use list_tidy_shared_kernel::ByteSize;

/// Largest input accepted by default: 10 MiB.
pub const DEFAULT_MAX_INPUT: ByteSize = ByteSize::mib(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub options: ProcessingOptions,
    #[builder(default = "DEFAULT_MAX_INPUT")]
    pub max_input_bytes: ByteSize,
}

impl Config {
    pub fn new(options: ProcessingOptions) -> Self {
        Self { options, max_input_bytes: DEFAULT_MAX_INPUT }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(ProcessingOptions::default())
    }
}
