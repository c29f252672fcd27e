use crate::filter::FilterSet;
use crate::gateway::Toolchain;
use crate::identity::OutputIdentity;
use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct CatlrOptions {
    pub roots: Vec<PathBuf>,
    pub filters: FilterSet,
    pub use_ignore_file: bool,
    pub toolchain: Toolchain,
    pub output_identity: Option<OutputIdentity>,
}
impl Default for CatlrOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            filters: FilterSet::default(),
            use_ignore_file: true,
            toolchain: Toolchain::native(),
            output_identity: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct CatlrBuilder {
    options: CatlrOptions,
}
impl CatlrBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CatlrOptions {
                roots: vec![root.into()],
                ..Default::default()
            },
        }
    }
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options.roots = roots.into_iter().map(Into::into).collect();
        self
    }
    pub fn add_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.roots.push(root.into());
        self
    }
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.options.filters = filters;
        self
    }
    pub fn use_ignore_file(mut self, yes: bool) -> Self {
        self.options.use_ignore_file = yes;
        self
    }
    pub fn toolchain(mut self, toolchain: Toolchain) -> Self {
        self.options.toolchain = toolchain;
        self
    }
    pub fn output_identity(mut self, identity: Option<OutputIdentity>) -> Self {
        self.options.output_identity = identity;
        self
    }
    pub fn build(self) -> CatlrOptions {
        self.options
    }
}
