pub mod provider;

pub use provider::{
    AnnotationProvider, Provider, ProviderKind, QueryProvider, SearchProvider, TagKeyProvider,
    TagValueProvider,
};
