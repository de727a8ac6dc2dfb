mod error;
mod model;
mod repository;
mod source;

pub use error::FetchError;
pub use model::{ImageItem, Item, TextItem};
pub use repository::ItemRepository;
pub use source::{ItemSource, SimulatedRemoteSource, SourceSettings};
