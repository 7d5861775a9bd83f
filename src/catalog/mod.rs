mod dataset;
mod game;
mod load;

pub use dataset::GameCatalog;
pub use game::{FieldKind, GameField, GameRecord, RawGameRecord, Sales};
pub use load::{load_catalog, read_raw_records, DatasetLoadError};
