mod category;
mod kind;
mod record;

pub use category::{Category, UnknownCategory};
pub use kind::{ContentKind, KindDescriptor, UnknownKind};
pub use record::{ContentRecord, SearchField};
