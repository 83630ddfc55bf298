pub mod draft;
pub mod enums;
pub mod error;
pub mod ids;
pub mod record;

pub use draft::{DEFAULT_SALARY, RecordDraft};
pub use enums::{Field, Position};
pub use error::{DraftError, ModelError, Result};
pub use ids::RecordId;
pub use record::{DATE_FORMAT, FieldUpdate, NewRecord, Record, parse_date, parse_salary};
