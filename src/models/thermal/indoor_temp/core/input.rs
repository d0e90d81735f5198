mod error;
mod hourly_record;
mod outdoor_conditions;

pub use error::{InputError, Series};
pub use hourly_record::HourlyRecord;
pub use outdoor_conditions::OutdoorConditions;
