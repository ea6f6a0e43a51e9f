// Afaan Oromoo language data and helpers shared by several modules.

pub(crate) mod constants;
pub(crate) mod units;
