// Document engines: paginated PDF layout and XLSX helpers.

pub mod pdf;
pub mod xlsx;
