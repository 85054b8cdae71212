mod employee;
mod shift;

pub use employee::{Employee, EmployeeRow};
pub use shift::{Shift, ShiftRow};
