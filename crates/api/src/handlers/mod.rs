pub mod executions;
pub mod legacy;
pub mod workflows;
