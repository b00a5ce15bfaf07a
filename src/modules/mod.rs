pub mod students;
pub mod teachers;
pub mod whoami;
