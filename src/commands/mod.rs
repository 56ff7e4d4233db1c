// Commands module

pub mod check;
