mod extract;
mod run;

pub use run::run;
