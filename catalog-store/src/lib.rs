mod catalog;
mod demo;
mod pending;

pub use catalog::Catalog;
pub use demo::demo_records;
pub use pending::PendingSelection;

#[cfg(test)]
mod tests;
