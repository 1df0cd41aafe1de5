mod engine;

pub use engine::Query;
