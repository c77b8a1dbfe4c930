pub mod record;
pub mod recommendation;
pub mod result;
pub mod stats;
