pub mod gemba_mqm;

pub use gemba_mqm::*;
