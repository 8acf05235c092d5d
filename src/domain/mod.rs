pub mod flow;
pub mod method;
pub mod ports;
pub mod proof;
pub mod support;
