pub mod scenario;
pub mod shapes;
