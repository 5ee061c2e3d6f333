pub mod conversion_flow;

pub use conversion_flow::ConversionFlow;
