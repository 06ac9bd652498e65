mod report;
pub use report::Report;

mod methods;
pub use methods::Methods;
