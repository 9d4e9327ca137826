pub mod formatter;
pub mod sink;

pub use formatter::render_records;
pub use sink::write_output;
