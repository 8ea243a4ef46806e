mod cleanup;
mod make_simple;

pub use make_simple::MakeSimple;
