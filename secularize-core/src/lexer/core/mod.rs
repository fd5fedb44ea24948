//! 输入端：位置追踪与字符流

mod position;
mod stream;

pub use position::SourcePosition;
pub use stream::{CharStream, InputStream};
