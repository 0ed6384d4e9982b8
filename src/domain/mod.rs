pub mod page;
pub mod title;

pub use self::page::Page;
pub use self::title::{InvalidTitle, Title};
