//! HTML fragments for the catalog, admin and sales pages.

pub mod book_card;
pub mod image;
pub mod layout;
pub mod list;
pub mod pagination;
pub mod search_bar;
pub mod sort_bar;

pub use book_card::{book_card, buy_form, cover, stock_badge, CardOptions};
pub use image::ImagePolicy;
pub use layout::{banner, page, Message, Section};
pub use list::list_section;
pub use pagination::pagination;
pub use search_bar::search_bar;
pub use sort_bar::sort_bar;
