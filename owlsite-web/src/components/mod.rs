pub mod bottom_bar;
pub mod category_grid;
pub mod countdown;
pub mod header;
pub mod hero;
pub mod info_card;
pub mod item_list;
pub mod item_modal;
pub mod lineup;
pub mod location;
pub mod popular;
pub mod socials;
pub mod type_toggle;
