pub mod cart_panel;
pub mod product_card;
pub mod track_panel;
pub mod wishlist_panel;
