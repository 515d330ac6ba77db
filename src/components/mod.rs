pub mod confirm_modal;
pub mod review_form;
pub mod reviews_list;
pub mod reviews_page;
pub mod search_banner;
pub mod star_rating;
pub mod toast;
